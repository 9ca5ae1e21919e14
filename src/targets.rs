use std::path::Path;

use anyhow::Context as _;

use crate::error::{SplashError, SplashResult};

/// One device splash image to produce: exact pixel dimensions plus the label
/// used for the output file name (`splash-<label>.png`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetSpec {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl TargetSpec {
    /// Output file name for this target.
    pub fn file_name(&self) -> String {
        format!("splash-{}.png", self.label)
    }
}

/// iOS launch-image sizes, portrait and landscape per device family.
const BUILTIN: &[(u32, u32, &str)] = &[
    // iPhone SE, 8, 7, 6s, 6
    (750, 1334, "iphone-se"),
    (1334, 750, "iphone-se-landscape"),
    // iPhone 8 Plus, 7 Plus, 6s Plus, 6 Plus
    (1242, 2208, "iphone-plus"),
    (2208, 1242, "iphone-plus-landscape"),
    // iPhone X, XS, 11 Pro, 12 mini, 13 mini
    (1125, 2436, "iphone-x"),
    (2436, 1125, "iphone-x-landscape"),
    // iPhone XR, 11, 12, 13, 14
    (828, 1792, "iphone-xr"),
    (1792, 828, "iphone-xr-landscape"),
    // iPhone XS Max, 11 Pro Max, 12 Pro Max, 13 Pro Max, 14 Plus
    (1242, 2688, "iphone-xs-max"),
    (2688, 1242, "iphone-xs-max-landscape"),
    // iPhone 14 Pro, 15, 15 Pro
    (1179, 2556, "iphone-14-pro"),
    (2556, 1179, "iphone-14-pro-landscape"),
    // iPhone 14 Pro Max, 15 Plus, 15 Pro Max
    (1290, 2796, "iphone-14-pro-max"),
    (2796, 1290, "iphone-14-pro-max-landscape"),
    // iPad Mini, Air
    (1536, 2048, "ipad"),
    (2048, 1536, "ipad-landscape"),
    // iPad Pro 10.5"
    (1668, 2224, "ipad-pro-10"),
    (2224, 1668, "ipad-pro-10-landscape"),
    // iPad Pro 11"
    (1668, 2388, "ipad-pro-11"),
    (2388, 1668, "ipad-pro-11-landscape"),
    // iPad Pro 12.9"
    (2048, 2732, "ipad-pro-12"),
    (2732, 2048, "ipad-pro-12-landscape"),
];

/// The builtin device table, in emission order.
pub fn builtin_targets() -> Vec<TargetSpec> {
    BUILTIN
        .iter()
        .map(|&(width, height, label)| TargetSpec {
            width,
            height,
            label: label.to_owned(),
        })
        .collect()
}

/// Parse a target table from JSON and validate it.
pub fn parse_targets(json: &str) -> SplashResult<Vec<TargetSpec>> {
    let targets: Vec<TargetSpec> =
        serde_json::from_str(json).context("parse target manifest json")?;
    validate_targets(&targets)?;
    Ok(targets)
}

/// Load a target table from a JSON manifest file.
pub fn load_targets(path: &Path) -> SplashResult<Vec<TargetSpec>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read target manifest '{}'", path.display()))?;
    parse_targets(&json)
}

fn validate_targets(targets: &[TargetSpec]) -> SplashResult<()> {
    if targets.is_empty() {
        return Err(SplashError::validation("target table must be non-empty"));
    }
    let mut seen = std::collections::HashSet::new();
    for t in targets {
        if t.width == 0 || t.height == 0 {
            return Err(SplashError::validation(format!(
                "target '{}' has zero dimension ({}x{})",
                t.label, t.width, t.height
            )));
        }
        if t.label.is_empty() {
            return Err(SplashError::validation("target label must be non-empty"));
        }
        if !seen.insert(t.label.as_str()) {
            return Err(SplashError::validation(format!(
                "duplicate target label '{}'",
                t.label
            )));
        }
    }
    Ok(())
}
