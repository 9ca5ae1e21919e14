use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;

use crate::compose::{
    BRAND_BG_RGB, centered_offset, overlay_rgba_over_rgb, scaled_logo_size, solid_canvas,
};
use crate::error::SplashResult;
use crate::targets::TargetSpec;

/// The source logo, decoded once and shared read-only across all targets.
pub struct Logo {
    image: RgbaImage,
}

impl Logo {
    /// Decode the logo from disk and convert to straight-alpha RGBA8.
    pub fn open(path: &Path) -> SplashResult<Self> {
        let dyn_img =
            image::open(path).with_context(|| format!("decode logo '{}'", path.display()))?;
        Ok(Self {
            image: dyn_img.to_rgba8(),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Record of one written splash file, for progress reporting and totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Aggregate result of a completed run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub files: Vec<GeneratedFile>,
    pub total_bytes: u64,
}

impl RunSummary {
    fn push(&mut self, file: GeneratedFile) {
        self.total_bytes += file.bytes;
        self.files.push(file);
    }

    /// Cumulative output size in megabytes (for two-decimal display).
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Outcome of a run: either everything was generated, or the guarded
/// missing-input path was taken before anything was written.
///
/// A missing source asset is deliberately not an error: the original tool
/// prints one explanatory line and exits cleanly with zero files.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    MissingLogo(PathBuf),
}

/// Inputs for [`run_all`].
#[derive(Clone, Debug)]
pub struct RunOpts {
    pub logo_path: PathBuf,
    pub out_dir: PathBuf,
    pub targets: Vec<TargetSpec>,
}

/// Render one splash image and write it to `out_path`.
///
/// Canvas is filled with the brand background, the logo is resized to 25% of
/// the canvas width (aspect preserved, Lanczos3), centered, alpha-composited
/// and encoded as a fully opaque PNG. Decode and write failures propagate.
#[tracing::instrument(skip(logo), fields(label = %spec.label))]
pub fn generate_one(
    logo: &Logo,
    spec: &TargetSpec,
    out_path: &Path,
) -> SplashResult<GeneratedFile> {
    let mut canvas = solid_canvas(spec.width, spec.height, BRAND_BG_RGB);

    let (orig_w, orig_h) = logo.dimensions();
    let (logo_w, logo_h) = scaled_logo_size(spec.width, orig_w, orig_h);
    let resized = image::imageops::resize(&logo.image, logo_w, logo_h, FilterType::Lanczos3);

    let (ox, oy) = centered_offset(spec.width, spec.height, logo_w, logo_h);
    overlay_rgba_over_rgb(&mut canvas, &resized, ox, oy);

    let mut encoded = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut encoded, CompressionType::Best, PngFilter::Adaptive);
    canvas
        .write_with_encoder(encoder)
        .with_context(|| format!("encode png '{}'", out_path.display()))?;
    std::fs::write(out_path, &encoded)
        .with_context(|| format!("write png '{}'", out_path.display()))?;

    tracing::debug!(
        width = spec.width,
        height = spec.height,
        bytes = encoded.len(),
        "splash written"
    );

    Ok(GeneratedFile {
        file_name: spec.file_name(),
        width: spec.width,
        height: spec.height,
        path: out_path.to_path_buf(),
        bytes: encoded.len() as u64,
    })
}

/// Generate every target in declared order, calling `progress` after each
/// written file.
///
/// The logo is decoded once; each iteration derives its own resized copy.
/// If the logo file does not exist nothing is created and
/// [`RunOutcome::MissingLogo`] is returned without error. All other failures
/// (undecodable logo, write errors) abort the run.
pub fn run_all<F>(opts: &RunOpts, mut progress: F) -> SplashResult<RunOutcome>
where
    F: FnMut(&GeneratedFile),
{
    if !opts.logo_path.is_file() {
        tracing::warn!(logo = %opts.logo_path.display(), "logo not found, nothing generated");
        return Ok(RunOutcome::MissingLogo(opts.logo_path.clone()));
    }

    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("create output dir '{}'", opts.out_dir.display()))?;

    let logo = Logo::open(&opts.logo_path)?;

    let mut summary = RunSummary::default();
    for spec in &opts.targets {
        let out_path = opts.out_dir.join(spec.file_name());
        let file = generate_one(&logo, spec, &out_path)?;
        progress(&file);
        summary.push(file);
    }

    tracing::info!(
        files = summary.files.len(),
        total_bytes = summary.total_bytes,
        "splash run complete"
    );
    Ok(RunOutcome::Completed(summary))
}
