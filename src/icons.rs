use std::path::Path;

use anyhow::Context as _;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};

use crate::compose::flatten_premul_over;
use crate::error::{SplashError, SplashResult};
use crate::pipeline::{GeneratedFile, RunOutcome, RunSummary};

/// Background color behind the home-screen icons (rgb 16,185,129).
pub const ICON_BG_RGB: [u8; 3] = [0x10, 0xB9, 0x81];

/// One square icon to produce from the brand SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: &'static str,
}

/// PWA manifest icons plus the apple-touch icon.
pub const ICON_SPECS: &[IconSpec] = &[
    IconSpec {
        size: 192,
        file_name: "icon-192.png",
    },
    IconSpec {
        size: 512,
        file_name: "icon-512.png",
    },
    IconSpec {
        size: 180,
        file_name: "apple-touch-icon.png",
    },
];

/// Rasterize the SVG contain-fit and centered into a `size`×`size`
/// premultiplied RGBA8 pixmap.
fn rasterize_svg_contained(tree: &usvg::Tree, size: u32) -> SplashResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| SplashError::validation("failed to allocate svg pixmap"))?;

    let svg_w = tree.size().width();
    let svg_h = tree.size().height();
    if !(svg_w > 0.0 && svg_h > 0.0) || !svg_w.is_finite() || !svg_h.is_finite() {
        return Err(SplashError::validation("svg has invalid width/height"));
    }

    let scale = (size as f32 / svg_w).min(size as f32 / svg_h);
    let tx = (size as f32 - svg_w * scale) / 2.0;
    let ty = (size as f32 - svg_h * scale) / 2.0;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Render one icon size over the icon background and write it as PNG.
#[tracing::instrument(skip(tree))]
pub fn generate_icon(
    tree: &usvg::Tree,
    spec: &IconSpec,
    out_path: &Path,
) -> SplashResult<GeneratedFile> {
    let pixmap = rasterize_svg_contained(tree, spec.size)?;
    let flat = flatten_premul_over(&pixmap, spec.size, spec.size, ICON_BG_RGB);

    let mut encoded = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut encoded, CompressionType::Best, PngFilter::Adaptive);
    flat.write_with_encoder(encoder)
        .with_context(|| format!("encode png '{}'", out_path.display()))?;
    std::fs::write(out_path, &encoded)
        .with_context(|| format!("write png '{}'", out_path.display()))?;

    Ok(GeneratedFile {
        file_name: spec.file_name.to_owned(),
        width: spec.size,
        height: spec.size,
        path: out_path.to_path_buf(),
        bytes: encoded.len() as u64,
    })
}

/// Generate every icon in [`ICON_SPECS`], calling `progress` after each file.
///
/// Like the splash run, a missing source asset is the one guarded failure:
/// nothing is written and the outcome reports the missing path without error.
pub fn generate_icons<F>(svg_path: &Path, out_dir: &Path, mut progress: F) -> SplashResult<RunOutcome>
where
    F: FnMut(&GeneratedFile),
{
    if !svg_path.is_file() {
        tracing::warn!(svg = %svg_path.display(), "icon svg not found, nothing generated");
        return Ok(RunOutcome::MissingLogo(svg_path.to_path_buf()));
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let bytes = std::fs::read(svg_path)
        .with_context(|| format!("read svg '{}'", svg_path.display()))?;
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(&bytes, &opts)
        .with_context(|| format!("parse svg '{}'", svg_path.display()))?;

    let mut summary = RunSummary::default();
    for spec in ICON_SPECS {
        let out_path = out_dir.join(spec.file_name);
        let file = generate_icon(&tree, spec, &out_path)?;
        progress(&file);
        summary.total_bytes += file.bytes;
        summary.files.push(file);
    }

    tracing::info!(files = summary.files.len(), "icon run complete");
    Ok(RunOutcome::Completed(summary))
}
