use image::{RgbImage, Rgb, RgbaImage};

/// Brand background color behind every splash screen (#F97316).
pub const BRAND_BG_RGB: [u8; 3] = [0xF9, 0x73, 0x16];

/// Logo width as a fraction of the canvas width.
pub const LOGO_WIDTH_FRACTION: f64 = 0.25;

/// Allocate an opaque canvas filled with a solid color.
pub fn solid_canvas(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

/// Logo dimensions for a canvas: width-driven uniform scaling.
///
/// `logo_w = round(canvas_w * 0.25)`, `logo_h = round(logo_w * orig_h/orig_w)`,
/// both clamped to at least one pixel so degenerate logos still resize.
pub fn scaled_logo_size(canvas_w: u32, orig_w: u32, orig_h: u32) -> (u32, u32) {
    let logo_w = (f64::from(canvas_w) * LOGO_WIDTH_FRACTION).round().max(1.0) as u32;
    let logo_h = (f64::from(logo_w) * f64::from(orig_h) / f64::from(orig_w))
        .round()
        .max(1.0) as u32;
    (logo_w, logo_h)
}

/// Top-left offset that centers `(inner_w, inner_h)` inside `(outer_w, outer_h)`.
///
/// Floor division, so a one-pixel remainder lands on the bottom/right edge.
/// Negative when the inner image overhangs the canvas; `overlay_rgba_over_rgb`
/// clips those rows and columns.
pub fn centered_offset(outer_w: u32, outer_h: u32, inner_w: u32, inner_h: u32) -> (i64, i64) {
    let ox = (i64::from(outer_w) - i64::from(inner_w)).div_euclid(2);
    let oy = (i64::from(outer_h) - i64::from(inner_h)).div_euclid(2);
    (ox, oy)
}

/// Source-over composite of a straight-alpha RGBA image onto an opaque RGB
/// canvas at `(ox, oy)`, using the source alpha as the blend mask.
///
/// Transparent source pixels leave the canvas untouched; partial alpha blends
/// with 255-rounded integer math. Out-of-canvas source pixels are clipped.
pub fn overlay_rgba_over_rgb(canvas: &mut RgbImage, src: &RgbaImage, ox: i64, oy: i64) {
    let (cw, ch) = canvas.dimensions();
    for (sx, sy, px) in src.enumerate_pixels() {
        let cx = ox + i64::from(sx);
        let cy = oy + i64::from(sy);
        if cx < 0 || cy < 0 || cx >= i64::from(cw) || cy >= i64::from(ch) {
            continue;
        }
        let a = px.0[3];
        if a == 0 {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        let inv = 255u16 - u16::from(a);
        for i in 0..3 {
            let sc = mul_div255(u16::from(px.0[i]), u16::from(a));
            let dc = mul_div255(u16::from(dst.0[i]), inv);
            dst.0[i] = sc.saturating_add(dc);
        }
    }
}

/// Flatten a premultiplied RGBA8 buffer onto an opaque background color.
///
/// Used for SVG pixmaps, which come out of the rasterizer premultiplied: the
/// color channels are added as-is and only the background is alpha-weighted.
pub fn flatten_premul_over(rgba8_premul: &[u8], width: u32, height: u32, bg: [u8; 3]) -> RgbImage {
    let mut out = solid_canvas(width, height, bg);
    for (px, src) in out.pixels_mut().zip(rgba8_premul.chunks_exact(4)) {
        let inv = 255u16 - u16::from(src[3]);
        for i in 0..3 {
            let dc = mul_div255(u16::from(bg[i]), inv);
            px.0[i] = src[i].saturating_add(dc);
        }
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn scaled_size_rounds_half_up() {
        // 750 * 0.25 = 187.5 rounds to 188; a square logo stays square.
        assert_eq!(scaled_logo_size(750, 512, 512), (188, 188));
        assert_eq!(scaled_logo_size(828, 512, 512), (207, 207));
    }

    #[test]
    fn scaled_size_preserves_aspect_ratio_within_one_pixel() {
        let (w, h) = scaled_logo_size(1242, 300, 200);
        assert_eq!(w, 311);
        let expected = f64::from(w) * 200.0 / 300.0;
        assert!((f64::from(h) - expected).abs() <= 1.0);
    }

    #[test]
    fn centered_offset_matches_floor_division() {
        assert_eq!(centered_offset(750, 1334, 188, 188), (281, 573));
        // Odd remainder goes to the bottom/right edge.
        assert_eq!(centered_offset(5, 5, 2, 2), (1, 1));
        // Overhanging inner image yields a negative offset.
        assert_eq!(centered_offset(4, 4, 6, 6), (-1, -1));
    }

    #[test]
    fn overlay_transparent_pixels_leave_canvas_untouched() {
        let mut canvas = solid_canvas(2, 2, BRAND_BG_RGB);
        let src = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        overlay_rgba_over_rgb(&mut canvas, &src, 0, 0);
        assert_eq!(canvas.get_pixel(0, 0).0, BRAND_BG_RGB);
    }

    #[test]
    fn overlay_opaque_pixels_replace_canvas() {
        let mut canvas = solid_canvas(3, 3, BRAND_BG_RGB);
        let src = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        overlay_rgba_over_rgb(&mut canvas, &src, 1, 1);
        assert_eq!(canvas.get_pixel(1, 1).0, [10, 20, 30]);
        assert_eq!(canvas.get_pixel(0, 1).0, BRAND_BG_RGB);
    }

    #[test]
    fn overlay_half_alpha_blends_with_rounding() {
        let mut canvas = solid_canvas(1, 1, [0, 0, 0]);
        let src = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        overlay_rgba_over_rgb(&mut canvas, &src, 0, 0);
        // (255*128 + 127)/255 = 128 over black.
        assert_eq!(canvas.get_pixel(0, 0).0, [128, 128, 128]);
    }

    #[test]
    fn overlay_clips_out_of_canvas_pixels() {
        let mut canvas = solid_canvas(2, 2, BRAND_BG_RGB);
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        overlay_rgba_over_rgb(&mut canvas, &src, -1, -1);
        for (_, _, px) in canvas.enumerate_pixels() {
            assert_eq!(px.0, [0, 0, 0]);
        }
    }

    #[test]
    fn flatten_premul_transparent_shows_background() {
        let out = flatten_premul_over(&[0, 0, 0, 0], 1, 1, BRAND_BG_RGB);
        assert_eq!(out.get_pixel(0, 0).0, BRAND_BG_RGB);
    }

    #[test]
    fn flatten_premul_opaque_shows_source() {
        let out = flatten_premul_over(&[10, 20, 30, 255], 1, 1, BRAND_BG_RGB);
        assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30]);
    }
}
