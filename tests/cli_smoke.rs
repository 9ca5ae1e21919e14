use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_logo_png(path: &PathBuf) {
    let logo = image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]));
    logo.save(path).unwrap();
}

#[test]
fn cli_splash_writes_pngs_and_reports_progress() {
    let dir = scratch_dir("splash");
    let logo_path = dir.join("logo.png");
    write_logo_png(&logo_path);

    let manifest_path = dir.join("targets.json");
    std::fs::write(
        &manifest_path,
        r#"[
            { "width": 64, "height": 128, "label": "a" },
            { "width": 96, "height": 96, "label": "b" }
        ]"#,
    )
    .unwrap();

    let out_dir = dir.join("splash");
    let output = Command::new(env!("CARGO_BIN_EXE_splashgen"))
        .args(["splash", "--logo"])
        .arg(&logo_path)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--targets")
        .arg(&manifest_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated: splash-a.png (64x128)"));
    assert!(stdout.contains("✅ Generated 2 splash screens"));
    assert!(stdout.contains("📦 Total size:"));

    assert_eq!(
        image::image_dimensions(out_dir.join("splash-a.png")).unwrap(),
        (64, 128)
    );
    assert_eq!(
        image::image_dimensions(out_dir.join("splash-b.png")).unwrap(),
        (96, 96)
    );
}

#[test]
fn cli_splash_missing_logo_exits_zero_with_message() {
    let dir = scratch_dir("missing_logo");
    let out_dir = dir.join("splash");
    let _ = std::fs::remove_dir_all(&out_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_splashgen"))
        .args(["splash", "--logo"])
        .arg(dir.join("no-such-logo.png"))
        .arg("--out-dir")
        .arg(&out_dir)
        .output()
        .unwrap();

    // Soft failure: one explanatory line, zero files, still exit 0.
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Logo not found:"));
    assert!(!out_dir.exists());
}

#[test]
fn cli_icons_writes_manifest_icon_set() {
    let dir = scratch_dir("icons");
    let svg_path = dir.join("icon.svg");
    std::fs::write(
        &svg_path,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
            <circle cx="5" cy="5" r="4" fill="#ffffff"/>
        </svg>"##,
    )
    .unwrap();

    let out_dir = dir.join("out");
    let output = Command::new(env!("CARGO_BIN_EXE_splashgen"))
        .args(["icons", "--svg"])
        .arg(&svg_path)
        .arg("--out-dir")
        .arg(&out_dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    for (file, size) in [
        ("icon-192.png", 192),
        ("icon-512.png", 512),
        ("apple-touch-icon.png", 180),
    ] {
        assert_eq!(
            image::image_dimensions(out_dir.join(file)).unwrap(),
            (size, size)
        );
    }
}
