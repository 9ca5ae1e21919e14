use std::path::PathBuf;

use clap::{Parser, Subcommand};

use splashgen::{RunOutcome, RunOpts, builtin_targets, load_targets};

#[derive(Parser, Debug)]
#[command(name = "splashgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the device splash screens (the default).
    Splash(SplashArgs),
    /// Generate the manifest icons and apple-touch icon from the brand SVG.
    Icons(IconsArgs),
}

const DEFAULT_LOGO: &str = "public/apple-touch-icon.png";
const DEFAULT_SPLASH_DIR: &str = "public/splash";

#[derive(Parser, Debug)]
struct SplashArgs {
    /// Source logo image (transparent PNG).
    #[arg(long, default_value = DEFAULT_LOGO)]
    logo: PathBuf,

    /// Output directory (created if absent).
    #[arg(long, default_value = DEFAULT_SPLASH_DIR)]
    out_dir: PathBuf,

    /// Optional JSON manifest replacing the builtin device table.
    #[arg(long)]
    targets: Option<PathBuf>,
}

impl Default for SplashArgs {
    fn default() -> Self {
        Self {
            logo: DEFAULT_LOGO.into(),
            out_dir: DEFAULT_SPLASH_DIR.into(),
            targets: None,
        }
    }
}

#[derive(Parser, Debug)]
struct IconsArgs {
    /// Source brand SVG.
    #[arg(long, default_value = "public/icon.svg")]
    svg: PathBuf,

    /// Output directory (created if absent).
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Splash(SplashArgs::default())) {
        Command::Splash(args) => cmd_splash(args),
        Command::Icons(args) => cmd_icons(args),
    }
}

fn cmd_splash(args: SplashArgs) -> anyhow::Result<()> {
    let targets = match &args.targets {
        Some(path) => load_targets(path)?,
        None => builtin_targets(),
    };
    let opts = RunOpts {
        logo_path: args.logo,
        out_dir: args.out_dir,
        targets,
    };

    println!("Generating iOS-style PWA splash screens...");
    println!("Using logo: {}", opts.logo_path.display());
    println!("Output directory: {}", opts.out_dir.display());
    println!();

    let outcome = splashgen::run_all(&opts, |file| {
        println!(
            "✓ Generated: {} ({}x{})",
            file.file_name, file.width, file.height
        );
    })?;

    match outcome {
        RunOutcome::Completed(summary) => {
            println!();
            println!("✅ Generated {} splash screens", summary.files.len());
            println!("📦 Total size: {:.2} MB", summary.total_megabytes());
            println!("📁 Location: {}", opts.out_dir.display());
            Ok(())
        }
        // The original tool exits 0 here; preserved on purpose.
        RunOutcome::MissingLogo(path) => {
            eprintln!("❌ Logo not found: {}", path.display());
            Ok(())
        }
    }
}

fn cmd_icons(args: IconsArgs) -> anyhow::Result<()> {
    let outcome = splashgen::generate_icons(&args.svg, &args.out_dir, |file| {
        println!(
            "✓ Generated: {} ({}x{})",
            file.file_name, file.width, file.height
        );
    })?;

    match outcome {
        RunOutcome::Completed(summary) => {
            println!();
            println!("✅ Generated {} icons", summary.files.len());
            println!("📁 Location: {}", args.out_dir.display());
            Ok(())
        }
        RunOutcome::MissingLogo(path) => {
            eprintln!("❌ Icon SVG not found: {}", path.display());
            Ok(())
        }
    }
}
