//! Splashgen produces the fixed catalog of launch images a web app needs when
//! installed as a home-screen app, plus its manifest icons.
//!
//! # Pipeline overview
//!
//! 1. **Targets**: a builtin device table ([`builtin_targets`]) or a JSON
//!    manifest ([`load_targets`]) says which sizes to emit.
//! 2. **Compose**: per target, a solid brand canvas, a Lanczos3-resized copy
//!    of the logo (25% of canvas width, aspect preserved), centered and
//!    alpha-composited ([`compose`]).
//! 3. **Write**: the opaque canvas is encoded as PNG with best compression
//!    and written as `splash-<label>.png` ([`run_all`]).
//!
//! Icons follow the same shape from an SVG source ([`generate_icons`]).
//!
//! The library never prints; progress goes through per-file callbacks and
//! `tracing`. The one guarded failure is a missing source asset, which is an
//! outcome ([`RunOutcome::MissingLogo`]), not an error.
#![forbid(unsafe_code)]

pub mod compose;
pub mod error;
pub mod icons;
pub mod pipeline;
pub mod targets;

pub use compose::{BRAND_BG_RGB, LOGO_WIDTH_FRACTION, centered_offset, scaled_logo_size};
pub use error::{SplashError, SplashResult};
pub use icons::{ICON_BG_RGB, ICON_SPECS, IconSpec, generate_icons};
pub use pipeline::{GeneratedFile, Logo, RunOpts, RunOutcome, RunSummary, generate_one, run_all};
pub use targets::{TargetSpec, builtin_targets, load_targets, parse_targets};
