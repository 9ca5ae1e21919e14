use std::path::{Path, PathBuf};

/// Convenience result type used across the crate.
pub type SplashResult<T> = Result<T, SplashError>;

/// Top-level error taxonomy.
///
/// Decode and write failures from `image`/`std::io` arrive wrapped in
/// [`SplashError::Other`] with context attached at the call site; they are
/// fatal and abort the run. The one locally handled condition, a missing
/// source asset, is not an error at all — see `RunOutcome::MissingLogo`.
#[derive(thiserror::Error, Debug)]
pub enum SplashError {
    /// Invalid user-provided data (target manifest, dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// An input path that must exist for the operation to make sense.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SplashError {
    /// Build a [`SplashError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SplashError::MissingInput`] value.
    pub fn missing_input(path: impl AsRef<Path>) -> Self {
        Self::MissingInput(path.as_ref().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_includes_message() {
        let e = SplashError::validation("width must be >= 1");
        assert_eq!(e.to_string(), "validation error: width must be >= 1");
    }

    #[test]
    fn missing_input_display_includes_path() {
        let e = SplashError::missing_input("public/logo.png");
        assert!(e.to_string().contains("public/logo.png"));
    }

    #[test]
    fn anyhow_errors_pass_through_transparently() {
        let inner = anyhow::anyhow!("disk full");
        let e = SplashError::from(inner);
        assert_eq!(e.to_string(), "disk full");
    }
}
