//! Error handling helpers
//!
//! The outline engine itself is total; everything that can go wrong is a
//! caller contract violation (flex amount out of range) or an I/O problem
//! while writing the build artifacts. Both are reported through anyhow with
//! enough context to act on.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::geometry::flex::{FlexAmount, MAX_FLEX_LIMIT};

/// Result type used throughout the crate.
pub type FlexyResult<T> = Result<T>;

/// Extension trait for adding file context to errors
pub trait FlexyContext<T> {
    /// Add context about a file operation to an error.
    fn with_file_context(self, operation: &str, path: &Path) -> FlexyResult<T>;
}

impl<T, E> FlexyContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, operation: &str, path: &Path) -> FlexyResult<T> {
        self.with_context(|| format!("Failed to {} {}", operation, path.display()))
    }
}

/// Reject a maximum flex amount the engine cannot honor.
pub fn validate_max_flex(max_flex: FlexAmount) -> FlexyResult<()> {
    if max_flex > MAX_FLEX_LIMIT {
        bail!(
            "Maximum flex amount {} is out of range (limit is {}). \
             At 50 units the stem's two sides would meet at the midpoint.",
            max_flex,
            MAX_FLEX_LIMIT
        );
    }
    Ok(())
}

/// Reject a single flex amount outside the configured range.
pub fn validate_flex_amount(flex: FlexAmount, max_flex: FlexAmount) -> FlexyResult<()> {
    validate_max_flex(max_flex)?;
    if flex > max_flex {
        bail!(
            "Flex amount {} is outside the configured range 0..={}",
            flex,
            max_flex
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_supported_range() {
        assert!(validate_max_flex(0).is_ok());
        assert!(validate_max_flex(5).is_ok());
        assert!(validate_max_flex(MAX_FLEX_LIMIT).is_ok());
    }

    #[test]
    fn rejects_amounts_past_the_limit() {
        assert!(validate_max_flex(MAX_FLEX_LIMIT + 1).is_err());
        assert!(validate_flex_amount(3, 2).is_err());
        assert!(validate_flex_amount(2, 2).is_ok());
    }
}
