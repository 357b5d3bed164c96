//! Error types for layout and rendering.
//!
//! Only programming-contract violations surface as errors. Running out of
//! horizontal space is signaled with `Option::None` at the relevant
//! boundary and is always a normal outcome.

use thiserror::Error;

/// Errors raised when a block's declared widths break the layout contract.
///
/// These abort the surrounding display call with no partial output. A
/// column that merely does not fit never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A required part was supplied without a declared width.
    #[error("part '{part}' declares no width")]
    UndeclaredWidth {
        /// Name of the offending pillar part.
        part: String,
    },

    /// A block declared a minimum width above its ideal width.
    #[error("declared min width {min} exceeds declared width {width}")]
    MinExceedsWidth {
        /// Declared minimum width.
        min: usize,
        /// Declared ideal width.
        width: usize,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
