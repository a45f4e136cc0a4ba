//! Errors raised while assembling a query.
//!
//! Rendering never fails: once a [`FilterQuery`] exists, every converter
//! turns it into a string. The only fallible step is feeding unvalidated
//! text into the typed model, and that fails here, eagerly, at the call
//! site that supplied the text.
//!
//! ```
//! use sift_filter::{ConstructionError, SortOrder};
//!
//! let err = "sideways".parse::<SortOrder>().unwrap_err();
//! assert_eq!(
//!     err,
//!     ConstructionError::InvalidSortDirection("sideways".to_string())
//! );
//! ```
//!
//! [`FilterQuery`]: crate::FilterQuery

use thiserror::Error;

/// Result type for construction operations.
pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// An error raised while building a query from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A textual sort direction other than `ASC` or `DESC`.
    #[error("invalid sort direction {0:?}, expected \"ASC\" or \"DESC\"")]
    InvalidSortDirection(String),
}
