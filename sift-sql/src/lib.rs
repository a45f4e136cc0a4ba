//! SQL dialect for sift filter queries.
//!
//! This crate renders a [`sift_filter::FilterQuery`] as the body of a SQL
//! `WHERE` clause plus an `ORDER BY` clause.
//!
//! The output is a readable fragment, not bind-safe SQL: values are
//! inlined verbatim. Use it for logs, debugging views, or trusted report
//! definitions, never with untrusted input.
//!
//! # Example
//!
//! ```rust
//! use sift_filter::{Converter, FilterBlock, FilterQuery, Operation, Sorting};
//! use sift_sql::SqlConverter;
//!
//! let query = FilterQuery::new()
//!     .set_filter_block(FilterBlock::and([Operation::equal("status", "open")]))
//!     .set_sorting(Sorting::new().desc("created"));
//!
//! assert_eq!(
//!     SqlConverter::new().convert_filter_query(&query),
//!     "(status='open') ORDER BY created DESC"
//! );
//! ```

pub mod convert;

pub use convert::SqlConverter;
