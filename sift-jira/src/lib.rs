//! Jira dialect for sift filter queries.
//!
//! This crate renders a [`sift_filter::FilterQuery`] as a Jira Query
//! Language (JQL) expression. Work-item predicates map onto the built-in
//! JQL fields: open state and resolution ranges onto `resolved`, tags onto
//! `labels`, ids onto `issueKey`, projects onto `project`, work log authors
//! onto `worklogAuthor`.
//!
//! Field quoting is configurable via [`JiraOptions`] to cover both the
//! current quoted output and the bare-field shape of earlier exports.
//!
//! # Example
//!
//! ```rust
//! use sift_filter::{Converter, FilterBlock, FilterQuery, Operation, Sorting};
//! use sift_jira::JiraConverter;
//!
//! let query = FilterQuery::new()
//!     .set_filter_block(FilterBlock::and([
//!         Operation::project_in(["PRJ"]),
//!         Operation::is_open(true),
//!     ]))
//!     .set_sorting(Sorting::new().desc("created"));
//!
//! assert_eq!(
//!     JiraConverter::new().convert_filter_query(&query),
//!     "(project in (\"PRJ\") and resolved is empty) order by created desc"
//! );
//! ```

pub mod config;
pub mod convert;

pub use config::JiraOptions;
pub use convert::JiraConverter;
