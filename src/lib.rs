//! # sift
//!
//! Backend-agnostic filter/sort queries rendered to SQL, JQL, and YouTrack
//! query text.
//!
//! A query is built once as a tree of operations and AND/OR blocks plus an
//! optional sorting, then handed to any converter. Each converter renders
//! the same tree into its own dialect; operations a dialect cannot express
//! render as the empty string instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let query = FilterQuery::new()
//!     .set_filter_block(FilterBlock::and([
//!         Operation::equal("status", "open"),
//!         Operation::with_tag(["urgent"]),
//!     ]))
//!     .set_sorting(Sorting::new().desc("created"));
//!
//! // One tree, three dialects.
//! assert_eq!(
//!     SqlConverter::new().convert_filter_query(&query),
//!     "(status='open' AND ) ORDER BY created DESC"
//! );
//! assert_eq!(
//!     JiraConverter::new().convert_filter_query(&query),
//!     "(\"status\" = open and labels in (urgent)) order by created desc"
//! );
//! assert_eq!(
//!     YoutrackConverter::new().convert_filter_query(&query),
//!     "(status: open и тег: urgent) Сортировать: created по убыв."
//! );
//! ```
//!
//! Note the SQL output above: the tag predicate has no SQL rendering, so
//! it leaves a visible gap rather than silently reshaping the expression.
//! Build per-dialect trees when dialects must not see foreign predicates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The query model: operations, blocks, sorting, values, the converter
/// contract.
pub mod filter {
    pub use sift_filter::*;
}

/// SQL dialect renderer.
pub mod sql {
    pub use sift_sql::*;
}

/// Jira (JQL) dialect renderer.
pub mod jira {
    pub use sift_jira::*;
}

/// YouTrack dialect renderer.
pub mod youtrack {
    pub use sift_youtrack::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::filter::{
        ConstructionError, ConstructionResult, Converter, Field, FilterBlock, FilterNode,
        FilterQuery, FilterValue, Operation, OperationKind, SortOrder, Sorting,
    };
    pub use crate::jira::{JiraConverter, JiraOptions};
    pub use crate::sql::SqlConverter;
    pub use crate::youtrack::{DateTimeStyle, EmptyStyle, YoutrackConverter, YoutrackOptions};
}

// Re-export key types at the crate root
pub use filter::{
    ConstructionError, ConstructionResult, Converter, Field, FilterBlock, FilterNode, FilterQuery,
    FilterValue, Operation, OperationKind, SortOrder, Sorting,
};
pub use jira::{JiraConverter, JiraOptions};
pub use sql::SqlConverter;
pub use youtrack::{DateTimeStyle, EmptyStyle, YoutrackConverter, YoutrackOptions};
