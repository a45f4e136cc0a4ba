//! # sift-filter
//!
//! Backend-agnostic filter/sort query trees.
//!
//! This crate provides the data model the sift dialect crates render from:
//! - Leaf predicates ([`Operation`]) over fields and values
//! - AND/OR composite blocks ([`FilterBlock`]) nesting to any depth
//! - Sort orderings ([`Sorting`]) validated at construction time
//! - The root aggregate ([`FilterQuery`]) handed to converters
//! - The [`Converter`] contract plus the shared tree-walking helpers
//!
//! The model knows nothing about any target syntax. Each dialect crate
//! (`sift-sql`, `sift-jira`, `sift-youtrack`) implements [`Converter`]
//! independently; one tree can be rendered into every dialect.
//!
//! ## Building a query
//!
//! ```rust
//! use sift_filter::{FilterBlock, FilterQuery, Operation, Sorting};
//!
//! let mut block = FilterBlock::and([Operation::equal("status", "open")]);
//! block.add(FilterBlock::or([
//!     Operation::equal("assignee", "alice"),
//!     Operation::equal("assignee", "bob"),
//! ]));
//!
//! let query = FilterQuery::new()
//!     .set_filter_block(block)
//!     .set_sorting(Sorting::new().desc("created"));
//!
//! assert_eq!(query.filter_block().map(|b| b.len()), Some(2));
//! ```
//!
//! ## Values
//!
//! Convert Rust types to filter values:
//!
//! ```rust
//! use sift_filter::FilterValue;
//!
//! let val: FilterValue = 42.into();
//! assert!(matches!(val, FilterValue::Int(42)));
//!
//! let val: FilterValue = "hello".into();
//! assert!(matches!(val, FilterValue::String(_)));
//!
//! let val: FilterValue = vec![1, 2, 3].into();
//! assert!(matches!(val, FilterValue::List(_)));
//! ```
//!
//! ## Sorting
//!
//! Directions are validated when the sorting is built, never at render
//! time:
//!
//! ```rust
//! use sift_filter::{ConstructionError, Sorting};
//!
//! let mut sorting = Sorting::new();
//! sorting.try_add("created", "DESC").unwrap();
//!
//! let err = sorting.try_add("created", "sideways").unwrap_err();
//! assert!(matches!(err, ConstructionError::InvalidSortDirection(_)));
//! ```
//!
//! ## Writing a converter
//!
//! ```rust
//! use sift_filter::convert::{compose, render_block, render_sorting};
//! use sift_filter::{Converter, FilterQuery, Operation, SortOrder};
//!
//! struct ShoutyConverter;
//!
//! impl Converter for ShoutyConverter {
//!     fn convert_filter_query(&self, query: &FilterQuery) -> String {
//!         let block = query.filter_block().map(|block| {
//!             render_block(block, " AND ", " OR ", &|op| match op {
//!                 Operation::Equal(field, _) => format!("{}!", field),
//!                 _ => String::new(),
//!             })
//!         });
//!         let sorting = query
//!             .sorting()
//!             .map(|sorting| render_sorting(sorting, "SORT ", &|order| match order {
//!                 SortOrder::Asc => "UP",
//!                 SortOrder::Desc => "DOWN",
//!             }));
//!         compose(block.as_deref(), sorting.as_deref(), None)
//!     }
//! }
//!
//! let query = FilterQuery::new().set_filter_block(
//!     sift_filter::FilterBlock::and([Operation::equal("status", "open")]),
//! );
//! assert_eq!(ShoutyConverter.convert_filter_query(&query), "(status!)");
//! ```

pub mod block;
pub mod convert;
pub mod error;
pub mod field;
pub mod logging;
pub mod operation;
pub mod query;
pub mod sorting;
pub mod value;

pub use block::{FilterBlock, FilterNode};
pub use convert::Converter;
pub use error::{ConstructionError, ConstructionResult};
pub use field::Field;
pub use operation::{Operation, OperationKind};
pub use query::FilterQuery;
pub use sorting::{SortOrder, Sorting};
pub use value::FilterValue;
