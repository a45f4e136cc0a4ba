//! YouTrack dialect for sift filter queries.
//!
//! This crate renders a [`sift_filter::FilterQuery`] as a YouTrack query
//! with Russian keywords: `и`/`или` connectives, `тег:`/`проект:`/`id
//! задачи:` attributes, `#Незавершенная`/`#Завершенная` state flags, and a
//! `Сортировать:` sort clause with `по возр.`/`по убыв.` directions.
//!
//! Several pieces of the syntax drifted across YouTrack versions;
//! [`YoutrackOptions`] pins down the timestamp style, the is-empty shape,
//! and the word (if any) joining the filter to the sort clause.
//!
//! # Example
//!
//! ```rust
//! use sift_filter::{Converter, FilterBlock, FilterQuery, Operation, Sorting};
//! use sift_youtrack::YoutrackConverter;
//!
//! let query = FilterQuery::new()
//!     .set_filter_block(FilterBlock::and([
//!         Operation::project_in(["Alpha"]),
//!         Operation::is_open(true),
//!     ]))
//!     .set_sorting(Sorting::new().desc("создана"));
//!
//! assert_eq!(
//!     YoutrackConverter::new().convert_filter_query(&query),
//!     "(проект: Alpha и #Незавершенная) Сортировать: создана по убыв."
//! );
//! ```

pub mod config;
pub mod convert;

pub use config::{DateTimeStyle, EmptyStyle, YoutrackOptions};
pub use convert::YoutrackConverter;
