//! The root query aggregate.

use crate::block::FilterBlock;
use crate::sorting::Sorting;

/// A complete filter/sort query, ready to hand to any converter.
///
/// Both halves are independently optional: a query may filter without
/// sorting, sort without filtering, carry both, or carry neither. Once
/// assembled, converters only ever read it.
///
/// # Examples
///
/// ```
/// use sift_filter::{FilterBlock, FilterQuery, Operation, Sorting};
///
/// let query = FilterQuery::new()
///     .set_filter_block(FilterBlock::and([Operation::equal("status", "open")]))
///     .set_sorting(Sorting::new().desc("created"));
///
/// assert!(query.filter_block().is_some());
/// assert!(query.sorting().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterQuery {
    filter_block: Option<FilterBlock>,
    sorting: Option<Sorting>,
}

impl FilterQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the root filter block.
    pub fn set_filter_block(mut self, block: FilterBlock) -> Self {
        self.filter_block = Some(block);
        self
    }

    /// Attach the sorting.
    pub fn set_sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = Some(sorting);
        self
    }

    /// The root filter block, if any.
    pub fn filter_block(&self) -> Option<&FilterBlock> {
        self.filter_block.as_ref()
    }

    /// The sorting, if any.
    pub fn sorting(&self) -> Option<&Sorting> {
        self.sorting.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::sorting::SortOrder;

    #[test]
    fn test_empty_query() {
        let query = FilterQuery::new();
        assert!(query.filter_block().is_none());
        assert!(query.sorting().is_none());
        assert_eq!(query, FilterQuery::default());
    }

    #[test]
    fn test_fluent_setters() {
        let query = FilterQuery::new()
            .set_filter_block(FilterBlock::and([Operation::is_open(true)]))
            .set_sorting(Sorting::from_parts([("created", SortOrder::Desc)]));

        assert_eq!(query.filter_block().map(FilterBlock::len), Some(1));
        assert_eq!(query.sorting().map(Sorting::len), Some(1));
    }

    #[test]
    fn test_halves_are_independent() {
        let filter_only =
            FilterQuery::new().set_filter_block(FilterBlock::or([Operation::is_open(false)]));
        assert!(filter_only.sorting().is_none());

        let sort_only = FilterQuery::new().set_sorting(Sorting::new().asc("priority"));
        assert!(sort_only.filter_block().is_none());
    }
}
