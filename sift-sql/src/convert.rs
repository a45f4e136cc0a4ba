//! SQL rendering of filter queries.

use sift_filter::convert::{compose, render_block, render_sorting};
use sift_filter::{Converter, FilterQuery, FilterValue, Operation, Sorting};
use tracing::debug;

const AND_TOKEN: &str = " AND ";
const OR_TOKEN: &str = " OR ";

/// Renders a [`FilterQuery`] as the body of a SQL `WHERE` clause plus an
/// `ORDER BY` clause.
///
/// The output is a display fragment, not bind-safe SQL: string values are
/// single-quoted verbatim with no escaping. Never feed the result to a
/// database with untrusted input in the tree; use it for logs, debugging
/// views, or trusted report definitions.
///
/// Work-item predicates (tags, projects, ids, open state, date ranges) have
/// no SQL rendering and produce the empty string.
///
/// # Examples
///
/// ```
/// use sift_filter::{Converter, FilterBlock, FilterQuery, Operation};
/// use sift_sql::SqlConverter;
///
/// let query = FilterQuery::new().set_filter_block(FilterBlock::and([
///     Operation::equal("status", "open"),
///     Operation::in_list("priority", [1, 2]),
/// ]));
///
/// assert_eq!(
///     SqlConverter::new().convert_filter_query(&query),
///     "(status='open' AND priority IN (1, 2))"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlConverter;

impl SqlConverter {
    /// Create a new SQL converter.
    pub fn new() -> Self {
        Self
    }

    fn convert_operation(&self, op: &Operation) -> String {
        match op {
            Operation::Equal(field, value) => {
                format!("{}={}", field, convert_value(value))
            }
            Operation::NotEqual(field, value) => {
                format!("{}<>{}", field, convert_value(value))
            }
            Operation::Greater(field, value) => {
                format!("{}>{}", field, convert_value(value))
            }
            Operation::GreaterEqual(field, value) => {
                format!("{}>={}", field, convert_value(value))
            }
            Operation::Less(field, value) => {
                format!("{}<{}", field, convert_value(value))
            }
            Operation::LessEqual(field, value) => {
                format!("{}<={}", field, convert_value(value))
            }
            Operation::In(field, values) => {
                format!("{} IN ({})", field, join_values(values))
            }
            Operation::NotIn(field, values) => {
                format!("{} NOT IN ({})", field, join_values(values))
            }
            Operation::Between(field, min, max) => {
                format!(
                    "{} BETWEEN {} AND {}",
                    field,
                    convert_value(min),
                    convert_value(max)
                )
            }
            Operation::IsEmpty(field) => format!("ISNULL({})", field),
            Operation::NotEmpty(field) => format!("{} IS NOT NULL", field),
            Operation::IsOpen(..)
            | Operation::WithTag(..)
            | Operation::WithoutTag(..)
            | Operation::IdIn(..)
            | Operation::IdNotIn(..)
            | Operation::ProjectIn(..)
            | Operation::CreateDateBetween(..)
            | Operation::UpdateDateBetween(..)
            | Operation::CloseDateBetween(..)
            | Operation::RawString(..)
            | Operation::WorkItemAuthors(..) => {
                debug!(kind = %op.kind(), "operation has no SQL rendering, dropping");
                String::new()
            }
        }
    }

    fn convert_sorting(&self, sorting: &Sorting) -> String {
        render_sorting(sorting, "ORDER BY ", &|order| order.as_str())
    }
}

impl Converter for SqlConverter {
    fn convert_filter_query(&self, query: &FilterQuery) -> String {
        let block_text = query
            .filter_block()
            .map(|block| render_block(block, AND_TOKEN, OR_TOKEN, &|op| self.convert_operation(op)));
        let sorting_text = query.sorting().map(|sorting| self.convert_sorting(sorting));

        let result = compose(block_text.as_deref(), sorting_text.as_deref(), None);
        debug!(chars = result.len(), "rendered SQL filter query");
        result
    }
}

/// Render a single value in SQL syntax.
///
/// Strings are single-quoted verbatim, booleans become `1`/`0`, timestamps
/// are quoted with minute precision, lists join their elements with `, `.
fn convert_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Bool(true) => "1".to_string(),
        FilterValue::Bool(false) => "0".to_string(),
        FilterValue::Int(v) => v.to_string(),
        FilterValue::Float(v) => v.to_string(),
        FilterValue::String(v) => format!("'{}'", v),
        FilterValue::DateTime(v) => format!("'{}'", v.format("%Y-%m-%d %H:%M")),
        FilterValue::List(values) => join_values(values),
    }
}

fn join_values(values: &[FilterValue]) -> String {
    values
        .iter()
        .map(convert_value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use sift_filter::{FilterBlock, SortOrder};

    fn convert(query: &FilterQuery) -> String {
        SqlConverter::new().convert_filter_query(query)
    }

    fn block_query(block: FilterBlock) -> FilterQuery {
        FilterQuery::new().set_filter_block(block)
    }

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_equal_string() {
        let query = block_query(FilterBlock::and([Operation::equal("someKey", "someValue")]));
        assert_eq!(convert(&query), "(someKey='someValue')");
    }

    #[test]
    fn test_not_equal() {
        let query = block_query(FilterBlock::and([Operation::not_equal("status", "closed")]));
        assert_eq!(convert(&query), "(status<>'closed')");
    }

    #[test]
    fn test_comparisons() {
        let query = block_query(FilterBlock::and([
            Operation::greater("qty", 5),
            Operation::greater_equal("qty", 5),
            Operation::less("qty", 5),
            Operation::less_equal("qty", 5),
        ]));
        assert_eq!(convert(&query), "(qty>5 AND qty>=5 AND qty<5 AND qty<=5)");
    }

    #[test]
    fn test_in_and_not_in() {
        let query = block_query(FilterBlock::and([
            Operation::in_list("id", [1, 2, 3]),
            Operation::not_in_list("status", ["new", "open"]),
        ]));
        assert_eq!(
            convert(&query),
            "(id IN (1, 2, 3) AND status NOT IN ('new', 'open'))"
        );
    }

    #[test]
    fn test_empty_checks() {
        let query = block_query(FilterBlock::and([
            Operation::is_empty("assignee"),
            Operation::not_empty("reporter"),
        ]));
        assert_eq!(convert(&query), "(ISNULL(assignee) AND reporter IS NOT NULL)");
    }

    #[test]
    fn test_between() {
        let query = block_query(FilterBlock::and([Operation::between("qty", 1, 5)]));
        assert_eq!(convert(&query), "(qty BETWEEN 1 AND 5)");
    }

    #[test]
    fn test_bool_renders_as_digit() {
        let query = block_query(FilterBlock::and([
            Operation::equal("active", true),
            Operation::equal("deleted", false),
        ]));
        assert_eq!(convert(&query), "(active=1 AND deleted=0)");
    }

    #[test]
    fn test_float_value() {
        let query = block_query(FilterBlock::and([Operation::greater("score", 2.5)]));
        assert_eq!(convert(&query), "(score>2.5)");
    }

    #[test]
    fn test_datetime_minute_precision() {
        let query = block_query(FilterBlock::and([Operation::equal(
            "created",
            timestamp(2020, 1, 1, 0, 0),
        )]));
        assert_eq!(convert(&query), "(created='2020-01-01 00:00')");
    }

    #[test]
    fn test_string_with_whitespace_stays_single_quoted() {
        let query = block_query(FilterBlock::and([Operation::equal("k", "a b")]));
        assert_eq!(convert(&query), "(k='a b')");
    }

    #[test]
    fn test_or_block() {
        let query = block_query(FilterBlock::or([
            Operation::equal("a", 1),
            Operation::equal("b", 2),
        ]));
        assert_eq!(convert(&query), "(a=1 OR b=2)");
    }

    #[test]
    fn test_nested_blocks_keep_grouping() {
        let mut block = FilterBlock::and([Operation::equal("a", 1)]);
        block.add(FilterBlock::or([
            Operation::equal("b", 2),
            Operation::equal("c", 3),
        ]));
        assert_eq!(convert(&block_query(block)), "(a=1 AND (b=2 OR c=3))");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(convert(&block_query(FilterBlock::new_and())), "()");
    }

    #[test]
    fn test_unsupported_operation_leaves_gap() {
        let query = block_query(FilterBlock::and([
            Operation::equal("a", 1),
            Operation::with_tag(["urgent"]),
        ]));
        assert_eq!(convert(&query), "(a=1 AND )");
    }

    #[test]
    fn test_raw_string_not_rendered() {
        let query = block_query(FilterBlock::and([Operation::raw("1=1")]));
        assert_eq!(convert(&query), "()");
    }

    #[test]
    fn test_sorting_only() {
        let query = FilterQuery::new().set_sorting(
            sift_filter::Sorting::new().desc("someKey").asc("someKey2"),
        );
        assert_eq!(convert(&query), "ORDER BY someKey DESC,someKey2 ASC");
    }

    #[test]
    fn test_empty_sorting_renders_bare_keyword() {
        let query = FilterQuery::new().set_sorting(sift_filter::Sorting::new());
        assert_eq!(convert(&query), "ORDER BY");
    }

    #[test]
    fn test_filter_and_sorting() {
        let query = FilterQuery::new()
            .set_filter_block(FilterBlock::and([
                Operation::equal("someKey", "someValue"),
                Operation::in_list("someKey2", ["value1", "value2", "value3"]),
            ]))
            .set_sorting(
                sift_filter::Sorting::from_parts([
                    ("someKey", SortOrder::Desc),
                    ("someKey2", SortOrder::Asc),
                ]),
            );
        assert_eq!(
            convert(&query),
            "(someKey='someValue' AND someKey2 IN ('value1', 'value2', 'value3')) ORDER BY someKey DESC,someKey2 ASC"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(convert(&FilterQuery::new()), "");
    }
}
