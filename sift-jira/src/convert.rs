//! JQL rendering of filter queries.

use chrono::NaiveDateTime;
use sift_filter::convert::{compose, render_block, render_sorting};
use sift_filter::{Converter, Field, FilterQuery, FilterValue, Operation, SortOrder, Sorting};
use tracing::debug;

use crate::config::JiraOptions;

const AND_TOKEN: &str = " and ";
const OR_TOKEN: &str = " or ";

/// Renders a [`FilterQuery`] as a Jira Query Language expression.
///
/// User-supplied field names are double-quoted by default (see
/// [`JiraOptions`]); the built-in JQL fields the work-item predicates map
/// to (`created`, `resolved`, `labels`, `issueKey`, `project`,
/// `worklogAuthor`) are always bare.
///
/// Plain comparisons (`Greater`, `GreaterEqual`, `Less`, `LessEqual`) have
/// no JQL rendering and produce the empty string.
///
/// # Examples
///
/// ```
/// use sift_filter::{Converter, FilterBlock, FilterQuery, Operation};
/// use sift_jira::JiraConverter;
///
/// let query = FilterQuery::new().set_filter_block(FilterBlock::and([
///     Operation::equal("status", "open"),
///     Operation::is_open(true),
/// ]));
///
/// assert_eq!(
///     JiraConverter::new().convert_filter_query(&query),
///     "(\"status\" = open and resolved is empty)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JiraConverter {
    options: JiraOptions,
}

impl JiraConverter {
    /// Create a converter with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit options.
    pub fn with_options(options: JiraOptions) -> Self {
        Self { options }
    }

    /// The options this converter renders with.
    pub fn options(&self) -> &JiraOptions {
        &self.options
    }

    fn field(&self, field: &Field) -> String {
        if self.options.quote_fields {
            format!("\"{}\"", field)
        } else {
            field.to_string()
        }
    }

    fn convert_operation(&self, op: &Operation) -> String {
        match op {
            Operation::Equal(field, value) => {
                format!("{} = {}", self.field(field), convert_value(value))
            }
            Operation::NotEqual(field, value) => {
                format!("{} != {}", self.field(field), convert_value(value))
            }
            Operation::In(field, values) => {
                format!("{} in ({})", self.field(field), join_values(values))
            }
            Operation::NotIn(field, values) => {
                format!("{} not in ({})", self.field(field), join_values(values))
            }
            Operation::Between(field, min, max) => {
                let field = self.field(field);
                format!(
                    "({} >= {} and {} <= {})",
                    field,
                    convert_value(min),
                    field,
                    convert_value(max)
                )
            }
            Operation::IsEmpty(field) => format!("{} is empty", self.field(field)),
            Operation::NotEmpty(field) => format!("{} is not empty", self.field(field)),
            Operation::IsOpen(true) => "resolved is empty".to_string(),
            Operation::IsOpen(false) => "resolved is not empty".to_string(),
            Operation::WithTag(tags) => format!("labels in ({})", join_strings(tags)),
            Operation::WithoutTag(tags) => format!("labels not in ({})", join_strings(tags)),
            Operation::IdIn(ids) => format!("issueKey in ({})", join_strings(ids)),
            Operation::IdNotIn(ids) => format!("issueKey not in ({})", join_strings(ids)),
            Operation::ProjectIn(projects) => {
                format!("project in ({})", join_quoted_strings(projects))
            }
            Operation::CreateDateBetween(from, to) => date_range("created", from, to),
            Operation::UpdateDateBetween(from, to) => date_range("updated", from, to),
            Operation::CloseDateBetween(from, to) => date_range("resolved", from, to),
            Operation::WorkItemAuthors(authors) => {
                format!("worklogAuthor in ({})", join_quoted_strings(authors))
            }
            Operation::RawString(text) => text.clone(),
            Operation::Greater(..)
            | Operation::GreaterEqual(..)
            | Operation::Less(..)
            | Operation::LessEqual(..) => {
                debug!(kind = %op.kind(), "operation has no JQL rendering, dropping");
                String::new()
            }
        }
    }

    fn convert_sorting(&self, sorting: &Sorting) -> String {
        render_sorting(sorting, "order by ", &|order| match order {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl Converter for JiraConverter {
    fn convert_filter_query(&self, query: &FilterQuery) -> String {
        let block_text = query
            .filter_block()
            .map(|block| render_block(block, AND_TOKEN, OR_TOKEN, &|op| self.convert_operation(op)));
        let sorting_text = query.sorting().map(|sorting| self.convert_sorting(sorting));

        let result = compose(block_text.as_deref(), sorting_text.as_deref(), None);
        debug!(chars = result.len(), "rendered JQL filter query");
        result
    }
}

/// Render a single value in JQL syntax.
///
/// Strings containing a space are double-quoted, timestamps are quoted with
/// minute precision, everything else is bare.
fn convert_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Bool(v) => v.to_string(),
        FilterValue::Int(v) => v.to_string(),
        FilterValue::Float(v) => v.to_string(),
        FilterValue::DateTime(v) => format!("\"{}\"", v.format("%Y-%m-%d %H:%M")),
        FilterValue::String(v) => convert_str(v),
        FilterValue::List(values) => join_values(values),
    }
}

fn convert_str(s: &str) -> String {
    if s.contains(' ') {
        format!("\"{}\"", s)
    } else {
        s.to_string()
    }
}

fn join_values(values: &[FilterValue]) -> String {
    values.iter().map(convert_value).collect::<Vec<_>>().join(",")
}

fn join_strings(items: &[String]) -> String {
    items
        .iter()
        .map(|item| convert_str(item))
        .collect::<Vec<_>>()
        .join(",")
}

/// Join list items, wrapping each in double quotes (the shape JQL expects
/// for `project` and `worklogAuthor` lists).
fn join_quoted_strings(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", convert_str(item)))
        .collect::<Vec<_>>()
        .join(",")
}

fn date_range(field: &str, from: &NaiveDateTime, to: &Option<NaiveDateTime>) -> String {
    let from = format!("\"{}\"", from.format("%Y-%m-%d %H:%M"));
    match to {
        Some(to) => format!(
            "({} >= {} and {} <= \"{}\")",
            field,
            from,
            field,
            to.format("%Y-%m-%d %H:%M")
        ),
        None => format!("{} >= {}", field, from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use sift_filter::FilterBlock;

    fn convert(query: &FilterQuery) -> String {
        JiraConverter::new().convert_filter_query(query)
    }

    fn convert_unquoted(query: &FilterQuery) -> String {
        JiraConverter::with_options(JiraOptions::unquoted()).convert_filter_query(query)
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
    fn test_equal_quotes_field_by_default() {
        let query = block_query(FilterBlock::and([Operation::equal("someKey", "someValue")]));
        assert_eq!(convert(&query), "(\"someKey\" = someValue)");
    }

    #[test]
    fn test_equal_unquoted_variant() {
        let query = block_query(FilterBlock::and([Operation::equal("someKey", "someValue")]));
        assert_eq!(convert_unquoted(&query), "(someKey = someValue)");
    }

    #[test]
    fn test_string_with_space_is_quoted() {
        let query = block_query(FilterBlock::and([Operation::equal("summary", "a b")]));
        assert_eq!(convert(&query), "(\"summary\" = \"a b\")");
    }

    #[test]
    fn test_not_equal() {
        let query = block_query(FilterBlock::and([Operation::not_equal("status", "closed")]));
        assert_eq!(convert(&query), "(\"status\" != closed)");
    }

    #[test]
    fn test_in_list() {
        let query = block_query(FilterBlock::and([Operation::in_list(
            "status",
            ["open", "reopened"],
        )]));
        assert_eq!(convert(&query), "(\"status\" in (open,reopened))");
    }

    #[test]
    fn test_in_list_quotes_spaced_values() {
        let query = block_query(FilterBlock::and([Operation::in_list(
            "fixVersion",
            ["Release 1", "RC2"],
        )]));
        assert_eq!(convert(&query), "(\"fixVersion\" in (\"Release 1\",RC2))");
    }

    #[test]
    fn test_not_in_list() {
        let query = block_query(FilterBlock::and([Operation::not_in_list(
            "priority",
            [4, 5],
        )]));
        assert_eq!(convert(&query), "(\"priority\" not in (4,5))");
    }

    #[test]
    fn test_empty_checks() {
        let query = block_query(FilterBlock::and([
            Operation::is_empty("assignee"),
            Operation::not_empty("reporter"),
        ]));
        assert_eq!(
            convert(&query),
            "(\"assignee\" is empty and \"reporter\" is not empty)"
        );
    }

    #[test]
    fn test_between_carries_own_parens() {
        let query = block_query(FilterBlock::and([Operation::between("votes", 1, 5)]));
        assert_eq!(convert(&query), "((\"votes\" >= 1 and \"votes\" <= 5))");
    }

    #[test]
    fn test_created_between_closed_range() {
        let query = block_query(FilterBlock::and([Operation::created_between(
            timestamp(2020, 1, 1, 0, 0),
            timestamp(2020, 2, 1, 0, 0),
        )]));
        assert_eq!(
            convert(&query),
            "((created >= \"2020-01-01 00:00\" and created <= \"2020-02-01 00:00\"))"
        );
    }

    #[test]
    fn test_created_between_open_end() {
        let query = block_query(FilterBlock::and([Operation::created_between(
            timestamp(2020, 1, 1, 0, 0),
            None,
        )]));
        assert_eq!(convert(&query), "(created >= \"2020-01-01 00:00\")");
    }

    #[test]
    fn test_updated_and_closed_ranges_use_their_fields() {
        let query = block_query(FilterBlock::and([
            Operation::updated_between(timestamp(2021, 3, 1, 12, 30), None),
            Operation::closed_between(timestamp(2021, 3, 2, 9, 15), None),
        ]));
        assert_eq!(
            convert(&query),
            "(updated >= \"2021-03-01 12:30\" and resolved >= \"2021-03-02 09:15\")"
        );
    }

    #[test]
    fn test_is_open() {
        let open = block_query(FilterBlock::and([Operation::is_open(true)]));
        assert_eq!(convert(&open), "(resolved is empty)");

        let closed = block_query(FilterBlock::and([Operation::is_open(false)]));
        assert_eq!(convert(&closed), "(resolved is not empty)");
    }

    #[test]
    fn test_tags_map_to_labels() {
        let query = block_query(FilterBlock::and([
            Operation::with_tag(["urgent", "blocked"]),
            Operation::without_tag(["wontfix"]),
        ]));
        assert_eq!(
            convert(&query),
            "(labels in (urgent,blocked) and labels not in (wontfix))"
        );
    }

    #[test]
    fn test_ids_map_to_issue_key() {
        let query = block_query(FilterBlock::and([
            Operation::id_in(["PRJ-1", "PRJ-2"]),
            Operation::id_not_in(["PRJ-9"]),
        ]));
        assert_eq!(
            convert(&query),
            "(issueKey in (PRJ-1,PRJ-2) and issueKey not in (PRJ-9))"
        );
    }

    #[test]
    fn test_project_in_quotes_each_value() {
        let query = block_query(FilterBlock::and([Operation::project_in(["PRJ", "OPS"])]));
        assert_eq!(convert(&query), "(project in (\"PRJ\",\"OPS\"))");
    }

    #[test]
    fn test_work_item_authors() {
        let query = block_query(FilterBlock::and([Operation::work_item_authors([
            "alice", "bob",
        ])]));
        assert_eq!(convert(&query), "(worklogAuthor in (\"alice\",\"bob\"))");
    }

    #[test]
    fn test_raw_string_passes_through() {
        let query = block_query(FilterBlock::and([Operation::raw(
            "sprint in openSprints()",
        )]));
        assert_eq!(convert(&query), "(sprint in openSprints())");
    }

    #[test]
    fn test_plain_comparison_leaves_gap() {
        let query = block_query(FilterBlock::and([
            Operation::equal("a", 1),
            Operation::greater("b", 5),
        ]));
        assert_eq!(convert(&query), "(\"a\" = 1 and )");
    }

    #[test]
    fn test_unsupported_alone_renders_empty_group() {
        let query = block_query(FilterBlock::and([Operation::less_equal("b", 5)]));
        assert_eq!(convert(&query), "()");
    }

    #[test]
    fn test_or_block_and_nesting() {
        let mut block = FilterBlock::and([Operation::equal("a", 1)]);
        block.add(FilterBlock::and([Operation::equal("b", 2)]));
        assert_eq!(convert_unquoted(&block_query(block)), "(a = 1 and (b = 2))");

        let query = block_query(FilterBlock::or([
            Operation::equal("a", 1),
            Operation::equal("b", 2),
        ]));
        assert_eq!(convert_unquoted(&query), "(a = 1 or b = 2)");
    }

    #[test]
    fn test_sorting() {
        let query = FilterQuery::new().set_sorting(
            Sorting::new().desc("someKey").asc("someKey2"),
        );
        assert_eq!(convert(&query), "order by someKey desc,someKey2 asc");
    }

    #[test]
    fn test_filter_and_sorting() {
        let query = FilterQuery::new()
            .set_filter_block(FilterBlock::and([Operation::equal("status", "open")]))
            .set_sorting(Sorting::new().desc("created"));
        assert_eq!(
            convert(&query),
            "(\"status\" = open) order by created desc"
        );
    }

    #[test]
    fn test_datetime_value_in_plain_equal() {
        let query = block_query(FilterBlock::and([Operation::equal(
            "created",
            timestamp(2020, 1, 1, 0, 0),
        )]));
        assert_eq!(convert(&query), "(\"created\" = \"2020-01-01 00:00\")");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(convert(&FilterQuery::new()), "");
    }
}
