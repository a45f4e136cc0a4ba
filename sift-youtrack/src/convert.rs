//! YouTrack rendering of filter queries.

use chrono::NaiveDateTime;
use sift_filter::convert::{compose, render_block, render_sorting};
use sift_filter::{Converter, FilterQuery, FilterValue, Operation, SortOrder, Sorting};
use tracing::debug;

use crate::config::{EmptyStyle, YoutrackOptions};

const AND_TOKEN: &str = " и ";
const OR_TOKEN: &str = " или ";

/// Renders a [`FilterQuery`] as a YouTrack query with Russian keywords.
///
/// Work-item predicates map onto YouTrack's built-in attributes: tags onto
/// `тег:`, ids onto `id задачи:`, projects onto `проект:`, open state onto
/// the `#Незавершенная`/`#Завершенная` flags, and date ranges onto
/// `создана:`/`обновлена:`/`дата завершения:`.
///
/// Plain comparisons (`Greater`, `GreaterEqual`, `Less`, `LessEqual`) and
/// work log authors have no YouTrack rendering and produce the empty
/// string.
///
/// # Examples
///
/// ```
/// use sift_filter::{Converter, FilterBlock, FilterQuery, Operation};
/// use sift_youtrack::YoutrackConverter;
///
/// let query = FilterQuery::new().set_filter_block(FilterBlock::and([
///     Operation::with_tag(["urgent"]),
///     Operation::is_open(true),
/// ]));
///
/// assert_eq!(
///     YoutrackConverter::new().convert_filter_query(&query),
///     "(тег: urgent и #Незавершенная)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct YoutrackConverter {
    options: YoutrackOptions,
}

impl YoutrackConverter {
    /// Create a converter with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit options.
    pub fn with_options(options: YoutrackOptions) -> Self {
        Self { options }
    }

    /// The options this converter renders with.
    pub fn options(&self) -> &YoutrackOptions {
        &self.options
    }

    fn convert_operation(&self, op: &Operation) -> String {
        match op {
            Operation::Equal(field, value) => {
                format!("{}: {}", field, self.convert_value(value))
            }
            Operation::NotEqual(field, value) => {
                format!("{}: -{}", field, self.convert_value(value))
            }
            Operation::In(field, values) => {
                format!("{}: {}", field, self.join_values(values))
            }
            Operation::NotIn(field, values) => {
                format!("{}: -{}", field, self.join_values_negated(values))
            }
            Operation::Between(field, min, max) => {
                format!(
                    "{}: {} .. {}",
                    field,
                    self.convert_value(min),
                    self.convert_value(max)
                )
            }
            Operation::IsEmpty(field) => match self.options.empty_style {
                EmptyStyle::NoValue => {
                    format!("{}: {{Нет: {}}}", field, field.as_str().to_lowercase())
                }
                EmptyStyle::NegatedHas => format!("имеет: -{}", convert_str(field.as_str())),
            },
            Operation::NotEmpty(field) => format!("имеет: {}", field),
            Operation::IsOpen(true) => "#Незавершенная".to_string(),
            Operation::IsOpen(false) => "#Завершенная".to_string(),
            Operation::WithTag(tags) => format!("тег: {}", join_strings(tags)),
            Operation::WithoutTag(tags) => format!("тег: -{}", join_strings_negated(tags)),
            Operation::IdIn(ids) => format!("id задачи: {}", join_strings(ids)),
            Operation::IdNotIn(ids) => format!("id задачи: -{}", join_strings_negated(ids)),
            Operation::ProjectIn(projects) => format!("проект: {}", join_strings(projects)),
            Operation::CreateDateBetween(from, to) => self.date_range("создана:", from, to),
            Operation::UpdateDateBetween(from, to) => self.date_range("обновлена:", from, to),
            Operation::CloseDateBetween(from, to) => {
                self.date_range("дата завершения:", from, to)
            }
            Operation::RawString(text) => text.clone(),
            Operation::Greater(..)
            | Operation::GreaterEqual(..)
            | Operation::Less(..)
            | Operation::LessEqual(..)
            | Operation::WorkItemAuthors(..) => {
                debug!(kind = %op.kind(), "operation has no YouTrack rendering, dropping");
                String::new()
            }
        }
    }

    /// Render a single value in YouTrack syntax.
    ///
    /// Strings containing a space are wrapped in braces, timestamps follow
    /// the configured style, everything else is bare.
    fn convert_value(&self, value: &FilterValue) -> String {
        match value {
            FilterValue::Bool(v) => v.to_string(),
            FilterValue::Int(v) => v.to_string(),
            FilterValue::Float(v) => v.to_string(),
            FilterValue::DateTime(v) => v
                .format(self.options.datetime_style.format_str())
                .to_string(),
            FilterValue::String(v) => convert_str(v),
            FilterValue::List(values) => self.join_values(values),
        }
    }

    fn join_values(&self, values: &[FilterValue]) -> String {
        values
            .iter()
            .map(|value| self.convert_value(value))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Join values for a negated list: `-a,-b,-c` (the leading `-` is
    /// supplied by the operation template).
    fn join_values_negated(&self, values: &[FilterValue]) -> String {
        values
            .iter()
            .map(|value| self.convert_value(value))
            .collect::<Vec<_>>()
            .join(",-")
    }

    fn date_range(&self, prefix: &str, from: &NaiveDateTime, to: &Option<NaiveDateTime>) -> String {
        let fmt = self.options.datetime_style.format_str();
        match to {
            Some(to) => format!("{} {} .. {}", prefix, from.format(fmt), to.format(fmt)),
            None => format!("{} {}", prefix, from.format(fmt)),
        }
    }

    fn convert_sorting(&self, sorting: &Sorting) -> String {
        render_sorting(sorting, "Сортировать: ", &|order| match order {
            SortOrder::Asc => "по возр.",
            SortOrder::Desc => "по убыв.",
        })
    }
}

impl Converter for YoutrackConverter {
    fn convert_filter_query(&self, query: &FilterQuery) -> String {
        let block_text = query
            .filter_block()
            .map(|block| render_block(block, AND_TOKEN, OR_TOKEN, &|op| self.convert_operation(op)));
        let sorting_text = query.sorting().map(|sorting| self.convert_sorting(sorting));

        let result = compose(
            block_text.as_deref(),
            sorting_text.as_deref(),
            self.options.order_by_separator.as_deref(),
        );
        debug!(chars = result.len(), "rendered YouTrack filter query");
        result
    }
}

fn convert_str(s: &str) -> String {
    if s.contains(' ') {
        format!("{{{}}}", s)
    } else {
        s.to_string()
    }
}

fn join_strings(items: &[String]) -> String {
    items
        .iter()
        .map(|item| convert_str(item))
        .collect::<Vec<_>>()
        .join(",")
}

fn join_strings_negated(items: &[String]) -> String {
    items
        .iter()
        .map(|item| convert_str(item))
        .collect::<Vec<_>>()
        .join(",-")
}
