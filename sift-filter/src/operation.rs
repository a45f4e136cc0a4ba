//! Leaf predicate operations.

use std::fmt;

use chrono::NaiveDateTime;

use crate::field::Field;
use crate::value::FilterValue;

/// A single leaf predicate in a filter tree.
///
/// Operations are immutable once constructed; building a different predicate
/// means building a new value. List payloads keep their insertion order, and
/// that order is the output order in every dialect.
///
/// Each converter decides per kind how the operation renders. Kinds a
/// dialect cannot express render as the empty string rather than failing,
/// so one tree can be handed to every converter.
///
/// # Examples
///
/// ```
/// use sift_filter::Operation;
///
/// let op = Operation::equal("status", "open");
/// let ids = Operation::id_in(["PRJ-1", "PRJ-2"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Field equals a value.
    Equal(Field, FilterValue),
    /// Field does not equal a value.
    NotEqual(Field, FilterValue),

    /// Field is strictly greater than a value.
    Greater(Field, FilterValue),
    /// Field is greater than or equal to a value.
    GreaterEqual(Field, FilterValue),
    /// Field is strictly less than a value.
    Less(Field, FilterValue),
    /// Field is less than or equal to a value.
    LessEqual(Field, FilterValue),

    /// Field is one of the listed values. The list is expected non-empty.
    In(Field, Vec<FilterValue>),
    /// Field is none of the listed values. The list is expected non-empty.
    NotIn(Field, Vec<FilterValue>),

    /// Field lies inside an inclusive range.
    Between(Field, FilterValue, FilterValue),

    /// Field has no value.
    IsEmpty(Field),
    /// Field has some value.
    NotEmpty(Field),

    /// The work item is still open (`true`) or already resolved (`false`).
    IsOpen(bool),

    /// The work item carries at least one of the listed tags.
    WithTag(Vec<String>),
    /// The work item carries none of the listed tags.
    WithoutTag(Vec<String>),

    /// The work item id is one of the listed ids.
    IdIn(Vec<String>),
    /// The work item id is none of the listed ids.
    IdNotIn(Vec<String>),

    /// The work item belongs to one of the listed projects.
    ProjectIn(Vec<String>),

    /// Creation timestamp lies in a range; open-ended when `to` is `None`.
    CreateDateBetween(NaiveDateTime, Option<NaiveDateTime>),
    /// Last-update timestamp lies in a range; open-ended when `to` is `None`.
    UpdateDateBetween(NaiveDateTime, Option<NaiveDateTime>),
    /// Resolution timestamp lies in a range; open-ended when `to` is `None`.
    CloseDateBetween(NaiveDateTime, Option<NaiveDateTime>),

    /// Opaque dialect text, emitted verbatim by dialects that accept it.
    RawString(String),

    /// Work log author is one of the listed user names.
    WorkItemAuthors(Vec<String>),
}

impl Operation {
    /// Field equals a value.
    pub fn equal(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::Equal(field.into(), value.into())
    }

    /// Field does not equal a value.
    pub fn not_equal(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::NotEqual(field.into(), value.into())
    }

    /// Field is strictly greater than a value.
    pub fn greater(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::Greater(field.into(), value.into())
    }

    /// Field is greater than or equal to a value.
    pub fn greater_equal(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::GreaterEqual(field.into(), value.into())
    }

    /// Field is strictly less than a value.
    pub fn less(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::Less(field.into(), value.into())
    }

    /// Field is less than or equal to a value.
    pub fn less_equal(field: impl Into<Field>, value: impl Into<FilterValue>) -> Self {
        Self::LessEqual(field.into(), value.into())
    }

    /// Field is one of the listed values.
    pub fn in_list(
        field: impl Into<Field>,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
    ) -> Self {
        Self::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    /// Field is none of the listed values.
    pub fn not_in_list(
        field: impl Into<Field>,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
    ) -> Self {
        Self::NotIn(field.into(), values.into_iter().map(Into::into).collect())
    }

    /// Field lies inside an inclusive range.
    pub fn between(
        field: impl Into<Field>,
        min: impl Into<FilterValue>,
        max: impl Into<FilterValue>,
    ) -> Self {
        Self::Between(field.into(), min.into(), max.into())
    }

    /// Field has no value.
    pub fn is_empty(field: impl Into<Field>) -> Self {
        Self::IsEmpty(field.into())
    }

    /// Field has some value.
    pub fn not_empty(field: impl Into<Field>) -> Self {
        Self::NotEmpty(field.into())
    }

    /// The work item is still open (`true`) or already resolved (`false`).
    pub fn is_open(open: bool) -> Self {
        Self::IsOpen(open)
    }

    /// The work item carries at least one of the listed tags.
    pub fn with_tag(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::WithTag(tags.into_iter().map(Into::into).collect())
    }

    /// The work item carries none of the listed tags.
    pub fn without_tag(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::WithoutTag(tags.into_iter().map(Into::into).collect())
    }

    /// The work item id is one of the listed ids.
    pub fn id_in(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::IdIn(ids.into_iter().map(Into::into).collect())
    }

    /// The work item id is none of the listed ids.
    pub fn id_not_in(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::IdNotIn(ids.into_iter().map(Into::into).collect())
    }

    /// The work item belongs to one of the listed projects.
    pub fn project_in(projects: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::ProjectIn(projects.into_iter().map(Into::into).collect())
    }

    /// Creation timestamp lies in a range; pass `None` for an open end.
    pub fn created_between(
        from: NaiveDateTime,
        to: impl Into<Option<NaiveDateTime>>,
    ) -> Self {
        Self::CreateDateBetween(from, to.into())
    }

    /// Last-update timestamp lies in a range; pass `None` for an open end.
    pub fn updated_between(
        from: NaiveDateTime,
        to: impl Into<Option<NaiveDateTime>>,
    ) -> Self {
        Self::UpdateDateBetween(from, to.into())
    }

    /// Resolution timestamp lies in a range; pass `None` for an open end.
    pub fn closed_between(
        from: NaiveDateTime,
        to: impl Into<Option<NaiveDateTime>>,
    ) -> Self {
        Self::CloseDateBetween(from, to.into())
    }

    /// Opaque dialect text, emitted verbatim by dialects that accept it.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::RawString(text.into())
    }

    /// Work log author is one of the listed user names.
    pub fn work_item_authors(authors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::WorkItemAuthors(authors.into_iter().map(Into::into).collect())
    }

    /// The kind tag of this operation, independent of its payload.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Equal(..) => OperationKind::Equal,
            Self::NotEqual(..) => OperationKind::NotEqual,
            Self::Greater(..) => OperationKind::Greater,
            Self::GreaterEqual(..) => OperationKind::GreaterEqual,
            Self::Less(..) => OperationKind::Less,
            Self::LessEqual(..) => OperationKind::LessEqual,
            Self::In(..) => OperationKind::In,
            Self::NotIn(..) => OperationKind::NotIn,
            Self::Between(..) => OperationKind::Between,
            Self::IsEmpty(..) => OperationKind::IsEmpty,
            Self::NotEmpty(..) => OperationKind::NotEmpty,
            Self::IsOpen(..) => OperationKind::IsOpen,
            Self::WithTag(..) => OperationKind::WithTag,
            Self::WithoutTag(..) => OperationKind::WithoutTag,
            Self::IdIn(..) => OperationKind::IdIn,
            Self::IdNotIn(..) => OperationKind::IdNotIn,
            Self::ProjectIn(..) => OperationKind::ProjectIn,
            Self::CreateDateBetween(..) => OperationKind::CreateDateBetween,
            Self::UpdateDateBetween(..) => OperationKind::UpdateDateBetween,
            Self::CloseDateBetween(..) => OperationKind::CloseDateBetween,
            Self::RawString(..) => OperationKind::RawString,
            Self::WorkItemAuthors(..) => OperationKind::WorkItemAuthors,
        }
    }
}

/// Kind tags for [`Operation`] variants.
///
/// Used where only the discriminant matters, such as log events about
/// operations a dialect dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// See [`Operation::Equal`].
    Equal,
    /// See [`Operation::NotEqual`].
    NotEqual,
    /// See [`Operation::Greater`].
    Greater,
    /// See [`Operation::GreaterEqual`].
    GreaterEqual,
    /// See [`Operation::Less`].
    Less,
    /// See [`Operation::LessEqual`].
    LessEqual,
    /// See [`Operation::In`].
    In,
    /// See [`Operation::NotIn`].
    NotIn,
    /// See [`Operation::Between`].
    Between,
    /// See [`Operation::IsEmpty`].
    IsEmpty,
    /// See [`Operation::NotEmpty`].
    NotEmpty,
    /// See [`Operation::IsOpen`].
    IsOpen,
    /// See [`Operation::WithTag`].
    WithTag,
    /// See [`Operation::WithoutTag`].
    WithoutTag,
    /// See [`Operation::IdIn`].
    IdIn,
    /// See [`Operation::IdNotIn`].
    IdNotIn,
    /// See [`Operation::ProjectIn`].
    ProjectIn,
    /// See [`Operation::CreateDateBetween`].
    CreateDateBetween,
    /// See [`Operation::UpdateDateBetween`].
    UpdateDateBetween,
    /// See [`Operation::CloseDateBetween`].
    CloseDateBetween,
    /// See [`Operation::RawString`].
    RawString,
    /// See [`Operation::WorkItemAuthors`].
    WorkItemAuthors,
}

impl OperationKind {
    /// Get the kind name as it appears in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::Greater => "Greater",
            Self::GreaterEqual => "GreaterEqual",
            Self::Less => "Less",
            Self::LessEqual => "LessEqual",
            Self::In => "In",
            Self::NotIn => "NotIn",
            Self::Between => "Between",
            Self::IsEmpty => "IsEmpty",
            Self::NotEmpty => "NotEmpty",
            Self::IsOpen => "IsOpen",
            Self::WithTag => "WithTag",
            Self::WithoutTag => "WithoutTag",
            Self::IdIn => "IdIn",
            Self::IdNotIn => "IdNotIn",
            Self::ProjectIn => "ProjectIn",
            Self::CreateDateBetween => "CreateDateBetween",
            Self::UpdateDateBetween => "UpdateDateBetween",
            Self::CloseDateBetween => "CloseDateBetween",
            Self::RawString => "RawString",
            Self::WorkItemAuthors => "WorkItemAuthors",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
