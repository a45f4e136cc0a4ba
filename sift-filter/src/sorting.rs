//! Sort ordering for filter queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ConstructionError, ConstructionResult};
use crate::field::Field;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl SortOrder {
    /// Get the canonical uppercase keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Asc
    }
}

impl FromStr for SortOrder {
    type Err = ConstructionError;

    /// Accepts exactly `"ASC"` and `"DESC"`; anything else fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(ConstructionError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// An ordered list of sort parts, each a field with a direction.
///
/// Insertion order is significant and becomes the output order. Directions
/// are validated at the point of insertion: once a `Sorting` exists, no
/// converter can encounter an invalid one.
///
/// # Examples
///
/// ```
/// use sift_filter::{SortOrder, Sorting};
///
/// let sorting = Sorting::new().desc("created").asc("priority");
/// assert_eq!(sorting.parts().len(), 2);
///
/// // Untrusted textual directions go through the fallible door.
/// let mut sorting = Sorting::new();
/// assert!(sorting.try_add("created", "DESC").is_ok());
/// assert!(sorting.try_add("created", "sideways").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sorting {
    parts: SmallVec<[(Field, SortOrder); 4]>,
}

impl Sorting {
    /// Create an empty sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sorting from an initial sequence of parts.
    pub fn from_parts<K>(parts: impl IntoIterator<Item = (K, SortOrder)>) -> Self
    where
        K: Into<Field>,
    {
        Self {
            parts: parts
                .into_iter()
                .map(|(field, order)| (field.into(), order))
                .collect(),
        }
    }

    /// Append a sort part.
    pub fn add(&mut self, field: impl Into<Field>, order: SortOrder) -> &mut Self {
        self.parts.push((field.into(), order));
        self
    }

    /// Append several sort parts in order.
    pub fn add_multiple<K>(&mut self, parts: impl IntoIterator<Item = (K, SortOrder)>) -> &mut Self
    where
        K: Into<Field>,
    {
        self.parts
            .extend(parts.into_iter().map(|(field, order)| (field.into(), order)));
        self
    }

    /// Append a sort part with a textual direction.
    ///
    /// Fails with [`ConstructionError::InvalidSortDirection`] for anything
    /// but `"ASC"` and `"DESC"`, before the part is stored.
    pub fn try_add(
        &mut self,
        field: impl Into<Field>,
        direction: &str,
    ) -> ConstructionResult<&mut Self> {
        let order = direction.parse::<SortOrder>()?;
        Ok(self.add(field, order))
    }

    /// Append an ascending part, consuming and returning `self` for chains.
    pub fn asc(mut self, field: impl Into<Field>) -> Self {
        self.parts.push((field.into(), SortOrder::Asc));
        self
    }

    /// Append a descending part, consuming and returning `self` for chains.
    pub fn desc(mut self, field: impl Into<Field>) -> Self {
        self.parts.push((field.into(), SortOrder::Desc));
        self
    }

    /// Sort parts in insertion order.
    pub fn parts(&self) -> &[(Field, SortOrder)] {
        &self.parts
    }

    /// Number of sort parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if there are no sort parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
