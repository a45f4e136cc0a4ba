//! Field names referenced by operations and sort parts.

use std::fmt;

use smol_str::SmolStr;

/// A field (column, attribute) name inside a filter query.
///
/// Backed by a [`SmolStr`] so the short names that dominate real queries are
/// stored inline without heap allocation, and cloning a tree stays cheap.
///
/// # Examples
///
/// ```
/// use sift_filter::Field;
///
/// let field = Field::new("assignee");
/// assert_eq!(field.as_str(), "assignee");
///
/// // From a static str (zero allocation)
/// let field: Field = "priority".into();
/// assert_eq!(field.to_string(), "priority");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Field(SmolStr);

impl Field {
    /// Create a new field name from any string-like type.
    ///
    /// Field names are expected to be non-empty; converters render whatever
    /// they are given and an empty name produces a nonsensical fragment.
    #[inline]
    pub fn new(name: impl AsRef<str>) -> Self {
        debug_assert!(!name.as_ref().is_empty(), "field name must not be empty");
        Self(SmolStr::new(name.as_ref()))
    }

    /// Create from a static string (zero allocation).
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(SmolStr::new_static(name))
    }

    /// Get the field name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the length of the field name.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the field name is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({:?})", self.0.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Field {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Field {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&String> for Field {
    #[inline]
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Field {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_new() {
        let field = Field::new("status");
        assert_eq!(field.as_str(), "status");
        assert_eq!(field.len(), 6);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_field_from_static() {
        const CREATED: Field = Field::from_static("created");
        assert_eq!(CREATED.as_str(), "created");
    }

    #[test]
    fn test_field_from_string_types() {
        let a: Field = "key".into();
        let b: Field = String::from("key").into();
        let c: Field = (&String::from("key")).into();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_field_display() {
        let field = Field::new("someKey");
        assert_eq!(format!("{}", field), "someKey");
        assert_eq!(format!("{:?}", field), "Field(\"someKey\")");
    }
}
