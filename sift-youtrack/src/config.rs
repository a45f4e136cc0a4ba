//! YouTrack converter configuration.
//!
//! YouTrack's query syntax changed over the years and different
//! installations accept different shapes. The options here pin down the
//! three switches that vary between observed outputs; the defaults match
//! current YouTrack versions.

/// Timestamp rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// `2020-01-01T00:00` (current syntax).
    #[default]
    Iso,
    /// `2020-01-01_00:00` (older syntax some installations still accept).
    Underscore,
}

impl DateTimeStyle {
    /// Get the chrono format string for this style.
    pub fn format_str(&self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%dT%H:%M",
            Self::Underscore => "%Y-%m-%d_%H:%M",
        }
    }
}

/// Rendering of the "field has no value" predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyStyle {
    /// `Assignee: {Нет: assignee}` - the field matched against the
    /// no-value literal, with the field name lowercased inside the braces.
    #[default]
    NoValue,
    /// `имеет: -Assignee` - the negated form of the has-value predicate,
    /// used by older exports.
    NegatedHas,
}

/// YouTrack rendering options.
#[derive(Debug, Clone, Default)]
pub struct YoutrackOptions {
    /// Timestamp rendering style.
    pub datetime_style: DateTimeStyle,
    /// Rendering of the is-empty predicate.
    pub empty_style: EmptyStyle,
    /// Conjunction word inserted between the filter text and a trailing
    /// sort clause. `None` joins the two with a single space; older
    /// exports inserted `и`.
    pub order_by_separator: Option<String>,
}

impl YoutrackOptions {
    /// Options reproducing the older export shape: underscore timestamps,
    /// negated-has emptiness, and `и` before the sort clause.
    pub fn legacy() -> Self {
        Self {
            datetime_style: DateTimeStyle::Underscore,
            empty_style: EmptyStyle::NegatedHas,
            order_by_separator: Some("и".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_current_syntax() {
        let options = YoutrackOptions::default();
        assert_eq!(options.datetime_style, DateTimeStyle::Iso);
        assert_eq!(options.empty_style, EmptyStyle::NoValue);
        assert_eq!(options.order_by_separator, None);
    }

    #[test]
    fn test_format_str() {
        assert_eq!(DateTimeStyle::Iso.format_str(), "%Y-%m-%dT%H:%M");
        assert_eq!(DateTimeStyle::Underscore.format_str(), "%Y-%m-%d_%H:%M");
    }

    #[test]
    fn test_legacy() {
        let options = YoutrackOptions::legacy();
        assert_eq!(options.datetime_style, DateTimeStyle::Underscore);
        assert_eq!(options.empty_style, EmptyStyle::NegatedHas);
        assert_eq!(options.order_by_separator.as_deref(), Some("и"));
    }
}
