//! Jira converter configuration.

/// JQL rendering options.
#[derive(Debug, Clone)]
pub struct JiraOptions {
    /// Wrap field names in double quotes (`"status" = open`).
    ///
    /// Quoting keeps field names with spaces or reserved words valid JQL.
    /// Earlier exports left names bare; keep this `false` for consumers
    /// that still expect that shape.
    pub quote_fields: bool,
}

impl Default for JiraOptions {
    fn default() -> Self {
        Self { quote_fields: true }
    }
}

impl JiraOptions {
    /// Options producing the bare-field output of the earlier exports.
    pub fn unquoted() -> Self {
        Self {
            quote_fields: false,
        }
    }
}
