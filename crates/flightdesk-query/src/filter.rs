//! Filter rules.
//!
//! A [`FilterRule`] declares how one field of an entity is compared against
//! the filter value a user picked for it. The value itself lives in the
//! query state; the rule lives in the predicate set.

use crate::value::{Number, Value};

/// Filter value meaning "no constraint" for categorical and boolean filters.
pub const ALL: &str = "all";

/// How a filter value is compared with a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// Categorical exact match.
    ///
    /// Strings compare byte-for-byte. Numeric fields compare numerically when
    /// the filter value parses as a number, boolean fields when it parses as
    /// `true`/`false`.
    Exact,
    /// Case-insensitive substring match, for free-text filters.
    Contains,
    /// Boolean-as-string match: `"true"`/`"false"` parsed and compared with a
    /// boolean field.
    Bool,
}

impl MatchRule {
    /// Returns the display name of this rule.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::Contains => "contains",
            MatchRule::Bool => "bool",
        }
    }

    /// Returns `true` if `value` constrains the result under this rule.
    ///
    /// Empty values are inactive for every rule; `"all"` (any case) is
    /// inactive for `Exact` and `Bool`.
    pub fn is_active(self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match self {
            MatchRule::Exact | MatchRule::Bool => !value.eq_ignore_ascii_case(ALL),
            MatchRule::Contains => true,
        }
    }

    /// Evaluates an active filter value against a field value.
    ///
    /// Missing fields and type mismatches never match.
    pub fn matches(self, field_value: &Value<'_>, filter_value: &str) -> bool {
        let filter_value = filter_value.trim();
        match (self, field_value) {
            (MatchRule::Exact, Value::String(s)) => *s == filter_value,
            (MatchRule::Exact, Value::Number(n)) => Number::parse(filter_value)
                .and_then(|f| n.compare(f))
                .is_some_and(|o| o.is_eq()),
            (MatchRule::Exact | MatchRule::Bool, Value::Bool(b)) => {
                parse_bool(filter_value) == Some(*b)
            }
            (MatchRule::Contains, value) => {
                value.contains_folded(&filter_value.to_lowercase())
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A declared filter: which field, compared how.
///
/// # Example
///
/// ```
/// use flightdesk_query::{FilterRule, MatchRule, Value};
///
/// let rule = FilterRule::new("status", MatchRule::Exact);
/// assert!(rule.matches(&Value::String("active"), "active"));
/// assert!(!rule.is_active("all"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    /// The field name to compare.
    pub field: String,
    /// The comparison rule.
    pub rule: MatchRule,
}

impl FilterRule {
    /// Creates a new filter rule.
    pub fn new(field: impl Into<String>, rule: MatchRule) -> Self {
        FilterRule {
            field: field.into(),
            rule,
        }
    }

    /// Returns `true` if `value` constrains the result.
    pub fn is_active(&self, value: &str) -> bool {
        self.rule.is_active(value)
    }

    /// Evaluates a filter value against the field value.
    pub fn matches(&self, field_value: &Value<'_>, filter_value: &str) -> bool {
        self.rule.matches(field_value, filter_value)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_are_inactive() {
        assert!(!MatchRule::Exact.is_active("all"));
        assert!(!MatchRule::Exact.is_active("ALL"));
        assert!(!MatchRule::Bool.is_active("all"));
        assert!(!MatchRule::Exact.is_active(""));
        assert!(!MatchRule::Contains.is_active("   "));
        assert!(MatchRule::Exact.is_active("active"));
        assert!(MatchRule::Bool.is_active("false"));
    }

    #[test]
    fn contains_treats_all_as_text() {
        assert!(MatchRule::Contains.is_active("all"));
        assert!(MatchRule::Contains.matches(&Value::String("Mall Street"), "all"));
    }

    #[test]
    fn exact_string_is_case_sensitive() {
        assert!(MatchRule::Exact.matches(&Value::String("active"), "active"));
        assert!(!MatchRule::Exact.matches(&Value::String("active"), "Active"));
        assert!(!MatchRule::Exact.matches(&Value::String("active"), "act"));
    }

    #[test]
    fn exact_numeric() {
        let v = Value::Number(Number::U64(3));
        assert!(MatchRule::Exact.matches(&v, "3"));
        assert!(MatchRule::Exact.matches(&v, "3.0"));
        assert!(!MatchRule::Exact.matches(&v, "4"));
        assert!(!MatchRule::Exact.matches(&v, "three"));
    }

    #[test]
    fn bool_string_match() {
        assert!(MatchRule::Bool.matches(&Value::Bool(true), "true"));
        assert!(MatchRule::Bool.matches(&Value::Bool(false), "False"));
        assert!(!MatchRule::Bool.matches(&Value::Bool(true), "false"));
        assert!(!MatchRule::Bool.matches(&Value::Bool(true), "yes"));
        // A bool rule on a string field is a type mismatch
        assert!(!MatchRule::Bool.matches(&Value::String("true"), "true"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let v = Value::String("Red Dragon");
        assert!(MatchRule::Contains.matches(&v, "drag"));
        assert!(MatchRule::Contains.matches(&v, "DRAGON"));
        assert!(!MatchRule::Contains.matches(&v, "falcon"));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!MatchRule::Exact.matches(&Value::None, "x"));
        assert!(!MatchRule::Contains.matches(&Value::None, "x"));
        assert!(!MatchRule::Bool.matches(&Value::None, "true"));
    }

    #[test]
    fn rule_display() {
        assert_eq!(MatchRule::Exact.to_string(), "exact");
        assert_eq!(MatchRule::Contains.to_string(), "contains");
        assert_eq!(MatchRule::Bool.to_string(), "bool");
    }
}
