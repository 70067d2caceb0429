//! Sorting: `field` / `-field` clauses and how field values compare.

use std::cmp::Ordering;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// One sort clause. Written `field` for ascending, `-field` for descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Orders two values of this clause's field. Missing values go last
    /// whichever way the clause sorts.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
        match (a, b) {
            (Value::None, Value::None) => Some(Ordering::Equal),
            (Value::None, _) => Some(Ordering::Greater),
            (_, Value::None) => Some(Ordering::Less),
            _ => compare_values(a, b).map(|o| self.dir.apply(o)),
        }
    }

    /// Parses `field` or `-field` into an ordering.
    ///
    /// Returns `None` for an empty field name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (field, dir) = match s.strip_prefix('-') {
            Some(rest) => (rest.trim(), Dir::Desc),
            None => (s, Dir::Asc),
        };
        if field.is_empty() {
            None
        } else {
            Some(OrderBy::new(field, dir))
        }
    }

    /// Parses a comma-separated list such as `status,-flight_hours`.
    ///
    /// Empty segments are skipped.
    pub fn parse_list(s: &str) -> Vec<OrderBy> {
        s.split(',').filter_map(OrderBy::parse).collect()
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dir {
            Dir::Asc => write!(f, "{}", self.field),
            Dir::Desc => write!(f, "-{}", self.field),
        }
    }
}

/// Ascending comparison of two field values.
///
/// Strings compare case-insensitively, ties broken byte-wise. Mismatched
/// kinds and NaN are incomparable.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => {
            Some(a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)))
        }
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Orders two items by `orderings`, primary clause first.
///
/// Incomparable clauses count as ties, so equal items keep their
/// collection order under a stable sort.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    orderings
        .iter()
        .filter_map(|clause| {
            clause.compare(&accessor(a, &clause.field), &accessor(b, &clause.field))
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn descending_reverses_only_strict_orderings() {
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn compare_strings_ignores_case_first() {
        let a = Value::String("alpha");
        let b = Value::String("Beta");
        assert_eq!(compare_values(&a, &b), Some(Ordering::Less));
        assert_eq!(
            compare_values(&Value::String("a"), &Value::String("A")),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn none_sorts_last_in_both_directions() {
        let some = Value::Number(Number::I64(1));
        assert_eq!(
            OrderBy::asc("x").compare(&Value::None, &some),
            Some(Ordering::Greater)
        );
        assert_eq!(
            OrderBy::desc("x").compare(&Value::None, &some),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn type_mismatch_is_incomparable() {
        assert_eq!(
            compare_values(&Value::String("1"), &Value::Number(Number::I64(1))),
            None
        );
    }

    #[test]
    fn parse_orderings() {
        assert_eq!(OrderBy::parse("name"), Some(OrderBy::asc("name")));
        assert_eq!(OrderBy::parse("-hours"), Some(OrderBy::desc("hours")));
        assert_eq!(OrderBy::parse(" - "), None);
        assert_eq!(
            OrderBy::parse_list("status,,-hours"),
            vec![OrderBy::asc("status"), OrderBy::desc("hours")]
        );
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(OrderBy::desc("hours").to_string(), "-hours");
        assert_eq!(OrderBy::asc("name").to_string(), "name");
    }
}
