//! Predicate sets and query execution.
//!
//! A [`PredicateSet`] is the fixed, per-entity half of a list query: which
//! text fields the search box looks at and which filter fields exist, with
//! their comparison rules. Combined with a [`QueryState`] it filters, sorts
//! and paginates a collection.

use std::collections::BTreeMap;

use crate::filter::{FilterRule, MatchRule};
use crate::ordering::compare_by_orderings;
use crate::page::{paginate, Page};
use crate::state::QueryState;
use crate::value::Value;

/// Searchable fields and filter rules for one entity type.
///
/// An item matches when:
///
/// ```text
/// match = (search text empty ∨ some search field contains it, ignoring case)
///       ∧ (every active filter matches its field)
/// ```
///
/// Filter values for fields the set does not declare are ignored.
///
/// # Example
///
/// ```
/// use flightdesk_query::{PredicateSet, QueryState, Value};
///
/// struct Drone {
///     nickname: String,
///     status: String,
///     available: bool,
/// }
///
/// fn accessor<'a>(d: &'a Drone, field: &str) -> Value<'a> {
///     match field {
///         "nickname" => Value::String(&d.nickname),
///         "status" => Value::String(&d.status),
///         "available" => Value::Bool(d.available),
///         _ => Value::None,
///     }
/// }
///
/// let drones = vec![
///     Drone { nickname: "Red Dragon".into(), status: "active".into(), available: true },
///     Drone { nickname: "Blue Heron".into(), status: "repair".into(), available: false },
/// ];
///
/// let predicates = PredicateSet::new()
///     .search_field("nickname")
///     .exact("status")
///     .boolean("available");
///
/// let state = QueryState::new(10)
///     .with_search("DRAGON")
///     .with_filter("status", "all")
///     .with_filter("available", "true");
///
/// let page = predicates.run(&drones, &state, accessor);
/// assert_eq!(page.total_items, 1);
/// assert_eq!(page.items[0].nickname, "Red Dragon");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    search_fields: Vec<String>,
    rules: Vec<FilterRule>,
}

impl PredicateSet {
    /// Creates an empty predicate set: no search fields, no filters.
    ///
    /// An empty set matches every item unless search text is given, in which
    /// case nothing matches (there is nowhere to search).
    pub fn new() -> Self {
        PredicateSet::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a text field the search box matches against.
    pub fn search_field(mut self, field: impl Into<String>) -> Self {
        self.search_fields.push(field.into());
        self
    }

    /// Adds several search fields.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declares a filter field. A later declaration for the same field
    /// replaces the earlier one.
    pub fn rule(mut self, field: impl Into<String>, rule: MatchRule) -> Self {
        let rule = FilterRule::new(field, rule);
        self.rules.retain(|r| r.field != rule.field);
        self.rules.push(rule);
        self
    }

    /// Declares a categorical exact-match filter.
    pub fn exact(self, field: impl Into<String>) -> Self {
        self.rule(field, MatchRule::Exact)
    }

    /// Declares a case-insensitive free-text filter.
    pub fn contains(self, field: impl Into<String>) -> Self {
        self.rule(field, MatchRule::Contains)
    }

    /// Declares a boolean-as-string filter.
    pub fn boolean(self, field: impl Into<String>) -> Self {
        self.rule(field, MatchRule::Bool)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the search fields.
    pub fn searchable(&self) -> &[String] {
        &self.search_fields
    }

    /// Returns the declared filter rules, in declaration order.
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Returns the rule declared for `field`.
    pub fn rule_for(&self, field: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// Returns the declared filters that `filters` activates, paired with
    /// their values, in declaration order.
    pub fn active_filters<'s>(
        &'s self,
        filters: &'s BTreeMap<String, String>,
    ) -> Vec<(&'s FilterRule, &'s str)> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = filters.get(&rule.field)?;
                rule.is_active(value).then_some((rule, value.as_str()))
            })
            .collect()
    }

    /// Describes the active search and filters, e.g.
    /// `search "drag", status = active, city ~ lyon`.
    ///
    /// Returns `None` when nothing constrains the list.
    pub fn summary(&self, state: &QueryState) -> Option<String> {
        let mut parts = Vec::new();
        let search = state.search_text.trim();
        if !search.is_empty() {
            parts.push(format!("search \"{search}\""));
        }
        for (rule, value) in self.active_filters(&state.filters) {
            let op = match rule.rule {
                MatchRule::Contains => "~",
                MatchRule::Exact | MatchRule::Bool => "=",
            };
            parts.push(format!("{} {} {}", rule.field, op, value.trim()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single item against search text and filter values.
    pub fn matches<T, F>(
        &self,
        item: &T,
        search_text: &str,
        filters: &BTreeMap<String, String>,
        accessor: F,
    ) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let needle = search_text.trim().to_lowercase();
        let active = self.active_filters(filters);
        self.matches_prepared(item, &needle, &active, &accessor)
    }

    fn matches_prepared<T, F>(
        &self,
        item: &T,
        needle: &str,
        active: &[(&FilterRule, &str)],
        accessor: &F,
    ) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let search_pass = needle.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| accessor(item, field).contains_folded(needle));

        search_pass
            && active
                .iter()
                .all(|(rule, value)| rule.matches(&accessor(item, &rule.field), value))
    }

    /// Returns the items matching search text and filter values, in
    /// collection order.
    pub fn filter_collection<'a, T, F>(
        &self,
        items: &'a [T],
        search_text: &str,
        filters: &BTreeMap<String, String>,
        accessor: F,
    ) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let needle = search_text.trim().to_lowercase();
        let active = self.active_filters(filters);
        items
            .iter()
            .filter(|item| self.matches_prepared(*item, &needle, &active, &accessor))
            .collect()
    }

    /// Filters with the search text and filter values of `state`.
    ///
    /// Sort and page are not applied; see [`PredicateSet::run`].
    pub fn filter<'a, T, F>(&self, items: &'a [T], state: &QueryState, accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.filter_collection(items, &state.search_text, &state.filters, accessor)
    }

    /// Counts the items matching `state`.
    pub fn count<T, F>(&self, items: &[T], state: &QueryState, accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, state, accessor).len()
    }

    /// Filters, sorts and paginates `items` according to `state`.
    ///
    /// Sorting is stable: items that compare equal keep collection order.
    pub fn run<'a, T, F>(&self, items: &'a [T], state: &QueryState, accessor: F) -> Page<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut matched = self.filter(items, state, &accessor);
        if !state.sort.is_empty() {
            matched.sort_by(|a, b| compare_by_orderings(*a, *b, &state.sort, &accessor));
        }
        paginate(matched, state.page, state.page_size)
    }
}

/// Returns the items of `items` matching `search_text` and `filters` under
/// `predicates`, preserving order.
///
/// Free-function form of [`PredicateSet::filter_collection`].
pub fn filter_collection<'a, T, F>(
    items: &'a [T],
    predicates: &PredicateSet,
    search_text: &str,
    filters: &BTreeMap<String, String>,
    accessor: F,
) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    predicates.filter_collection(items, search_text, filters, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::OrderBy;
    use crate::value::Number;

    #[derive(Debug, Clone, PartialEq)]
    struct Drone {
        id: u32,
        nickname: String,
        model: String,
        status: String,
        hours: u32,
        available: bool,
    }

    fn accessor<'a>(d: &'a Drone, field: &str) -> Value<'a> {
        match field {
            "id" => Value::Number(Number::from(d.id)),
            "nickname" => Value::String(&d.nickname),
            "model" => Value::String(&d.model),
            "status" => Value::String(&d.status),
            "hours" => Value::Number(Number::from(d.hours)),
            "available" => Value::Bool(d.available),
            _ => Value::None,
        }
    }

    fn drone(id: u32, nickname: &str, model: &str, status: &str, hours: u32, available: bool) -> Drone {
        Drone {
            id,
            nickname: nickname.to_string(),
            model: model.to_string(),
            status: status.to_string(),
            hours,
            available,
        }
    }

    fn fleet() -> Vec<Drone> {
        vec![
            drone(1, "Red Dragon", "Mavic 3", "active", 120, true),
            drone(2, "Blue Heron", "Mini 4", "repair", 40, false),
            drone(3, "Dragonfly", "Mini 4", "active", 75, true),
            drone(4, "Night Owl", "Matrice 30", "retired", 300, false),
            drone(5, "Sky Dragon", "Mavic 3", "active", 75, false),
        ]
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["nickname", "model"])
            .exact("status")
            .exact("hours")
            .contains("model")
            .boolean("available")
    }

    fn ids(items: &[&Drone]) -> Vec<u32> {
        items.iter().map(|d| d.id).collect()
    }

    #[test]
    fn no_constraints_match_all() {
        let items = fleet();
        let matched = predicates().filter(&items, &QueryState::default(), accessor);
        assert_eq!(ids(&matched), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let items = fleet();
        let state = QueryState::default().with_search("DRAG");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![1, 3, 5]);

        let state = QueryState::default().with_search("mini");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![2, 3]);
    }

    #[test]
    fn search_text_is_trimmed() {
        let items = fleet();
        let state = QueryState::default().with_search("  owl ");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![4]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let items = fleet();
        let state = QueryState::default()
            .with_filter("status", "active")
            .with_filter("available", "false");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![5]);
    }

    #[test]
    fn sentinel_filters_are_ignored() {
        let items = fleet();
        let state = QueryState::default()
            .with_filter("status", "all")
            .with_filter("model", "")
            .with_filter("available", "ALL");
        assert_eq!(predicates().count(&items, &state, accessor), 5);
    }

    #[test]
    fn undeclared_filters_are_ignored() {
        let items = fleet();
        let state = QueryState::default().with_filter("color", "red");
        assert_eq!(predicates().count(&items, &state, accessor), 5);
    }

    #[test]
    fn numeric_exact_filter() {
        let items = fleet();
        let state = QueryState::default().with_filter("hours", "75");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![3, 5]);
    }

    #[test]
    fn free_text_filter() {
        let items = fleet();
        let state = QueryState::default().with_filter("model", "mavic");
        assert_eq!(ids(&predicates().filter(&items, &state, accessor)), vec![1, 5]);
    }

    #[test]
    fn search_with_no_search_fields_matches_nothing() {
        let items = fleet();
        let state = QueryState::default().with_search("dragon");
        assert_eq!(PredicateSet::new().count(&items, &state, accessor), 0);
        assert_eq!(PredicateSet::new().count(&items, &QueryState::default(), accessor), 5);
    }

    #[test]
    fn matches_single_item() {
        let items = fleet();
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "active".to_string());
        assert!(predicates().matches(&items[0], "red", &filters, accessor));
        assert!(!predicates().matches(&items[1], "", &filters, accessor));
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let set = PredicateSet::new().exact("model").contains("model");
        assert_eq!(set.rules().len(), 1);
        assert_eq!(set.rule_for("model").map(|r| r.rule), Some(MatchRule::Contains));
    }

    #[test]
    fn run_sorts_stably_then_paginates() {
        let items = fleet();
        let state = QueryState::new(2)
            .with_sort(OrderBy::asc("hours"))
            .with_page(2);
        let page = predicates().run(&items, &state, accessor);
        // hours: 40(2), 75(3), 75(5), 120(1), 300(4); 3 before 5 by collection order
        assert_eq!(ids(&page.items), vec![5, 1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn run_descending_with_filter() {
        let items = fleet();
        let state = QueryState::new(10)
            .with_filter("status", "active")
            .with_sort(OrderBy::desc("hours"));
        let page = predicates().run(&items, &state, accessor);
        assert_eq!(ids(&page.items), vec![1, 3, 5]);
    }

    #[test]
    fn summary_describes_constraints() {
        let state = QueryState::default()
            .with_search("drag")
            .with_filter("status", "active")
            .with_filter("model", "mavic")
            .with_filter("available", "all");
        assert_eq!(
            predicates().summary(&state).as_deref(),
            Some("search \"drag\", status = active, model ~ mavic")
        );
        assert_eq!(predicates().summary(&QueryState::default()), None);
    }

    #[test]
    fn free_function_matches_method() {
        let items = fleet();
        let mut filters = BTreeMap::new();
        filters.insert("available".to_string(), "true".to_string());
        let matched = filter_collection(&items, &predicates(), "", &filters, accessor);
        assert_eq!(ids(&matched), vec![1, 3]);
    }
}
