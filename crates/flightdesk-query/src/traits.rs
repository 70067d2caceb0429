//! The [`Listable`] trait for entities shown in list views.

use crate::value::Value;

/// Trait for types that can be listed, searched and filtered.
///
/// # Example
///
/// ```
/// use flightdesk_query::{Listable, Number, Value};
///
/// struct Pilot {
///     name: String,
///     rating: u8,
/// }
///
/// impl Listable for Pilot {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "rating" => Value::Number(Number::from(self.rating)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Listable {
    /// Returns the value of a field, or [`Value::None`] if the field doesn't
    /// exist or is not queryable.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor suitable for [`PredicateSet::filter`] and
    /// [`PredicateSet::run`].
    ///
    /// [`PredicateSet::filter`]: crate::PredicateSet::filter
    /// [`PredicateSet::run`]: crate::PredicateSet::run
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Listable for TestItem {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "count" => Value::Number(Number::from(self.count)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn listable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.field_value("name"), Value::String("test"));
        assert_eq!(item.field_value("count"), Value::Number(Number::I64(42)));
        assert_eq!(item.field_value("unknown"), Value::None);
        assert_eq!(TestItem::accessor(&item, "name"), Value::String("test"));
    }
}
