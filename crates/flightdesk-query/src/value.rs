//! Runtime field values.
//!
//! The [`Value`] enum is what a field accessor hands back to the engine: a
//! borrowed view of one field of an entity, typed just enough for filtering,
//! searching and sorting.

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source entity.
///
/// # Example
///
/// ```
/// use flightdesk_query::{Number, Value};
///
/// struct Drone {
///     nickname: String,
///     flight_hours: u32,
///     available: bool,
/// }
///
/// fn accessor<'a>(drone: &'a Drone, field: &str) -> Value<'a> {
///     match field {
///         "nickname" => Value::String(&drone.nickname),
///         "flight_hours" => Value::Number(drone.flight_hours.into()),
///         "available" => Value::Bool(drone.available),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Bool(bool),
    /// The entity has no such field, or the field is unset.
    None,
}

impl Value<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Case-insensitive substring test against a lowercased `needle`.
    ///
    /// Numbers, booleans and `None` never contain anything.
    pub fn contains_folded(&self, needle: &str) -> bool {
        match self {
            Value::String(s) => s.to_lowercase().contains(needle),
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

/// Optional fields map `None` to [`Value::None`].
impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::None,
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A numeric field value.
///
/// Integers stay exact when both sides share a representation; mixed
/// comparisons fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Orders two numbers. `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed(b, a).reverse()),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }

    /// Parses a filter value as a number.
    ///
    /// Integers keep their exact representation; anything else that parses
    /// as a finite float becomes `F64`.
    pub fn parse(s: &str) -> Option<Number> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Some(Number::I64(n));
        }
        if let Ok(n) = s.parse::<u64>() {
            return Some(Number::U64(n));
        }
        s.parse::<f64>().ok().filter(|n| n.is_finite()).map(Number::F64)
    }
}

fn cmp_signed(a: i64, b: u64) -> Ordering {
    match u64::try_from(a) {
        Ok(a) => a.cmp(&b),
        Err(_) => Ordering::Less,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64);
number_from!(U64 as u64: u8, u16, u32, u64);
number_from!(F64 as f64: f32, f64);

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        u64::try_from(n).map_or(Number::F64(n as f64), Number::U64)
    }
}
