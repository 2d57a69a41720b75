//! Record capability traits.
//!
//! The engine never sees concrete record types. It only asks a record for a
//! named field through [`Record`], and every field is allowed to be missing.
//! [`TextField`], [`TagField`] and [`NumberField`] turn owned field types into
//! [`Value`]s; they are what `#[derive(Record)]` expands to.

use crate::value::{Number, Value};

/// Trait for records that can be searched, filtered and sorted.
///
/// This trait is typically derived using `#[derive(Record)]` from the
/// `budfinder-macros` crate, but can also be implemented manually.
///
/// # Manual Implementation
///
/// ```
/// use budfinder_seeker::{Number, Record, Value};
///
/// struct Edible {
///     name: String,
///     thc: Option<f64>,
/// }
///
/// impl Record for Edible {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "thc" => self.thc.map_or(Value::None, |t| Value::Number(Number::F64(t))),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if this record shape
    /// does not carry it.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns the field value through a free function signature.
    ///
    /// ```ignore
    /// let price = Strain::accessor(&strain, "price");
    /// ```
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }
}

/// Field types readable as free text.
pub trait TextField {
    /// Converts the field into a [`Value::Text`] (or [`Value::None`]).
    fn text_value(&self) -> Value<'_>;
}

impl TextField for String {
    fn text_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl TextField for str {
    fn text_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl<T: TextField> TextField for Option<T> {
    fn text_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.text_value(),
            None => Value::None,
        }
    }
}

/// Field types readable as a tag list.
pub trait TagField {
    /// Converts the field into a [`Value::Tags`] (or [`Value::None`]).
    fn tag_value(&self) -> Value<'_>;
}

impl TagField for Vec<String> {
    fn tag_value(&self) -> Value<'_> {
        Value::Tags(self)
    }
}

impl TagField for [String] {
    fn tag_value(&self) -> Value<'_> {
        Value::Tags(self)
    }
}

impl<T: TagField> TagField for Option<T> {
    fn tag_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.tag_value(),
            None => Value::None,
        }
    }
}

/// Field types readable as a number.
pub trait NumberField {
    /// Converts the field into a [`Value::Number`] (or [`Value::None`]).
    fn number_value(&self) -> Value<'_>;
}

macro_rules! number_field {
    ($($t:ty),*) => {
        $(
            impl NumberField for $t {
                fn number_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

number_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: NumberField> NumberField for Option<T> {
    fn number_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.number_value(),
            None => Value::None,
        }
    }
}
