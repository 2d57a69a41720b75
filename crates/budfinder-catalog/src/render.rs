//! Plain-text rendering of record fields.
//!
//! Shared by the comparison table and CSV export so both show a field the
//! same way.

use budfinder_seeker::{Record, Value};

/// Placeholder shown where a product lacks a field.
pub const MISSING: &str = "—";

/// Renders a field value, or `None` if the field is absent or empty.
pub fn render_value(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Text(s) if !s.is_empty() => Some(s.to_string()),
        Value::Tags(tags) if !tags.is_empty() => Some(tags.join(", ")),
        Value::Number(n) => Some(n.to_f64().to_string()),
        _ => None,
    }
}

/// Renders the union of several candidate fields.
///
/// Tag lists are merged without duplicates in first-seen order; scalar values
/// are taken from the first field carrying one.
pub fn render_fields<T: Record + ?Sized>(record: &T, fields: &[&str]) -> Option<String> {
    let mut tags: Vec<&str> = Vec::new();
    let mut scalar = None;

    for field in fields {
        match record.field_value(field) {
            Value::Tags(list) => {
                for tag in list {
                    if !tags.contains(&tag.as_str()) {
                        tags.push(tag);
                    }
                }
            }
            other if scalar.is_none() => scalar = render_value(&other),
            _ => {}
        }
    }

    if tags.is_empty() {
        scalar
    } else {
        Some(tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budfinder_seeker::Number;

    struct Cart {
        flavor_profile: Vec<String>,
        flavors: Vec<String>,
    }

    impl Record for Cart {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "flavorProfile" => Value::Tags(&self.flavor_profile),
                "flavors" => Value::Tags(&self.flavors),
                "thc" => Value::Number(Number::F64(85.5)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn render_scalars() {
        assert_eq!(render_value(&Value::Text("$40")), Some("$40".to_string()));
        assert_eq!(render_value(&Value::Text("")), None);
        assert_eq!(
            render_value(&Value::Number(Number::F64(22.0))),
            Some("22".to_string())
        );
        assert_eq!(render_value(&Value::None), None);
    }

    #[test]
    fn render_union_of_tag_fields() {
        let cart = Cart {
            flavor_profile: vec!["Lemon".into(), "Pine".into()],
            flavors: vec!["Pine".into(), "Diesel".into()],
        };
        assert_eq!(
            render_fields(&cart, &["flavorProfile", "flavors"]),
            Some("Lemon, Pine, Diesel".to_string())
        );
        assert_eq!(render_fields(&cart, &["thc"]), Some("85.5".to_string()));
        assert_eq!(render_fields(&cart, &["brand"]), None);
    }
}
