//! Ordering of derived results.
//!
//! Provides [`SortOrder`] for sort direction, [`collate`] for locale-aware
//! string ordering, and the single-key comparison used by the engine.

use std::cmp::Ordering;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::price::parse_price;
use crate::traits::Record;
use crate::value::Value;

/// Field name whose values are compared through price parsing.
pub const PRICE_FIELD: &str = "price";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (smallest first).
    #[serde(alias = "ascending")]
    Asc,
    /// Descending order (largest first).
    #[default]
    #[serde(alias = "descending")]
    Desc,
}

impl SortOrder {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two strings the way a catalog reader expects them ordered.
///
/// Accents and letter case are ignored first (`"Açaí"` sorts with `"acai"`),
/// then accented forms follow plain ones, then lowercase precedes uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| deunicode(s).to_lowercase();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Compares two field values for sorting.
///
/// Strings collate, numbers compare numerically. Any other pairing, a type
/// mismatch, a missing value or a NaN is `Equal` so that a stable sort leaves
/// those records where they were.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => collate(a, b),
        (Value::Number(a), Value::Number(b)) => a.compare(*b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Compares two records on one field in the given direction.
///
/// The `price` field is compared by parsed amount rather than raw value.
pub fn compare_records<T: Record>(a: &T, b: &T, field: &str, order: SortOrder) -> Ordering {
    let va = a.field_value(field);
    let vb = b.field_value(field);

    let base = if field == PRICE_FIELD {
        parse_price(&va)
            .partial_cmp(&parse_price(&vb))
            .unwrap_or(Ordering::Equal)
    } else {
        compare_values(&va, &vb)
    };

    order.apply(base)
}

/// Stable merge sort tolerating comparators that are not a total order.
///
/// [`compare_values`] treats mismatched and missing values as equal to
/// everything, which breaks transitivity. This sort never panics on such a
/// comparator and, for a given input and comparator, always produces the same
/// output. An element only moves ahead of an earlier one when it compares
/// strictly `Less`.
pub fn stable_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buf = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);

            for slot in &mut buf[start..end] {
                let take_right =
                    i >= mid || (j < end && compare(&items[j], &items[i]) == Ordering::Less);
                if take_right {
                    *slot = items[j];
                    j += 1;
                } else {
                    *slot = items[i];
                    i += 1;
                }
            }
            start = end;
        }
        std::mem::swap(items, &mut buf);
        width *= 2;
    }
}
