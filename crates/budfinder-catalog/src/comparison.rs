//! Side-by-side product comparison.

use budfinder_seeker::TYPE_FIELD;
use serde::Serialize;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::product::{Category, Product};
use crate::render::{render_fields, MISSING};

/// Products shown side by side unless configured otherwise.
pub const DEFAULT_COMPARISON_CAPACITY: usize = 4;

/// Table rows: label, candidate fields, unit suffix.
const ROWS: [(&str, &[&str], &str); 7] = [
    ("Category", &[TYPE_FIELD], ""),
    ("THC", &["thc"], "%"),
    ("CBD", &["cbd"], "%"),
    ("Price", &["price"], ""),
    ("Rating", &["rating"], ""),
    ("Effects", &["effects"], ""),
    ("Flavors", &["flavorProfile", "flavors"], ""),
];

/// Ordered, capacity-limited list of products to compare.
#[derive(Debug, Clone)]
pub struct ComparisonList {
    items: Vec<Product>,
    capacity: usize,
}

impl Default for ComparisonList {
    fn default() -> Self {
        ComparisonList::with_capacity(DEFAULT_COMPARISON_CAPACITY)
    }
}

impl ComparisonList {
    pub fn new() -> Self {
        ComparisonList::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ComparisonList {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a product.
    ///
    /// Fails if the product is already listed or the list is full.
    pub fn add(&mut self, product: impl Into<Product>) -> Result<()> {
        let product = product.into();
        if self.items.iter().any(|p| p.same_entry(&product)) {
            return Err(CatalogError::AlreadyCompared {
                category: product.category().as_str(),
                id: product.id().to_string(),
            });
        }
        if self.is_full() {
            return Err(CatalogError::ComparisonFull {
                capacity: self.capacity,
            });
        }
        debug!(id = product.id(), len = self.items.len() + 1, "added to comparison");
        self.items.push(product);
        Ok(())
    }

    pub fn remove(&mut self, category: Category, id: &str) -> Option<Product> {
        let index = self
            .items
            .iter()
            .position(|p| p.category() == category && p.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.items
            .iter()
            .any(|p| p.category() == category && p.id() == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds the comparison table for the listed products.
    pub fn table(&self) -> ComparisonTable {
        ComparisonTable::build(&self.items)
    }
}

/// One attribute row of a [`ComparisonTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    /// One cell per product, in column order.
    pub cells: Vec<String>,
}

/// Attribute-by-product grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    /// Product names, one per column.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn build(products: &[Product]) -> Self {
        let columns = products.iter().map(|p| p.name().to_string()).collect();
        let rows = ROWS
            .iter()
            .map(|&(label, fields, unit)| ComparisonRow {
                label,
                cells: products
                    .iter()
                    .map(|p| match render_fields(p, fields) {
                        Some(text) => format!("{text}{unit}"),
                        None => MISSING.to_string(),
                    })
                    .collect(),
            })
            .collect();

        ComparisonTable { columns, rows }
    }

    /// Looks a row up by label.
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}
