//! Catalog product records.
//!
//! Each category has its own shape. [`Product`] unions them, stamped with a
//! `type` discriminator both in serialized form and in query field access,
//! which is what the query engine's category filter reads.

use std::fmt;

use budfinder_macros::Record;
use budfinder_seeker::{Record as _, Value};
use serde::{Deserialize, Serialize};

/// Product category discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strain,
    Concentrate,
    Edible,
    Cartridge,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strain,
        Category::Concentrate,
        Category::Edible,
        Category::Cartridge,
    ];

    /// Returns the discriminator string stored in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Strain => "strain",
            Category::Concentrate => "concentrate",
            Category::Edible => "edible",
            Category::Cartridge => "cartridge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flower strain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(category = "strain")]
pub struct Strain {
    #[record(text)]
    pub id: String,
    #[record(text)]
    pub name: String,
    /// Indica, sativa or hybrid.
    #[record(text)]
    pub variety: String,
    #[record(number)]
    pub thc: f64,
    #[record(number)]
    pub cbd: f64,
    #[record(number)]
    pub rating: f64,
    #[record(text)]
    pub price: String,
    #[serde(default)]
    #[record(tags)]
    pub effects: Vec<String>,
    #[serde(default)]
    #[record(tags)]
    pub flavors: Vec<String>,
    #[serde(default)]
    #[record(text)]
    pub description: String,
}

/// Extract such as shatter, wax or live resin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(category = "concentrate")]
pub struct Concentrate {
    #[record(text)]
    pub id: String,
    #[record(text)]
    pub name: String,
    #[record(text)]
    pub brand: String,
    /// Physical form, e.g. `"shatter"`.
    #[record(text)]
    pub form: String,
    #[record(number)]
    pub thc: f64,
    #[serde(default)]
    #[record(number)]
    pub cbd: Option<f64>,
    #[record(number)]
    pub rating: f64,
    #[record(text)]
    pub price: String,
    #[serde(default)]
    #[record(tags)]
    pub effects: Vec<String>,
    #[serde(default)]
    #[record(tags, rename = "flavorProfile")]
    pub flavor_profile: Vec<String>,
}

/// Infused food or drink. Potency is given per serving in milligrams rather
/// than as a percentage, so edibles carry no `thc` / `cbd` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(category = "edible")]
pub struct Edible {
    #[record(text)]
    pub id: String,
    #[record(text)]
    pub name: String,
    #[record(text)]
    pub brand: String,
    #[record(number, rename = "doseMg")]
    pub dose_mg: f64,
    #[record(number)]
    pub servings: u32,
    #[record(number)]
    pub rating: f64,
    #[serde(default)]
    #[record(text)]
    pub price: Option<String>,
    #[serde(default)]
    #[record(tags)]
    pub effects: Vec<String>,
    #[serde(default)]
    #[record(tags)]
    pub flavors: Vec<String>,
}

/// Vape cartridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(category = "cartridge")]
pub struct Cartridge {
    #[record(text)]
    pub id: String,
    #[record(text)]
    pub name: String,
    #[record(text)]
    pub brand: String,
    /// Strain the oil was extracted from.
    #[record(text)]
    pub strain: String,
    #[record(number)]
    pub thc: f64,
    #[serde(default)]
    #[record(number)]
    pub cbd: Option<f64>,
    #[record(number)]
    pub rating: f64,
    #[record(text)]
    pub price: String,
    #[serde(default)]
    #[record(tags)]
    pub effects: Vec<String>,
    #[serde(default)]
    #[record(tags, rename = "flavorProfile")]
    pub flavor_profile: Vec<String>,
    #[serde(default)]
    pub hardware: String,
}

/// Any catalog product, tagged with its category.
///
/// Serializes with a leading `"type"` field:
///
/// ```json
/// {"type":"strain","id":"s-1","name":"Blue Dream", ...}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Product {
    Strain(Strain),
    Concentrate(Concentrate),
    Edible(Edible),
    Cartridge(Cartridge),
}

impl Product {
    /// Fields worth matching free text against across every category.
    pub const SEARCH_FIELDS: [&'static str; 7] = [
        "name",
        "brand",
        "strain",
        "variety",
        "effects",
        "flavors",
        "flavorProfile",
    ];

    pub fn category(&self) -> Category {
        match self {
            Product::Strain(_) => Category::Strain,
            Product::Concentrate(_) => Category::Concentrate,
            Product::Edible(_) => Category::Edible,
            Product::Cartridge(_) => Category::Cartridge,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Product::Strain(p) => &p.id,
            Product::Concentrate(p) => &p.id,
            Product::Edible(p) => &p.id,
            Product::Cartridge(p) => &p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Strain(p) => &p.name,
            Product::Concentrate(p) => &p.name,
            Product::Edible(p) => &p.name,
            Product::Cartridge(p) => &p.name,
        }
    }

    /// Returns `true` if `other` is the same catalog entry.
    pub fn same_entry(&self, other: &Product) -> bool {
        self.category() == other.category() && self.id() == other.id()
    }
}

impl budfinder_seeker::Record for Product {
    fn field_value(&self, field: &str) -> Value<'_> {
        if field == budfinder_seeker::TYPE_FIELD {
            return Value::Text(self.category().as_str());
        }
        match self {
            Product::Strain(p) => p.field_value(field),
            Product::Concentrate(p) => p.field_value(field),
            Product::Edible(p) => p.field_value(field),
            Product::Cartridge(p) => p.field_value(field),
        }
    }
}

impl From<Strain> for Product {
    fn from(p: Strain) -> Self {
        Product::Strain(p)
    }
}

impl From<Concentrate> for Product {
    fn from(p: Concentrate) -> Self {
        Product::Concentrate(p)
    }
}

impl From<Edible> for Product {
    fn from(p: Edible) -> Self {
        Product::Edible(p)
    }
}

impl From<Cartridge> for Product {
    fn from(p: Cartridge) -> Self {
        Product::Cartridge(p)
    }
}
