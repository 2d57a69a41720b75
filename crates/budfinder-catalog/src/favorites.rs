//! Saved products.
//!
//! [`Favorites`] keeps one list per category, in save order. The favorites
//! screen searches their union: [`Favorites::aggregate`] stamps every saved
//! item with its category and concatenates the lists, and
//! [`Favorites::search`] hands that collection to a query engine.

use budfinder_seeker::{QueryEngine, SearchConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::product::{Cartridge, Category, Concentrate, Edible, Product, Strain};

/// Per-category saved product lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favorites {
    strains: Vec<Strain>,
    concentrates: Vec<Concentrate>,
    edibles: Vec<Edible>,
    cartridges: Vec<Cartridge>,
}

fn position_by_id<T>(list: &[T], id: &str, id_of: impl Fn(&T) -> &str) -> Option<usize> {
    list.iter().position(|item| id_of(item) == id)
}

/// Saves `item` unless an entry with its id is already saved.
fn insert_unique<T>(list: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) -> bool {
    if position_by_id(list, id_of(&item), &id_of).is_some() {
        return false;
    }
    list.push(item);
    true
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Saves a product. Returns `false` if it was already saved.
    pub fn save(&mut self, product: impl Into<Product>) -> bool {
        let product = product.into();
        let (category, id) = (product.category(), product.id().to_string());
        let saved = match product {
            Product::Strain(p) => insert_unique(&mut self.strains, p, |s| s.id.as_str()),
            Product::Concentrate(p) => insert_unique(&mut self.concentrates, p, |c| c.id.as_str()),
            Product::Edible(p) => insert_unique(&mut self.edibles, p, |e| e.id.as_str()),
            Product::Cartridge(p) => insert_unique(&mut self.cartridges, p, |c| c.id.as_str()),
        };
        if saved {
            debug!(%category, %id, "favorite saved");
        }
        saved
    }

    /// Removes a saved product, returning it.
    pub fn remove(&mut self, category: Category, id: &str) -> Option<Product> {
        let removed = match category {
            Category::Strain => position_by_id(&self.strains, id, |s| s.id.as_str())
                .map(|i| Product::Strain(self.strains.remove(i))),
            Category::Concentrate => position_by_id(&self.concentrates, id, |c| c.id.as_str())
                .map(|i| Product::Concentrate(self.concentrates.remove(i))),
            Category::Edible => position_by_id(&self.edibles, id, |e| e.id.as_str())
                .map(|i| Product::Edible(self.edibles.remove(i))),
            Category::Cartridge => position_by_id(&self.cartridges, id, |c| c.id.as_str())
                .map(|i| Product::Cartridge(self.cartridges.remove(i))),
        };
        if removed.is_some() {
            debug!(%category, id, "favorite removed");
        }
        removed
    }

    /// Saves the product if it is not saved, removes it otherwise.
    ///
    /// Returns `true` if the product is saved afterwards.
    pub fn toggle(&mut self, product: impl Into<Product>) -> bool {
        let product = product.into();
        if self.remove(product.category(), product.id()).is_some() {
            false
        } else {
            self.save(product)
        }
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        match category {
            Category::Strain => position_by_id(&self.strains, id, |s| s.id.as_str()).is_some(),
            Category::Concentrate => position_by_id(&self.concentrates, id, |c| c.id.as_str()).is_some(),
            Category::Edible => position_by_id(&self.edibles, id, |e| e.id.as_str()).is_some(),
            Category::Cartridge => position_by_id(&self.cartridges, id, |c| c.id.as_str()).is_some(),
        }
    }

    /// Number of saved products in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Strain => self.strains.len(),
            Category::Concentrate => self.concentrates.len(),
            Category::Edible => self.edibles.len(),
            Category::Cartridge => self.cartridges.len(),
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        *self = Favorites::default();
    }

    /// Every saved product, stamped with its category.
    ///
    /// Strains come first, then concentrates, edibles and cartridges, each in
    /// save order.
    pub fn aggregate(&self) -> Vec<Product> {
        let mut all = Vec::with_capacity(self.len());
        all.extend(self.strains.iter().cloned().map(Product::Strain));
        all.extend(self.concentrates.iter().cloned().map(Product::Concentrate));
        all.extend(self.edibles.iter().cloned().map(Product::Edible));
        all.extend(self.cartridges.iter().cloned().map(Product::Cartridge));
        all
    }

    /// Starts a search session over a snapshot of the saved products.
    ///
    /// The engine gets its own copy; later changes to the favorites reach it
    /// through [`QueryEngine::set_source`].
    pub fn search(&self, config: SearchConfig) -> QueryEngine<Product> {
        QueryEngine::new(self.aggregate(), config)
    }
}
