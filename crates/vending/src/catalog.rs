//! Ordered product list owned by a vending machine.

use serde::{Deserialize, Serialize};

use vendsim_core::Money;

use crate::product::Product;

/// A `(name, amount, price)` triple describing one slot to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub amount: u32,
    pub price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, amount: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            price,
        }
    }
}

/// The machine's products, kept in load order.
///
/// Name lookups return the first match, so order matters when names repeat.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds a catalog with a fresh id per entry.
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        entries
            .iter()
            .map(|e| Product::new(e.name.clone(), e.amount, e.price))
            .collect()
    }

    /// The catalog the demo machine ships with.
    pub fn default_demo() -> Self {
        Self::from_entries(&demo_entries())
    }

    /// Index of the first product named exactly `name`.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.lookup(name).map(|(i, _)| i)
    }

    /// First product named `name`, with its index.
    pub fn lookup(&self, name: &str) -> Option<(usize, &Product)> {
        self.products.iter().enumerate().find(|(_, p)| p.name() == name)
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.lookup(name).map(|(_, p)| p)
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }

    /// Indices of in-stock products not named like the one at `index`, in
    /// catalog order. A second slot sharing the name is not a substitute.
    pub fn substitutes_for(&self, index: usize) -> Vec<usize> {
        let Some(purchased) = self.products.get(index) else {
            return Vec::new();
        };
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.same_name(purchased) && p.is_available())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Units left across every slot.
    pub fn total_stock(&self) -> u64 {
        self.iter().map(|p| u64::from(p.amount())).sum()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn demo_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Carregador iPhone", 5, Money::from_units(150)),
        CatalogEntry::new("Funnions", 2, Money::from_units(7)),
        CatalogEntry::new("Xiaomi Umbrella", 5, Money::from_units(125)),
        CatalogEntry::new("Tractor", 1, Money::from_units(75_000)),
    ]
}
