//! Product slot entity.

use core::hash::{Hash, Hasher};

use vendsim_core::{Entity, Money, ProductId};

/// A product slot in the machine: what it is called, how many units are left
/// and what one unit costs.
///
/// Equality and hashing use the [`ProductId`] only, so two slots that share a
/// display name are still different products.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    amount: u32,
    price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, amount: u32, price: Money) -> Self {
        Self::with_id(ProductId::new(), name, amount, price)
    }

    pub fn with_id(id: ProductId, name: impl Into<String>, amount: u32, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units left in the slot.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.amount > 0
    }

    /// Display-name comparison, ignoring identity, stock and price.
    pub fn same_name(&self, other: &Product) -> bool {
        self.name == other.name
    }

    pub(crate) fn take_one(&mut self) {
        self.amount = self.amount.saturating_sub(1);
    }

    pub(crate) fn restock_one(&mut self) {
        self.amount = self.amount.saturating_add(1);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
