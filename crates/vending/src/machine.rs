//! Aggregate root: VendingMachine.

use vendsim_core::{AggregateRoot, DomainResult, MachineId, Money};

use crate::catalog::Catalog;
use crate::config::MachineConfig;
use crate::error::PurchaseError;
use crate::fault::{FaultOdds, FaultOutcome, FaultSource, RandomFaults};
use crate::product::Product;

/// A vending machine: a catalog, the money customers have put in, and the
/// random source that decides whether a paid product actually drops.
///
/// Operations take `&mut self`, so one caller drives a machine at a time.
/// Sharing a machine between threads means wrapping it in a lock that is held
/// for a whole `purchase` call.
#[derive(Debug)]
pub struct VendingMachine<F = RandomFaults> {
    id: MachineId,
    catalog: Catalog,
    balance: Money,
    faults: F,
    odds: FaultOdds,
    version: u64,
}

impl VendingMachine<RandomFaults> {
    /// Machine with entropy-seeded faults and the default odds.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_faults(catalog, RandomFaults::from_entropy())
    }
}

impl<F: FaultSource> VendingMachine<F> {
    pub fn with_faults(catalog: Catalog, faults: F) -> Self {
        Self {
            id: MachineId::new(),
            catalog,
            balance: Money::ZERO,
            faults,
            odds: FaultOdds::default(),
            version: 0,
        }
    }

    /// Loads the configured products and odds after validating the config.
    pub fn from_config(config: &MachineConfig, faults: F) -> DomainResult<Self> {
        config.validate()?;
        let odds = config.odds()?;
        Ok(Self::with_faults(Catalog::from_entries(&config.products), faults).with_odds(odds))
    }

    pub fn with_odds(mut self, odds: FaultOdds) -> Self {
        self.odds = odds;
        self
    }

    pub fn id_typed(&self) -> MachineId {
        self.id
    }

    /// Money currently held for the customer.
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First product named `name`.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.find(name)
    }

    pub fn odds(&self) -> FaultOdds {
        self.odds
    }

    pub fn faults_mut(&mut self) -> &mut F {
        &mut self.faults
    }

    /// Adds `tendered` to the balance and tries to sell one unit of `name`.
    ///
    /// The tender is kept whatever happens next: a failed lookup, a sold-out
    /// slot or a short balance all leave it in the machine for the next call
    /// or for [`return_change`](Self::return_change).
    ///
    /// Once stock and funds check out the price is deducted and one unit is
    /// taken *before* the fault draw. A stuck product is not refunded. A wrong
    /// product puts the purchased unit back and takes one unit of a random
    /// in-stock substitute; when no substitute exists the purchase succeeds.
    pub fn purchase(&mut self, name: &str, tendered: Money) -> Result<(), PurchaseError> {
        self.balance = self.balance.saturating_add(tendered);
        self.version += 1;

        let (index, price, available) = self
            .catalog
            .lookup(name)
            .map(|(index, product)| (index, product.price(), product.is_available()))
            .ok_or_else(|| PurchaseError::ProductNotFound {
                name: name.to_string(),
            })?;

        if !available {
            return Err(PurchaseError::ProductUnavailable {
                name: name.to_string(),
            });
        }

        let Some(remaining) = self.balance.checked_sub(price) else {
            return Err(PurchaseError::InsufficientFunds {
                name: name.to_string(),
                price,
                balance: self.balance,
            });
        };

        // Price and unit are committed before the fault draw.
        self.balance = remaining;
        if let Some(product) = self.catalog.get_mut(index) {
            product.take_one();
        }

        match self.odds.classify(self.faults.draw()) {
            FaultOutcome::Stuck => Err(PurchaseError::ProductStuck {
                name: name.to_string(),
            }),
            FaultOutcome::WrongProduct => self.drop_wrong_product(index),
            FaultOutcome::Dispensed => Ok(()),
        }
    }

    fn drop_wrong_product(&mut self, purchased: usize) -> Result<(), PurchaseError> {
        let candidates = self.catalog.substitutes_for(purchased);
        if candidates.is_empty() {
            return Ok(());
        }

        let substitute = candidates[self.faults.pick(candidates.len()).min(candidates.len() - 1)];

        if let Some(product) = self.catalog.get_mut(purchased) {
            product.restock_one();
        }
        match self.catalog.get_mut(substitute) {
            Some(product) => {
                product.take_one();
                Err(PurchaseError::WrongProduct {
                    product: product.clone(),
                })
            }
            None => Ok(()),
        }
    }

    /// Empties the balance and returns what it held.
    pub fn return_change(&mut self) -> Money {
        let change = std::mem::take(&mut self.balance);
        if !change.is_zero() {
            self.version += 1;
        }
        change
    }
}

impl<F> AggregateRoot for VendingMachine<F> {
    type Id = MachineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
