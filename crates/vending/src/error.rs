use thiserror::Error;

use vendsim_core::Money;

use crate::product::Product;

/// Why a purchase did not hand the customer the product they paid for.
///
/// The tendered money stays in the machine for every variant. Only
/// [`ProductStuck`](Self::ProductStuck) and [`WrongProduct`](Self::WrongProduct)
/// also charged the price; see [`PurchaseError::charged`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Sorry, \"{name}\" lives in some other vending machine")]
    ProductNotFound { name: String },

    #[error("We have a grand total of zero units of \"{name}\"...")]
    ProductUnavailable { name: String },

    #[error("Are you kidding me? \"{name}\" costs {price}, and there is only {balance} in here")]
    InsufficientFunds {
        name: String,
        price: Money,
        balance: Money,
    },

    #[error("Bad news: \"{name}\" got stuck in this piece of junk")]
    ProductStuck { name: String },

    #[error("Oops, the wrong product fell! You ended up with a {}", .product.name())]
    WrongProduct { product: Product },
}

impl PurchaseError {
    /// Whether the price was deducted from the balance before the failure.
    pub fn charged(&self) -> bool {
        matches!(self, Self::ProductStuck { .. } | Self::WrongProduct { .. })
    }
}
