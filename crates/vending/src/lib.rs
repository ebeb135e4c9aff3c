//! Vending machine domain module.
//!
//! This crate contains the purchase state machine, implemented as deterministic
//! domain logic (no IO, no logging). Randomness enters only through the
//! injectable [`FaultSource`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod fault;
pub mod machine;
pub mod product;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{FaultConfig, MachineConfig};
pub use error::PurchaseError;
pub use fault::{FaultOdds, FaultOutcome, FaultSource, MAX_DRAW, RandomFaults, ScriptedFaults};
pub use machine::VendingMachine;
pub use product::Product;
