//! `vendsim-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no logging) shared by
//! the vending crates: identifiers, money and the domain error model.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MachineId, ProductId};
pub use money::Money;
pub use value_object::ValueObject;
