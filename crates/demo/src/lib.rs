//! Demo driver for the vending machine: environment configuration plus a
//! scripted shopping run.

pub mod config;
pub mod script;
