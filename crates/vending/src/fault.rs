//! Fault injection: the random draw that decides whether a paid-for product
//! actually drops.
//!
//! The machine never touches a global RNG. It asks a [`FaultSource`] for a
//! draw in `0..=MAX_DRAW` and, for the wrong-product fault, for an index into
//! the eligible substitutes. Production code uses [`RandomFaults`]; tests force
//! exact draws with [`ScriptedFaults`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vendsim_core::{DomainError, DomainResult};

/// Largest value a draw can take. Draws are uniform over `0..=MAX_DRAW`.
pub const MAX_DRAW: u8 = 100;

/// Source of the random numbers consumed by a purchase.
pub trait FaultSource {
    /// A uniform draw in `0..=MAX_DRAW`.
    fn draw(&mut self) -> u8;

    /// A uniform index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: FaultSource + ?Sized> FaultSource for &mut T {
    fn draw(&mut self) -> u8 {
        (**self).draw()
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// [`FaultSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomFaults<R = StdRng> {
    rng: R,
}

impl RandomFaults<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFaults<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomFaults<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> FaultSource for RandomFaults<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_DRAW)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays fixed draws and picks in order.
///
/// Once a queue runs dry, draws return `MAX_DRAW` (no fault) and picks return 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFaults {
    draws: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedFaults {
    pub fn new(draws: impl IntoIterator<Item = u8>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            picks: VecDeque::new(),
        }
    }

    /// The same draw, `times` times in a row.
    pub fn repeat(draw: u8, times: usize) -> Self {
        Self::new(std::iter::repeat_n(draw, times))
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }

    pub fn remaining_draws(&self) -> usize {
        self.draws.len()
    }
}

impl FaultSource for ScriptedFaults {
    fn draw(&mut self) -> u8 {
        self.draws.pop_front().unwrap_or(MAX_DRAW)
    }

    fn pick(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        pick.min(len.saturating_sub(1))
    }
}

/// What a draw means for the purchase that made it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaultOutcome {
    /// The product stays in the machine; the customer has already paid.
    Stuck,
    /// Another in-stock product falls instead, if there is one.
    WrongProduct,
    /// Normal dispense.
    Dispensed,
}

/// Draw thresholds for each fault band.
///
/// `draw < stuck_below` is stuck, `stuck_below <= draw < wrong_product_below`
/// is wrong product, anything else dispenses normally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaultOdds {
    stuck_below: u8,
    wrong_product_below: u8,
}

impl FaultOdds {
    pub const DEFAULT_STUCK_BELOW: u8 = 10;
    pub const DEFAULT_WRONG_PRODUCT_BELOW: u8 = 14;

    pub fn new(stuck_below: u8, wrong_product_below: u8) -> DomainResult<Self> {
        if stuck_below > wrong_product_below {
            return Err(DomainError::validation(format!(
                "stuck_below ({stuck_below}) cannot exceed wrong_product_below ({wrong_product_below})"
            )));
        }
        if wrong_product_below > MAX_DRAW + 1 {
            return Err(DomainError::validation(format!(
                "wrong_product_below ({wrong_product_below}) cannot exceed {}",
                MAX_DRAW + 1
            )));
        }
        Ok(Self {
            stuck_below,
            wrong_product_below,
        })
    }

    /// Every draw dispenses.
    pub const fn never() -> Self {
        Self {
            stuck_below: 0,
            wrong_product_below: 0,
        }
    }

    pub fn stuck_below(&self) -> u8 {
        self.stuck_below
    }

    pub fn wrong_product_below(&self) -> u8 {
        self.wrong_product_below
    }

    pub fn classify(&self, draw: u8) -> FaultOutcome {
        if draw < self.stuck_below {
            FaultOutcome::Stuck
        } else if draw < self.wrong_product_below {
            FaultOutcome::WrongProduct
        } else {
            FaultOutcome::Dispensed
        }
    }
}

impl Default for FaultOdds {
    fn default() -> Self {
        Self {
            stuck_below: Self::DEFAULT_STUCK_BELOW,
            wrong_product_below: Self::DEFAULT_WRONG_PRODUCT_BELOW,
        }
    }
}
