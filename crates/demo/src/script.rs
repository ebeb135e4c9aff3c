//! Scripted shopping runs.

use tracing::{info, info_span, warn};

use vendsim_core::Money;
use vendsim_vending::{FaultSource, PurchaseError, VendingMachine};

/// One purchase attempt: which product, and how much money goes in first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    pub product: &'static str,
    pub tendered: Money,
}

/// Pay for an umbrella with a big note, then spend the change on snacks and
/// a charger.
pub const DEMO_SCRIPT: [Step; 3] = [
    Step {
        product: "Xiaomi Umbrella",
        tendered: Money::from_units(2_000),
    },
    Step {
        product: "Funnions",
        tendered: Money::ZERO,
    },
    Step {
        product: "Carregador iPhone",
        tendered: Money::ZERO,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Every step bought its product.
    Completed,
    /// Step `step` (0-based) failed; later steps were not attempted.
    Halted { step: usize, error: PurchaseError },
}

/// Runs `steps` in order, stopping at the first failed purchase.
pub fn run_script<F: FaultSource>(machine: &mut VendingMachine<F>, steps: &[Step]) -> ScriptOutcome {
    for (i, step) in steps.iter().enumerate() {
        let span = info_span!("purchase", step = i, product = step.product);
        let _guard = span.enter();

        info!(tendered = %step.tendered, balance = %machine.balance(), "attempting purchase");

        match machine.purchase(step.product, step.tendered) {
            Ok(()) => info!(balance = %machine.balance(), "product dispensed"),
            Err(error) => {
                warn!(
                    error = %error,
                    charged = error.charged(),
                    balance = %machine.balance(),
                    "purchase failed"
                );
                return ScriptOutcome::Halted { step: i, error };
            }
        }
    }
    ScriptOutcome::Completed
}
