use anyhow::Result;
use tracing::info;

use vendsim_core::AggregateRoot;
use vendsim_demo::config::{self, DemoConfig};
use vendsim_demo::script::{DEMO_SCRIPT, ScriptOutcome, run_script};
use vendsim_vending::{RandomFaults, VendingMachine};

fn main() -> Result<()> {
    let format = config::log_format(|key| std::env::var(key).ok())?;
    vendsim_observability::tracing::init(format);

    let config = DemoConfig::from_env()?;
    let faults = match config.seed {
        Some(seed) => RandomFaults::seeded(seed),
        None => RandomFaults::from_entropy(),
    };
    let mut machine = VendingMachine::from_config(&config.machine, faults)?;

    info!(
        machine_id = %machine.id(),
        products = machine.catalog().len(),
        seed = ?config.seed,
        "vending machine ready"
    );

    match run_script(&mut machine, &DEMO_SCRIPT) {
        ScriptOutcome::Completed => println!("Nice, you managed to buy everything!"),
        ScriptOutcome::Halted { error, .. } => println!("{error}"),
    }

    let change = machine.return_change();
    println!("Your change: {change}");
    info!(%change, version = machine.version(), "change returned");

    Ok(())
}
