//! Demo configuration, read from environment variables.
//!
//! - `VENDSIM_CONFIG`: path to a JSON machine config (default: built-in catalog)
//! - `VENDSIM_SEED`: `u64` seed for the fault source (default: entropy)
//! - `VENDSIM_LOG_FORMAT`: `json` or `compact` (default: `json`)

use std::path::PathBuf;

use anyhow::{Context, Result};

use vendsim_observability::LogFormat;
use vendsim_vending::MachineConfig;

pub const CONFIG_VAR: &str = "VENDSIM_CONFIG";
pub const SEED_VAR: &str = "VENDSIM_SEED";
pub const LOG_FORMAT_VAR: &str = "VENDSIM_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub machine: MachineConfig,
    pub seed: Option<u64>,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let machine = match lookup(CONFIG_VAR) {
            Some(path) => load_machine_config(PathBuf::from(path))?,
            None => {
                tracing::warn!("{CONFIG_VAR} not set; using built-in demo catalog");
                MachineConfig::default()
            }
        };

        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))
            })
            .transpose()?;

        Ok(Self { machine, seed })
    }
}

/// Log format from `VENDSIM_LOG_FORMAT`. Read before tracing is set up.
pub fn log_format(lookup: impl Fn(&str) -> Option<String>) -> Result<LogFormat> {
    match lookup(LOG_FORMAT_VAR) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {LOG_FORMAT_VAR}")),
        None => Ok(LogFormat::default()),
    }
}

fn load_machine_config(path: PathBuf) -> Result<MachineConfig> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read machine config {}", path.display()))?;
    let config = MachineConfig::from_json(&json)
        .with_context(|| format!("invalid machine config {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        products = config.products.len(),
        "loaded machine config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.machine, MachineConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(log_format(lookup_from(&[])).unwrap(), LogFormat::Json);
    }

    #[test]
    fn reads_seed_and_log_format() {
        let vars = [(SEED_VAR, " 42 "), (LOG_FORMAT_VAR, "compact")];
        let config = DemoConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(log_format(lookup_from(&vars)).unwrap(), LogFormat::Compact);
    }

    #[test]
    fn rejects_bad_seed_and_format() {
        assert!(DemoConfig::from_lookup(lookup_from(&[(SEED_VAR, "-3")])).is_err());
        assert!(log_format(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).is_err());
    }

    #[test]
    fn loads_machine_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "products": [ {{ "name": "Soda", "amount": 3, "price": "2.50" }} ] }}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = DemoConfig::from_lookup(lookup_from(&[(CONFIG_VAR, path.as_str())])).unwrap();
        assert_eq!(config.machine.products.len(), 1);
        assert_eq!(config.machine.products[0].name, "Soda");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[(CONFIG_VAR, "/definitely/not/here.json")]))
            .unwrap_err();
        assert!(err.to_string().contains("failed to read machine config"));
    }
}
