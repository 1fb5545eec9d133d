//! `swaplog.yaml`: logging, signature hashes and the chains to decode.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swaplog_core::config::{ChainConfig, SignatureConfig};
use swaplog_observability::LogConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub signatures: SignatureConfig,
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl AppConfig {
    /// Load a YAML config. Relative ABI paths are resolved against the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut config: AppConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for chain in &mut config.chains {
            chain.abi = resolve(base, &chain.abi);
        }
        Ok(config)
    }

    pub fn chain(&self, slug: &str) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.chain.eq_ignore_ascii_case(slug))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaplog_core::event::EventKind;

    #[test]
    fn parses_minimal_config() {
        let yaml = r#"
chains:
  - chain: ethereum
    evm_chain_id: 1
    abi: abi/eth.json
    events: [swap_started_eth_to_bsc, swap_pair_register]
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.signatures, SignatureConfig::default());
        let eth = config.chain("Ethereum").unwrap();
        assert_eq!(eth.events[1], EventKind::SwapPairRegister);
        assert!(config.chain("bsc").is_none());
    }

    #[test]
    fn shipped_config_builds_every_chain() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/swaplog.yaml");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.chains.len(), 2);
        assert_eq!(config.signatures, SignatureConfig::default());
        for chain in &config.chains {
            swaplog_evm::ChainProfile::from_config(chain, &config.signatures).unwrap();
        }
    }

    #[test]
    fn abi_paths_resolve_against_config_dir() {
        assert_eq!(
            resolve(Path::new("/etc/swaplog"), Path::new("abi/eth.json")),
            PathBuf::from("/etc/swaplog/abi/eth.json")
        );
        assert_eq!(
            resolve(Path::new("/etc/swaplog"), Path::new("/opt/eth.json")),
            PathBuf::from("/opt/eth.json")
        );
    }
}
