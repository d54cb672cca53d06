//! Pool Configuration Module
//!
//! Loads pool parameters from TOML files with environment-specific overrides.

use crate::limits::{defaults, BASIS_POINTS, MAX_TOKEN_DECIMALS};
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parameters of a single elastic pool
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PoolConfig {
    /// Fee taken from swap input, in basis points
    pub liquidity_fee_bps: u32,
    pub base_token_decimals: u8,
    pub quote_token_decimals: u8,
    /// Tolerance used when deriving minimum outputs, in basis points
    pub slippage_tolerance_bps: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            liquidity_fee_bps: defaults::LIQUIDITY_FEE_BPS,
            base_token_decimals: defaults::TOKEN_DECIMALS,
            quote_token_decimals: defaults::TOKEN_DECIMALS,
            slippage_tolerance_bps: defaults::SLIPPAGE_TOLERANCE_BPS,
        }
    }
}

impl PoolConfig {
    /// Load configuration from files with environment overrides
    ///
    /// `<dir>/environments/<env>.toml` next to the base file is layered on top
    /// when present, followed by `ELASTIC_`-prefixed environment variables
    /// (`ELASTIC_LIQUIDITY_FEE_BPS=25`).
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new("config/pool.toml"));

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or(Path::new("."))
                .join("environments")
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ELASTIC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Reject parameters the pool math cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.liquidity_fee_bps > BASIS_POINTS {
            bail!(
                "liquidity_fee_bps {} exceeds {}",
                self.liquidity_fee_bps,
                BASIS_POINTS
            );
        }
        if self.slippage_tolerance_bps > BASIS_POINTS {
            bail!(
                "slippage_tolerance_bps {} exceeds {}",
                self.slippage_tolerance_bps,
                BASIS_POINTS
            );
        }
        for (name, decimals) in [
            ("base_token_decimals", self.base_token_decimals),
            ("quote_token_decimals", self.quote_token_decimals),
        ] {
            if decimals > MAX_TOKEN_DECIMALS {
                bail!("{} {} exceeds {}", name, decimals, MAX_TOKEN_DECIMALS);
            }
        }
        Ok(())
    }
}

/// Convenience function: expand `path`, load, and validate
pub fn load_config(path: &str, environment: Option<&str>) -> Result<PoolConfig> {
    let expanded = shellexpand::full(path).context("Failed to expand config path")?;
    let path = PathBuf::from(expanded.into_owned());
    debug!("Loading pool config from {:?}", path);

    let config = PoolConfig::load(Some(&path), environment)?;
    config
        .validate()
        .with_context(|| format!("Invalid pool configuration in {:?}", path))?;
    Ok(config)
}
