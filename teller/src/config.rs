/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Configuration for the ATM system.
///
/// Loaded from `teller/config.toml` in the XDG configuration directories. Every section
/// and field is optional; anything missing takes its default, which reproduces the
/// classic demo (account `acc1234`, PIN `1937`, balance 199, withdrawals of 50).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TellerConfig {
    /// Controller and keypad settings.
    pub atm: AtmConfig,
    /// Accounts known to the bank actor.
    pub bank: BankConfig,
    /// Where and how much the binary logs.
    pub logging: LoggingConfig,
}

/// Controller and keypad settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmConfig {
    /// Number of digits that completes a PIN.
    pub pin_length: usize,
    /// Account sent when the card key is pressed.
    pub demo_account: String,
    /// Amount sent when the withdraw key is pressed.
    pub demo_withdrawal: u32,
}

/// Accounts known to the bank actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Opening state of every account.
    pub accounts: Vec<AccountConfig>,
}

/// Opening state of one bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account identifier as carried by the card.
    pub id: String,
    /// The PIN that unlocks the account.
    pub pin: String,
    /// Opening balance in whole currency units.
    pub balance: u32,
}

/// Logging configuration for the `atm` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for log files.
    pub directory: String,
    /// Log file name inside `directory`.
    pub file_name: String,
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            pin_length: crate::atm::DEFAULT_PIN_LENGTH,
            demo_account: "acc1234".to_string(),
            demo_withdrawal: 50,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            accounts: vec![AccountConfig {
                id: "acc1234".to_string(),
                pin: "1937".to_string(),
                balance: 199,
            }],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "atm.log".to_string(),
            filter: "info".to_string(),
        }
    }
}

/// Errors raised while locating, reading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The XDG base directories could not be determined.
    #[error("failed to initialize XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    /// The file exists but could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The contents are not valid configuration TOML.
    #[error("failed to parse configuration from {origin}: {source}")]
    Parse {
        /// File path, or `<inline>` for string input.
        origin: String,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl TellerConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Finds `teller/config.toml` in the XDG configuration directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Xdg`] if the base directories cannot be determined.
    pub fn locate() -> Result<Option<PathBuf>, ConfigError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("teller")?;
        Ok(xdg_dirs.find_config_file("config.toml"))
    }

    /// Loads configuration from XDG-compliant locations.
    ///
    /// Looks for `$XDG_CONFIG_HOME/teller/config.toml`, then the system config dirs.
    /// If no file is found, or the file cannot be read or parsed, logs why and returns
    /// the defaults.
    #[instrument(level = "debug")]
    pub fn load() -> Self {
        let path = match Self::locate() {
            Ok(Some(path)) => path,
            Ok(None) => {
                info!("No configuration file found, using defaults");
                return Self::default();
            }
            Err(e) => {
                error!("{e}");
                return Self::default();
            }
        };

        info!("Loading configuration from: {}", path.display());
        match Self::from_path(&path) {
            Ok(config) => {
                info!("Successfully loaded configuration");
                config
            }
            Err(e) => {
                error!("{e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_demo() {
        let config = TellerConfig::default();
        assert_eq!(config.atm.pin_length, 4);
        assert_eq!(config.atm.demo_account, "acc1234");
        assert_eq!(config.atm.demo_withdrawal, 50);
        assert_eq!(config.bank.accounts.len(), 1);
        assert_eq!(config.bank.accounts[0].pin, "1937");
        assert_eq!(config.bank.accounts[0].balance, 199);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = TellerConfig::from_toml_str(
            r#"
            [atm]
            demo_withdrawal = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.atm.demo_withdrawal, 20);
        assert_eq!(config.atm.pin_length, 4);
        assert_eq!(config.bank, BankConfig::default());
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = TellerConfig::from_toml_str("[atm]\npin_length = \"four\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
