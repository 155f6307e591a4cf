use crate::Chips;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// What the room does when an agent times out, errors, or keeps submitting
/// illegal actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    #[default]
    Fold,
    /// Check when checking is legal, otherwise fold.
    Passive,
}

/// Orchestrator settings persisted as TOML.
///
/// Fields:
/// - little_blind, big_blind: forced bets for every hand
/// - timeout_ms: how long an agent may think
/// - retries: illegal submissions tolerated before the fallback applies
/// - seed: drives every deck shuffle, so a game replays exactly
/// - max_hands: stop after this many hands even if several players have chips
/// - fallback: the action substituted for a missing decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub little_blind: Chips,
    pub big_blind: Chips,
    pub timeout_ms: u64,
    pub retries: usize,
    pub seed: u64,
    pub max_hands: Option<usize>,
    pub fallback: Fallback,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            little_blind: crate::S_BLIND,
            big_blind: crate::B_BLIND,
            timeout_ms: crate::DECISION_TIMEOUT,
            retries: crate::DECISION_RETRIES,
            seed: 0,
            max_hands: None,
            fallback: Fallback::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("loading config '{}'", path.display()))?;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("parsing TOML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.little_blind > 0, "little blind must be positive");
        anyhow::ensure!(self.big_blind > 0, "big blind must be positive");
        anyhow::ensure!(
            self.little_blind <= self.big_blind,
            "little blind {} above big blind {}",
            self.little_blind,
            self.big_blind
        );
        anyhow::ensure!(self.timeout_ms > 0, "decision timeout must be positive");
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.little_blind == crate::S_BLIND);
        assert!(config.fallback == Fallback::Fold);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = Config::parse("big_blind = 10\nlittle_blind = 5\nfallback = \"passive\"").unwrap();
        assert!(config.big_blind == 10);
        assert!(config.little_blind == 5);
        assert!(config.fallback == Fallback::Passive);
        assert!(config.timeout_ms == crate::DECISION_TIMEOUT);
        assert!(config.max_hands.is_none());
    }

    #[test]
    fn rejects_inverted_blinds() {
        assert!(Config::parse("little_blind = 4\nbig_blind = 2").is_err());
        assert!(Config::parse("timeout_ms = 0").is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            max_hands: Some(12),
            seed: 99,
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(Config::parse(&text).unwrap() == config);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("does/not/exist.toml")).unwrap();
        assert!(config == Config::default());
    }
}
