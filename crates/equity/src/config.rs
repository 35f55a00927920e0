// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Estimate configuration.
use std::time::Duration;

use crate::EquityError;

/// Monte Carlo estimate configuration.
#[derive(Debug, Clone)]
pub struct EquityConfig {
    /// Number of simulated hands.
    pub simulations: usize,
    /// Number of parallel tasks the simulations are split across.
    pub tasks: usize,
    /// Seed for reproducible runs, each task seeds its generator with
    /// `seed + task_id`. Tasks are seeded from the OS when `None`.
    pub seed: Option<u64>,
    /// Stop simulating once this time has elapsed, the estimate is then
    /// computed over the simulations completed so far.
    pub time_limit: Option<Duration>,
}

impl EquityConfig {
    /// The default number of simulations.
    pub const SIMULATIONS: usize = 10_000;

    /// Checks the configuration is valid.
    pub fn validate(&self) -> Result<(), EquityError> {
        if self.simulations == 0 {
            return Err(EquityError::InvalidConfig("simulations must be positive"));
        }

        if self.tasks == 0 {
            return Err(EquityError::InvalidConfig("tasks must be positive"));
        }

        Ok(())
    }
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            simulations: Self::SIMULATIONS,
            tasks: 1,
            seed: None,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EquityConfig::default();
        assert_eq!(config.simulations, 10_000);
        assert_eq!(config.tasks, 1);
        assert!(config.seed.is_none());
        assert!(config.time_limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_config() {
        let config = EquityConfig {
            simulations: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EquityError::InvalidConfig(_))));

        let config = EquityConfig {
            tasks: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EquityError::InvalidConfig(_))));
    }
}
