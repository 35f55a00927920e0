// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation.
use log::debug;
use rand::prelude::*;
use std::{ops, panic, thread, time::Instant};

use crate::{EquityConfig, EquityError, Outcome, Scenario, trial};

/// Simulations run by one or more tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Wins and ties summed over all simulations.
    pub outcome: Outcome,
    /// Number of simulations run.
    pub trials: u64,
    /// A task stopped before running all its simulations.
    pub truncated: bool,
}

impl ops::Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            outcome: self.outcome + rhs.outcome,
            trials: self.trials + rhs.trials,
            truncated: self.truncated || rhs.truncated,
        }
    }
}

/// Splits the configured simulations across `config.tasks` threads.
///
/// Each task has its own random generator and its own tally, the tallies are
/// summed once all tasks are done.
pub fn par_simulate(scenario: &Scenario, config: &EquityConfig) -> Result<Tally, EquityError> {
    config.validate()?;

    let deadline = config
        .time_limit
        .and_then(|limit| Instant::now().checked_add(limit));
    let num_tasks = config.tasks;
    let per_task = config.simulations / num_tasks;
    let extra = config.simulations % num_tasks;

    thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let trials = per_task + usize::from(task_id < extra);
                let mut rng = match config.seed {
                    Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                    None => SmallRng::from_os_rng(),
                };

                s.spawn(move || -> Result<Tally, EquityError> {
                    let tally = simulate_task(scenario, trials, deadline, &mut rng)?;
                    debug!(
                        "Task {task_id} ran {} trials: {} wins {} ties",
                        tally.trials, tally.outcome.wins, tally.outcome.ties
                    );
                    Ok(tally)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .try_fold(Tally::default(), |acc, tally| tally.map(|t| acc + t))
    })
}

/// Runs `trials` simulations, stopping early once the deadline has passed.
///
/// At least one simulation runs before the deadline is checked.
pub fn simulate_task<R: Rng>(
    scenario: &Scenario,
    trials: usize,
    deadline: Option<Instant>,
    rng: &mut R,
) -> Result<Tally, EquityError> {
    let mut tally = Tally::default();

    for n in 0..trials {
        tally.outcome += trial::simulate(scenario, rng)?;
        tally.trials += 1;

        let remaining = n + 1 < trials;
        if remaining && deadline.is_some_and(|d| Instant::now() >= d) {
            tally.truncated = true;
            break;
        }
    }

    Ok(tally)
}
