use erasure_protocol::{TemplateId, Word, WordId};
use rand::Rng;

use crate::automaton::MatchState;
use crate::catalog::Template;

/// Default acceptance probability. Matching is deliberately lossy so
/// repeated passes over the same text surface different fragments.
pub const ACCEPTANCE_PROBABILITY: f64 = 0.8;

/// Default number of matching passes the selection policy may burn.
pub const MAX_ATTEMPTS: usize = 5;

/// Knobs for one matching pass. Tests pin `acceptance_probability` to
/// 0.0 or 1.0 to force outcomes.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub acceptance_probability: f64,
    pub max_attempts: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            acceptance_probability: ACCEPTANCE_PROBABILITY,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Advance every template's automaton over the word sequence in a single
/// pass and collect the ones that complete.
///
/// The active set starts with one fresh state per template and only ever
/// shrinks: a state either admits the current word (and passes the
/// acceptance draw) and advances, or it is discarded. The scan stops as
/// soon as the active set drains. An empty result is a normal outcome,
/// not a failure.
pub fn run_matchers<R: Rng + ?Sized>(
    words: &[Word],
    catalog: &[Template],
    config: &MatchConfig,
    rng: &mut R,
) -> Vec<MatchState> {
    let mut active: Vec<MatchState> = (0..catalog.len())
        .map(|i| MatchState::new(TemplateId::new(i as u32)))
        .collect();
    let mut completed = Vec::new();

    for (index, word) in words.iter().enumerate() {
        let mut survivors = Vec::with_capacity(active.len());
        for mut state in active {
            let template = &catalog[state.template.0 as usize];
            if state.admits(template, word)
                && rng.gen::<f64>() < config.acceptance_probability
            {
                state.advance(template, WordId::new(index as u32), word);
                if state.is_complete() {
                    completed.push(state);
                } else {
                    survivors.push(state);
                }
            }
            // anything else is dead: the scan never backtracks
        }
        active = survivors;
        if active.is_empty() {
            break;
        }
    }

    completed
}
