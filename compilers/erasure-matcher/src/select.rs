use erasure_protocol::Word;
use rand::Rng;

use crate::catalog::Template;
use crate::matcher::{run_matchers, MatchConfig};

/// Pick one completed match and mark exactly its words.
///
/// The matcher is stochastic, so an empty pass is retried with fresh draws
/// up to `config.max_attempts` times. Returns whether anything was marked;
/// `false` tells the caller to leave the whole text visible. Every call
/// starts by clearing the previous pass's marks, so a stale `marked` flag
/// never leaks into the new result.
pub fn select_and_mark<R: Rng + ?Sized>(
    words: &mut [Word],
    catalog: &[Template],
    config: &MatchConfig,
    rng: &mut R,
) -> bool {
    for word in words.iter_mut() {
        word.marked = false;
    }

    for _ in 0..config.max_attempts {
        let completed = run_matchers(words, catalog, config, rng);
        if completed.is_empty() {
            continue;
        }

        let winner = &completed[rng.gen_range(0..completed.len())];
        for id in &winner.accepted {
            words[id.0 as usize].marked = true;
        }
        return true;
    }

    false
}
