//! Random squad draw.
//!
//! Locked players always take a primary slot. The candidate pool is shuffled
//! uniformly (Fisher–Yates via [`SliceRandom::shuffle`]) and its head fills the
//! remaining slots; the rest become reserves in drawn order.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::models::Player;

/// Number of primary slots in a draw.
pub const SQUAD_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("At least {required} players are needed for a draw, got {available}")]
    NotEnoughPlayers { available: usize, required: usize },

    #[error("Player {0} appears more than once in the locked players")]
    DuplicateLocked(i32),

    #[error("Player {0} appears more than once in the candidate pool")]
    DuplicateCandidate(i32),

    #[error("Player {0} is both locked and a candidate")]
    LockedAndCandidate(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Locked players first, then the drawn candidates.
    pub primary: Vec<Player>,
    pub reserve: Vec<Player>,
}

/// Open primary slots once `locked_count` players are guaranteed.
pub fn slots_remaining(locked_count: usize) -> usize {
    SQUAD_SIZE.saturating_sub(locked_count)
}

/// Checks that both pools are duplicate-free, disjoint and large enough to
/// fill a squad.
pub fn check_pools(locked: &[Player], candidates: &[Player]) -> Result<(), DrawError> {
    let mut locked_ids = HashSet::with_capacity(locked.len());
    for player in locked {
        if !locked_ids.insert(player.id) {
            return Err(DrawError::DuplicateLocked(player.id));
        }
    }

    let mut candidate_ids = HashSet::with_capacity(candidates.len());
    for player in candidates {
        if !candidate_ids.insert(player.id) {
            return Err(DrawError::DuplicateCandidate(player.id));
        }
        if locked_ids.contains(&player.id) {
            return Err(DrawError::LockedAndCandidate(player.id));
        }
    }

    let available = locked.len() + candidates.len();
    if available < SQUAD_SIZE || slots_remaining(locked.len()) > candidates.len() {
        return Err(DrawError::NotEnoughPlayers {
            available,
            required: SQUAD_SIZE,
        });
    }

    Ok(())
}

/// Draws a squad from `locked` and `candidates`.
///
/// Every candidate is equally likely to land in any drawn position, so each
/// one is selected with probability `slots_remaining / candidates.len()`.
pub fn draw<R>(locked: &[Player], candidates: &[Player], rng: &mut R) -> Result<DrawOutcome, DrawError>
where
    R: Rng + ?Sized,
{
    check_pools(locked, candidates)?;

    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);

    let reserve = shuffled.split_off(slots_remaining(locked.len()));
    let mut primary = Vec::with_capacity(locked.len() + shuffled.len());
    primary.extend_from_slice(locked);
    primary.append(&mut shuffled);

    Ok(DrawOutcome { primary, reserve })
}
