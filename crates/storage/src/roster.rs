//! The fixed team roster.
//!
//! Players are compiled into the server; records only ever store snapshots of
//! these entries.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Player;

const ROSTER: &[(i32, &str)] = &[
    (1, "Ayşegül"),
    (2, "Ahmet"),
    (3, "Ahsen"),
    (4, "Aspendos"),
    (5, "Atakan"),
    (6, "Aysima"),
    (7, "Başak"),
    (8, "Didem"),
    (9, "Emirhan"),
    (10, "Esma"),
    (11, "Eşref"),
    (12, "Fırat"),
    (13, "Furkan"),
    (14, "Gürkan"),
    (15, "Hüseyin"),
    (16, "Mebdebana"),
    (17, "Metehan"),
    (18, "Murat"),
    (19, "Nihat"),
    (20, "Nisanur"),
    (21, "Ömer"),
    (22, "Onur"),
    (23, "Volkan"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Unknown player id: {0}")]
    UnknownPlayer(i32),

    #[error("Unknown player ids: {}", join_ids(.0))]
    UnknownPlayers(Vec<i32>),
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every roster player, in roster order.
pub fn all() -> Vec<Player> {
    ROSTER
        .iter()
        .map(|(id, name)| Player::new(*id, *name))
        .collect()
}

pub fn find(id: i32) -> Option<Player> {
    ROSTER
        .iter()
        .find(|(player_id, _)| *player_id == id)
        .map(|(id, name)| Player::new(*id, *name))
}

pub fn resolve(id: i32) -> Result<Player, RosterError> {
    find(id).ok_or(RosterError::UnknownPlayer(id))
}

/// Resolves `ids` in order, dropping repeated ids.
///
/// Every unknown id is reported in a single error.
pub fn resolve_many(ids: &[i32]) -> Result<Vec<Player>, RosterError> {
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        match find(id) {
            Some(player) => players.push(player),
            None => missing.push(id),
        }
    }

    if missing.is_empty() {
        Ok(players)
    } else {
        Err(RosterError::UnknownPlayers(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique() {
        let ids: HashSet<i32> = ROSTER.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), ROSTER.len());
        assert!(all().len() >= 12);
    }

    #[test]
    fn test_resolve_known_player() {
        let player = resolve(21).unwrap();
        assert_eq!(player, Player::new(21, "Ömer"));
    }

    #[test]
    fn test_resolve_unknown_player() {
        assert_eq!(resolve(0), Err(RosterError::UnknownPlayer(0)));
        assert_eq!(resolve(99), Err(RosterError::UnknownPlayer(99)));
    }

    #[test]
    fn test_resolve_many_preserves_order_and_drops_repeats() {
        let players = resolve_many(&[5, 2, 5, 9]).unwrap();
        let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_resolve_many_reports_every_unknown_id() {
        let err = resolve_many(&[1, 40, 2, 41, 40]).unwrap_err();
        assert_eq!(err, RosterError::UnknownPlayers(vec![40, 41]));
        assert_eq!(err.to_string(), "Unknown player ids: 40, 41");
    }
}
