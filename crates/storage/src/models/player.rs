use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of a roster player, stored by value on every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub id: i32,
    pub name: String,
}

impl Player {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

/// Orders player names the way a Turkish reader expects: `ç` after `c`,
/// dotless `ı` before `i`, `ş` after `s`, and so on.
///
/// Exact ties on the collation key fall back to code point order so the
/// result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> Vec<u32> {
    let mut key = Vec::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'I' => key.push(rank('ı')),
            'İ' => key.push(rank('i')),
            other => key.extend(other.to_lowercase().map(rank)),
        }
    }
    key
}

fn rank(c: char) -> u32 {
    // Punctuation and digits sort before letters, letters outside the
    // alphabet sort after it.
    match TURKISH_ALPHABET.chars().position(|letter| letter == c) {
        Some(position) => 0x1_0000 + position as u32,
        None if c.is_alphabetic() => 0x2_0000 + c as u32,
        None => c as u32,
    }
}
