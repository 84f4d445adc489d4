//! Character slots and the configured roster

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// One character slot on the account.
///
/// The set is closed: a main character plus three alt slots. Which slots are
/// tracked is decided by the [`Roster`] at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Main,
    Alt1,
    Alt2,
    Alt3,
}

impl Character {
    /// Number of alt slots available beside the main character.
    pub const ALT_SLOTS: u8 = 3;

    /// Returns all slots in display order.
    pub fn all() -> [Character; 4] {
        [
            Character::Main,
            Character::Alt1,
            Character::Alt2,
            Character::Alt3,
        ]
    }

    /// Stable key used in requests and snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Character::Main => "main",
            Character::Alt1 => "alt1",
            Character::Alt2 => "alt2",
            Character::Alt3 => "alt3",
        }
    }

    /// Label shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Character::Main => "본캐",
            Character::Alt1 => "부캐1",
            Character::Alt2 => "부캐2",
            Character::Alt3 => "부캐3",
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Character {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::all()
            .into_iter()
            .find(|c| c.key() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown character: {}", s)))
    }
}

/// The ordered set of characters tracked by a board.
///
/// Always contains [`Character::Main`], followed by the first `alt_slots` alts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Build a roster with the main character and `alt_slots` alts.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `alt_slots` exceeds [`Character::ALT_SLOTS`].
    pub fn with_alt_slots(alt_slots: u8) -> Result<Self, DomainError> {
        if alt_slots > Character::ALT_SLOTS {
            return Err(DomainError::validation(format!(
                "At most {} alt slots are available, got {}",
                Character::ALT_SLOTS,
                alt_slots
            )));
        }

        let characters = Character::all()
            .into_iter()
            .take(usize::from(alt_slots) + 1)
            .collect();
        Ok(Self { characters })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn contains(&self, character: Character) -> bool {
        self.characters.contains(&character)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// A roster always holds the main character.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            characters: Character::all().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for character in Character::all() {
            assert_eq!(character.key().parse::<Character>().unwrap(), character);
        }
        assert!(matches!(
            "alt9".parse::<Character>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn main_character_is_labelled_bonkae() {
        assert_eq!(Character::Main.label(), "본캐");
        assert_eq!(Character::Alt2.to_string(), "alt2");
    }

    #[test]
    fn roster_takes_main_plus_requested_alts() {
        let roster = Roster::with_alt_slots(1).unwrap();
        assert_eq!(roster.characters(), &[Character::Main, Character::Alt1]);
        assert!(!roster.contains(Character::Alt2));

        let solo = Roster::with_alt_slots(0).unwrap();
        assert_eq!(solo.len(), 1);
    }

    #[test]
    fn roster_rejects_too_many_alts() {
        assert!(matches!(
            Roster::with_alt_slots(4),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn default_roster_tracks_every_slot() {
        assert_eq!(Roster::default().characters(), &Character::all());
    }

    #[test]
    fn serializes_as_snake_case_key() {
        let json = serde_json::to_string(&Character::Alt1).unwrap();
        assert_eq!(json, "\"alt1\"");
    }
}
