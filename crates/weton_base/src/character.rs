//! Character tables keyed by Dina, Pasaran and total neptu.
//!
//! Provenance: traditional primbon watak descriptions, paraphrased.

use serde::Serialize;

use crate::dina::Dina;
use crate::error::TableError;
use crate::neptu::{MAX_TOTAL_NEPTU, MIN_TOTAL_NEPTU};
use crate::pasaran::Pasaran;

/// A named classification with its descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CharacterRecord {
    pub title: &'static str,
    pub description: &'static str,
}

const fn rec(title: &'static str, description: &'static str) -> CharacterRecord {
    CharacterRecord { title, description }
}

const DAY_CHARACTERS: [CharacterRecord; 7] = [
    rec(
        "Radiant",
        "Ruled by the sun: warm, confident and generous, likes to lead and to be seen.",
    ),
    rec(
        "Gentle",
        "Ruled by the moon: patient and caring, moods rise and fall but loyalty does not.",
    ),
    rec(
        "Fiery",
        "Ruled by fire: brave and direct, quick to act and quick to flare up.",
    ),
    rec(
        "Still water",
        "Calm on the surface and deep underneath, diplomatic and hard to read.",
    ),
    rec(
        "Steadfast",
        "Earnest and dependable, keeps promises and carries responsibility well.",
    ),
    rec(
        "Graceful",
        "Refined and well-mannered, values harmony, beauty and good company.",
    ),
    rec(
        "Grounded",
        "Earthy and determined, slow to trust but immovable once committed.",
    ),
];

const PASARAN_CHARACTERS: [CharacterRecord; 5] = [
    rec(
        "Sweet",
        "Legi, the east and the color white: kind, giving and easy to like.",
    ),
    rec(
        "Driven",
        "Pahing, the south and the color red: ambitious, competitive, wants to own the result.",
    ),
    rec(
        "Composed",
        "Pon, the west and the color yellow: proud bearing, careful speech, likes to be respected.",
    ),
    rec(
        "Earnest",
        "Wage, the north and the color black: hard-working and persistent, stubborn when pushed.",
    ),
    rec(
        "Intuitive",
        "Kliwon, the center and mixed colors: perceptive, eloquent and drawn to the unseen.",
    ),
];

const NEPTU_CHARACTERS: [CharacterRecord; 12] = [
    rec(
        "Seven: quiet seeker",
        "Few words, much thought; grows through patience rather than force.",
    ),
    rec(
        "Eight: spark",
        "Energetic and easily stirred; achievements come in bursts.",
    ),
    rec(
        "Nine: free spirit",
        "Restless and adaptable; happiest with room to roam.",
    ),
    rec(
        "Ten: teacher",
        "Wise beyond years; others come for advice and stay for the calm.",
    ),
    rec(
        "Eleven: bold one",
        "Daring and strong-willed; must learn to temper the edge.",
    ),
    rec(
        "Twelve: guiding light",
        "Bright and admired; shines best when lifting others.",
    ),
    rec(
        "Thirteen: dreamer",
        "Imaginative and emotional; pours feeling into craft.",
    ),
    rec(
        "Fourteen: gentle moon",
        "Soothing presence; gives comfort without being asked.",
    ),
    rec(
        "Fifteen: sunlight",
        "Warm and generous; prosperity follows steady effort.",
    ),
    rec(
        "Sixteen: flowing water",
        "Adaptable and humble; finds a way around every obstacle.",
    ),
    rec(
        "Seventeen: solid earth",
        "Reliable and nurturing; a foundation for family and friends.",
    ),
    rec(
        "Eighteen: complete",
        "The fullest neptu; strong presence that must be carried with humility.",
    ),
];

/// Character record for a day of the week.
pub fn day_character(dina: Dina) -> &'static CharacterRecord {
    &DAY_CHARACTERS[dina.index() as usize]
}

/// Character record for a market day.
pub fn pasaran_character(pasaran: Pasaran) -> &'static CharacterRecord {
    &PASARAN_CHARACTERS[pasaran.index() as usize]
}

/// Character record for a total neptu in `7..=18`.
pub fn neptu_character(total: u8) -> Result<&'static CharacterRecord, TableError> {
    if !(MIN_TOTAL_NEPTU..=MAX_TOTAL_NEPTU).contains(&total) {
        return Err(TableError::OutOfDomain {
            table: "neptu character",
            key: i64::from(total),
        });
    }
    Ok(&NEPTU_CHARACTERS[(total - MIN_TOTAL_NEPTU) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dina::ALL_DINAS;
    use crate::pasaran::ALL_PASARANS;

    #[test]
    fn every_day_has_text() {
        for d in ALL_DINAS {
            assert!(!day_character(d).description.is_empty());
        }
        for p in ALL_PASARANS {
            assert!(!pasaran_character(p).title.is_empty());
        }
    }

    #[test]
    fn neptu_domain_is_7_to_18() {
        for n in 7..=18 {
            assert!(neptu_character(n).is_ok(), "{n}");
        }
        assert!(neptu_character(6).is_err());
        assert!(neptu_character(19).is_err());
    }

    #[test]
    fn neptu_titles_match_value() {
        assert!(neptu_character(7).unwrap().title.starts_with("Seven"));
        assert!(neptu_character(18).unwrap().title.starts_with("Eighteen"));
    }
}
