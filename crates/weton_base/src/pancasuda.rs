//! Pancasuda (saptawara reading): the seven-fold fortune factor.
//!
//! The same seven-entry table classifies a single total neptu and the
//! combined neptu of a couple (jodoh by seven).

use crate::character::CharacterRecord;
use crate::util::wrapped_remainder;

pub const PANCASUDA_MODULUS: u32 = 7;

const PANCASUDA_TABLE: [CharacterRecord; 7] = [
    CharacterRecord {
        title: "Wasesa Segara",
        description: "Ruler of the ocean: broad-minded and forgiving, wealth flows in like tides.",
    },
    CharacterRecord {
        title: "Tunggak Semi",
        description: "The sprouting stump: fortune regrows after every loss.",
    },
    CharacterRecord {
        title: "Satria Wibawa",
        description: "The dignified knight: honored and respected, authority comes naturally.",
    },
    CharacterRecord {
        title: "Sumur Sinaba",
        description: "The well that is visited: a source of knowledge others come to draw from.",
    },
    CharacterRecord {
        title: "Satria Wirang",
        description: "The shamed knight: meets setbacks and embarrassment, must persevere.",
    },
    CharacterRecord {
        title: "Bumi Kapetak",
        description: "The dug-up earth: hard-working and enduring, burdens are carried in silence.",
    },
    CharacterRecord {
        title: "Lebu Katiup Angin",
        description: "Dust in the wind: aims drift out of reach, often on the move.",
    },
];

/// Remainder (1..=7) and record for any neptu sum.
pub fn pancasuda(neptu_sum: u32) -> (u8, &'static CharacterRecord) {
    let r = wrapped_remainder(neptu_sum, PANCASUDA_MODULUS);
    (r as u8, &PANCASUDA_TABLE[(r - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventeen_is_satria_wibawa() {
        let (r, rec) = pancasuda(17);
        assert_eq!(r, 3);
        assert_eq!(rec.title, "Satria Wibawa");
    }

    #[test]
    fn multiple_of_seven_is_last() {
        assert_eq!(pancasuda(14).1.title, "Lebu Katiup Angin");
        assert_eq!(pancasuda(7).0, 7);
    }
}
