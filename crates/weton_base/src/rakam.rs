//! Rakam: the six-fold fortune reading of a weton, keyed by total neptu.

use crate::character::CharacterRecord;
use crate::util::wrapped_remainder;

/// Number of rakam classes.
pub const RAKAM_MODULUS: u32 = 6;

const RAKAM_TABLE: [CharacterRecord; 6] = [
    CharacterRecord {
        title: "Kala Tinantang",
        description: "Challenged by fate: prone to quarrels and strain, softened by patience.",
    },
    CharacterRecord {
        title: "Demang Kandhuruwan",
        description: "The fortunate steward: luck in livelihood, trusted with others' goods.",
    },
    CharacterRecord {
        title: "Sanggar Waringin",
        description: "The banyan shrine: a shelter for others, calm and protected.",
    },
    CharacterRecord {
        title: "Mantri Sinaroja",
        description: "The favored minister: rises in rank, respected by superiors.",
    },
    CharacterRecord {
        title: "Macan Ketawan",
        description: "The tiger revealed: strong but exposed, secrets rarely stay hidden.",
    },
    CharacterRecord {
        title: "Nuju Padu",
        description: "Heading into argument: frank and combative, quick to reconcile.",
    },
];

/// Rakam for a total neptu; a zero remainder maps to the sixth entry.
pub fn rakam(total_neptu: u8) -> &'static CharacterRecord {
    let r = wrapped_remainder(u32::from(total_neptu), RAKAM_MODULUS);
    &RAKAM_TABLE[(r - 1) as usize]
}
