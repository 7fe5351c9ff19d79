//! Laku: the elemental path associated with a total neptu.
//!
//! Follows the common primbon reckoning of laku by neptu weton, in which
//! totals 12 and 13 share Lakuning Lintang and 18 is Lakuning Gunung.

use crate::character::CharacterRecord;
use crate::error::TableError;
use crate::neptu::{MAX_TOTAL_NEPTU, MIN_TOTAL_NEPTU};

const LAKU_TABLE: [CharacterRecord; 12] = [
    CharacterRecord {
        title: "Lebu Katiup Angin",
        description: "Dust in the wind: plans scatter easily; needs an anchor to settle.",
    },
    CharacterRecord {
        title: "Lakuning Geni",
        description: "The way of fire: passionate and decisive, flares when provoked.",
    },
    CharacterRecord {
        title: "Lakuning Angin",
        description: "The way of wind: free-moving, adaptable, hard to pin down.",
    },
    CharacterRecord {
        title: "Pandita Mbangun Teki",
        description: "The sage in retreat: contemplative, wise, generous with counsel.",
    },
    CharacterRecord {
        title: "Lakuning Setan",
        description: "The restless spirit: daring and unconventional, thrives at night.",
    },
    CharacterRecord {
        title: "Lakuning Lintang",
        description: "The way of the star: quietly admired, shines from a distance.",
    },
    CharacterRecord {
        title: "Lakuning Lintang",
        description: "The way of the star: quietly admired, shines from a distance.",
    },
    CharacterRecord {
        title: "Lakuning Rembulan",
        description: "The way of the moon: soothing and kind, brings light to dark times.",
    },
    CharacterRecord {
        title: "Lakuning Srengenge",
        description: "The way of the sun: warm and sustaining, gives without counting.",
    },
    CharacterRecord {
        title: "Lakuning Banyu",
        description: "The way of water: calm, humble, finds a path around obstacles.",
    },
    CharacterRecord {
        title: "Lakuning Bumi",
        description: "The way of the earth: patient and nurturing, carries others' weight.",
    },
    CharacterRecord {
        title: "Lakuning Gunung",
        description: "The way of the mountain: steadfast and lofty, slow to move.",
    },
];

/// Laku for a total neptu in `7..=18`.
pub fn laku(total_neptu: u8) -> Result<&'static CharacterRecord, TableError> {
    if !(MIN_TOTAL_NEPTU..=MAX_TOTAL_NEPTU).contains(&total_neptu) {
        return Err(TableError::OutOfDomain {
            table: "laku",
            key: i64::from(total_neptu),
        });
    }
    Ok(&LAKU_TABLE[(total_neptu - MIN_TOTAL_NEPTU) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(laku(7).unwrap().title, "Lebu Katiup Angin");
        assert_eq!(laku(18).unwrap().title, "Lakuning Gunung");
    }

    #[test]
    fn primbon_order() {
        let titles: Vec<_> = (7..=18).map(|n| laku(n).unwrap().title).collect();
        assert_eq!(
            titles,
            [
                "Lebu Katiup Angin",
                "Lakuning Geni",
                "Lakuning Angin",
                "Pandita Mbangun Teki",
                "Lakuning Setan",
                "Lakuning Lintang",
                "Lakuning Lintang",
                "Lakuning Rembulan",
                "Lakuning Srengenge",
                "Lakuning Banyu",
                "Lakuning Bumi",
                "Lakuning Gunung",
            ]
        );
    }

    #[test]
    fn out_of_domain() {
        assert_eq!(
            laku(0),
            Err(TableError::OutOfDomain {
                table: "laku",
                key: 0
            })
        );
    }
}
