//! Wuku records: guardian deity, symbolic tree and bird, short character.
//!
//! Provenance: the pawukon lists of Javanese primbon, paraphrased.

use serde::Serialize;

use crate::wuku::Wuku;

/// A symbol (deity, tree or bird) and what it signifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    pub name: &'static str,
    pub meaning: &'static str,
}

/// Static description of one wuku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WukuRecord {
    pub wuku: Wuku,
    pub deity: Symbol,
    pub tree: Symbol,
    pub bird: Symbol,
    pub character: &'static str,
}

const fn sym(name: &'static str, meaning: &'static str) -> Symbol {
    Symbol { name, meaning }
}

const WUKU_RECORDS: [WukuRecord; 30] = [
    WukuRecord {
        wuku: Wuku::Sinta,
        deity: sym("Batara Yamadipati", "keeper of judgment; fair but stern"),
        tree: sym("Kendayakan", "gives shade; a refuge for others"),
        bird: sym("Gagak", "the crow; sharp-sighted, sometimes a bearer of warnings"),
        character: "Protective and principled, quick to defend the weak.",
    },
    WukuRecord {
        wuku: Wuku::Landep,
        deity: sym("Batara Mahadewa", "brilliance of mind"),
        tree: sym("Kandhri", "sturdy wood that keeps its shape"),
        bird: sym("Atat Kembang", "the parrot; eloquent and sociable"),
        character: "Sharp-witted and articulate, like the blade the name recalls.",
    },
    WukuRecord {
        wuku: Wuku::Wukir,
        deity: sym("Batara Mahayekti", "steadfast virtue"),
        tree: sym("Nagasari", "fragrant blossoms; a pleasing presence"),
        bird: sym("Manyar", "the weaver; industrious builder"),
        character: "Firm as a mountain, patient and hard-working.",
    },
    WukuRecord {
        wuku: Wuku::Kurantil,
        deity: sym("Batara Langsur", "restless energy"),
        tree: sym("Ingas", "sap that stings; guarded nature"),
        bird: sym("Slindhit", "the small hunter; alert and quick"),
        character: "Energetic and ambitious, easily drawn into disputes.",
    },
    WukuRecord {
        wuku: Wuku::Tolu,
        deity: sym("Batara Bayu", "the wind; strength and endurance"),
        tree: sym("Walikukun", "hard timber; resilience"),
        bird: sym("Branjangan", "the lark; cheerful and loud"),
        character: "Strong-willed and tireless, speaks plainly.",
    },
    WukuRecord {
        wuku: Wuku::Gumbreg,
        deity: sym("Batara Candra", "the moon; gentle light"),
        tree: sym("Beringin", "the banyan; protection and authority"),
        bird: sym("Ayam Alas", "the junglefowl; pride and vigilance"),
        character: "Calm and protective, a natural elder among peers.",
    },
    WukuRecord {
        wuku: Wuku::Warigalit,
        deity: sym("Batara Asmara", "love and longing"),
        tree: sym("Sempu", "slender and graceful"),
        bird: sym("Kepodhang", "the oriole; beauty and song"),
        character: "Romantic and artistic, sensitive to atmosphere.",
    },
    WukuRecord {
        wuku: Wuku::Warigagung,
        deity: sym("Batara Maharesi", "the great sage"),
        tree: sym("Cemara", "the casuarina; sways but does not break"),
        bird: sym("Betet", "the parakeet; clever mimic"),
        character: "Thoughtful and learned, persuasive in counsel.",
    },
    WukuRecord {
        wuku: Wuku::Julungwangi,
        deity: sym("Batara Sambu", "generosity and renown"),
        tree: sym("Cempaka", "fragrant flower; good reputation"),
        bird: sym("Kutilang", "the bulbul; cheerful company"),
        character: "Charming and well-liked, enjoys recognition.",
    },
    WukuRecord {
        wuku: Wuku::Sungsang,
        deity: sym("Batara Gana", "remover of obstacles"),
        tree: sym("Tirisan", "a palm that endures dry seasons"),
        bird: sym("Nori", "the lory; bright and lively"),
        character: "Resourceful and brave, solves problems others avoid.",
    },
    WukuRecord {
        wuku: Wuku::Galungan,
        deity: sym("Batara Kamajaya", "love and beauty"),
        tree: sym("Tanjung", "sweet-scented blossoms"),
        bird: sym("Bido", "the serpent eagle; far-seeing"),
        character: "Attractive and romantic, aims high.",
    },
    WukuRecord {
        wuku: Wuku::Kuningan,
        deity: sym("Batara Indra", "sovereignty and rain"),
        tree: sym("Wijayakusuma", "the rare night bloom; victory"),
        bird: sym("Urang-urangan", "the kingfisher; precise and swift"),
        character: "Dignified and successful, carries natural authority.",
    },
    WukuRecord {
        wuku: Wuku::Langkir,
        deity: sym("Batara Kala", "time and reckoning"),
        tree: sym("Ketapang", "broad canopy; hospitality"),
        bird: sym("Gagak", "the crow; fearless and watchful"),
        character: "Bold and outspoken, tempered by hard lessons.",
    },
    WukuRecord {
        wuku: Wuku::Mandasiya,
        deity: sym("Batara Brahma", "fire and creation"),
        tree: sym("Asem", "the tamarind; long-lived and useful"),
        bird: sym("Plathuk Bawang", "the woodpecker; persistent worker"),
        character: "Passionate and diligent, short-tempered when tired.",
    },
    WukuRecord {
        wuku: Wuku::Julungpujut,
        deity: sym("Batara Guritna", "serene insight"),
        tree: sym("Rembuyut", "quiet growth in the shade"),
        bird: sym("Emprit", "the munia; modest and sociable"),
        character: "Modest and observant, notices what others miss.",
    },
    WukuRecord {
        wuku: Wuku::Pahang,
        deity: sym("Batara Tantra", "order and discipline"),
        tree: sym("Plasa", "the flame of the forest; vivid presence"),
        bird: sym("Cangak", "the heron; patient hunter"),
        character: "Disciplined and patient, waits for the right moment.",
    },
    WukuRecord {
        wuku: Wuku::Kuruwelut,
        deity: sym("Batara Wisnu", "preserver of the world"),
        tree: sym("Parijatha", "heavenly tree; blessings"),
        bird: sym("Ayam Alas", "the junglefowl; courage"),
        character: "Caring and responsible, a keeper of harmony.",
    },
    WukuRecord {
        wuku: Wuku::Marakeh,
        deity: sym("Batara Suranggana", "heroic resolve"),
        tree: sym("Trengguli", "golden shower tree; abundance"),
        bird: sym("Kekuwak", "the night heron; solitary"),
        character: "Determined and independent, sometimes aloof.",
    },
    WukuRecord {
        wuku: Wuku::Tambir,
        deity: sym("Batara Siwah", "transformation"),
        tree: sym("Upas", "potent sap; strength that must be handled with care"),
        bird: sym("Prenjak", "the tailorbird; herald of guests"),
        character: "Intense and transformative, inspires change around them.",
    },
    WukuRecord {
        wuku: Wuku::Medangkungan,
        deity: sym("Batara Basuki", "the serpent of fortune"),
        tree: sym("Weringin", "the banyan; shelter for many"),
        bird: sym("Pelung", "the crowing cockerel; steadfast voice"),
        character: "Generous and steady, builds wealth slowly.",
    },
    WukuRecord {
        wuku: Wuku::Maktal,
        deity: sym("Batara Sakri", "inner power"),
        tree: sym("Nagasari", "fragrant and admired"),
        bird: sym("Ayam Alas", "the junglefowl; self-reliance"),
        character: "Self-reliant and quietly strong.",
    },
    WukuRecord {
        wuku: Wuku::Wuye,
        deity: sym("Batara Kuwera", "keeper of riches"),
        tree: sym("Tal", "the lontar palm; knowledge and records"),
        bird: sym("Gogik", "the owlet; watchful at night"),
        character: "Prudent with resources, good at keeping accounts.",
    },
    WukuRecord {
        wuku: Wuku::Manahil,
        deity: sym("Batara Citragotra", "lineage and craft"),
        tree: sym("Pakis", "the fern; thrives in humble places"),
        bird: sym("Sepahan", "the minivet; bright plumage"),
        character: "Skilful and image-conscious, loyal to family.",
    },
    WukuRecord {
        wuku: Wuku::Prangbakat,
        deity: sym("Batara Bisma", "the vow-keeper"),
        tree: sym("Tirisan", "endurance through drought"),
        bird: sym("Urang-urangan", "the kingfisher; focus"),
        character: "Keeps promises at any cost; principled to a fault.",
    },
    WukuRecord {
        wuku: Wuku::Bala,
        deity: sym("Batari Durga", "fierce protection"),
        tree: sym("Cemara", "resilient in the wind"),
        bird: sym("Ayam Alas", "the junglefowl; daring"),
        character: "Courageous and commanding, formidable when crossed.",
    },
    WukuRecord {
        wuku: Wuku::Wugu,
        deity: sym("Batara Singajalma", "the lion-hearted"),
        tree: sym("Wuni", "fruit that ripens in clusters; community"),
        bird: sym("Podhang", "the oriole; charm"),
        character: "Brave and charming, gathers friends easily.",
    },
    WukuRecord {
        wuku: Wuku::Wayang,
        deity: sym("Batari Sri", "rice and prosperity"),
        tree: sym("Cempaka", "fragrance; good name"),
        bird: sym("Ayam Alas", "the junglefowl; vigilance"),
        character: "Gracious and prosperous, fond of art and ceremony.",
    },
    WukuRecord {
        wuku: Wuku::Kulawu,
        deity: sym("Batara Sadana", "livelihood"),
        tree: sym("Tal", "the lontar palm; learning"),
        bird: sym("Nori", "the lory; eloquence"),
        character: "Practical and hospitable, good at making a living.",
    },
    WukuRecord {
        wuku: Wuku::Dukut,
        deity: sym("Batara Sakri", "hidden strength"),
        tree: sym("Walikukun", "hard wood; stamina"),
        bird: sym("Gemak", "the buttonquail; modest and careful"),
        character: "Humble and resilient, like grass that returns after every cut.",
    },
    WukuRecord {
        wuku: Wuku::Watugunung,
        deity: sym("Batara Anantaboga", "the world serpent; depth"),
        tree: sym("Wijayakusuma", "rare bloom; triumph"),
        bird: sym("Gogik", "the owlet; hidden wisdom"),
        character: "Proud and gifted, must guard against arrogance.",
    },
];

/// Static record for a wuku.
pub fn wuku_record(wuku: Wuku) -> &'static WukuRecord {
    &WUKU_RECORDS[wuku.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wuku::ALL_WUKUS;

    #[test]
    fn records_in_pawukon_order() {
        for w in ALL_WUKUS {
            assert_eq!(wuku_record(w).wuku, w);
        }
    }

    #[test]
    fn galungan_guardian() {
        assert_eq!(wuku_record(Wuku::Galungan).deity.name, "Batara Kamajaya");
        assert_eq!(wuku_record(Wuku::Sinta).deity.name, "Batara Yamadipati");
    }

    #[test]
    fn no_empty_fields() {
        for w in ALL_WUKUS {
            let r = wuku_record(w);
            for s in [r.deity, r.tree, r.bird] {
                assert!(!s.name.is_empty() && !s.meaning.is_empty(), "{}", w.name());
            }
            assert!(!r.character.is_empty());
        }
    }
}
