//! The 35 weton archetypes (Dina x Pasaran).
//!
//! Index = `dina.index() * 5 + pasaran.index()`.

use serde::Serialize;

use crate::weton::Weton;

/// Personality archetype of one Dina/Pasaran combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArchetypeRecord {
    pub archetype: &'static str,
    pub vibe: &'static str,
    pub green_flags: &'static [&'static str],
    pub potential_challenges: &'static [&'static str],
    pub description: &'static str,
}

const ARCHETYPES: [ArchetypeRecord; 35] = [
    // Minggu Legi
    ArchetypeRecord {
        archetype: "The Warm Host",
        vibe: "sunny and open-handed",
        green_flags: &["generous with time", "makes people feel welcome"],
        potential_challenges: &["overcommits", "dislikes being ignored"],
        description: "A bright, sociable soul who gathers people and keeps the mood light.",
    },
    // Minggu Pahing
    ArchetypeRecord {
        archetype: "The Go-Getter",
        vibe: "ambitious and magnetic",
        green_flags: &["clear goals", "finishes what they start"],
        potential_challenges: &["competitive streak", "impatient with slow partners"],
        description: "Driven and confident, turns plans into results and enjoys the spotlight.",
    },
    // Minggu Pon
    ArchetypeRecord {
        archetype: "The Dignified One",
        vibe: "poised and self-assured",
        green_flags: &["keeps their word", "calm in public"],
        potential_challenges: &["proud", "hard to apologize"],
        description: "Carries natural authority and expects respect, loyal to those who earn it.",
    },
    // Minggu Wage
    ArchetypeRecord {
        archetype: "The Steady Builder",
        vibe: "determined and earnest",
        green_flags: &["reliable", "hard-working"],
        potential_challenges: &["stubborn", "keeps feelings inside"],
        description: "Works patiently toward security and rarely gives up on a commitment.",
    },
    // Minggu Kliwon
    ArchetypeRecord {
        archetype: "The Radiant Mystic",
        vibe: "charismatic and intuitive",
        green_flags: &["reads people well", "inspiring speaker"],
        potential_challenges: &["moody", "can seem distant"],
        description: "Pairs sunny confidence with a quiet spiritual depth others find compelling.",
    },
    // Senin Legi
    ArchetypeRecord {
        archetype: "The Gentle Heart",
        vibe: "soft and nurturing",
        green_flags: &["attentive listener", "remembers the little things"],
        potential_challenges: &["avoids conflict", "easily hurt"],
        description: "Kind and patient, brings comfort and keeps relationships tender.",
    },
    // Senin Pahing
    ArchetypeRecord {
        archetype: "The Careful Achiever",
        vibe: "diligent and watchful",
        green_flags: &["plans ahead", "protective of family"],
        potential_challenges: &["worries a lot", "possessive"],
        description: "Quietly ambitious and careful with resources, guards what matters.",
    },
    // Senin Pon
    ArchetypeRecord {
        archetype: "The Graceful Diplomat",
        vibe: "composed and polite",
        green_flags: &["tactful", "keeps the peace"],
        potential_challenges: &["indecisive", "hides true opinions"],
        description: "Smooths over tension with courtesy and prefers harmony to victory.",
    },
    // Senin Wage
    ArchetypeRecord {
        archetype: "The Patient Keeper",
        vibe: "loyal and enduring",
        green_flags: &["steadfast", "good at saving"],
        potential_challenges: &["rigid routines", "slow to open up"],
        description: "Builds a safe, steady life and stays true through hard seasons.",
    },
    // Senin Kliwon
    ArchetypeRecord {
        archetype: "The Moonlit Dreamer",
        vibe: "sensitive and imaginative",
        green_flags: &["empathetic", "creative"],
        potential_challenges: &["mood swings", "escapes into fantasy"],
        description: "Feels deeply and sees meaning everywhere, needs a partner who grounds them.",
    },
    // Selasa Legi
    ArchetypeRecord {
        archetype: "The Brave Protector",
        vibe: "bold and warm",
        green_flags: &["courageous", "stands up for others"],
        potential_challenges: &["temper", "acts before thinking"],
        description: "Fiery energy softened by kindness, fights for the people they love.",
    },
    // Selasa Pahing
    ArchetypeRecord {
        archetype: "The Trailblazer",
        vibe: "fierce and ambitious",
        green_flags: &["decisive", "high energy"],
        potential_challenges: &["confrontational", "restless"],
        description: "Charges ahead and opens paths others follow, thrives on challenge.",
    },
    // Selasa Pon
    ArchetypeRecord {
        archetype: "The Proud Warrior",
        vibe: "intense and principled",
        green_flags: &["honest", "disciplined"],
        potential_challenges: &["judgmental", "holds grudges"],
        description: "Lives by a strict personal code and expects the same from others.",
    },
    // Selasa Wage
    ArchetypeRecord {
        archetype: "The Relentless Worker",
        vibe: "tough and persistent",
        green_flags: &["never quits", "practical"],
        potential_challenges: &["blunt", "overworks"],
        description: "Pushes through obstacles by sheer will and values results over words.",
    },
    // Selasa Kliwon
    ArchetypeRecord {
        archetype: "The Fire Seer",
        vibe: "passionate and perceptive",
        green_flags: &["sharp intuition", "protective"],
        potential_challenges: &["volatile", "secretive"],
        description: "Strong instincts and strong feelings, a formidable ally and a fierce rival.",
    },
    // Rabu Legi
    ArchetypeRecord {
        archetype: "The Calm Counselor",
        vibe: "serene and friendly",
        green_flags: &["good advice", "even-tempered"],
        potential_challenges: &["passive", "procrastinates"],
        description: "Like still water, steady and reflective, people come to them for calm.",
    },
    // Rabu Pahing
    ArchetypeRecord {
        archetype: "The Strategist",
        vibe: "shrewd and goal-oriented",
        green_flags: &["thinks ahead", "resourceful"],
        potential_challenges: &["calculating", "guarded"],
        description: "Plans several moves ahead and quietly steers outcomes.",
    },
    // Rabu Pon
    ArchetypeRecord {
        archetype: "The Eloquent Mediator",
        vibe: "articulate and balanced",
        green_flags: &["persuasive", "fair-minded"],
        potential_challenges: &["talks around problems", "people-pleaser"],
        description: "Gifted with words and balance, a natural negotiator.",
    },
    // Rabu Wage
    ArchetypeRecord {
        archetype: "The Deep Thinker",
        vibe: "reserved and thorough",
        green_flags: &["analytical", "dependable"],
        potential_challenges: &["overthinks", "slow to trust"],
        description: "Quiet depths and careful judgment, reveals warmth over time.",
    },
    // Rabu Kliwon
    ArchetypeRecord {
        archetype: "The Wise Wanderer",
        vibe: "curious and spiritual",
        green_flags: &["open-minded", "insightful"],
        potential_challenges: &["unpredictable", "detached"],
        description: "Seeks meaning beyond the obvious and follows an inner compass.",
    },
    // Kamis Legi
    ArchetypeRecord {
        archetype: "The Trusted Elder",
        vibe: "earnest and kind",
        green_flags: &["responsible", "generous mentor"],
        potential_challenges: &["preachy", "carries too much"],
        description: "Naturally takes care of others and is trusted with important matters.",
    },
    // Kamis Pahing
    ArchetypeRecord {
        archetype: "The Ambitious Leader",
        vibe: "commanding and diligent",
        green_flags: &["organized", "visionary"],
        potential_challenges: &["bossy", "workaholic"],
        description: "Sets the direction and keeps everyone moving toward it.",
    },
    // Kamis Pon
    ArchetypeRecord {
        archetype: "The Noble Guardian",
        vibe: "principled and respected",
        green_flags: &["integrity", "composed under pressure"],
        potential_challenges: &["inflexible", "status-conscious"],
        description: "Upholds standards and is admired for fairness and dignity.",
    },
    // Kamis Wage
    ArchetypeRecord {
        archetype: "The Faithful Pillar",
        vibe: "steady and devoted",
        green_flags: &["loyal", "patient"],
        potential_challenges: &["resists change", "quiet resentment"],
        description: "The dependable center of a family or team, slow to waver.",
    },
    // Kamis Kliwon
    ArchetypeRecord {
        archetype: "The Sage",
        vibe: "wise and intuitive",
        green_flags: &["spiritual depth", "calming presence"],
        potential_challenges: &["aloof", "idealistic"],
        description: "Blends earnest responsibility with insight into what others miss.",
    },
    // Jumat Legi
    ArchetypeRecord {
        archetype: "The Charmer",
        vibe: "graceful and affectionate",
        green_flags: &["romantic", "socially gifted"],
        potential_challenges: &["avoids hard talks", "needs reassurance"],
        description: "Warm, refined and easy to love, creates beauty and harmony around them.",
    },
    // Jumat Pahing
    ArchetypeRecord {
        archetype: "The Elegant Achiever",
        vibe: "polished and driven",
        green_flags: &["tasteful", "goal-focused"],
        potential_challenges: &["perfectionist", "materialistic"],
        description: "Combines grace with ambition and likes life done well.",
    },
    // Jumat Pon
    ArchetypeRecord {
        archetype: "The Refined Host",
        vibe: "courteous and composed",
        green_flags: &["gracious", "good manners"],
        potential_challenges: &["image-conscious", "passive-aggressive"],
        description: "Cultivated and dignified, makes every gathering feel special.",
    },
    // Jumat Wage
    ArchetypeRecord {
        archetype: "The Devoted Partner",
        vibe: "loyal and industrious",
        green_flags: &["committed", "protective"],
        potential_challenges: &["jealous", "stubborn"],
        description: "Works hard for loved ones and expects the same devotion in return.",
    },
    // Jumat Kliwon
    ArchetypeRecord {
        archetype: "The Enchanter",
        vibe: "mysterious and magnetic",
        green_flags: &["intuitive", "artistic"],
        potential_challenges: &["elusive", "moody"],
        description: "Graceful and otherworldly, draws people in with quiet magnetism.",
    },
    // Sabtu Legi
    ArchetypeRecord {
        archetype: "The Grounded Giver",
        vibe: "steady and generous",
        green_flags: &["dependable", "practical help"],
        potential_challenges: &["rigid", "slow to forgive"],
        description: "Earthy and kind, supports others in concrete, lasting ways.",
    },
    // Sabtu Pahing
    ArchetypeRecord {
        archetype: "The Determined Climber",
        vibe: "tenacious and ambitious",
        green_flags: &["resilient", "focused"],
        potential_challenges: &["hard-headed", "controlling"],
        description: "Climbs steadily toward big goals and rarely lets go.",
    },
    // Sabtu Pon
    ArchetypeRecord {
        archetype: "The Stoic",
        vibe: "dignified and reserved",
        green_flags: &["composed", "self-controlled"],
        potential_challenges: &["cold exterior", "proud"],
        description: "Quietly strong and self-contained, reveals tenderness to a chosen few.",
    },
    // Sabtu Wage
    ArchetypeRecord {
        archetype: "The Immovable Rock",
        vibe: "persistent and loyal",
        green_flags: &["unwavering", "protective"],
        potential_challenges: &["obstinate", "pessimistic"],
        description: "Stands firm against anything, once committed they never leave.",
    },
    // Sabtu Kliwon
    ArchetypeRecord {
        archetype: "The Earth Mystic",
        vibe: "intense and intuitive",
        green_flags: &["deep loyalty", "strong instincts"],
        potential_challenges: &["brooding", "keeps secrets"],
        description: "Grounded strength with a hidden spiritual side, powerful and enigmatic.",
    },
];

/// Archetype record for a weton.
pub fn archetype(weton: Weton) -> &'static ArchetypeRecord {
    &ARCHETYPES[weton.archetype_index() as usize]
}
