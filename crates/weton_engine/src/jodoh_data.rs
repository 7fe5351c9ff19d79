//! Jodoh tables.
//!
//! Provenance: primbon marriage reckonings (petungan jodoh), paraphrased.
//! Every table is 1-based: remainder `r` selects entry `r - 1`, and a zero
//! remainder has already been aliased to the modulus.

use weton_base::CharacterRecord;

const fn rec(title: &'static str, description: &'static str) -> CharacterRecord {
    CharacterRecord { title, description }
}

/// Combined neptu divided by four.
pub(crate) const JODOH4: [CharacterRecord; 4] = [
    rec("Gentho", "Hard to be blessed with children; patience and devotion are needed."),
    rec("Gembili", "Blessed with many children."),
    rec("Sri", "Fortune and plenty; the household is well provided for."),
    rec("Punggel", "Broken: one partner is traditionally at risk of early loss."),
];

/// Combined neptu divided by five.
pub(crate) const JODOH5: [CharacterRecord; 5] = [
    rec("Sri", "Abundant livelihood."),
    rec("Lungguh", "Rank and standing; the couple is respected."),
    rec("Gedhong", "Wealth stored up; a comfortable home."),
    rec("Lara", "Illness and hardship; care for each other."),
    rec("Pati", "Grave misfortune; a reading elders advise against."),
];

/// Combined neptu divided by eight.
pub(crate) const JODOH8: [CharacterRecord; 8] = [
    rec("Pegat", "Prone to separation through money, in-laws or temperament."),
    rec("Ratu", "Regal: admired and respected by others."),
    rec("Jodoh", "Truly matched; accepting of each other's flaws."),
    rec("Topo", "Early struggle that ends in happiness."),
    rec("Tinari", "Ease in finding livelihood; often lucky."),
    rec("Padu", "Frequent quarrels that do not end the marriage."),
    rec("Sujanan", "Jealousy and the risk of infidelity."),
    rec("Pesthi", "Harmonious and peaceful to the end."),
];

/// Pair readings for the divide-by-nine method, upper triangle of 9x9
/// in row-major order: (1,1), (1,2) .. (1,9), (2,2) .. (9,9).
pub(crate) const JODOH9_PAIRS: [CharacterRecord; 45] = [
    rec("Dikasihi", "Beloved and cared for by those around them."), // 1-1
    rec("Baik sekali", "A very good match; life runs smoothly."), // 1-2
    rec("Rezeki melimpah", "Strong together, with abundant livelihood."), // 1-3
    rec("Banyak celaka", "Prone to misfortune; needs extra care and patience."), // 1-4
    rec("Rawan berpisah", "At risk of separation; communication is essential."), // 1-5
    rec("Rezeki jauh", "Livelihood is hard to reach and takes long effort."), // 1-6
    rec("Banyak musuh", "Attracts rivals and opposition as a couple."), // 1-7
    rec("Sengsara", "Hardship tests the bond."), // 1-8
    rec("Pelindung", "The couple becomes a refuge for others."), // 1-9
    rec("Selamat", "Safe and prosperous together."), // 2-2
    rec(
        "Salah satu cepat wafat",
        "Traditionally read as one partner passing early; guard health.",
    ), // 2-3
    rec("Banyak godaan", "Many temptations from outside the marriage."), // 2-4
    rec("Sering celaka", "Frequent setbacks; build resilience together."), // 2-5
    rec("Cepat kaya", "Prosperity arrives quickly."), // 2-6
    rec("Anak rawan", "Children face hardship; watch over the family."), // 2-7
    rec("Rezeki dekat", "Fortune is close at hand."), // 2-8
    rec("Rezeki banyak", "Abundant fortune."), // 2-9
    rec("Melarat", "Money is scarce; modest living."), // 3-3
    rec("Banyak celaka", "Many misfortunes to weather."), // 3-4
    rec("Cepat berpisah", "Quick to separate when tested."), // 3-5
    rec("Mendapat kasih", "Receives affection and support."), // 3-6
    rec("Banyak celaka", "Many misfortunes to weather."), // 3-7
    rec(
        "Salah satu cepat wafat",
        "Traditionally read as one partner passing early; guard health.",
    ), // 3-8
    rec("Rezeki banyak", "Abundant fortune."), // 3-9
    rec("Sering sakit", "Health troubles recur."), // 4-4
    rec("Banyak godaan", "Many temptations from outside the marriage."), // 4-5
    rec("Rezeki banyak", "Abundant fortune."), // 4-6
    rec("Melarat", "Money is scarce; modest living."), // 4-7
    rec("Banyak halangan", "Many obstacles along the way."), // 4-8
    rec("Salah satu kalah", "One partner dominates the other."), // 4-9
    rec("Beruntung", "Continual good luck."), // 5-5
    rec("Rezeki sedikit", "Livelihood is modest."), // 5-6
    rec("Rezeki lancar", "Steady, uninterrupted income."), // 5-7
    rec("Banyak halangan", "Many obstacles along the way."), // 5-8
    rec("Rezeki sedikit", "Livelihood is modest."), // 5-9
    rec("Banyak celaka", "Many misfortunes to weather."), // 6-6
    rec("Rukun", "Harmonious and peaceful."), // 6-7
    rec("Banyak musuh", "Attracts rivals and opposition as a couple."), // 6-8
    rec("Sengsara", "Hardship tests the bond."), // 6-9
    rec("Salah satu dikuasai", "One partner is ruled by the other."), // 7-7
    rec("Celaka karena diri sendiri", "Troubles of their own making."), // 7-8
    rec("Langgeng", "A lasting marriage."), // 7-9
    rec("Dikasihi", "Loved by those around them."), // 8-8
    rec("Banyak celaka", "Many misfortunes to weather."), // 8-9
    rec("Rezeki sulit", "Livelihood is hard to come by."), // 9-9
];

/// Day-name combinations, upper triangle of 7x7 in week order
/// (Minggu-Minggu, Minggu-Senin .. Sabtu-Sabtu).
pub(crate) const JODOH_DAYS: [CharacterRecord; 28] = [
    rec("Sering sakit", "Often unwell; look after each other's health."), // Minggu-Minggu
    rec("Banyak sakit", "Frequent illness in the household."), // Minggu-Senin
    rec("Miskin", "Wealth is hard to hold on to."), // Minggu-Selasa
    rec("Rukun", "Harmonious and easy together."), // Minggu-Rabu
    rec("Cekcok", "Prone to quarrels."), // Minggu-Kamis
    rec("Rukun", "Harmonious and easy together."), // Minggu-Jumat
    rec("Miskin", "Wealth is hard to hold on to."), // Minggu-Sabtu
    rec("Kurang baik", "An uneasy match that needs work."), // Senin-Senin
    rec("Rukun", "Harmonious and easy together."), // Senin-Selasa
    rec("Anak perempuan", "Blessed with daughters."), // Senin-Rabu
    rec("Disayangi", "Cherished by family and neighbors."), // Senin-Kamis
    rec("Rukun", "Harmonious and easy together."), // Senin-Jumat
    rec("Direstui", "Blessed by elders; good fortune follows."), // Senin-Sabtu
    rec("Kurang baik", "An uneasy match that needs work."), // Selasa-Selasa
    rec("Kaya", "Prosperous together."), // Selasa-Rabu
    rec("Kaya", "Prosperous together."), // Selasa-Kamis
    rec("Bercerai", "At risk of divorce."), // Selasa-Jumat
    rec("Sering bertengkar", "Frequent arguments."), // Selasa-Sabtu
    rec("Kurang baik", "An uneasy match that needs work."), // Rabu-Rabu
    rec("Selamat", "Safe and secure."), // Rabu-Kamis
    rec("Selamat", "Safe and secure."), // Rabu-Jumat
    rec("Baik", "A good match."), // Rabu-Sabtu
    rec("Selamat", "Safe and secure."), // Kamis-Kamis
    rec("Selamat", "Safe and secure."), // Kamis-Jumat
    rec("Celaka", "Prone to misfortune."), // Kamis-Sabtu
    rec("Miskin", "Wealth is hard to hold on to."), // Jumat-Jumat
    rec("Celaka", "Prone to misfortune."), // Jumat-Sabtu
    rec("Kurang baik", "An uneasy match that needs work."), // Sabtu-Sabtu
];

/// Day-name readings keyed on (person A, person B), row-major 7x7 in
/// week order. A is conventionally the man. Pairs in week order read as
/// in [`JODOH_DAYS`]; reversed pairs carry their own reading.
pub(crate) const JODOH_DAYS_ORDERED: [CharacterRecord; 49] = [
    // Minggu (A)
    rec("Sering sakit", "Often unwell; look after each other's health."), // Minggu-Minggu
    rec("Banyak sakit", "Frequent illness in the household."), // Minggu-Senin
    rec("Miskin", "Wealth is hard to hold on to."), // Minggu-Selasa
    rec("Rukun", "Harmonious and easy together."), // Minggu-Rabu
    rec("Cekcok", "Prone to quarrels."), // Minggu-Kamis
    rec("Rukun", "Harmonious and easy together."), // Minggu-Jumat
    rec("Miskin", "Wealth is hard to hold on to."), // Minggu-Sabtu
    // Senin (A)
    rec("Disayangi", "Cherished by family and neighbors."), // Senin-Minggu
    rec("Kurang baik", "An uneasy match that needs work."), // Senin-Senin
    rec("Rukun", "Harmonious and easy together."), // Senin-Selasa
    rec("Anak perempuan", "Blessed with daughters."), // Senin-Rabu
    rec("Disayangi", "Cherished by family and neighbors."), // Senin-Kamis
    rec("Rukun", "Harmonious and easy together."), // Senin-Jumat
    rec("Direstui", "Blessed by elders; good fortune follows."), // Senin-Sabtu
    // Selasa (A)
    rec("Cekcok", "Prone to quarrels."), // Selasa-Minggu
    rec("Kaya", "Prosperous together."), // Selasa-Senin
    rec("Kurang baik", "An uneasy match that needs work."), // Selasa-Selasa
    rec("Kaya", "Prosperous together."), // Selasa-Rabu
    rec("Kaya", "Prosperous together."), // Selasa-Kamis
    rec("Bercerai", "At risk of divorce."), // Selasa-Jumat
    rec("Sering bertengkar", "Frequent arguments."), // Selasa-Sabtu
    // Rabu (A)
    rec("Selamat", "Safe and secure."), // Rabu-Minggu
    rec("Rukun", "Harmonious and easy together."), // Rabu-Senin
    rec("Sering bertengkar", "Frequent arguments."), // Rabu-Selasa
    rec("Kurang baik", "An uneasy match that needs work."), // Rabu-Rabu
    rec("Selamat", "Safe and secure."), // Rabu-Kamis
    rec("Selamat", "Safe and secure."), // Rabu-Jumat
    rec("Baik", "A good match."), // Rabu-Sabtu
    // Kamis (A)
    rec("Baik", "A good match."), // Kamis-Minggu
    rec("Kaya", "Prosperous together."), // Kamis-Senin
    rec("Cekcok", "Prone to quarrels."), // Kamis-Selasa
    rec("Rukun", "Harmonious and easy together."), // Kamis-Rabu
    rec("Selamat", "Safe and secure."), // Kamis-Kamis
    rec("Selamat", "Safe and secure."), // Kamis-Jumat
    rec("Celaka", "Prone to misfortune."), // Kamis-Sabtu
    // Jumat (A)
    rec("Direstui", "Blessed by elders; good fortune follows."), // Jumat-Minggu
    rec("Anak laki-laki", "Blessed with sons."), // Jumat-Senin
    rec("Kurang baik", "An uneasy match that needs work."), // Jumat-Selasa
    rec("Kaya", "Prosperous together."), // Jumat-Rabu
    rec("Rukun", "Harmonious and easy together."), // Jumat-Kamis
    rec("Miskin", "Wealth is hard to hold on to."), // Jumat-Jumat
    rec("Celaka", "Prone to misfortune."), // Jumat-Sabtu
    // Sabtu (A)
    rec("Celaka", "Prone to misfortune."), // Sabtu-Minggu
    rec("Rukun", "Harmonious and easy together."), // Sabtu-Senin
    rec("Banyak sakit", "Frequent illness in the household."), // Sabtu-Selasa
    rec("Selamat", "Safe and secure."), // Sabtu-Rabu
    rec("Miskin", "Wealth is hard to hold on to."), // Sabtu-Kamis
    rec("Selamat", "Safe and secure."), // Sabtu-Jumat
    rec("Kurang baik", "An uneasy match that needs work."), // Sabtu-Sabtu
];

/// Row-major index of `(lo, hi)` in an upper-triangular `n x n` table,
/// 0-based with `lo <= hi < n`.
pub(crate) const fn triangle_index(lo: usize, hi: usize, n: usize) -> usize {
    lo * (2 * n - lo + 1) / 2 + (hi - lo)
}
