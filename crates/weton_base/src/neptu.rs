//! Neptu: numeric weights of Dina and Pasaran and their sum.

use serde::{Deserialize, Serialize};

use crate::dina::Dina;
use crate::pasaran::Pasaran;

/// Smallest possible total (Selasa 3 + Wage 4).
pub const MIN_TOTAL_NEPTU: u8 = 7;

/// Largest possible total (Sabtu 9 + Pahing 9).
pub const MAX_TOTAL_NEPTU: u8 = 18;

/// Neptu weights of one weton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neptu {
    pub dina: u8,
    pub pasaran: u8,
    pub total: u8,
}

/// Resolve both weights and their sum.
pub const fn neptu(dina: Dina, pasaran: Pasaran) -> Neptu {
    let d = dina.neptu();
    let p = pasaran.neptu();
    Neptu {
        dina: d,
        pasaran: p,
        total: d + p,
    }
}
