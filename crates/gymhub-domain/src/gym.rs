//! Gym listing states.

use serde::{Deserialize, Serialize};

/// Moderation state of a gym listing.
///
/// New listings start as `pending`; only `active` listings are publicly
/// visible. Wire format: snake_case string. Store format: `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GymStatus {
    Pending = 0,
    Active = 1,
    Suspended = 2,
}

impl GymStatus {
    /// Convert from the `i16` store value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Suspended),
            _ => None,
        }
    }

    /// Convert to the `i16` store value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl Default for GymStatus {
    fn default() -> Self {
        Self::Pending
    }
}
