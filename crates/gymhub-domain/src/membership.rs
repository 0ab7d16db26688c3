//! Membership plan and lifecycle states.

use serde::{Deserialize, Serialize};

/// Visit-credit plan tier.
///
/// Wire format: snake_case string. Store format: `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Classic = 0,
    Professional = 1,
}

impl PlanType {
    /// Convert from the `i16` store value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Classic),
            1 => Some(Self::Professional),
            _ => None,
        }
    }

    /// Convert to the `i16` store value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

/// Lifecycle state of a purchased membership.
///
/// Wire format: snake_case string. Store format: `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active = 0,
    Expired = 1,
    Cancelled = 2,
}

impl MembershipStatus {
    /// Convert from the `i16` store value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Active),
            1 => Some(Self::Expired),
            2 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Convert to the `i16` store value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl Default for MembershipStatus {
    fn default() -> Self {
        Self::Active
    }
}
