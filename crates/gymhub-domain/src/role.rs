//! User roles and privilege ordering.

use serde::{Deserialize, Serialize};

/// Authorization tier of a user account.
///
/// Wire format: snake_case string (`"member"`, `"gym_owner"`, `"admin"`).
/// Store format: `i16` (0 = Member, 1 = GymOwner, 2 = Admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member = 0,
    GymOwner = 1,
    Admin = 2,
}

impl Role {
    /// Convert from the `i16` store value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Member),
            1 => Some(Self::GymOwner),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to the `i16` store value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Roles allowed to manage gym listings when the role gate is enabled.
    pub fn can_manage_gyms(self) -> bool {
        matches!(self, Self::GymOwner | Self::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Member
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_i16().cmp(&other.as_i16())
    }
}
