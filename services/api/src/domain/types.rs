use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use gymhub_domain::gym::GymStatus;
use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::role::Role;

/// A registered account with its profile.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub birth_date: Option<NaiveDate>,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub fitness_goals: String,
    pub profile_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a user row. `password_hash` is already hashed by the
/// use case — plaintext never reaches this type.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub fitness_goals: Option<String>,
    pub profile_image: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.birth_date.is_none()
            && self.emergency_contact.is_none()
            && self.emergency_phone.is_none()
            && self.fitness_goals.is_none()
            && self.profile_image.is_none()
    }
}

/// A tenant-owned gym listing.
#[derive(Debug, Clone)]
pub struct Gym {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub area: String,
    pub phone: String,
    pub amenities: Vec<String>,
    pub hours: String,
    pub image_url: String,
    pub status: GymStatus,
    pub capacity: Option<i32>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A gym joined with its owner's email for read responses.
#[derive(Debug, Clone)]
pub struct GymWithOwner {
    pub gym: Gym,
    pub owner_email: String,
}

/// Partial update for a gym row.
#[derive(Debug, Clone, Default)]
pub struct GymPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub phone: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub hours: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<GymStatus>,
    pub capacity: Option<i32>,
    pub featured: Option<bool>,
}

impl GymPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.area.is_none()
            && self.phone.is_none()
            && self.amenities.is_none()
            && self.hours.is_none()
            && self.image_url.is_none()
            && self.status.is_none()
            && self.capacity.is_none()
            && self.featured.is_none()
    }
}

/// A purchased visit-credit membership.
#[derive(Debug, Clone)]
pub struct Membership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_type: PlanType,
    pub status: MembershipStatus,
    pub total_visits: i32,
    pub remaining_visits: i32,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A membership joined with its holder's email for read responses.
#[derive(Debug, Clone)]
pub struct MembershipWithUser {
    pub membership: Membership,
    pub user_email: String,
}

/// Partial update for a membership row.
#[derive(Debug, Clone, Default)]
pub struct MembershipPatch {
    pub status: Option<MembershipStatus>,
    pub remaining_visits: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
}

impl MembershipPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.remaining_visits.is_none() && self.expiry_date.is_none()
    }
}

/// Validate a username: alphanumeric + hyphen + underscore, 1-30 chars.
/// Reserved: "me" (collides with the self-profile route).
pub fn validate_username(username: &str) -> bool {
    if username.is_empty() || username.len() > 30 {
        return false;
    }
    if username == "me" {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
