use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use gymhub_api::domain::repository::{
    GymRepository, MembershipRepository, PasswordHasher, UserRepository,
};
use gymhub_api::domain::types::{
    Gym, GymPatch, GymWithOwner, Membership, MembershipPatch, MembershipWithUser, User, UserPatch,
};
use gymhub_api::error::ApiError;
use gymhub_domain::gym::GymStatus;
use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal row list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(password_hash) = patch.password_hash {
                user.password_hash = password_hash;
            }
            if let Some(first_name) = patch.first_name {
                user.first_name = first_name;
            }
            if let Some(last_name) = patch.last_name {
                user.last_name = last_name;
            }
            if let Some(role) = patch.role {
                user.role = role;
            }
            if let Some(phone) = patch.phone {
                user.phone = phone;
            }
            if let Some(address) = patch.address {
                user.address = address;
            }
            if let Some(city) = patch.city {
                user.city = city;
            }
            if let Some(birth_date) = patch.birth_date {
                user.birth_date = Some(birth_date);
            }
            if let Some(emergency_contact) = patch.emergency_contact {
                user.emergency_contact = emergency_contact;
            }
            if let Some(emergency_phone) = patch.emergency_phone {
                user.emergency_phone = emergency_phone;
            }
            if let Some(fitness_goals) = patch.fitness_goals {
                user.fitness_goals = fitness_goals;
            }
            if let Some(profile_image) = patch.profile_image {
                user.profile_image = profile_image;
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

// ── MockGymRepo ──────────────────────────────────────────────────────────────

pub struct MockGymRepo {
    pub gyms: Arc<Mutex<Vec<Gym>>>,
    pub owners: Vec<User>,
}

impl MockGymRepo {
    pub fn new(gyms: Vec<Gym>, owners: Vec<User>) -> Self {
        Self {
            gyms: Arc::new(Mutex::new(gyms)),
            owners,
        }
    }

    /// Returns a shared handle to the internal row list for post-execution inspection.
    pub fn gyms_handle(&self) -> Arc<Mutex<Vec<Gym>>> {
        Arc::clone(&self.gyms)
    }

    fn with_owner(&self, gym: Gym) -> GymWithOwner {
        let owner_email = self
            .owners
            .iter()
            .find(|u| u.id == gym.owner_id)
            .map(|u| u.email.clone())
            .unwrap_or_default();
        GymWithOwner { gym, owner_email }
    }
}

impl GymRepository for MockGymRepo {
    async fn list_active(&self, page: PageRequest) -> Result<Vec<GymWithOwner>, ApiError> {
        let gyms = self.gyms.lock().unwrap().clone();
        Ok(gyms
            .into_iter()
            .filter(|g| g.status == GymStatus::Active)
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|g| self.with_owner(g))
            .collect())
    }

    async fn list_by_owner_username(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<Vec<GymWithOwner>, ApiError> {
        let Some(owner) = self.owners.iter().find(|u| u.username == username) else {
            return Ok(vec![]);
        };
        let gyms = self.gyms.lock().unwrap().clone();
        Ok(gyms
            .into_iter()
            .filter(|g| g.owner_id == owner.id)
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|g| self.with_owner(g))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GymWithOwner>, ApiError> {
        let gym = self.gyms.lock().unwrap().iter().find(|g| g.id == id).cloned();
        Ok(gym.map(|g| self.with_owner(g)))
    }

    async fn create(&self, gym: &Gym) -> Result<(), ApiError> {
        self.gyms.lock().unwrap().push(gym.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: GymPatch) -> Result<(), ApiError> {
        let mut gyms = self.gyms.lock().unwrap();
        if let Some(gym) = gyms.iter_mut().find(|g| g.id == id) {
            if let Some(name) = patch.name {
                gym.name = name;
            }
            if let Some(description) = patch.description {
                gym.description = description;
            }
            if let Some(address) = patch.address {
                gym.address = address;
            }
            if let Some(city) = patch.city {
                gym.city = city;
            }
            if let Some(area) = patch.area {
                gym.area = area;
            }
            if let Some(phone) = patch.phone {
                gym.phone = phone;
            }
            if let Some(amenities) = patch.amenities {
                gym.amenities = amenities;
            }
            if let Some(hours) = patch.hours {
                gym.hours = hours;
            }
            if let Some(image_url) = patch.image_url {
                gym.image_url = image_url;
            }
            if let Some(status) = patch.status {
                gym.status = status;
            }
            if let Some(capacity) = patch.capacity {
                gym.capacity = Some(capacity);
            }
            if let Some(featured) = patch.featured {
                gym.featured = featured;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut gyms = self.gyms.lock().unwrap();
        let before = gyms.len();
        gyms.retain(|g| g.id != id);
        Ok(gyms.len() < before)
    }
}

// ── MockMembershipRepo ───────────────────────────────────────────────────────

pub struct MockMembershipRepo {
    pub rows: Arc<Mutex<Vec<Membership>>>,
    pub users: Vec<User>,
}

impl MockMembershipRepo {
    pub fn new(rows: Vec<Membership>, users: Vec<User>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            users,
        }
    }

    /// Returns a shared handle to the internal row list for post-execution inspection.
    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Membership>>> {
        Arc::clone(&self.rows)
    }

    fn with_user(&self, membership: Membership) -> MembershipWithUser {
        let user_email = self
            .users
            .iter()
            .find(|u| u.id == membership.user_id)
            .map(|u| u.email.clone())
            .unwrap_or_default();
        MembershipWithUser {
            membership,
            user_email,
        }
    }
}

impl MembershipRepository for MockMembershipRepo {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<MembershipWithUser>, ApiError> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(rows
            .into_iter()
            .filter(|m| m.user_id == user_id)
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|m| self.with_user(m))
            .collect())
    }

    async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MembershipWithUser>, ApiError> {
        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id && m.user_id == user_id)
            .cloned();
        Ok(row.map(|m| self.with_user(m)))
    }

    async fn create(&self, membership: &Membership) -> Result<(), ApiError> {
        self.rows.lock().unwrap().push(membership.clone());
        Ok(())
    }

    async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: MembershipPatch,
    ) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|m| m.id == id && m.user_id == user_id) else {
            return Ok(false);
        };
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(remaining_visits) = patch.remaining_visits {
            row.remaining_visits = remaining_visits;
        }
        if let Some(expiry_date) = patch.expiry_date {
            row.expiry_date = expiry_date;
        }
        Ok(true)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| !(m.id == id && m.user_id == user_id));
        Ok(rows.len() < before)
    }
}

// ── MockPasswordHasher ───────────────────────────────────────────────────────

/// Deterministic stand-in for argon2 where hashing cost is irrelevant.
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError> {
        Ok(password_hash == format!("hashed:{password}"))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(username: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        password_hash: "hashed:password123".to_owned(),
        first_name: "Alex".to_owned(),
        last_name: "Martins".to_owned(),
        role,
        phone: "+351900000000".to_owned(),
        address: "Rua A 1".to_owned(),
        city: "Lisbon".to_owned(),
        birth_date: None,
        emergency_contact: String::new(),
        emergency_phone: String::new(),
        fitness_goals: String::new(),
        profile_image: String::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_gym(owner_id: Uuid, status: GymStatus) -> Gym {
    Gym {
        id: Uuid::now_v7(),
        owner_id,
        name: "Iron Temple".to_owned(),
        description: "Free weights and a lot of chalk".to_owned(),
        address: "Av. Central 12".to_owned(),
        city: "Lisbon".to_owned(),
        area: "Baixa".to_owned(),
        phone: "+351210000000".to_owned(),
        amenities: vec!["sauna".to_owned(), "parking".to_owned()],
        hours: "Mon-Sun 06:00-22:00".to_owned(),
        image_url: String::new(),
        status,
        capacity: Some(120),
        featured: false,
        created_at: Utc::now(),
    }
}

pub fn test_membership(user_id: Uuid) -> Membership {
    Membership {
        id: Uuid::now_v7(),
        user_id,
        plan_type: PlanType::Classic,
        status: MembershipStatus::Active,
        total_visits: 10,
        remaining_visits: 10,
        price: Decimal::new(4999, 2),
        purchase_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        created_at: Utc::now(),
    }
}
