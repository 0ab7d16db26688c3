use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use gymhub_api_schema::{gyms, memberships, users};
use gymhub_domain::gym::GymStatus;
use gymhub_domain::membership::{MembershipStatus, PlanType};
use gymhub_domain::pagination::PageRequest;
use gymhub_domain::role::Role;

use crate::domain::repository::{GymRepository, MembershipRepository, UserRepository};
use crate::domain::types::{
    Gym, GymPatch, GymWithOwner, Membership, MembershipPatch, MembershipWithUser, User, UserPatch,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            role: Set(user.role.as_i16()),
            phone: Set(user.phone.clone()),
            address: Set(user.address.clone()),
            city: Set(user.city.clone()),
            birth_date: Set(user.birth_date),
            emergency_contact: Set(user.emergency_contact.clone()),
            emergency_phone: Set(user.emergency_phone.clone()),
            fitness_goals: Set(user.fitness_goals.clone()),
            profile_image: Set(user.profile_image.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<(), ApiError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(password_hash) = patch.password_hash {
            am.password_hash = Set(password_hash);
        }
        if let Some(first_name) = patch.first_name {
            am.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            am.last_name = Set(last_name);
        }
        if let Some(role) = patch.role {
            am.role = Set(role.as_i16());
        }
        if let Some(phone) = patch.phone {
            am.phone = Set(phone);
        }
        if let Some(address) = patch.address {
            am.address = Set(address);
        }
        if let Some(city) = patch.city {
            am.city = Set(city);
        }
        if let Some(birth_date) = patch.birth_date {
            am.birth_date = Set(Some(birth_date));
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            am.emergency_contact = Set(emergency_contact);
        }
        if let Some(emergency_phone) = patch.emergency_phone {
            am.emergency_phone = Set(emergency_phone);
        }
        if let Some(fitness_goals) = patch.fitness_goals {
            am.fitness_goals = Set(fitness_goals);
        }
        if let Some(profile_image) = patch.profile_image {
            am.profile_image = Set(profile_image);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = users::Entity::delete_many()
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        role: Role::from_i16(model.role).unwrap_or_default(),
        phone: model.phone,
        address: model.address,
        city: model.city,
        birth_date: model.birth_date,
        emergency_contact: model.emergency_contact,
        emergency_phone: model.emergency_phone,
        fitness_goals: model.fitness_goals,
        profile_image: model.profile_image,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Gym repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGymRepository {
    pub db: DatabaseConnection,
}

impl GymRepository for DbGymRepository {
    async fn list_active(&self, page: PageRequest) -> Result<Vec<GymWithOwner>, ApiError> {
        let rows = gyms::Entity::find()
            .filter(gyms::Column::Status.eq(GymStatus::Active.as_i16()))
            .find_also_related(users::Entity)
            .order_by_desc(gyms::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list active gyms")?;
        Ok(rows.into_iter().map(gym_with_owner_from_row).collect())
    }

    async fn list_by_owner_username(
        &self,
        username: &str,
        page: PageRequest,
    ) -> Result<Vec<GymWithOwner>, ApiError> {
        let rows = gyms::Entity::find()
            .find_also_related(users::Entity)
            .filter(users::Column::Username.eq(username))
            .order_by_desc(gyms::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list gyms by owner username")?;
        Ok(rows.into_iter().map(gym_with_owner_from_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GymWithOwner>, ApiError> {
        let row = gyms::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find gym by id")?;
        Ok(row.map(gym_with_owner_from_row))
    }

    async fn create(&self, gym: &Gym) -> Result<(), ApiError> {
        gyms::ActiveModel {
            id: Set(gym.id),
            owner_id: Set(gym.owner_id),
            name: Set(gym.name.clone()),
            description: Set(gym.description.clone()),
            address: Set(gym.address.clone()),
            city: Set(gym.city.clone()),
            area: Set(gym.area.clone()),
            phone: Set(gym.phone.clone()),
            amenities: Set(amenities_to_json(&gym.amenities)),
            hours: Set(gym.hours.clone()),
            image_url: Set(gym.image_url.clone()),
            status: Set(gym.status.as_i16()),
            capacity: Set(gym.capacity),
            featured: Set(gym.featured),
            created_at: Set(gym.created_at),
        }
        .insert(&self.db)
        .await
        .context("create gym")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: GymPatch) -> Result<(), ApiError> {
        let mut am = gyms::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        if let Some(address) = patch.address {
            am.address = Set(address);
        }
        if let Some(city) = patch.city {
            am.city = Set(city);
        }
        if let Some(area) = patch.area {
            am.area = Set(area);
        }
        if let Some(phone) = patch.phone {
            am.phone = Set(phone);
        }
        if let Some(amenities) = patch.amenities {
            am.amenities = Set(amenities_to_json(&amenities));
        }
        if let Some(hours) = patch.hours {
            am.hours = Set(hours);
        }
        if let Some(image_url) = patch.image_url {
            am.image_url = Set(image_url);
        }
        if let Some(status) = patch.status {
            am.status = Set(status.as_i16());
        }
        if let Some(capacity) = patch.capacity {
            am.capacity = Set(Some(capacity));
        }
        if let Some(featured) = patch.featured {
            am.featured = Set(featured);
        }
        am.update(&self.db).await.context("update gym")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = gyms::Entity::delete_many()
            .filter(gyms::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete gym")?;
        Ok(result.rows_affected > 0)
    }
}

fn amenities_to_json(amenities: &[String]) -> Value {
    Value::Array(amenities.iter().cloned().map(Value::String).collect())
}

fn gym_from_model(model: gyms::Model) -> Gym {
    Gym {
        id: model.id,
        owner_id: model.owner_id,
        name: model.name,
        description: model.description,
        address: model.address,
        city: model.city,
        area: model.area,
        phone: model.phone,
        amenities: serde_json::from_value(model.amenities).unwrap_or_default(),
        hours: model.hours,
        image_url: model.image_url,
        status: GymStatus::from_i16(model.status).unwrap_or_default(),
        capacity: model.capacity,
        featured: model.featured,
        created_at: model.created_at,
    }
}

fn gym_with_owner_from_row((model, owner): (gyms::Model, Option<users::Model>)) -> GymWithOwner {
    GymWithOwner {
        gym: gym_from_model(model),
        owner_email: owner.map(|u| u.email).unwrap_or_default(),
    }
}

// ── Membership repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMembershipRepository {
    pub db: DatabaseConnection,
}

impl MembershipRepository for DbMembershipRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<MembershipWithUser>, ApiError> {
        let rows = memberships::Entity::find()
            .filter(memberships::Column::UserId.eq(user_id))
            .find_also_related(users::Entity)
            .order_by_desc(memberships::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list memberships by user")?;
        Ok(rows.into_iter().map(membership_with_user_from_row).collect())
    }

    async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MembershipWithUser>, ApiError> {
        let row = memberships::Entity::find()
            .filter(memberships::Column::Id.eq(id))
            .filter(memberships::Column::UserId.eq(user_id))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find membership for user")?;
        Ok(row.map(membership_with_user_from_row))
    }

    async fn create(&self, membership: &Membership) -> Result<(), ApiError> {
        memberships::ActiveModel {
            id: Set(membership.id),
            user_id: Set(membership.user_id),
            plan_type: Set(membership.plan_type.as_i16()),
            status: Set(membership.status.as_i16()),
            total_visits: Set(membership.total_visits),
            remaining_visits: Set(membership.remaining_visits),
            price: Set(membership.price),
            purchase_date: Set(membership.purchase_date),
            expiry_date: Set(membership.expiry_date),
            created_at: Set(membership.created_at),
        }
        .insert(&self.db)
        .await
        .context("create membership")?;
        Ok(())
    }

    async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: MembershipPatch,
    ) -> Result<bool, ApiError> {
        let model = memberships::Entity::find()
            .filter(memberships::Column::Id.eq(id))
            .filter(memberships::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find membership for update")?;
        let Some(model) = model else {
            return Ok(false);
        };

        let mut am = model.into_active_model();
        if let Some(status) = patch.status {
            am.status = Set(status.as_i16());
        }
        if let Some(remaining_visits) = patch.remaining_visits {
            am.remaining_visits = Set(remaining_visits);
        }
        if let Some(expiry_date) = patch.expiry_date {
            am.expiry_date = Set(expiry_date);
        }
        am.update(&self.db).await.context("update membership")?;
        Ok(true)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let result = memberships::Entity::delete_many()
            .filter(memberships::Column::Id.eq(id))
            .filter(memberships::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete membership")?;
        Ok(result.rows_affected > 0)
    }
}

fn membership_from_model(model: memberships::Model) -> Membership {
    Membership {
        id: model.id,
        user_id: model.user_id,
        plan_type: PlanType::from_i16(model.plan_type).unwrap_or(PlanType::Classic),
        status: MembershipStatus::from_i16(model.status).unwrap_or_default(),
        total_visits: model.total_visits,
        remaining_visits: model.remaining_visits,
        price: model.price,
        purchase_date: model.purchase_date,
        expiry_date: model.expiry_date,
        created_at: model.created_at,
    }
}

fn membership_with_user_from_row(
    (model, user): (memberships::Model, Option<users::Model>),
) -> MembershipWithUser {
    MembershipWithUser {
        membership: membership_from_model(model),
        user_email: user.map(|u| u.email).unwrap_or_default(),
    }
}
