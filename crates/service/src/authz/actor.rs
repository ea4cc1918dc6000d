use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Role tags carried by a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Member,
    User,
}

impl Role {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_MANAGER" => Some(Role::Manager),
            "ROLE_MEMBER" => Some(Role::Member),
            "ROLE_USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Manager => "ROLE_MANAGER",
            Role::Member => "ROLE_MEMBER",
            Role::User => "ROLE_USER",
        }
    }
}

/// One garage the actor belongs to, with the garage's address for the
/// address ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub garage_id: Uuid,
    pub address_id: Uuid,
}

/// Snapshot of the authenticated principal, loaded once per request.
/// Policy decisions compare only against this snapshot.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub roles: Vec<Role>,
    /// The actor's own address, if any.
    pub address_id: Option<Uuid>,
    /// Garages the actor is a member of.
    pub memberships: Vec<Membership>,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Explicit membership-set containment test.
    pub fn belongs_to(&self, garage_id: Uuid) -> bool {
        self.memberships.iter().any(|m| m.garage_id == garage_id)
    }

    /// Whether `address_id` is the address of one of the actor's garages.
    pub fn manages_address(&self, address_id: Uuid) -> bool {
        self.memberships.iter().any(|m| m.address_id == address_id)
    }

    /// Build the snapshot for `user_id` from the entity store. Returns
    /// `Ok(None)` when the user does not exist (e.g. deleted after the
    /// token was issued).
    pub async fn load(db: &DatabaseConnection, user_id: Uuid) -> Result<Option<Actor>, ServiceError> {
        let Some(user) = models::user::Entity::find_by_id(user_id)
            .one(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(None);
        };

        let roles = user.role_tags().iter().filter_map(|t| Role::from_tag(t)).collect();

        let garage_ids = models::garage_member::garages_of(db, user.id).await?;
        let mut memberships = Vec::with_capacity(garage_ids.len());
        if !garage_ids.is_empty() {
            let garages = models::garage::Entity::find()
                .filter(models::garage::Column::Id.is_in(garage_ids))
                .all(db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            for g in garages {
                memberships.push(Membership { garage_id: g.id, address_id: g.address_id });
            }
        }

        Ok(Some(Actor { id: user.id, roles, address_id: user.address_id, memberships }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tags_round_trip() {
        for tag in ["ROLE_ADMIN", "ROLE_MANAGER", "ROLE_MEMBER", "ROLE_USER"] {
            assert_eq!(Role::from_tag(tag).unwrap().as_tag(), tag);
        }
        assert!(Role::from_tag("ROLE_SUPERVISOR").is_none());
    }

    #[test]
    fn membership_containment() {
        let g1 = Uuid::new_v4();
        let g2 = Uuid::new_v4();
        let actor = Actor {
            id: Uuid::new_v4(),
            roles: vec![Role::User],
            address_id: None,
            memberships: vec![Membership { garage_id: g1, address_id: Uuid::new_v4() }],
        };
        assert!(actor.belongs_to(g1));
        assert!(!actor.belongs_to(g2));
    }
}
