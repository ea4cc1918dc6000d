//! Join table for the user <-> garage many-to-many membership.
use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{garage, user};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub garage_id: Uuid,
    pub joined_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Garage,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Garage => Entity::belongs_to(garage::Entity).from(Column::GarageId).to(garage::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn add(db: &DatabaseConnection, user_id: Uuid, garage_id: Uuid) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        user_id: Set(user_id),
        garage_id: Set(garage_id),
        joined_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn remove(db: &DatabaseConnection, user_id: Uuid, garage_id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id((user_id, garage_id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

/// Garage ids the given user belongs to.
pub async fn garages_of(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<Uuid>, errors::ModelError> {
    use sea_orm::{QueryFilter, ColumnTrait};
    let rows = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(|m| m.garage_id).collect())
}
