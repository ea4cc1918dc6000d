use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{garage, user};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub rating: i16,
    pub user_id: Option<Uuid>,
    pub garage_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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

/// New review payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub title: String,
    pub body: String,
    pub rating: i16,
    pub user_id: Option<Uuid>,
    pub garage_id: Option<Uuid>,
}

pub async fn create(db: &DatabaseConnection, input: NewReview) -> Result<Model, errors::ModelError> {
    if !(0..=5).contains(&input.rating) { return Err(errors::ModelError::Validation("rating must be 0..=5".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        body: Set(input.body),
        rating: Set(input.rating),
        user_id: Set(input.user_id),
        garage_id: Set(input.garage_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
