use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{garage, service_type, user};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub details: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub user_id: Option<Uuid>,
    pub garage_id: Option<Uuid>,
    pub type_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Garage,
    ServiceType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Garage => Entity::belongs_to(garage::Entity).from(Column::GarageId).to(garage::Column::Id).into(),
            Relation::ServiceType => Entity::belongs_to(service_type::Entity).from(Column::TypeId).to(service_type::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// New appointment payload, before persistence. Carries the intended owner
/// references so the authorization layer can evaluate `add` on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub title: String,
    pub details: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub user_id: Option<Uuid>,
    pub garage_id: Option<Uuid>,
    pub type_id: Option<Uuid>,
}

pub async fn create(db: &DatabaseConnection, input: NewAppointment) -> Result<Model, errors::ModelError> {
    if input.title.trim().is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    if input.end_date < input.start_date { return Err(errors::ModelError::Validation("end date before start date".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        details: Set(input.details),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        user_id: Set(input.user_id),
        garage_id: Set(input.garage_id),
        type_id: Set(input.type_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
