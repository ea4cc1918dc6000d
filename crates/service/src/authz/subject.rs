//! Subject views: the owner references a policy needs, nothing more.
//!
//! Built from persisted entities via `From<&Model>`, or by hand for `add`
//! requests where the candidate is not yet persisted but already carries
//! its intended owner references.
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSubject {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSubject {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSubject {
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentSubject {
    pub owner_id: Option<Uuid>,
    pub garage_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSubject {
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSubject {
    pub garage_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTypeSubject {
    pub garage_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GarageSubject {
    pub id: Uuid,
    pub primary_owner_id: Option<Uuid>,
}

impl From<&models::user::Model> for UserSubject {
    fn from(m: &models::user::Model) -> Self {
        Self { id: m.id }
    }
}

impl From<&models::address::Model> for AddressSubject {
    fn from(m: &models::address::Model) -> Self {
        Self { id: m.id }
    }
}

impl From<&models::vehicle::Model> for VehicleSubject {
    fn from(m: &models::vehicle::Model) -> Self {
        Self { owner_id: m.user_id }
    }
}

impl From<&models::appointment::Model> for AppointmentSubject {
    fn from(m: &models::appointment::Model) -> Self {
        Self { owner_id: m.user_id, garage_id: m.garage_id }
    }
}

impl From<&models::appointment::NewAppointment> for AppointmentSubject {
    fn from(m: &models::appointment::NewAppointment) -> Self {
        Self { owner_id: m.user_id, garage_id: m.garage_id }
    }
}

impl From<&models::review::Model> for ReviewSubject {
    fn from(m: &models::review::Model) -> Self {
        Self { owner_id: m.user_id }
    }
}

impl From<&models::review::NewReview> for ReviewSubject {
    fn from(m: &models::review::NewReview) -> Self {
        Self { owner_id: m.user_id }
    }
}

impl From<&models::schedule::Model> for ScheduleSubject {
    fn from(m: &models::schedule::Model) -> Self {
        Self { garage_id: m.garage_id }
    }
}

impl From<&models::schedule::NewSchedule> for ScheduleSubject {
    fn from(m: &models::schedule::NewSchedule) -> Self {
        Self { garage_id: m.garage_id }
    }
}

impl From<&models::service_type::Model> for ServiceTypeSubject {
    fn from(m: &models::service_type::Model) -> Self {
        Self { garage_id: m.garage_id }
    }
}

impl From<&models::service_type::NewServiceType> for ServiceTypeSubject {
    fn from(m: &models::service_type::NewServiceType) -> Self {
        Self { garage_id: m.garage_id }
    }
}

impl From<&models::garage::Model> for GarageSubject {
    fn from(m: &models::garage::Model) -> Self {
        Self { id: m.id, primary_owner_id: m.primary_owner_id }
    }
}
