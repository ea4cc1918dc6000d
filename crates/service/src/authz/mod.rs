//! Authorization engine: per-resource ownership policies.
//!
//! Every read and mutation in the API layer goes through [`authorize`] with
//! an [`Actor`] snapshot (or `None` for anonymous requests), a resource
//! subject view carrying only the owner references, and the action being
//! attempted. Decisions are pure and side-effect free; all data is loaded
//! up front, so a decision never touches the database.
//!
//! The uniform algorithm, applied by every policy module:
//! 1. anonymous actors are denied;
//! 2. `ROLE_ADMIN` is allowed unconditionally;
//! 3. a subject whose owner references are entirely absent is denied
//!    (fail-closed);
//! 4. otherwise the per-resource ownership predicate decides.

pub mod actor;
pub mod subject;
pub mod policies;

use tracing::debug;

pub use actor::{Actor, Membership, Role};
pub use subject::{
    AddressSubject, AppointmentSubject, GarageSubject, ReviewSubject, ScheduleSubject,
    ServiceTypeSubject, UserSubject, VehicleSubject,
};

/// Actions on a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction { Browse, Read, Edit, Add, Delete }

/// Actions on an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressAction { Add, Read, Edit, Delete }

/// Actions on a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleAction { Read, Edit, Add, Delete }

/// Actions on an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction { Read, Edit, Add, Delete }

/// Actions on a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction { Add, Edit, Delete }

/// Actions on a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction { Edit, Add, Delete }

/// Actions on a service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTypeAction { Edit, Add, Delete }

/// Actions on a garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarageAction { Browse, Edit, Add, Delete }

/// One (action, subject) pair per resource type. The static registry that
/// routes a request to its policy module.
#[derive(Debug, Clone, Copy)]
pub enum AccessRequest<'a> {
    User(UserAction, &'a UserSubject),
    Address(AddressAction, &'a AddressSubject),
    Vehicle(VehicleAction, &'a VehicleSubject),
    Appointment(AppointmentAction, &'a AppointmentSubject),
    Review(ReviewAction, &'a ReviewSubject),
    Schedule(ScheduleAction, &'a ScheduleSubject),
    ServiceType(ServiceTypeAction, &'a ServiceTypeSubject),
    Garage(GarageAction, &'a GarageSubject),
}

impl AccessRequest<'_> {
    fn resource(&self) -> &'static str {
        match self {
            AccessRequest::User(..) => "user",
            AccessRequest::Address(..) => "address",
            AccessRequest::Vehicle(..) => "vehicle",
            AccessRequest::Appointment(..) => "appointment",
            AccessRequest::Review(..) => "review",
            AccessRequest::Schedule(..) => "schedule",
            AccessRequest::ServiceType(..) => "service_type",
            AccessRequest::Garage(..) => "garage",
        }
    }
}

/// Decide whether `actor` may perform the requested action. `None` is an
/// anonymous request and is always denied.
pub fn authorize(actor: Option<&Actor>, request: &AccessRequest<'_>) -> bool {
    let Some(actor) = actor else {
        debug!(resource = request.resource(), "deny: anonymous actor");
        return false;
    };

    let allowed = match request {
        AccessRequest::User(action, subject) => policies::user::allow(actor, *action, subject),
        AccessRequest::Address(action, subject) => policies::address::allow(actor, *action, subject),
        AccessRequest::Vehicle(action, subject) => policies::vehicle::allow(actor, *action, subject),
        AccessRequest::Appointment(action, subject) => policies::appointment::allow(actor, *action, subject),
        AccessRequest::Review(action, subject) => policies::review::allow(actor, *action, subject),
        AccessRequest::Schedule(action, subject) => policies::schedule::allow(actor, *action, subject),
        AccessRequest::ServiceType(action, subject) => policies::service_type::allow(actor, *action, subject),
        AccessRequest::Garage(action, subject) => policies::garage::allow(actor, *action, subject),
    };

    debug!(actor = %actor.id, resource = request.resource(), allowed, "authorization decision");
    allowed
}
