//! Appointment policy.
//!
//! The booking user and the staff of the booked garage both get access.
//! Garage access is an explicit membership test against the actor's
//! membership snapshot.
use crate::authz::{Actor, AppointmentAction, AppointmentSubject};

pub fn allow(actor: &Actor, action: AppointmentAction, subject: &AppointmentSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    // Fail closed when neither owner reference is present
    if subject.owner_id.is_none() && subject.garage_id.is_none() {
        return false;
    }
    match action {
        AppointmentAction::Read
        | AppointmentAction::Edit
        | AppointmentAction::Add
        | AppointmentAction::Delete => owns_or_staffs(actor, subject),
    }
}

fn owns_or_staffs(actor: &Actor, subject: &AppointmentSubject) -> bool {
    if subject.owner_id == Some(actor.id) {
        return true;
    }
    subject.garage_id.is_some_and(|g| actor.belongs_to(g))
}
