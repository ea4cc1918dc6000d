//! Garage policy.
//!
//! Browsing a garage's back office is open to any of its members; edit,
//! add and delete are reserved for the designated primary owner, which is
//! stored on the garage instead of being inferred from membership order.
use crate::authz::{Actor, GarageAction, GarageSubject};

pub fn allow(actor: &Actor, action: GarageAction, subject: &GarageSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    // Fail closed on garages without a designated owner
    let Some(primary_owner_id) = subject.primary_owner_id else {
        return false;
    };
    match action {
        GarageAction::Browse => actor.belongs_to(subject.id),
        GarageAction::Edit | GarageAction::Add | GarageAction::Delete => {
            primary_owner_id == actor.id
        }
    }
}
