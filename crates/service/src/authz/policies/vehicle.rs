//! Vehicle policy: only the owning user may act on a vehicle.
use crate::authz::{Actor, VehicleAction, VehicleSubject};

pub fn allow(actor: &Actor, action: VehicleAction, subject: &VehicleSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    // Fail closed on ownerless vehicles
    let Some(owner_id) = subject.owner_id else {
        return false;
    };
    match action {
        VehicleAction::Read
        | VehicleAction::Edit
        | VehicleAction::Add
        | VehicleAction::Delete => owner_id == actor.id,
    }
}
