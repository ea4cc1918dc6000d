//! Service type policy: only staff of the owning garage may manage the
//! services it offers.
use crate::authz::{Actor, ServiceTypeAction, ServiceTypeSubject};

pub fn allow(actor: &Actor, action: ServiceTypeAction, subject: &ServiceTypeSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    let Some(garage_id) = subject.garage_id else {
        return false;
    };
    match action {
        ServiceTypeAction::Edit | ServiceTypeAction::Add | ServiceTypeAction::Delete => {
            actor.belongs_to(garage_id)
        }
    }
}
