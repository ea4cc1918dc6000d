//! Address policy.
//!
//! An address belongs either to the actor directly or to one of the
//! actor's garages; both grant access. The subject carries no owner
//! reference of its own, so the predicate compares against the actor's
//! side of the relation.
use crate::authz::{Actor, AddressAction, AddressSubject};

pub fn allow(actor: &Actor, action: AddressAction, subject: &AddressSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    match action {
        AddressAction::Add => is_own_address(actor, subject),
        AddressAction::Read | AddressAction::Edit | AddressAction::Delete => {
            is_own_address(actor, subject) || actor.manages_address(subject.id)
        }
    }
}

fn is_own_address(actor: &Actor, subject: &AddressSubject) -> bool {
    actor.address_id == Some(subject.id)
}
