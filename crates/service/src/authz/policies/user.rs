//! User policy: an account is only visible and editable to itself.
use crate::authz::{Actor, UserAction, UserSubject};

pub fn allow(actor: &Actor, action: UserAction, subject: &UserSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    match action {
        UserAction::Browse
        | UserAction::Read
        | UserAction::Edit
        | UserAction::Add
        | UserAction::Delete => is_self(actor, subject),
    }
}

fn is_self(actor: &Actor, subject: &UserSubject) -> bool {
    subject.id == actor.id
}
