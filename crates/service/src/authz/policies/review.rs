//! Review policy: only the author may add, edit or delete a review.
//! Reviews have no per-instance read action; listings are public or
//! admin-gated at the endpoint.
use crate::authz::{Actor, ReviewAction, ReviewSubject};

pub fn allow(actor: &Actor, action: ReviewAction, subject: &ReviewSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    let Some(owner_id) = subject.owner_id else {
        return false;
    };
    match action {
        ReviewAction::Add | ReviewAction::Edit | ReviewAction::Delete => owner_id == actor.id,
    }
}
