//! Schedule policy: only staff of the owning garage may manage opening hours.
use crate::authz::{Actor, ScheduleAction, ScheduleSubject};

pub fn allow(actor: &Actor, action: ScheduleAction, subject: &ScheduleSubject) -> bool {
    if actor.is_admin() {
        return true;
    }
    let Some(garage_id) = subject.garage_id else {
        return false;
    };
    match action {
        ScheduleAction::Edit | ScheduleAction::Add | ScheduleAction::Delete => {
            actor.belongs_to(garage_id)
        }
    }
}
