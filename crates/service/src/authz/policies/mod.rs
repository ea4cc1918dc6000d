//! One policy module per resource type, each exposing
//! `allow(actor, action, subject) -> bool` with the same shape:
//! admin bypass, fail-closed owner check, then the ownership predicate.

pub mod address;
pub mod appointment;
pub mod garage;
pub mod review;
pub mod schedule;
pub mod service_type;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::authz::{
        authorize, AccessRequest, Actor, AddressAction, AddressSubject, AppointmentAction,
        AppointmentSubject, GarageAction, GarageSubject, Membership, ReviewAction, ReviewSubject,
        Role, ScheduleAction, ScheduleSubject, ServiceTypeAction, ServiceTypeSubject, UserAction,
        UserSubject, VehicleAction, VehicleSubject,
    };

    fn plain_actor() -> Actor {
        Actor { id: Uuid::new_v4(), roles: vec![Role::User], address_id: None, memberships: vec![] }
    }

    fn admin_actor() -> Actor {
        Actor { roles: vec![Role::Admin, Role::User], ..plain_actor() }
    }

    fn staff_of(garage_id: Uuid, address_id: Uuid) -> Actor {
        Actor {
            roles: vec![Role::Member, Role::User],
            memberships: vec![Membership { garage_id, address_id }],
            ..plain_actor()
        }
    }

    #[test]
    fn anonymous_is_denied_everywhere() {
        let vehicle = VehicleSubject { owner_id: Some(Uuid::new_v4()) };
        let user = UserSubject { id: Uuid::new_v4() };
        let garage = GarageSubject { id: Uuid::new_v4(), primary_owner_id: Some(Uuid::new_v4()) };
        assert!(!authorize(None, &AccessRequest::Vehicle(VehicleAction::Read, &vehicle)));
        assert!(!authorize(None, &AccessRequest::User(UserAction::Browse, &user)));
        assert!(!authorize(None, &AccessRequest::Garage(GarageAction::Browse, &garage)));
    }

    #[test]
    fn admin_is_allowed_everywhere_regardless_of_ownership() {
        let admin = admin_actor();
        let foreign_vehicle = VehicleSubject { owner_id: Some(Uuid::new_v4()) };
        let ownerless_vehicle = VehicleSubject { owner_id: None };
        let foreign_garage = GarageSubject { id: Uuid::new_v4(), primary_owner_id: None };
        let schedule = ScheduleSubject { garage_id: None };
        assert!(authorize(Some(&admin), &AccessRequest::Vehicle(VehicleAction::Delete, &foreign_vehicle)));
        assert!(authorize(Some(&admin), &AccessRequest::Vehicle(VehicleAction::Edit, &ownerless_vehicle)));
        assert!(authorize(Some(&admin), &AccessRequest::Garage(GarageAction::Delete, &foreign_garage)));
        assert!(authorize(Some(&admin), &AccessRequest::Schedule(ScheduleAction::Edit, &schedule)));
    }

    #[test]
    fn missing_owner_is_denied_for_non_admins() {
        let actor = plain_actor();
        let vehicle = VehicleSubject { owner_id: None };
        let review = ReviewSubject { owner_id: None };
        let appointment = AppointmentSubject { owner_id: None, garage_id: None };
        let schedule = ScheduleSubject { garage_id: None };
        let service_type = ServiceTypeSubject { garage_id: None };
        let garage = GarageSubject { id: Uuid::new_v4(), primary_owner_id: None };
        assert!(!authorize(Some(&actor), &AccessRequest::Vehicle(VehicleAction::Read, &vehicle)));
        assert!(!authorize(Some(&actor), &AccessRequest::Review(ReviewAction::Edit, &review)));
        assert!(!authorize(Some(&actor), &AccessRequest::Appointment(AppointmentAction::Read, &appointment)));
        assert!(!authorize(Some(&actor), &AccessRequest::Schedule(ScheduleAction::Add, &schedule)));
        assert!(!authorize(Some(&actor), &AccessRequest::ServiceType(ServiceTypeAction::Delete, &service_type)));
        assert!(!authorize(Some(&actor), &AccessRequest::Garage(GarageAction::Browse, &garage)));
    }

    #[test]
    fn vehicle_ownership_flips_the_decision() {
        let actor = plain_actor();
        let own = VehicleSubject { owner_id: Some(actor.id) };
        let foreign = VehicleSubject { owner_id: Some(Uuid::new_v4()) };
        for action in [VehicleAction::Read, VehicleAction::Edit, VehicleAction::Add, VehicleAction::Delete] {
            assert!(authorize(Some(&actor), &AccessRequest::Vehicle(action, &own)));
            assert!(!authorize(Some(&actor), &AccessRequest::Vehicle(action, &foreign)));
        }
    }

    #[test]
    fn user_can_only_act_on_itself() {
        let actor = plain_actor();
        let own = UserSubject { id: actor.id };
        let other = UserSubject { id: Uuid::new_v4() };
        assert!(authorize(Some(&actor), &AccessRequest::User(UserAction::Read, &own)));
        assert!(authorize(Some(&actor), &AccessRequest::User(UserAction::Delete, &own)));
        assert!(!authorize(Some(&actor), &AccessRequest::User(UserAction::Read, &other)));
        assert!(!authorize(Some(&actor), &AccessRequest::User(UserAction::Edit, &other)));
    }

    #[test]
    fn owner_reads_own_appointment() {
        // actor = User{id: A, no memberships}, appointment owned by A
        let actor = plain_actor();
        let subject = AppointmentSubject { owner_id: Some(actor.id), garage_id: None };
        assert!(authorize(Some(&actor), &AccessRequest::Appointment(AppointmentAction::Read, &subject)));
    }

    #[test]
    fn non_member_cannot_read_foreign_appointment() {
        // appointment owned by someone else, in a garage the actor is not part of
        let actor = plain_actor();
        let subject = AppointmentSubject { owner_id: Some(Uuid::new_v4()), garage_id: Some(Uuid::new_v4()) };
        assert!(!authorize(Some(&actor), &AccessRequest::Appointment(AppointmentAction::Read, &subject)));
    }

    #[test]
    fn garage_staff_reads_garage_appointments() {
        let garage_id = Uuid::new_v4();
        let staff = staff_of(garage_id, Uuid::new_v4());
        let subject = AppointmentSubject { owner_id: Some(Uuid::new_v4()), garage_id: Some(garage_id) };
        assert!(authorize(Some(&staff), &AccessRequest::Appointment(AppointmentAction::Edit, &subject)));
    }

    #[test]
    fn review_author_only() {
        let actor = plain_actor();
        let own = ReviewSubject { owner_id: Some(actor.id) };
        let foreign = ReviewSubject { owner_id: Some(Uuid::new_v4()) };
        assert!(authorize(Some(&actor), &AccessRequest::Review(ReviewAction::Edit, &own)));
        assert!(!authorize(Some(&actor), &AccessRequest::Review(ReviewAction::Delete, &foreign)));
    }

    #[test]
    fn schedule_and_service_type_require_membership() {
        let garage_id = Uuid::new_v4();
        let staff = staff_of(garage_id, Uuid::new_v4());
        let outsider = plain_actor();
        let schedule = ScheduleSubject { garage_id: Some(garage_id) };
        let service_type = ServiceTypeSubject { garage_id: Some(garage_id) };
        assert!(authorize(Some(&staff), &AccessRequest::Schedule(ScheduleAction::Edit, &schedule)));
        assert!(authorize(Some(&staff), &AccessRequest::ServiceType(ServiceTypeAction::Add, &service_type)));
        assert!(!authorize(Some(&outsider), &AccessRequest::Schedule(ScheduleAction::Edit, &schedule)));
        assert!(!authorize(Some(&outsider), &AccessRequest::ServiceType(ServiceTypeAction::Add, &service_type)));
    }

    #[test]
    fn garage_browse_for_members_edit_for_primary_owner() {
        let garage_id = Uuid::new_v4();
        let owner = plain_actor();
        let mut member = staff_of(garage_id, Uuid::new_v4());
        member.roles = vec![Role::Member, Role::User];
        let subject = GarageSubject { id: garage_id, primary_owner_id: Some(owner.id) };

        // A plain member can browse but not edit or delete
        assert!(authorize(Some(&member), &AccessRequest::Garage(GarageAction::Browse, &subject)));
        assert!(!authorize(Some(&member), &AccessRequest::Garage(GarageAction::Edit, &subject)));
        assert!(!authorize(Some(&member), &AccessRequest::Garage(GarageAction::Delete, &subject)));

        // The primary owner can edit even without browsing membership
        assert!(authorize(Some(&owner), &AccessRequest::Garage(GarageAction::Edit, &subject)));
        assert!(authorize(Some(&owner), &AccessRequest::Garage(GarageAction::Delete, &subject)));
    }

    #[test]
    fn address_owned_directly_or_through_garage() {
        let address_id = Uuid::new_v4();
        let garage_address_id = Uuid::new_v4();

        let mut owner = plain_actor();
        owner.address_id = Some(address_id);
        let subject = AddressSubject { id: address_id };
        assert!(authorize(Some(&owner), &AccessRequest::Address(AddressAction::Read, &subject)));
        assert!(authorize(Some(&owner), &AccessRequest::Address(AddressAction::Add, &subject)));

        let staff = staff_of(Uuid::new_v4(), garage_address_id);
        let garage_subject = AddressSubject { id: garage_address_id };
        assert!(authorize(Some(&staff), &AccessRequest::Address(AddressAction::Edit, &garage_subject)));
        // Add requires the actor's own address, garage management is not enough
        assert!(!authorize(Some(&staff), &AccessRequest::Address(AddressAction::Add, &garage_subject)));

        let stranger = plain_actor();
        assert!(!authorize(Some(&stranger), &AccessRequest::Address(AddressAction::Read, &subject)));
    }
}
