//! Unit tests for member entity

use uuid::Uuid;

use crate::domain::entities::member::{Member, MemberRole};

#[test]
fn test_new_member_defaults() {
    let member = Member::new(Uuid::new_v4(), " Alice@Example.COM ", "Alice");

    assert_eq!(member.email, "alice@example.com");
    assert_eq!(member.role, MemberRole::Standard);
    assert!(member.notifications_enabled);
    assert!(!member.is_onboarded());
    assert!(!member.is_admin());
}

#[test]
fn test_onboarding_sets_contact_info() {
    let mut member = Member::new(Uuid::new_v4(), "bob@example.com", "Bob");
    member.complete_onboarding("  555-0100, ask for Bob ");

    assert!(member.is_onboarded());
    assert_eq!(member.contact_info.as_deref(), Some("555-0100, ask for Bob"));
}

#[test]
fn test_role_serialization() {
    let json = serde_json::to_string(&MemberRole::Standard).unwrap();
    assert_eq!(json, "\"standard\"");
    assert_eq!("admin".parse::<MemberRole>().unwrap(), MemberRole::Admin);
}
