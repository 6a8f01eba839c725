//! Tests for interaction eligibility and viewer-relative views

use chrono::Utc;
use repulink::core::models::{Interaction, InteractionStatus, Rating};
use repulink::core::services::{Direction, Eligibility, InteractionView, PendingRole, has_rated};
use test_case::test_case;

fn interaction(status: InteractionStatus) -> Interaction {
    Interaction {
        id: "i1".to_string(),
        initiator_id: "alice".to_string(),
        target_id: "bob".to_string(),
        message: Some("coffee?".to_string()),
        status,
        created_at: Utc::now(),
    }
}

fn rating_by(rater_id: &str) -> Rating {
    Rating {
        id: format!("r-{rater_id}"),
        interaction_id: "i1".to_string(),
        rater_id: rater_id.to_string(),
        rating: 4,
        comment: None,
        created_at: Utc::now(),
        rater_email: format!("{rater_id}@example.com"),
        rater_full_name: None,
    }
}

#[test_case(InteractionStatus::Pending, "bob", Eligibility::Pending(PendingRole::AsTarget) ; "target of pending")]
#[test_case(InteractionStatus::Pending, "alice", Eligibility::Pending(PendingRole::AsInitiator) ; "initiator of pending")]
#[test_case(InteractionStatus::Pending, "carol", Eligibility::Pending(PendingRole::Observer) ; "outsider of pending")]
#[test_case(InteractionStatus::Accepted, "alice", Eligibility::Accepted { has_rated: false } ; "accepted not rated")]
#[test_case(InteractionStatus::Denied, "bob", Eligibility::Denied ; "denied")]
fn test_compute(status: InteractionStatus, viewer: &str, expected: Eligibility) {
    assert_eq!(Eligibility::compute(&interaction(status), viewer, &[]), expected);
}

#[test_case(Eligibility::Pending(PendingRole::AsTarget), true, false ; "target may respond")]
#[test_case(Eligibility::Pending(PendingRole::AsInitiator), false, false ; "initiator waits")]
#[test_case(Eligibility::Pending(PendingRole::Observer), false, false ; "observer does nothing")]
#[test_case(Eligibility::Accepted { has_rated: false }, false, true ; "accepted may rate")]
#[test_case(Eligibility::Accepted { has_rated: true }, false, false ; "already rated")]
#[test_case(Eligibility::Denied, false, false ; "denied is final")]
fn test_allowed_actions(eligibility: Eligibility, respond: bool, rate: bool) {
    assert_eq!(eligibility.can_respond(), respond);
    assert_eq!(eligibility.can_rate(), rate);
}

#[test]
fn test_own_rating_hides_rating_form() {
    let accepted = interaction(InteractionStatus::Accepted);
    let ratings = [rating_by("bob"), rating_by("alice")];

    let eligibility = Eligibility::compute(&accepted, "alice", &ratings);

    assert_eq!(eligibility, Eligibility::Accepted { has_rated: true });
    assert!(!eligibility.can_rate());
    assert!(eligibility.shows_ratings());
}

#[test]
fn test_other_party_rating_does_not_count() {
    let accepted = interaction(InteractionStatus::Accepted);
    let eligibility = Eligibility::compute(&accepted, "alice", &[rating_by("bob")]);
    assert!(eligibility.can_rate());
}

#[test]
fn test_ratings_ignored_unless_accepted() {
    let pending = interaction(InteractionStatus::Pending);
    let eligibility = Eligibility::compute(&pending, "bob", &[rating_by("bob")]);
    assert_eq!(eligibility, Eligibility::Pending(PendingRole::AsTarget));
    assert!(!eligibility.shows_ratings());
}

#[test]
fn test_has_rated() {
    assert!(!has_rated(&[], "alice"));
    assert!(has_rated(&[rating_by("alice")], "alice"));
    assert!(!has_rated(&[rating_by("bob")], "alice"));
}

// =============================================================================
// VIEW TESTS
// =============================================================================

#[test]
fn test_view_from_initiator_side() {
    let i = interaction(InteractionStatus::Pending);
    let view = InteractionView::new(&i, "alice", &[]);

    assert_eq!(view.direction, Direction::Sent);
    assert_eq!(view.counterpart_id, "bob");
    assert!(!view.eligibility.can_respond());
}

#[test]
fn test_view_from_target_side() {
    let i = interaction(InteractionStatus::Pending);
    let view = InteractionView::new(&i, "bob", &[]);

    assert_eq!(view.direction, Direction::Received);
    assert_eq!(view.counterpart_id, "alice");
    assert!(view.eligibility.can_respond());
}

#[test]
fn test_short_counterpart() {
    let mut i = interaction(InteractionStatus::Denied);
    i.target_id = "0123456789abcdef".to_string();

    let view = InteractionView::new(&i, "alice", &[]);
    assert_eq!(view.short_counterpart(), "01234567");

    let view = InteractionView::new(&i, "0123456789abcdef", &[]);
    assert_eq!(view.short_counterpart(), "alice");
}

#[test]
fn test_direction_display() {
    assert_eq!(Direction::Sent.to_string(), "Sent");
    assert_eq!(Direction::Received.to_string(), "Received");
}
