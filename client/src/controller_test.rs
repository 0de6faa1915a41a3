#![cfg(not(feature = "csr"))]

use leptos::reactive::owner::Owner;
use roster::{Activity, ActivityCollection, MutationReply};

use super::*;
use crate::net::api::Reply;
use crate::state::activities::{LoadPhase, ListDisplay};

fn with_controller(f: impl FnOnce(BoardController)) {
    let owner = Owner::new();
    owner.with(|| f(BoardController::new(BoardConfig::default())));
}

fn reply(ok: bool, status: u16, json: &str) -> Result<Reply, ApiError> {
    let body: MutationReply = serde_json::from_str(json).expect("fixture json");
    Ok(Reply { ok, status, body })
}

fn chess(participants: &[&str]) -> ActivityCollection {
    [(
        "Chess Club".to_owned(),
        Activity {
            description: "Learn strategies".to_owned(),
            schedule: "Fridays".to_owned(),
            max_participants: 12,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        },
    )]
    .into_iter()
    .collect()
}

#[test]
fn declined_unregister_sends_nothing_and_shows_nothing() {
    with_controller(|board| {
        board.unregister(UnregisterTarget { email: "jane@x.com".to_owned(), activity: "Chess Club".to_owned() });
        assert!(!board.banner().get_untracked().is_visible());
        assert_eq!(board.activities().get_untracked().issued_seq(), 0);
    });
}

#[test]
fn signup_success_settles_with_banner_reset_and_refresh() {
    with_controller(|board| {
        board.form().set(SignupFormState { email: "jane@x.com".to_owned(), activity: "Chess Club".to_owned() });
        let resolution =
            MutationKind::Signup.resolve(reply(true, 200, r#"{"message": "Signed up Jane for Chess Club"}"#));
        board.settle(MutationKind::Signup, resolution);

        let banner = board.banner().get_untracked();
        assert!(banner.is_visible());
        assert_eq!(banner.text(), "Signed up Jane for Chess Club");
        assert_eq!(banner.kind(), BannerKind::Success);
        assert_eq!(board.form().get_untracked(), SignupFormState::default());
        assert_eq!(board.activities().get_untracked().issued_seq(), 1);
        assert_eq!(board.activities().get_untracked().phase(), LoadPhase::Loading);
    });
}

#[test]
fn signup_rejection_keeps_form_and_skips_refresh() {
    with_controller(|board| {
        let filled = SignupFormState { email: "jane@x.com".to_owned(), activity: "Chess Club".to_owned() };
        board.form().set(filled.clone());
        let resolution = MutationKind::Signup.resolve(reply(false, 400, r#"{"detail": "Activity full"}"#));
        board.settle(MutationKind::Signup, resolution);

        let banner = board.banner().get_untracked();
        assert_eq!(banner.text(), "Activity full");
        assert_eq!(banner.kind(), BannerKind::Error);
        assert_eq!(board.form().get_untracked(), filled);
        assert_eq!(board.activities().get_untracked().issued_seq(), 0);
    });
}

#[test]
fn unregister_success_settles_with_banner_and_refresh() {
    with_controller(|board| {
        let resolution = MutationKind::Unregister
            .resolve(reply(true, 200, r#"{"message": "Removed jane@x.com from Chess Club"}"#));
        board.settle(MutationKind::Unregister, resolution);

        let banner = board.banner().get_untracked();
        assert_eq!(banner.text(), "Removed jane@x.com from Chess Club");
        assert_eq!(banner.kind(), BannerKind::Success);
        assert_eq!(board.activities().get_untracked().issued_seq(), 1);
    });
}

#[test]
fn render_applies_fresh_and_drops_stale_responses() {
    with_controller(|board| {
        board.refresh();
        board.refresh();
        board.render(2, Ok(chess(&["jane@x.com"])));
        board.render(1, Ok(chess(&[])));

        let state = board.activities().get_untracked();
        let ListDisplay::Activities(shown) = state.display() else {
            panic!("expected activities");
        };
        assert_eq!(shown, &chess(&["jane@x.com"]));
        assert_eq!(state.phase(), LoadPhase::Loaded);
    });
}

#[test]
fn render_clears_selection_that_is_no_longer_offered() {
    with_controller(|board| {
        board.form().set(SignupFormState { email: "jane@x.com".to_owned(), activity: "Art Studio".to_owned() });
        board.refresh();
        board.render(1, Ok(chess(&[])));

        let form = board.form().get_untracked();
        assert_eq!(form.activity, "");
        assert_eq!(form.email, "jane@x.com");
    });
}

#[test]
fn render_failure_keeps_selection() {
    with_controller(|board| {
        board.refresh();
        board.render(1, Ok(chess(&[])));
        board.form().set(SignupFormState { email: String::new(), activity: "Chess Club".to_owned() });
        board.refresh();
        board.render(2, Err(ApiError::Transport("offline".to_owned())));

        assert_eq!(board.form().get_untracked().activity, "Chess Club");
        assert_eq!(board.activities().get_untracked().options(), ["Chess Club".to_owned()]);
    });
}

#[test]
fn render_failure_shows_static_message() {
    with_controller(|board| {
        board.refresh();
        board.render(1, Err(ApiError::Transport("offline".to_owned())));
        assert_eq!(board.activities().get_untracked().display(), ListDisplay::Failed);
    });
}

#[test]
fn show_message_replaces_previous_banner() {
    with_controller(|board| {
        board.show_message("first".to_owned(), BannerKind::Success, Duration::from_secs(5));
        board.show_message("second".to_owned(), BannerKind::Error, Duration::from_secs(4));
        let banner = board.banner().get_untracked();
        assert_eq!(banner.text(), "second");
        assert_eq!(banner.kind(), BannerKind::Error);
    });
}
