use std::sync::Arc;

use fastlink_app::application::services::{FETCH_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE};

mod common;

use common::{workflow, FakePortal, RecordingSender, NOT_CHECKED_IN_PAGE};

#[tokio::test]
async fn already_checked_in_skips_submission() {
    let portal = Arc::new(FakePortal::default());

    let report = workflow(portal.clone(), None).run(false).await.unwrap();

    assert_eq!(
        report,
        "Today Used: 1.35GB\n\
         Unused Traffic: 150GB\n\
         Days Until Reset: 15 days\n\
         Next Reset: 2024-04-10\n\
         Check-in Status: Already checked in for today."
    );
    assert_eq!(portal.calls(), vec!["login", "fetch_status_page"]);
}

#[tokio::test]
async fn pending_check_in_is_submitted() {
    let portal = Arc::new(FakePortal::with_page(NOT_CHECKED_IN_PAGE));

    let report = workflow(portal.clone(), None).run(false).await.unwrap();

    assert_eq!(
        portal.calls(),
        vec!["login", "fetch_status_page", "submit_checkin"]
    );
    assert!(report.contains("Today Used: 0B"));
    assert!(report.contains("Next Reset: 2024-03-25"));
    assert!(report.ends_with("Check-in Status: Got 512MB"));
}

#[tokio::test]
async fn login_failure_is_terminal() {
    let portal = Arc::new(FakePortal {
        login_token: None,
        ..FakePortal::default()
    });

    let report = workflow(portal.clone(), None).run(false).await.unwrap();

    assert_eq!(report, LOGIN_FAILED_MESSAGE);
    assert_eq!(portal.calls(), vec!["login"]);
}

#[tokio::test]
async fn missing_status_page_is_terminal() {
    let portal = Arc::new(FakePortal {
        page: None,
        ..FakePortal::default()
    });

    let report = workflow(portal.clone(), None).run(false).await.unwrap();

    assert_eq!(report, FETCH_FAILED_MESSAGE);
    assert_eq!(portal.calls(), vec!["login", "fetch_status_page"]);
}

#[tokio::test]
async fn unreadable_status_page_is_a_fetch_failure() {
    let portal = Arc::new(FakePortal::with_page("   "));

    let report = workflow(portal.clone(), None).run(false).await.unwrap();

    assert_eq!(report, FETCH_FAILED_MESSAGE);
    assert!(!portal.calls().contains(&"submit_checkin"));
}

#[tokio::test]
async fn transport_error_is_returned() {
    let portal = Arc::new(FakePortal {
        login_transport_error: true,
        ..FakePortal::default()
    });

    let error = workflow(portal, None).run(false).await.unwrap_err();

    assert!(error.to_string().contains("connection refused"));
}

#[tokio::test]
async fn configured_relay_gets_already_checked_in_summary() {
    let portal = Arc::new(FakePortal::default());
    let sender = Arc::new(RecordingSender::default());

    workflow(portal, Some(sender.clone())).run(false).await.unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Fastlink Status");
    assert_eq!(sent[0].group.as_deref(), Some("fastlink"));
    assert_eq!(
        sent[0].content,
        "Already checked in | Used: 1.35GB | Remaining: 150GB | Next Reset: 2024-04-10"
    );
}

#[tokio::test]
async fn configured_relay_gets_check_in_message() {
    let portal = Arc::new(FakePortal::with_page(NOT_CHECKED_IN_PAGE));
    let sender = Arc::new(RecordingSender::default());

    workflow(portal, Some(sender.clone())).run(false).await.unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].content.starts_with("Got 512MB | Used: 0B |"));
}

#[tokio::test]
async fn no_notification_on_terminal_failure() {
    let portal = Arc::new(FakePortal {
        login_token: None,
        ..FakePortal::default()
    });
    let sender = Arc::new(RecordingSender::default());

    workflow(portal, Some(sender.clone())).run(true).await.unwrap();

    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn forced_notification_without_relay_still_reports() {
    let portal = Arc::new(FakePortal::default());

    let report = workflow(portal, None).run(true).await.unwrap();

    assert!(report.ends_with("Check-in Status: Already checked in for today."));
}
