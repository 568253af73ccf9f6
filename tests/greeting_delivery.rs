//! Session-triggered greeting scheduling and delivery.

mod common;

use common::{SERVER_ADDRESS, harness};
use motd_service::commands::{CommandSession, SET_MOTD_CODE};
use motd_service::session::{SessionEvent, SessionInfo};
use std::time::Duration;

fn created(address: &str) -> SessionEvent {
    SessionEvent::Created(SessionInfo::new(address))
}

#[tokio::test]
async fn test_new_session_gets_one_delayed_greeting() -> anyhow::Result<()> {
    let mut h = harness();
    h.service.state().set_subject("S");
    h.service.state().set_message("B");
    h.service.state().set_enabled(true);

    h.sessions.dispatch(&created("alice@chat.example.org/desk"));

    assert_eq!(h.scheduler.pending_count(), 1);
    assert_eq!(h.scheduler.delays(), vec![Duration::from_secs(5)]);
    // Nothing is routed until the timer fires.
    assert!(h.deliveries.try_recv().is_err());

    h.scheduler.fire_all().await;
    let msg = h.deliveries.try_recv()?;
    assert_eq!(msg.to, "alice@chat.example.org/desk");
    assert_eq!(msg.from, SERVER_ADDRESS);
    assert_eq!(msg.subject, "S");
    assert_eq!(msg.body, "B");
    assert!(h.deliveries.try_recv().is_err());
    Ok(())
}

#[tokio::test]
async fn test_each_session_gets_an_independent_greeting() -> anyhow::Result<()> {
    let mut h = harness();
    h.service.state().set_enabled(true);

    h.sessions.dispatch(&created("alice@chat.example.org"));
    h.sessions.dispatch(&created("bob@chat.example.org"));
    assert_eq!(h.scheduler.pending_count(), 2);

    h.scheduler.fire_all().await;
    let first = h.deliveries.try_recv()?;
    let second = h.deliveries.try_recv()?;
    assert_eq!(first.to, "alice@chat.example.org");
    assert_eq!(second.to, "bob@chat.example.org");
    Ok(())
}

#[tokio::test]
async fn test_disabled_motd_greets_nobody() {
    let h = harness();

    h.sessions.dispatch(&created("alice@chat.example.org"));
    assert_eq!(h.scheduler.pending_count(), 0);
}

#[tokio::test]
async fn test_greeting_content_snapshot_at_schedule_time() -> anyhow::Result<()> {
    let mut h = harness();
    h.registry
        .execute(
            SET_MOTD_CODE,
            &CommandSession::new("admin@chat.example.org").with_field("motd", ["Old"]),
        )
        .await?;

    h.sessions.dispatch(&created("alice@chat.example.org"));

    // Mutations between scheduling and firing must not touch the pending
    // greeting, only future schedules.
    h.service.state().set_message("New");
    h.service.state().set_subject("Changed");

    h.scheduler.fire_all().await;
    let msg = h.deliveries.try_recv()?;
    assert_eq!(msg.body, "Old");
    assert_eq!(msg.subject, "Message of the Day");
    Ok(())
}

#[tokio::test]
async fn test_delete_before_fire_still_delivers() -> anyhow::Result<()> {
    let mut h = harness();
    h.service.state().set_enabled(true);

    h.sessions.dispatch(&created("alice@chat.example.org"));
    h.service.state().set_enabled(false);

    h.scheduler.fire_all().await;
    assert!(h.deliveries.try_recv().is_ok());
    Ok(())
}

#[tokio::test]
async fn test_other_session_events_are_ignored() {
    let h = harness();
    h.service.state().set_enabled(true);

    let info = SessionInfo::new("alice@chat.example.org");
    h.sessions.dispatch(&SessionEvent::Destroyed(info.clone()));
    h.sessions.dispatch(&SessionEvent::ResourceBound(info.clone()));
    h.sessions.dispatch(&SessionEvent::AnonymousCreated(info.clone()));
    h.sessions.dispatch(&SessionEvent::AnonymousDestroyed(info));

    assert_eq!(h.scheduler.pending_count(), 0);
}
