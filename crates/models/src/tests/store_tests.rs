use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::contact::{self, ContactFields};
use crate::{db, visit_counter};

async fn fresh_db() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}/store.db?mode=rwc", dir.path().display());
    let conn = db::connect_to(&url).await.expect("connect");
    migration::Migrator::up(&conn, None).await.expect("migrate up");
    visit_counter::ensure_counter(&conn).await.expect("seed counter");
    (dir, conn)
}

#[tokio::test]
async fn counter_starts_at_zero_and_counts_up() {
    let (_dir, conn) = fresh_db().await;
    assert_eq!(visit_counter::current(&conn).await.expect("current"), 0);
    assert_eq!(visit_counter::increment(&conn).await.expect("increment"), 1);
    assert_eq!(visit_counter::increment(&conn).await.expect("increment"), 2);
    assert_eq!(visit_counter::current(&conn).await.expect("current"), 2);
}

#[tokio::test]
async fn reseeding_never_resets_the_count() {
    let (_dir, conn) = fresh_db().await;
    visit_counter::increment(&conn).await.expect("increment");
    visit_counter::increment(&conn).await.expect("increment");
    // bootstrap runs on every process start
    visit_counter::ensure_counter(&conn).await.expect("reseed");
    assert_eq!(visit_counter::current(&conn).await.expect("current"), 2);
}

fn fields(name: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_string(),
        company: None,
        email: "a@b.com".to_string(),
        project_type: "web".to_string(),
        message: message.to_string(),
        timeline: None,
    }
}

#[tokio::test]
async fn contact_ids_ascend_and_rows_match_input() {
    let (_dir, conn) = fresh_db().await;

    let first = contact::append(&conn, fields("Ada", "hello")).await.expect("append");
    let second = contact::append(&conn, fields("Grace", "hi")).await.expect("append");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.name, "Ada");
    assert_eq!(first.email, "a@b.com");
    assert_eq!(first.project_type, "web");
    assert_eq!(first.message, "hello");
    assert!(first.company.is_none());
    assert!(first.timeline.is_none());
    assert!(second.created_at >= first.created_at);
}

#[tokio::test]
async fn optional_fields_are_stored_when_present() {
    let (_dir, conn) = fresh_db().await;
    let mut f = fields("Ada", "hello");
    f.company = Some("Acme".to_string());
    f.timeline = Some("Q3".to_string());
    let row = contact::append(&conn, f).await.expect("append");
    assert_eq!(row.company.as_deref(), Some("Acme"));
    assert_eq!(row.timeline.as_deref(), Some("Q3"));
}
