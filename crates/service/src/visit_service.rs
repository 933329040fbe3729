//! Visit tracking on top of the singleton counter row.

use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::visit_counter;

/// Record one visit and return the new total. The write is durable before
/// this returns.
pub async fn record_visit(db: &DatabaseConnection) -> Result<i64, ServiceError> {
    Ok(visit_counter::increment(db).await?)
}

/// Current total without recording a visit.
pub async fn current_visits(db: &DatabaseConnection) -> Result<i64, ServiceError> {
    Ok(visit_counter::current(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fresh_db;

    #[tokio::test]
    async fn reading_does_not_record() {
        let tdb = fresh_db().await.expect("db");
        assert_eq!(current_visits(&tdb.conn).await.expect("current"), 0);
        assert_eq!(current_visits(&tdb.conn).await.expect("current"), 0);
        assert_eq!(record_visit(&tdb.conn).await.expect("record"), 1);
        assert_eq!(current_visits(&tdb.conn).await.expect("current"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_visits_are_never_lost() {
        let tdb = fresh_db().await.expect("db");
        let mut handles = Vec::new();
        for _ in 0..8 {
            let conn = tdb.conn.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..4 {
                    record_visit(&conn).await.expect("record");
                }
            }));
        }
        for h in handles {
            h.await.expect("join");
        }
        assert_eq!(current_visits(&tdb.conn).await.expect("current"), 32);
    }
}
