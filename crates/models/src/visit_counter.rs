//! Singleton visit counter.
//!
//! One fixed-id row holds the running total. The increment is a single SQL
//! statement, so concurrent requests can never read-modify-write past each
//! other; the database serializes them and each caller gets the value its
//! own increment produced.

use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, ConnectionTrait, DatabaseConnection, DbErr, Set, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Fixed id of the only row in `visit_counter`.
pub const COUNTER_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_counter")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub visits: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Seed the singleton row at 0 if it does not exist yet. Idempotent: a row
/// that is already there is left alone, so restarting never resets the count.
pub async fn ensure_counter(db: &DatabaseConnection) -> Result<(), ModelError> {
    let am = ActiveModel {
        id: Set(COUNTER_ID),
        visits: Set(0),
    };
    let res = Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
        .exec(db)
        .await;
    match res {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(ModelError::Db(e.to_string())),
    }
}

/// Atomically add one visit and return the new total.
pub async fn increment(db: &DatabaseConnection) -> Result<i64, ModelError> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        "UPDATE visit_counter SET visits = visits + 1 WHERE id = ? RETURNING visits",
        [COUNTER_ID.into()],
    );
    let row = db
        .query_one(stmt)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Db("visit counter row missing".into()))?;
    row.try_get("", "visits")
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Current total without recording anything.
pub async fn current(db: &DatabaseConnection) -> Result<i64, ModelError> {
    let row = Entity::find_by_id(COUNTER_ID)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Db("visit counter row missing".into()))?;
    Ok(row.visits)
}
