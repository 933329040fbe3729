//! Append-only log of contact-form submissions. Rows are never updated or
//! deleted here; the id and creation timestamp are assigned by the store.

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub timeline: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated submission fields, ready to persist.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub timeline: Option<String>,
}

/// Persist one submission and return the stored row, id and timestamp
/// assigned.
pub async fn append(db: &DatabaseConnection, fields: ContactFields) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        company: Set(fields.company),
        email: Set(fields.email),
        project_type: Set(fields.project_type),
        message: Set(fields.message),
        timeline: Set(fields.timeline),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
