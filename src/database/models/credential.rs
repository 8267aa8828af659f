//! Model of the 'Credential' table

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Default)]
#[sea_orm(table_name = "Credential")]
/// Main model that is used
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub username: Option<String>,
    /// Ciphertext, this layer never decrypts
    #[sea_orm(column_type = "Text", nullable)]
    pub password_encrypted: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub private_key_encrypted: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
/// Represents the relation to other tables
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let now = Utc::now().naive_utc();
            if matches!(self.created_at, NotSet) {
                self.created_at = Set(Some(now));
            }
            if matches!(self.updated_at, NotSet) {
                self.updated_at = Set(Some(now));
            }
        }
        Ok(self)
    }
}
