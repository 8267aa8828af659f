//! Model of the 'Customer' table

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Default)]
#[sea_orm(table_name = "Customer")]
/// Main model that is used
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub company_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub status: Option<bool>,
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

#[cfg(test)]
mod tests {
    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::Set;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::database::models::customer::{ActiveModel, Model};

    #[actix_rt::test]
    async fn insert_stamps_created_and_updated() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let customer = ActiveModel {
            name: Set(Some("ACME".to_owned())),
            ..Default::default()
        }
        .before_save(&db, true)
        .await
        .unwrap();

        assert!(matches!(customer.created_at, Set(Some(_))));
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[actix_rt::test]
    async fn update_leaves_timestamps_alone() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let existing: ActiveModel = Model {
            id: 3,
            ..Default::default()
        }
        .into();
        let customer = existing.before_save(&db, false).await.unwrap();

        assert!(customer.created_at.is_unchanged());
        assert!(customer.updated_at.is_unchanged());
    }
}
