//! Model of the 'products' table

use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use strum_macros::EnumString;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, EnumString, Default)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "currency_type")]
#[strum(serialize_all = "lowercase")]
/// Currencies a price can be given in
pub enum Currency {
    #[default]
    #[sea_orm(string_value = "usd")]
    Usd,
    #[sea_orm(string_value = "eur")]
    Eur,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "products")]
/// Main model that is used
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(128))")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub info: Option<String>,
    pub price: i32,
    pub currency: Currency,
    pub date_created: Option<DateTime>,
    /// Kept current by the DBMS, see [DatabaseTrait::update_products_table][crate::database::service_trait::DatabaseTrait::update_products_table]
    pub date_modified: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
/// Represents the relation to other tables
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps `date_created` per inserted row and `date_modified` on every save.
    /// A missing currency falls back to [Currency::Usd].
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();
        if insert {
            if matches!(self.date_created, NotSet) {
                self.date_created = Set(Some(now));
            }
            if matches!(self.currency, NotSet) {
                self.currency = Set(Currency::default());
            }
        }
        self.date_modified = Set(Some(now));
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / ${}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sea_orm::entity::prelude::*;
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::database::models::product::{ActiveModel, Currency, Model};

    fn product() -> Model {
        Model {
            id: 1,
            name: "Keyboard".to_owned(),
            info: None,
            price: 120,
            currency: Currency::Usd,
            date_created: None,
            date_modified: None,
        }
    }

    fn mouse() -> ActiveModel {
        ActiveModel {
            name: Set("Mouse".to_owned()),
            price: Set(25),
            ..Default::default()
        }
    }

    fn connection() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::MySql).into_connection()
    }

    #[test]
    fn display_shows_name_and_price() {
        assert_eq!(product().to_string(), "Keyboard / $120");
    }

    #[test]
    fn currency_accepts_only_known_values() {
        assert_eq!(
            Currency::try_from_value(&"usd".to_owned()).unwrap(),
            Currency::Usd
        );
        assert_eq!(
            Currency::try_from_value(&"eur".to_owned()).unwrap(),
            Currency::Eur
        );
        assert!(Currency::try_from_value(&"gbp".to_owned()).is_err());
        assert!(Currency::try_from_value(&"USD".to_owned()).is_err());

        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert!(Currency::from_str("yen").is_err());
        assert_eq!(Currency::Eur.to_value(), "eur");
        assert_eq!(Currency::Usd.to_value(), "usd");
        assert_eq!(Currency::default(), Currency::Usd);
    }

    #[test]
    fn partial_construction() {
        let partial = mouse();
        assert_eq!(partial.id, NotSet);
        assert_eq!(partial.info, NotSet);
        assert_eq!(partial.currency, NotSet);
    }

    #[actix_rt::test]
    async fn insert_stamps_defaults() {
        let db = connection();
        let saved = mouse().before_save(&db, true).await.unwrap();

        assert_eq!(saved.currency, Set(Currency::Usd));
        assert!(matches!(saved.date_created, Set(Some(_))));
        assert!(matches!(saved.date_modified, Set(Some(_))));
    }

    #[actix_rt::test]
    async fn insert_keeps_given_currency() {
        let db = connection();
        let mut euro = mouse();
        euro.currency = Set(Currency::Eur);
        let saved = euro.before_save(&db, true).await.unwrap();

        assert_eq!(saved.currency, Set(Currency::Eur));
    }

    #[actix_rt::test]
    async fn creation_time_is_per_row() {
        let db = connection();
        let first = mouse().before_save(&db, true).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = mouse().before_save(&db, true).await.unwrap();

        assert_ne!(first.date_created, second.date_created);
    }

    #[actix_rt::test]
    async fn update_keeps_creation_time() {
        let db = connection();
        let active: ActiveModel = product().into();
        let saved = active.before_save(&db, false).await.unwrap();

        assert!(saved.date_created.is_unchanged());
        assert_eq!(saved.currency, sea_orm::ActiveValue::Unchanged(Currency::Usd));
        assert!(matches!(saved.date_modified, Set(Some(_))));
    }
}
