//! Creates the tables of all models

use log::{error, info};
use sea_orm::DbErr;

use crate::database::service_trait::DatabaseTrait;

fn log_failure(table: &str, result: Result<(), DbErr>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            error!("Could not create {} table! Error: {}", table, err);
            false
        }
    }
}

/// Creates every table if not existent. A failing table is logged and skipped, the others
/// are still created.
///
/// Returns the number of tables that could not be set up.
pub async fn create_tables(db: &(impl DatabaseTrait + Sync)) -> usize {
    let mut failures = 0;

    if log_failure("Product", db.create_products_table().await) {
        if let Err(err) = db.update_products_table().await {
            error!(
                "Could not set default and on update for Product table! Error: {}",
                err
            );
            failures += 1;
        }
    } else {
        failures += 1;
    }

    let results = [
        ("Customer", db.create_customers_table().await),
        ("Server", db.create_servers_table().await),
        ("User", db.create_users_table().await),
        ("Credential", db.create_credentials_table().await),
    ];
    for (table, result) in results {
        if !log_failure(table, result) {
            failures += 1;
        }
    }

    info!("Table setup finished with {} failure(s).", failures);
    failures
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::database::schema::create_tables;
    use crate::database::service_trait::MockDatabaseTrait;

    fn healthy() -> MockDatabaseTrait {
        let mut db = MockDatabaseTrait::new();
        db.expect_create_customers_table().times(1).returning(|| Ok(()));
        db.expect_create_servers_table().times(1).returning(|| Ok(()));
        db.expect_create_users_table().times(1).returning(|| Ok(()));
        db.expect_create_credentials_table()
            .times(1)
            .returning(|| Ok(()));
        db
    }

    #[actix_rt::test]
    async fn creates_every_table() {
        let mut db = healthy();
        db.expect_create_products_table().times(1).returning(|| Ok(()));
        db.expect_update_products_table().times(1).returning(|| Ok(()));

        assert_eq!(create_tables(&db).await, 0);
    }

    #[actix_rt::test]
    async fn failed_products_table_is_not_altered() {
        let mut db = healthy();
        db.expect_create_products_table()
            .times(1)
            .returning(|| Err(DbErr::Custom("access denied".to_owned())));
        db.expect_update_products_table().times(0);

        assert_eq!(create_tables(&db).await, 1);
    }

    #[actix_rt::test]
    async fn other_tables_survive_a_failure() {
        let mut db = MockDatabaseTrait::new();
        db.expect_create_products_table().times(1).returning(|| Ok(()));
        db.expect_update_products_table()
            .times(1)
            .returning(|| Err(DbErr::Custom("no alter privilege".to_owned())));
        db.expect_create_customers_table().times(1).returning(|| Ok(()));
        db.expect_create_servers_table()
            .times(1)
            .returning(|| Err(DbErr::Custom("disk full".to_owned())));
        db.expect_create_users_table().times(1).returning(|| Ok(()));
        db.expect_create_credentials_table()
            .times(1)
            .returning(|| Ok(()));

        assert_eq!(create_tables(&db).await, 2);
    }
}
