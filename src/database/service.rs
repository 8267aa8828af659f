//! Implementation of the database operations

use async_trait::async_trait;
use log::{debug, error, info};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    DeleteResult, EntityTrait, Schema, Statement, TransactionTrait,
};

use crate::database::models::prelude::{Credential, Customer, Product, Server, User};
use crate::database::models::{credential, customer, product, server, user};
use crate::database::service_trait::DatabaseTrait;
use crate::exceptions::exception::{HttpStatus, InvalidUsage};

pub struct DatabaseImplementation {
    pub db: DatabaseConnection,
}

impl DatabaseImplementation {
    /// Creates the table of `entity` unless it already exists
    async fn create_table<E: EntityTrait>(&self, entity: E) -> Result<(), DbErr> {
        let builder = self.db.get_database_backend();
        let schema = Schema::new(builder);
        let mut table = schema.create_table_from_entity(entity);
        table.if_not_exists();
        self.db.execute(builder.build(&table)).await?;
        Ok(())
    }

    /// Rolls `transaction` back and turns `err` into the error handed to the caller.
    /// A failing rollback is logged, the original error is kept.
    async fn roll_back(transaction: DatabaseTransaction, err: DbErr, action: &str) -> InvalidUsage {
        error!("Could not {}, rolling back. Error: {}", action, err);
        if let Err(rollback_err) = transaction.rollback().await {
            error!("Rollback after failed {} failed: {}", action, rollback_err);
        }
        unprocessable(&err)
    }

    /// The transaction left open by a failed commit is rolled back when it is dropped
    fn commit_failed(err: DbErr, action: &str) -> InvalidUsage {
        error!("Could not commit {}, rolling back. Error: {}", action, err);
        unprocessable(&err)
    }
}

fn unprocessable(err: &DbErr) -> InvalidUsage {
    InvalidUsage::from_db_err(err, HttpStatus::UnprocessableEntity.code())
}

#[async_trait]
impl DatabaseTrait for DatabaseImplementation {
    async fn create_products_table(&self) -> Result<(), DbErr> {
        self.create_table(Product).await
    }

    async fn update_products_table(&self) -> Result<(), DbErr> {
        match self.db.get_database_backend() {
            DbBackend::MySql => {
                let update_statement = Statement::from_string(
                    DbBackend::MySql,
                    vec![
                        "ALTER TABLE `products`",
                        "MODIFY `date_modified`",
                        "DATETIME NULL",
                        "DEFAULT CURRENT_TIMESTAMP",
                        "ON UPDATE CURRENT_TIMESTAMP;",
                    ]
                    .join(" "),
                );
                self.db.execute(update_statement).await?;
                Ok(())
            }
            backend => {
                debug!(
                    "No on update clause for {:?}, date_modified is set on save.",
                    backend
                );
                Ok(())
            }
        }
    }

    async fn create_customers_table(&self) -> Result<(), DbErr> {
        self.create_table(Customer).await
    }

    async fn create_servers_table(&self) -> Result<(), DbErr> {
        self.create_table(Server).await
    }

    async fn create_users_table(&self) -> Result<(), DbErr> {
        self.create_table(User).await
    }

    async fn create_credentials_table(&self) -> Result<(), DbErr> {
        self.create_table(Credential).await
    }

    // Product operations
    async fn find_product_by_id(&self, id: i32) -> Result<Option<product::Model>, DbErr> {
        Product::find_by_id(id).one(&self.db).await
    }

    async fn save_product(
        &self,
        product: product::ActiveModel,
    ) -> Result<product::Model, InvalidUsage> {
        let transaction = self.db.begin().await.map_err(|err| unprocessable(&err))?;
        let saved = if matches!(product.id, NotSet) {
            product.insert(&transaction).await
        } else {
            product.update(&transaction).await
        };
        match saved {
            Ok(model) => {
                transaction
                    .commit()
                    .await
                    .map_err(|err| Self::commit_failed(err, "save product"))?;
                info!("Saved product {} ({})", model.id, model);
                Ok(model)
            }
            Err(err) => Err(Self::roll_back(transaction, err, "save product").await),
        }
    }

    async fn delete_product(
        &self,
        product: product::ActiveModel,
    ) -> Result<DeleteResult, InvalidUsage> {
        let transaction = self.db.begin().await.map_err(|err| unprocessable(&err))?;
        match product.delete(&transaction).await {
            Ok(result) => {
                transaction
                    .commit()
                    .await
                    .map_err(|err| Self::commit_failed(err, "delete product"))?;
                info!("Deleted {} product row(s)", result.rows_affected);
                Ok(result)
            }
            Err(err) => Err(Self::roll_back(transaction, err, "delete product").await),
        }
    }

    // Customer operations
    async fn get_customer_by_id(&self, id: i32) -> Result<Option<customer::Model>, DbErr> {
        Customer::find_by_id(id).one(&self.db).await
    }

    async fn save_customer(
        &self,
        customer: customer::ActiveModel,
    ) -> Result<customer::ActiveModel, DbErr> {
        customer.save(&self.db).await
    }

    async fn delete_customer(
        &self,
        customer: customer::ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        customer.delete(&self.db).await
    }

    // Server operations
    async fn get_server_by_id(&self, id: i32) -> Result<Option<server::Model>, DbErr> {
        Server::find_by_id(id).one(&self.db).await
    }

    async fn save_server(&self, server: server::ActiveModel) -> Result<server::ActiveModel, DbErr> {
        server.save(&self.db).await
    }

    async fn delete_server(&self, server: server::ActiveModel) -> Result<DeleteResult, DbErr> {
        server.delete(&self.db).await
    }

    // User operations
    async fn get_user_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(id).one(&self.db).await
    }

    async fn save_user(&self, user: user::ActiveModel) -> Result<user::ActiveModel, DbErr> {
        user.save(&self.db).await
    }

    async fn delete_user(&self, user: user::ActiveModel) -> Result<DeleteResult, DbErr> {
        user.delete(&self.db).await
    }

    // Credential operations
    async fn get_credential_by_id(&self, id: i32) -> Result<Option<credential::Model>, DbErr> {
        Credential::find_by_id(id).one(&self.db).await
    }

    async fn save_credential(
        &self,
        credential: credential::ActiveModel,
    ) -> Result<credential::ActiveModel, DbErr> {
        credential.save(&self.db).await
    }

    async fn delete_credential(
        &self,
        credential: credential::ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        credential.delete(&self.db).await
    }
}
