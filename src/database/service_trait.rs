//! Interface of the database operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::{DbErr, DeleteResult};

use crate::database::models::{credential, customer, product, server, user};
use crate::exceptions::exception::InvalidUsage;

/// Operations on the dashboard tables.
///
/// Only the product operations translate failures into [InvalidUsage], everything else hands
/// back the [DbErr] untouched.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseTrait {
    async fn create_products_table(&self) -> Result<(), DbErr>;
    /// Lets the DBMS maintain `products.date_modified`
    async fn update_products_table(&self) -> Result<(), DbErr>;
    async fn create_customers_table(&self) -> Result<(), DbErr>;
    async fn create_servers_table(&self) -> Result<(), DbErr>;
    async fn create_users_table(&self) -> Result<(), DbErr>;
    async fn create_credentials_table(&self) -> Result<(), DbErr>;

    async fn find_product_by_id(&self, id: i32) -> Result<Option<product::Model>, DbErr>;
    /// Inserts or updates the product in its own transaction. Failures are rolled back and
    /// reported with status 422.
    async fn save_product(
        &self,
        product: product::ActiveModel,
    ) -> Result<product::Model, InvalidUsage>;
    /// Deletes the product in its own transaction, same failure handling as [DatabaseTrait::save_product]
    async fn delete_product(
        &self,
        product: product::ActiveModel,
    ) -> Result<DeleteResult, InvalidUsage>;

    async fn get_customer_by_id(&self, id: i32) -> Result<Option<customer::Model>, DbErr>;
    async fn save_customer(
        &self,
        customer: customer::ActiveModel,
    ) -> Result<customer::ActiveModel, DbErr>;
    async fn delete_customer(&self, customer: customer::ActiveModel)
        -> Result<DeleteResult, DbErr>;

    async fn get_server_by_id(&self, id: i32) -> Result<Option<server::Model>, DbErr>;
    async fn save_server(&self, server: server::ActiveModel) -> Result<server::ActiveModel, DbErr>;
    async fn delete_server(&self, server: server::ActiveModel) -> Result<DeleteResult, DbErr>;

    async fn get_user_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr>;
    async fn save_user(&self, user: user::ActiveModel) -> Result<user::ActiveModel, DbErr>;
    async fn delete_user(&self, user: user::ActiveModel) -> Result<DeleteResult, DbErr>;

    async fn get_credential_by_id(&self, id: i32) -> Result<Option<credential::Model>, DbErr>;
    async fn save_credential(
        &self,
        credential: credential::ActiveModel,
    ) -> Result<credential::ActiveModel, DbErr>;
    async fn delete_credential(
        &self,
        credential: credential::ActiveModel,
    ) -> Result<DeleteResult, DbErr>;
}
