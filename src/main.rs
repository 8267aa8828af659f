//! Sets up the database of the dashboard.
//!
//! # Startup
//! 1. Startup a mysql database.
//! 2. Configure the config file that can be found in ```<path-to-project>/application.toml```
//! 3. (optional) Configure the settings for the logging framework via ```<path-to-project>/log4rs.yml```

use anyhow::Result;
use log::{error, info};

use dashboard_models::configuration::config::get_config;
use dashboard_models::database::connection;
use dashboard_models::database::schema::create_tables;
use dashboard_models::database::service::DatabaseImplementation;

/// Initializes the logging framework and [starts][start] the app
#[tokio::main]
async fn main() -> Result<()> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    start().await
}

/// Connects to the database and creates the tables
async fn start() -> Result<()> {
    let config = get_config();
    info!("Starting dashboard models version {}.", config.version);

    let db: DatabaseImplementation = match connection::set_up_db("").await {
        Ok(db) => {
            info!("Setting up Database Connection finished successfully.");
            DatabaseImplementation { db }
        }
        Err(err) => {
            error!("Database Connection setup failed!, Error: {}", err);
            return Err(err.into());
        }
    };

    if config.create_tables {
        let failures = create_tables(&db).await;
        if failures > 0 {
            anyhow::bail!("{} table(s) could not be set up", failures);
        }
    } else {
        info!("Table creation is disabled.");
    }
    Ok(())
}
