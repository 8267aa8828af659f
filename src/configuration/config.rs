//! Reads the configuration file and creates a [Config] object. Manages default values and errors
use std::fs;

use log::warn;
use serde::{Deserialize, Serialize};

/// Value used for every textual setting that could not be read
const UNKNOWN: &str = "unknown";

#[derive(Serialize, Deserialize, Debug, Default)]
/// Represents the full config settings
struct ConfigToml {
    database: Option<ConfigTomlDatabase>,
    application: Option<ConfigTomlApp>,
}

#[derive(Serialize, Deserialize, Debug)]
/// Represents the base application settings
struct ConfigTomlApp {
    version: Option<String>,
    create_tables: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
/// Represents the database settings
struct ConfigTomlDatabase {
    username: Option<String>,
    password: Option<String>,
    context: Option<String>,
    url: Option<String>,
    database_name: Option<String>,
}

#[derive(Debug, Clone)]
/// Represents the full configuration
pub struct Config {
    pub version: String,
    /// Whether the tables are created on startup
    pub create_tables: bool,
    pub db_url: String,
    pub db_username: String,
    pub db_password: String,
    /// Scheme of the connection string, e.g. `mysql`
    pub db_context: String,
    pub db_database_name: String,
}

/// Creates a config with [Config::new] and the default file name 'application.toml'.
pub fn get_config() -> Config {
    Config::new("application.toml")
}

/// Reads an optional string field, logging the fallback
fn string_or_unknown(value: Option<String>, field: &str, table: &str) -> String {
    value.unwrap_or_else(|| {
        warn!(
            "Configuration setup: Missing field {} in table {}.",
            field, table
        );
        UNKNOWN.to_owned()
    })
}

impl Config {
    /// Searches for a file in the base path of the application and tries
    /// to parse it to a valid [Config].
    ///
    /// If the file or specific values are missing or invalid, they will be replaced with default
    /// values.
    /// * `location` - Name of the file that is searched for
    pub fn new(location: &str) -> Self {
        let content: String = fs::read_to_string(location).unwrap_or_else(|_| {
            warn!(
                "Configuration setup: Could not read config file '{}'.",
                location
            );
            String::new()
        });

        let config_toml: ConfigToml = toml::from_str(&content).unwrap_or_else(|_| {
            warn!(
                "Configuration setup: Failed to create ConfigToml Object out of config file. \
                Check if the file exists in the given directory and is formatted correctly!"
            );
            ConfigToml::default()
        });

        let (username, password, url, context, database_name): (
            String,
            String,
            String,
            String,
            String,
        ) = match config_toml.database {
            Some(database) => (
                string_or_unknown(database.username, "username", "database"),
                string_or_unknown(database.password, "password", "database"),
                string_or_unknown(database.url, "url", "database"),
                string_or_unknown(database.context, "context", "database"),
                string_or_unknown(database.database_name, "database_name", "database"),
            ),
            None => {
                warn!("Configuration setup: Missing database data.");
                (
                    UNKNOWN.to_owned(),
                    UNKNOWN.to_owned(),
                    UNKNOWN.to_owned(),
                    UNKNOWN.to_owned(),
                    UNKNOWN.to_owned(),
                )
            }
        };

        let (version, create_tables): (String, bool) = match config_toml.application {
            Some(app) => {
                let version = string_or_unknown(app.version, "version", "application");
                let create_tables = app.create_tables.unwrap_or_else(|| {
                    warn!("Configuration setup: Missing field create_tables in application data.");
                    true
                });
                (version, create_tables)
            }
            None => {
                warn!("Configuration setup: Missing application data.");
                (UNKNOWN.to_owned(), true)
            }
        };

        Config {
            version,
            create_tables,
            db_url: url,
            db_username: username,
            db_password: password,
            db_context: context,
            db_database_name: database_name,
        }
    }

    /// Connection string of the DBMS without a selected database
    pub fn server_url(&self) -> String {
        format!(
            "{}://{}:{}@{}",
            self.db_context, self.db_username, self.db_password, self.db_url
        )
    }

    /// Connection string pointing at [db_database_name][Config#structfield.db_database_name]
    pub fn database_url(&self) -> String {
        format!("{}/{}", self.server_url(), self.db_database_name)
    }
}
