use serde;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_heartbeat")]
    pub heartbeat_secs: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphqlSettings {
    pub path: String,
    pub console: bool,
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            console: true,
        }
    }
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_heartbeat() -> u64 {
    10
}

impl DatabaseSettings {
    // Connection string: mongodb://[<username>:<password>@]<host>:<port>
    // The catalogue itself is selected by database_name after connecting.
    pub fn connection_string(&self) -> String {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => format!(
                "mongodb://{}:{}@{}:{}",
                username, password, self.host, self.port,
            ),
            _ => format!("mongodb://{}:{}", self.host, self.port),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn heartbeat(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs.max(1))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // `configuration.yaml` first, then APP_* variables on top,
    // e.g. APP_DATABASE__HOST=mongo
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
