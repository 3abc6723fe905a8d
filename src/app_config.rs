use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::{Deserialize, Deserializer};
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    discovery: Discovery,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("APPLIANCE").separator("__")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(deserialize_with = "deserialize_level")]
    log_level: Level,
}

impl Core {
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

#[derive(Debug, Deserialize)]
pub struct Discovery {
    directory: String,
    extension: String,
}

impl Discovery {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level
        .parse::<Level>()
        .map_err(|_| serde::de::Error::custom(format!("unknown log level '{}'", level)))
}
