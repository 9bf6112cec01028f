use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::EligibilityPolicy;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: AppSettings,
    #[serde(default)]
    pub eligibility: EligibilityPolicy,
}

#[derive(Clone, serde::Deserialize)]
pub struct AppSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl AppSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Layers `configuration/base.yaml`, the file named by `APP_ENVIRONMENT`
/// (`local` when unset) and `APP_`-prefixed environment variables, in that
/// order. `APP_APPLICATION__PORT=8080` overrides `application.port`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let config_dir = cwd.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(config_dir.join(environment_file)).required(true))
        .add_source(environment_overrides())
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// `APP_ELIGIBILITY__QUALIFYING_STATUSES=employed,retired` is read as a list;
/// every other key is a scalar.
fn environment_overrides() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("eligibility.qualifying_statuses")
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{} is not a supported environment. use either `local` or `production`",
                other
            )),
        }
    }
}
