//! src/configuration.rs
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub hubspot: HubSpotSettings,
}

impl Settings {
    pub fn set_hubspot_url(&mut self, base_url: String) {
        self.hubspot.base_url = base_url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HubSpotSettings {
    pub base_url: String,
    pub portal_id: String,
    pub form_id: String,
}

/// `HUBSPOT_*` environment variables, each one optional.
#[derive(Deserialize, Debug, Default)]
struct HubSpotOverrides {
    base_url: Option<String>,
    portal_id: Option<String>,
    form_id: Option<String>,
}

impl HubSpotSettings {
    fn apply(&mut self, overrides: HubSpotOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(portal_id) = overrides.portal_id {
            self.portal_id = portal_id;
        }
        if let Some(form_id) = overrides.form_id {
            self.form_id = form_id;
        }
    }
}

#[derive(PartialEq, Debug)]
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
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        let hubspot_file_path = configuration_directory.join("hubspot");
        match dotenvy::from_filename(hubspot_file_path) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::Message(format!(
                    "Failed to read HubSpot settings file: {}",
                    e
                )))
            }
        }
    }

    let overrides = envy::prefixed("HUBSPOT_")
        .from_env::<HubSpotOverrides>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse HubSpot settings from environment: {}", e)))?;
    settings.hubspot.apply(overrides);

    Ok(settings)
}
