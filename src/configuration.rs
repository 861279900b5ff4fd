//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub cluster: ClusterSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ClusterSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub output_partitions: u16,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("countngrams.yaml")))
        .add_source(
            config::Environment::with_prefix("COUNTNGRAMS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
