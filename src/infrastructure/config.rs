use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub data_service: DataServiceSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataServiceSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
