use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    inventory: Inventory,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

#[derive(Debug, Deserialize)]
pub struct Inventory {
    directory: String,
    extension: String,
}

impl Inventory {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                inventory: Inventory {
                    directory: "inventory".to_string(),
                    extension: "json".to_string(),
                },
            },
        }
    }

    pub fn inventory_directory(mut self, directory: String) -> Self {
        self.config.inventory.directory = directory;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_overrides_the_inventory_directory() {
        let config = AppConfigBuilder::new().inventory_directory("fixtures".to_string()).build();

        assert_eq!(config.inventory().directory(), "fixtures");
        assert_eq!(config.inventory().extension(), "json");
    }
}
