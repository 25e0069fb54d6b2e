use serde::Deserialize;
use toml::Value;

#[derive(Deserialize, Debug, Clone)]
pub struct StrategyConfig {
    pub name: String,
    // This will hold the `params = { ... }` table from the TOML
    #[serde(default = "default_params")]
    pub params: Value,
}

fn default_params() -> Value {
    Value::Table(Default::default())
}
