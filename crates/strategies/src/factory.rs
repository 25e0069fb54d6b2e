// In crates/strategies/src/factory.rs

use crate::error::{Error, Result};
use crate::sma_crossover::SmaCrossover;
use crate::types::SmaCrossoverSettings;
use crate::Strategy;
use core_types::StrategyConfig;

/// Builds a strategy instance from its configured name and `params` table.
pub fn create_strategy(config: &StrategyConfig) -> Result<Box<dyn Strategy + Send>> {
    let strategy_instance: Box<dyn Strategy + Send> = match config.name.as_str() {
        "sma_crossover" => {
            let settings: SmaCrossoverSettings = config.params.clone().try_into()?;
            validate_sma_crossover(&settings)?;
            Box::new(SmaCrossover::from_settings(&settings))
        }
        unknown => return Err(Error::UnknownStrategy(unknown.to_string())),
    };

    Ok(strategy_instance)
}

fn validate_sma_crossover(settings: &SmaCrossoverSettings) -> Result<()> {
    if settings.short_window == 0 || settings.long_window == 0 {
        return Err(Error::InvalidParameters(format!(
            "window sizes must be positive (short = {}, long = {})",
            settings.short_window, settings.long_window
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_src: &str) -> StrategyConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn creates_sma_crossover_from_params() {
        let strategy = create_strategy(&config(
            r#"
            name = "sma_crossover"
            params = { short_window = 3, long_window = 5 }
            "#,
        ))
        .unwrap();
        assert_eq!(strategy.name(), "SMA_3_5");
    }

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let strategy = create_strategy(&config(r#"name = "sma_crossover""#)).unwrap();
        assert_eq!(strategy.name(), "SMA_10_50");
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = create_strategy(&config(r#"name = "rsi_reversal""#)).err().unwrap();
        assert!(matches!(err, Error::UnknownStrategy(name) if name == "rsi_reversal"));
    }

    #[test]
    fn rejects_zero_window() {
        let err = create_strategy(&config(
            r#"
            name = "sma_crossover"
            params = { short_window = 0, long_window = 5 }
            "#,
        ))
        .err()
        .unwrap();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn rejects_malformed_params() {
        let err = create_strategy(&config(
            r#"
            name = "sma_crossover"
            params = { short_window = "three" }
            "#,
        ))
        .err()
        .unwrap();
        assert!(matches!(err, Error::Params(_)));
    }

    #[test]
    fn short_window_may_exceed_long_window() {
        let strategy = create_strategy(&config(
            r#"
            name = "sma_crossover"
            params = { short_window = 8, long_window = 4 }
            "#,
        ))
        .unwrap();
        assert_eq!(strategy.name(), "SMA_8_4");
    }
}
