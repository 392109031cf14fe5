//! Scoring configuration loaded from a TOML file.
//!
//! ## File format
//!
//! Every key is optional; omitted keys keep their default value.
//!
//! ```toml
//! days_per_month = 30
//! default_investment = 1000
//!
//! [margin]
//! weight = 30
//! full_credit_pct = 50
//!
//! [demand]
//! weight = 20
//! full_credit_buyers = 10
//!
//! [profitability]
//! profitable = 20
//! unprofitable = 5
//!
//! [scalability]
//! min_traffic = 1000
//! min_conversion_pct = 2
//! scalable = 15
//! limited = 8
//!
//! [stability]
//! max_payback_days = 90
//! stable = 15
//! unstable = 5
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use venture_core::{ScoringConfig, ScoringConfigError, VentureScorer};

/// Errors that can occur while loading a scoring configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid scoring config: {0}")]
    Invalid(#[from] ScoringConfigError),
}

/// Parses and validates a scoring configuration from TOML text.
pub fn parse_config(input: &str) -> Result<ScoringConfig, ConfigLoadError> {
    let config: ScoringConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Reads `path` and delegates to [`parse_config`].
pub fn load_config(path: &Path) -> Result<ScoringConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    let max_total = config.max_total();
    if max_total < Decimal::ONE_HUNDRED {
        warn!(path = %path.display(), %max_total, "weights cannot add up to a score of 100");
    }
    info!(path = %path.display(), %max_total, "loaded scoring config");
    Ok(config)
}

/// Builds the scorer for this run: from `path` when given, defaults otherwise.
pub fn build_scorer(path: Option<&Path>) -> Result<VentureScorer, ConfigLoadError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => {
            debug!("using default scoring config");
            ScoringConfig::default()
        }
    };
    Ok(VentureScorer::new(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config is valid");

        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = parse_config(
            "\
default_investment = 2500

[stability]
max_payback_days = 120
",
        )
        .expect("should parse");

        assert_eq!(config.default_investment, dec!(2500));
        assert_eq!(config.stability.max_payback_days, dec!(120));
        assert_eq!(config.stability.stable, dec!(15));
        assert_eq!(config.margin, ScoringConfig::default().margin);
    }

    #[test]
    fn decimal_strings_are_accepted() {
        let config =
            parse_config("[scalability]\nmin_conversion_pct = \"2.5\"\n").expect("should parse");

        assert_eq!(config.scalability.min_conversion_pct, dec!(2.5));
    }

    #[test]
    fn lowered_weight_lowers_reachable_total() {
        let config = parse_config("[margin]\nweight = 10\n").expect("should parse");

        assert_eq!(config.max_total(), dec!(80));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = parse_config("[margin\nweight = 30");

        assert!(matches!(result, Err(ConfigLoadError::Toml(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let result = parse_config("[demand]\nfull_credit_buyers = 0\n");

        assert!(matches!(
            result,
            Err(ConfigLoadError::Invalid(ScoringConfigError::NonPositive { .. }))
        ));
    }

    #[test]
    fn build_scorer_without_path_uses_defaults() {
        let scorer = build_scorer(None).expect("defaults are valid");

        assert_eq!(scorer.config(), &ScoringConfig::default());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let result = load_config(Path::new("/this/path/does/not/exist.toml"));

        match result {
            Err(ConfigLoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/this/path/does/not/exist.toml"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
