//! TOML configuration loading
//!
//! Configuration types deserialize with serde and then validate their
//! semantic constraints, so a config that parses but makes no sense is still
//! rejected at load time.

use crate::error::{PlanarError, PlanarResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Semantic validation run after a config has been deserialized
pub trait Validate {
    fn validate(&self) -> PlanarResult<()>;
}

/// Parse and validate a config from a TOML string
pub fn from_toml_str<T>(content: &str) -> PlanarResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = toml::from_str(content)?;
    if let Err(e) = config.validate() {
        log::warn!("Configuration rejected: {}", e);
        return Err(e);
    }
    Ok(config)
}

/// Read, parse and validate a config from a TOML file
pub fn load_toml<T>(path: impl AsRef<Path>) -> PlanarResult<T>
where
    T: DeserializeOwned + Validate,
{
    let path = path.as_ref();
    log::debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Shorthand for building a [`PlanarError::InvalidConfig`]
pub fn invalid(msg: impl Into<String>) -> PlanarError {
    PlanarError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Limits {
        min: f64,
        max: f64,
    }

    impl Validate for Limits {
        fn validate(&self) -> PlanarResult<()> {
            if self.min > self.max {
                return Err(invalid("min cannot exceed max"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_parse_valid() {
        let limits: Limits = from_toml_str("min = 0.5\nmax = 2.0\n").unwrap();
        assert_eq!(limits.min, 0.5);
        assert_eq!(limits.max, 2.0);
    }

    #[test]
    fn test_validation_failure() {
        let result: PlanarResult<Limits> = from_toml_str("min = 3.0\nmax = 2.0\n");
        assert!(matches!(result, Err(PlanarError::InvalidConfig(_))));
    }

    #[test]
    fn test_syntax_error() {
        let result: PlanarResult<Limits> = from_toml_str("min = \nmax = 2.0");
        assert!(matches!(result, Err(PlanarError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min = -1.0").unwrap();
        writeln!(file, "max = 1.0").unwrap();

        let limits: Limits = load_toml(file.path()).unwrap();
        assert_eq!(limits.min, -1.0);
    }

    #[test]
    fn test_missing_file() {
        let result: PlanarResult<Limits> = load_toml("/nonexistent/planar/limits.toml");
        assert!(matches!(result, Err(PlanarError::Io(_))));
    }
}
