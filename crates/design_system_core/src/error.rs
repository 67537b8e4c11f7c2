//! Configuration errors.
//!
//! Composition and attribute filtering never fail; only loading and validating a
//! [`DesignSystemConfig`](crate::DesignSystemConfig) or a
//! [`VariantRecipe`](crate::VariantRecipe) does.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to load or validate design-system configuration.
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration is not valid TOML for the expected shape.
    #[error("failed to parse design system config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An attribute key in `[attributes]` cannot name a real attribute.
    #[error("invalid attribute key {key:?}: {reason}")]
    InvalidAttributeKey {
        /// Offending key.
        key: String,
        /// Why the key was rejected.
        reason: &'static str,
    },
    /// A recipe default or compound rule names an undeclared axis.
    #[error("recipe `{recipe}` references unknown axis `{axis}`")]
    UnknownAxis {
        /// Recipe name.
        recipe: String,
        /// Undeclared axis.
        axis: String,
    },
    /// A recipe default or compound rule names an undeclared option.
    #[error("recipe `{recipe}` references unknown option `{option}` on axis `{axis}`")]
    UnknownOption {
        /// Recipe name.
        recipe: String,
        /// Axis the option was looked up on.
        axis: String,
        /// Undeclared option.
        option: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_recipe_and_key() {
        let err = ConfigError::UnknownOption {
            recipe: "chip".into(),
            axis: "size".into(),
            option: "xl".into(),
        };
        assert_eq!(
            err.to_string(),
            "recipe `chip` references unknown option `xl` on axis `size`"
        );

        let err = ConfigError::InvalidAttributeKey {
            key: "on click".into(),
            reason: "contains whitespace",
        };
        assert_eq!(
            err.to_string(),
            "invalid attribute key \"on click\": contains whitespace"
        );
    }

    #[test]
    fn read_errors_include_the_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/design-system.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/etc/design-system.toml"));
    }
}
