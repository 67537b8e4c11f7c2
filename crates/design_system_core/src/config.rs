//! Typed TOML configuration.
//!
//! ```toml
//! [classes]
//! policy = "concern-groups"
//!
//! [attributes]
//! deny = ["tooltip"]
//! allow = ["title"]
//!
//! [recipes.chip]
//! base = "inline-flex"
//! variants.tone = { neutral = "bg-zinc-700", accent = "bg-lime-400" }
//! defaults = { tone = "neutral" }
//! ```
//!
//! Every section is optional; an empty document yields [`DesignSystemConfig::default`]. Parsing is
//! followed by semantic validation, so a loaded config always builds a usable [`Denylist`] and
//! only carries recipes whose defaults and compound rules resolve.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attributes::{Denylist, UNSAFE_KEY_CHARS};
use crate::class_names::{ClassComposer, MergePolicy};
use crate::error::ConfigError;
use crate::variants::VariantRecipe;

/// `[classes]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassConfig {
    /// Conflict-resolution policy.
    pub policy: MergePolicy,
}

/// `[attributes]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeConfig {
    /// Keys denied in addition to the standard list.
    pub deny: Vec<String>,
    /// Standard keys released for forwarding.
    pub allow: Vec<String>,
}

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSystemConfig {
    /// Class composition settings.
    pub classes: ClassConfig,
    /// Attribute forwarding settings.
    pub attributes: AttributeConfig,
    /// Named data-driven recipes.
    pub recipes: IndexMap<String, VariantRecipe>,
}

impl DesignSystemConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields, and the validation
    /// errors of [`DesignSystemConfig::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise the errors of
    /// [`DesignSystemConfig::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&body)
    }

    /// Checks attribute keys and recipes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAttributeKey`] for keys that cannot name an attribute, or the
    /// first recipe error reported by [`VariantRecipe::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.attributes.deny.iter().chain(&self.attributes.allow) {
            validate_attribute_key(key)?;
        }
        for (name, recipe) in &self.recipes {
            recipe.validate(name)?;
        }
        Ok(())
    }

    /// Builds the configured denylist: standard keys, plus `deny`, minus `allow`.
    pub fn denylist(&self) -> Denylist {
        if self.attributes.deny.is_empty() && self.attributes.allow.is_empty() {
            return Denylist::standard().clone();
        }
        Denylist::builder()
            .deny_all(&self.attributes.deny)
            .allow_all(&self.attributes.allow)
            .build()
    }

    /// Builds the configured class composer.
    pub fn composer(&self) -> ClassComposer {
        ClassComposer::new(self.classes.policy)
    }

    /// Named recipe, if declared.
    pub fn recipe(&self, name: &str) -> Option<&VariantRecipe> {
        self.recipes.get(name)
    }
}

fn validate_attribute_key(key: &str) -> Result<(), ConfigError> {
    let reason = if key.is_empty() {
        "is empty"
    } else if key.contains(char::is_whitespace) {
        "contains whitespace"
    } else if key.contains(UNSAFE_KEY_CHARS) {
        "contains an unsafe character"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidAttributeKey {
        key: key.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::variants::Selection;

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "design-system-config-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = DesignSystemConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config, DesignSystemConfig::default());
        assert_eq!(config.composer().policy(), MergePolicy::ConcernGroups);
        assert_eq!(&config.denylist(), Denylist::standard());
    }

    #[test]
    fn attribute_and_class_sections_shape_runtime_objects() {
        let config = DesignSystemConfig::from_toml_str(
            r#"
            [classes]
            policy = "dedupe-only"

            [attributes]
            deny = ["tooltip", "elevation-level"]
            allow = ["title"]
            "#,
        )
        .expect("parse config");

        assert_eq!(config.composer().policy(), MergePolicy::DedupeOnly);
        let denylist = config.denylist();
        assert!(!denylist.permits("tooltip"));
        assert!(!denylist.permits("elevationLevel"));
        assert!(denylist.permits("title"));
        assert!(!denylist.permits("variant"));
    }

    #[test]
    fn recipes_are_loaded_and_resolvable() {
        let config = DesignSystemConfig::from_toml_str(
            r#"
            [recipes.chip]
            base = "inline-flex"
            variants.tone = { neutral = "bg-zinc-700", accent = "bg-lime-400" }
            defaults = { tone = "neutral" }
            "#,
        )
        .expect("parse config");

        let chip = config.recipe("chip").expect("chip recipe");
        assert_eq!(chip.resolve(&Selection::new()), "inline-flex bg-zinc-700");
        assert_eq!(
            chip.resolve(&Selection::new().with("tone", "accent")),
            "inline-flex bg-lime-400"
        );
        assert!(config.recipe("missing").is_none());
    }

    #[test]
    fn invalid_recipe_default_is_rejected() {
        let err = DesignSystemConfig::from_toml_str(
            r#"
            [recipes.chip]
            variants.tone = { neutral = "bg-zinc-700" }
            defaults = { tone = "loud" }
            "#,
        )
        .expect_err("unknown default should fail");
        assert!(matches!(err, ConfigError::UnknownOption { ref option, .. } if option == "loud"));
    }

    #[test]
    fn invalid_attribute_keys_are_rejected() {
        let err = DesignSystemConfig::from_toml_str("[attributes]\ndeny = [\"on click\"]\n")
            .expect_err("whitespace key should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidAttributeKey { reason: "contains whitespace", .. }
        ));

        let err = DesignSystemConfig::from_toml_str("[attributes]\nallow = [\"\"]\n")
            .expect_err("empty key should fail");
        assert!(matches!(err, ConfigError::InvalidAttributeKey { reason: "is empty", .. }));
    }

    #[test]
    fn unknown_sections_and_bad_policy_are_parse_errors() {
        let err = DesignSystemConfig::from_toml_str("[theme]\nmode = \"dark\"\n")
            .expect_err("unknown section should fail");
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = DesignSystemConfig::from_toml_str("[classes]\npolicy = \"tailwind\"\n")
            .expect_err("unknown policy should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_path_reads_config_file() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("design-system.toml");
        fs::write(&path, "[attributes]\ndeny = [\"tooltip\"]\n").expect("write config");

        let config = DesignSystemConfig::from_path(&path).expect("load config");
        assert_eq!(config.attributes.deny, vec!["tooltip".to_string()]);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn from_path_reports_missing_file_as_read_error() {
        let root = unique_test_root();
        let err = DesignSystemConfig::from_path(&root.join("missing.toml"))
            .expect_err("missing config should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
