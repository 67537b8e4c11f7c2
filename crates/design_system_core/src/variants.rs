//! Variant resolution: mapping a declared `{variant, size, ...}` selection to class fragments.
//!
//! Built-in components use the typed form: an enum per axis implementing [`VariantAxis`] and a
//! style struct implementing [`Recipe`]. Consumers can also declare recipes as data with
//! [`VariantRecipe`], usually loaded from TOML through
//! [`DesignSystemConfig`](crate::DesignSystemConfig).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::class_names::{compose, ClassFragment};
use crate::error::ConfigError;

/// One option of a styling axis (a variant, a size, a status).
pub trait VariantAxis: Copy + Default {
    /// Stable kebab-case token, used for `data-ui-*` attributes.
    fn token(self) -> &'static str;

    /// Class fragment contributed by this option.
    fn classes(self) -> &'static str;
}

/// A component style: base classes plus one fragment per resolved axis.
pub trait Recipe {
    /// Ordered fragments, base first.
    fn fragments(&self) -> Vec<ClassFragment<'static>>;

    /// Composed class string.
    fn class_name(&self) -> String {
        compose(self.fragments())
    }

    /// Composed class string with caller overrides applied last.
    fn class_name_with<'a>(&self, overrides: impl Into<ClassFragment<'a>>) -> String {
        let mut fragments: Vec<ClassFragment<'a>> = self.fragments();
        fragments.push(overrides.into());
        compose(fragments)
    }
}

/// Axis-to-option selection for a [`VariantRecipe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(IndexMap<String, String>);

impl Selection {
    /// Empty selection; every axis resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `option` on `axis`.
    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.0.insert(axis.into(), option.into());
        self
    }

    /// Selected option for `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    /// Iterates `(axis, option)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(axis, option)| (axis.as_str(), option.as_str()))
    }
}

impl<A, O> FromIterator<(A, O)> for Selection
where
    A: Into<String>,
    O: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, O)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(axis, option)| (axis.into(), option.into()))
                .collect(),
        )
    }
}

/// Classes applied when every `when` pair matches the effective selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Required `(axis, option)` pairs.
    pub when: IndexMap<String, String>,
    /// Classes added after the per-axis classes.
    pub class: String,
}

/// Data-driven variant recipe.
///
/// ```toml
/// base = "inline-flex items-center rounded-full"
/// defaults = { tone = "neutral", size = "md" }
///
/// [variants.tone]
/// neutral = "bg-zinc-700 text-zinc-200"
/// accent = "bg-lime-400 text-zinc-900"
///
/// [variants.size]
/// sm = "px-2 py-0.5 text-xs"
/// md = "px-3 py-1 text-sm"
///
/// [[compound]]
/// when = { tone = "accent", size = "sm" }
/// class = "font-semibold"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantRecipe {
    /// Classes applied regardless of selection.
    #[serde(default)]
    pub base: String,
    /// `axis -> option -> classes`.
    #[serde(default)]
    pub variants: IndexMap<String, IndexMap<String, String>>,
    /// `axis -> option` used when the selection omits an axis or names an unknown option.
    #[serde(default)]
    pub defaults: IndexMap<String, String>,
    /// Compound rules, applied in order after the axes.
    #[serde(default)]
    pub compound: Vec<CompoundVariant>,
}

impl VariantRecipe {
    /// Checks that defaults and compound rules only name declared axes and options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAxis`] or [`ConfigError::UnknownOption`] naming `recipe`.
    pub fn validate(&self, recipe: &str) -> Result<(), ConfigError> {
        let rules = self
            .defaults
            .iter()
            .chain(self.compound.iter().flat_map(|compound| compound.when.iter()));
        for (axis, option) in rules {
            let options = self
                .variants
                .get(axis)
                .ok_or_else(|| ConfigError::UnknownAxis {
                    recipe: recipe.to_string(),
                    axis: axis.clone(),
                })?;
            if !options.contains_key(option) {
                return Err(ConfigError::UnknownOption {
                    recipe: recipe.to_string(),
                    axis: axis.clone(),
                    option: option.clone(),
                });
            }
        }
        Ok(())
    }

    /// Option in effect for `axis`: the selected one when declared, else the default.
    pub fn effective_option<'s>(&'s self, axis: &str, selection: &'s Selection) -> Option<&'s str> {
        let options = self.variants.get(axis)?;
        selection
            .get(axis)
            .filter(|option| options.contains_key(*option))
            .or_else(|| self.defaults.get(axis).map(String::as_str))
    }

    /// Ordered fragments for `selection`: base, one per axis, then matching compounds.
    pub fn fragments<'s>(&'s self, selection: &'s Selection) -> Vec<ClassFragment<'s>> {
        let mut fragments = vec![ClassFragment::from(self.base.as_str())];
        for (axis, options) in &self.variants {
            let classes = self
                .effective_option(axis, selection)
                .and_then(|option| options.get(option));
            fragments.push(classes.map(String::as_str).into());
        }
        for compound in &self.compound {
            let matches = compound
                .when
                .iter()
                .all(|(axis, option)| self.effective_option(axis, selection) == Some(option.as_str()));
            fragments.push(ClassFragment::when(matches, compound.class.as_str()));
        }
        fragments
    }

    /// Class string for `selection`. Unknown axes and options fall back silently.
    pub fn resolve(&self, selection: &Selection) -> String {
        compose(self.fragments(selection))
    }

    /// Class string for `selection` with caller overrides applied last.
    pub fn resolve_with<'a>(
        &'a self,
        selection: &'a Selection,
        overrides: impl Into<ClassFragment<'a>>,
    ) -> String {
        let mut fragments = self.fragments(selection);
        fragments.push(overrides.into());
        compose(fragments)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chip() -> VariantRecipe {
        toml::from_str(
            r#"
            base = "inline-flex items-center rounded-full"
            defaults = { tone = "neutral", size = "md" }

            [variants.tone]
            neutral = "bg-zinc-700 text-zinc-200"
            accent = "bg-lime-400 text-zinc-900"

            [variants.size]
            sm = "px-2 py-0.5 text-xs"
            md = "px-3 py-1 text-sm"

            [[compound]]
            when = { tone = "accent", size = "sm" }
            class = "font-semibold"
            "#,
        )
        .expect("parse chip recipe")
    }

    #[test]
    fn empty_selection_resolves_defaults() {
        assert_eq!(
            chip().resolve(&Selection::new()),
            "inline-flex items-center rounded-full bg-zinc-700 text-zinc-200 px-3 py-1 text-sm"
        );
    }

    #[test]
    fn selection_and_compound_rules_apply() {
        let selection = Selection::new().with("tone", "accent").with("size", "sm");
        assert_eq!(
            chip().resolve(&selection),
            "inline-flex items-center rounded-full bg-lime-400 text-zinc-900 px-2 py-0.5 text-xs font-semibold"
        );
    }

    #[test]
    fn unknown_options_fall_back_to_defaults() {
        let selection: Selection = [("tone", "glow"), ("shape", "square")].into_iter().collect();
        assert_eq!(chip().resolve(&selection), chip().resolve(&Selection::new()));
    }

    #[test]
    fn overrides_win_over_recipe_classes() {
        let selection = Selection::new();
        assert_eq!(
            chip().resolve_with(&selection, "rounded-md px-5"),
            "inline-flex items-center bg-zinc-700 text-zinc-200 py-1 text-sm rounded-md px-5"
        );
    }

    #[test]
    fn validate_rejects_unknown_default_axis_and_option() {
        let mut recipe = chip();
        recipe.defaults.insert("shape".into(), "square".into());
        assert!(matches!(
            recipe.validate("chip"),
            Err(ConfigError::UnknownAxis { recipe, axis }) if recipe == "chip" && axis == "shape"
        ));

        let mut recipe = chip();
        recipe.compound[0].when.insert("size".into(), "xl".into());
        assert!(matches!(
            recipe.validate("chip"),
            Err(ConfigError::UnknownOption { axis, option, .. }) if axis == "size" && option == "xl"
        ));
        assert!(chip().validate("chip").is_ok());
    }

    #[test]
    fn axis_without_default_contributes_nothing_until_selected() {
        let recipe = VariantRecipe {
            base: "block".into(),
            variants: IndexMap::from([(
                "tone".to_string(),
                IndexMap::from([("muted".to_string(), "opacity-60".to_string())]),
            )]),
            ..VariantRecipe::default()
        };
        assert_eq!(recipe.resolve(&Selection::new()), "block");
        assert_eq!(
            recipe.resolve(&Selection::new().with("tone", "muted")),
            "block opacity-60"
        );
    }
}
