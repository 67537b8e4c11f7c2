//! Design system provider and context wiring.
//!
//! Every primitive reads [`DesignSystemContext`] to compose its classes with the configured merge
//! policy and to filter the attributes it spreads onto its native element. Components rendered
//! outside a provider fall back to the default configuration.

use design_system_core::{
    ClassComposer, ClassFragment, Denylist, DesignSystemConfig, Recipe, Selection,
};
use leptos::*;

#[derive(Clone, Copy)]
/// Leptos context carrying the configuration every primitive renders with.
pub struct DesignSystemContext {
    /// Composer applying the configured [`MergePolicy`](design_system_core::MergePolicy).
    pub composer: ClassComposer,
    /// Denylist applied to attributes spread onto native elements.
    pub denylist: StoredValue<Denylist>,
    /// Loaded configuration, including named recipes.
    pub config: StoredValue<DesignSystemConfig>,
}

impl DesignSystemContext {
    /// Builds a context owned by the current reactive owner.
    pub fn new(config: DesignSystemConfig) -> Self {
        Self {
            composer: config.composer(),
            denylist: store_value(config.denylist()),
            config: store_value(config),
        }
    }

    /// Composes `recipe` with caller overrides applied last.
    pub fn class_name<'a>(
        &self,
        recipe: &impl Recipe,
        overrides: impl Into<ClassFragment<'a>>,
    ) -> String {
        let mut fragments: Vec<ClassFragment<'a>> = recipe.fragments();
        fragments.push(overrides.into());
        self.composer.compose(fragments)
    }

    /// Composes free-form fragments with the configured policy.
    pub fn compose<'a, I, F>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: Into<ClassFragment<'a>>,
    {
        self.composer.compose(fragments)
    }

    /// Drops attributes the native element must not receive.
    pub fn forward_attrs(
        &self,
        attrs: Vec<(&'static str, Attribute)>,
    ) -> Vec<(&'static str, Attribute)> {
        self.denylist
            .with_value(|denylist| forwardable_attrs(denylist, attrs))
    }

    /// Resolves a named recipe from the configuration, `None` when it is not declared.
    pub fn recipe_class(
        &self,
        name: &str,
        selection: &Selection,
        overrides: &str,
    ) -> Option<String> {
        self.config.with_value(|config| {
            let recipe = config.recipe(name)?;
            let mut fragments = recipe.fragments(selection);
            fragments.push(overrides.into());
            Some(self.composer.compose(fragments))
        })
    }
}

/// Keeps the attributes `denylist` permits. `class` is owned by composition and never spread.
pub(crate) fn forwardable_attrs<'d, V: 'd>(
    denylist: &'d Denylist,
    attrs: Vec<(&'static str, V)>,
) -> Vec<(&'static str, V)> {
    denylist
        .retain_forwardable(attrs)
        .filter(|(key, _)| !matches!(*key, "class" | "className"))
        .collect()
}

/// Provides a [`DesignSystemContext`] built from `config` to descendant components.
pub fn provide_design_system(config: DesignSystemConfig) -> DesignSystemContext {
    let context = DesignSystemContext::new(config);
    provide_context(context);
    context
}

/// Parses `source` as TOML and provides the result. Invalid configuration is logged and replaced
/// by the default one.
pub fn provide_design_system_from_toml(source: &str) -> DesignSystemContext {
    let config = DesignSystemConfig::from_toml_str(source).unwrap_or_else(|err| {
        logging::warn!("design system config load failed: {err}");
        DesignSystemConfig::default()
    });
    provide_design_system(config)
}

/// Returns the nearest [`DesignSystemContext`], or a default one outside any provider.
pub fn use_design_system() -> DesignSystemContext {
    use_context::<DesignSystemContext>()
        .unwrap_or_else(|| DesignSystemContext::new(DesignSystemConfig::default()))
}

#[component]
/// Provides [`DesignSystemContext`] to descendant components.
pub fn DesignSystemProvider(
    /// Configuration to render with; the default one when omitted.
    #[prop(optional)]
    config: Option<DesignSystemConfig>,
    children: Children,
) -> impl IntoView {
    provide_design_system(config.unwrap_or_default());
    children().into_view()
}

#[cfg(test)]
mod tests {
    use design_system_core::recipes::{ButtonStyle, ButtonVariant};
    use design_system_core::MergePolicy;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn forwardable_attrs_drop_class_and_denied_keys() {
        let attrs = vec![
            ("class", 0),
            ("variant", 1),
            ("data-testid", 2),
            ("$state", 3),
            ("id", 4),
            ("aria-label", 5),
        ];
        let kept: Vec<&str> = forwardable_attrs(Denylist::standard(), attrs)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(kept, vec!["data-testid", "id", "aria-label"]);
    }

    #[test]
    fn context_composes_with_configured_policy() {
        let _ = leptos::create_runtime();
        let config = DesignSystemConfig::from_toml_str(
            r#"
            [classes]
            policy = "dedupe-only"
            "#,
        )
        .expect("config");
        let context = DesignSystemContext::new(config);
        assert_eq!(context.composer.policy(), MergePolicy::DedupeOnly);
        assert_eq!(context.compose(["p-2", "p-4", "p-2"]), "p-4 p-2");

        let style = ButtonStyle::new(ButtonVariant::Ghost, Default::default());
        let default_context = DesignSystemContext::new(DesignSystemConfig::default());
        assert_eq!(
            default_context.class_name(&style, "px-8"),
            style.class_name_with("px-8")
        );
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let _ = leptos::create_runtime();
        let context = provide_design_system_from_toml("[classes]\npolicy = \"nope\"");
        assert_eq!(context.composer.policy(), MergePolicy::ConcernGroups);
        assert!(context
            .denylist
            .with_value(|denylist| denylist.contains("variant")));
        assert_eq!(use_design_system().composer, context.composer);
    }

    #[test]
    fn named_recipes_resolve_through_the_context() {
        let _ = leptos::create_runtime();
        let context = provide_design_system_from_toml(
            r#"
            [recipes.chip]
            base = "inline-flex rounded-full"
            defaults = { tone = "muted" }

            [recipes.chip.variants.tone]
            muted = "bg-zinc-700"
            accent = "bg-lime-400"
            "#,
        );
        let selection = Selection::new().with("tone", "accent");
        assert_eq!(
            context
                .recipe_class("chip", &selection, "rounded-md")
                .as_deref(),
            Some("inline-flex bg-lime-400 rounded-md")
        );
        assert_eq!(context.recipe_class("missing", &selection, ""), None);
    }
}
