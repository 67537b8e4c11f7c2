use design_system_core::recipes::{
    ContainerStyle, ContainerVariant, IconName, IconSize, SectionElement, SectionHeaderSize,
    SectionHeaderStyle, SectionStyle, SectionVariant, SECTION_CONTENT_CLASS,
    SECTION_HEADER_ICON_CLASS,
};
use design_system_core::{Selection, VariantAxis};

use super::*;

#[component]
/// Glass panel with an optional accent gradient along the top edge.
pub fn Container(
    #[prop(default = ContainerVariant::Standard)] variant: ContainerVariant,
    #[prop(default = true)] with_gradient: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(
        &ContainerStyle {
            variant,
            with_gradient,
        },
        class,
    );
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="container"
            data-ui-variant=variant.token()
            data-ui-gradient=bool_token(with_gradient)
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Content section rendered as `section`, `div`, or `article`.
pub fn Section(
    #[prop(default = SectionVariant::Standard)] variant: SectionVariant,
    #[prop(default = SectionElement::Section)] element: SectionElement,
    #[prop(default = true)] with_gradient: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let style = SectionStyle {
        variant,
        with_gradient,
    };
    let mut element_attrs = vec![
        ("class", ds.class_name(&style, class).into_attribute()),
        ("data-ui-primitive", "true".into_attribute()),
        ("data-ui-kind", "section".into_attribute()),
        ("data-ui-variant", variant.token().into_attribute()),
        (
            "data-ui-gradient",
            bool_token(with_gradient).into_attribute(),
        ),
    ];
    element_attrs.extend(ds.forward_attrs(attrs));

    dynamic_element(element.tag(), element_attrs).child(children())
}

#[component]
/// Section title row with an optional leading icon.
pub fn SectionHeader(
    #[prop(default = SectionHeaderSize::Md)] size: SectionHeaderSize,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&SectionHeaderStyle { size }, class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="section-header"
            data-ui-size=size.token()
            {..attrs}
        >
            {icon.map(|icon| {
                view! {
                    <span class=SECTION_HEADER_ICON_CLASS aria-hidden="true">
                        <Icon icon size=IconSize::Md />
                    </span>
                }
            })}
            {children()}
        </div>
    }
}

#[component]
/// Section body.
pub fn SectionContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.compose([SECTION_CONTENT_CLASS, class.as_deref().unwrap_or_default()]);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div class=class data-ui-primitive="true" data-ui-kind="section-content" {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// `div` styled by a recipe declared in the design system configuration.
///
/// Unknown recipe names render without recipe classes and log a debug warning.
pub fn Styled(
    /// Name of the configured recipe.
    recipe: &'static str,
    /// Axis-to-option selection; axes left out use the recipe defaults.
    #[prop(optional)]
    selection: Selection,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let overrides = class.unwrap_or_default();
    let class = ds
        .recipe_class(recipe, &selection, &overrides)
        .unwrap_or_else(|| {
            logging::debug_warn!("design system recipe {recipe:?} is not configured");
            ds.compose([overrides.as_str()])
        });
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div class=class data-ui-primitive="true" data-ui-kind="styled" data-ui-recipe={recipe} {..attrs}>
            {children()}
        </div>
    }
}
