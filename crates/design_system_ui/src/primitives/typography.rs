use design_system_core::recipes::{
    HeadingLevel, HeadingSize, HeadingStyle, HeadingVariant, ParagraphStyle, TextElement, TextSize,
    TextStyle, TextTone,
};
use design_system_core::VariantAxis;

use super::*;

#[component]
/// Section heading. The font size follows the level unless `size` is given.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(optional)] size: Option<HeadingSize>,
    #[prop(default = HeadingVariant::Standard)] variant: HeadingVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let style = HeadingStyle {
        level,
        size,
        variant,
    };
    let mut element_attrs = vec![
        ("class", ds.class_name(&style, class).into_attribute()),
        ("data-ui-primitive", "true".into_attribute()),
        ("data-ui-kind", "heading".into_attribute()),
        ("data-ui-variant", variant.token().into_attribute()),
        (
            "data-ui-size",
            style.effective_size().token().into_attribute(),
        ),
    ];
    element_attrs.extend(ds.forward_attrs(attrs));

    dynamic_element(level.tag(), element_attrs).child(children())
}

#[component]
/// Body paragraph.
pub fn Paragraph(
    #[prop(default = TextSize::Base)] size: TextSize,
    #[prop(default = TextTone::Standard)] tone: TextTone,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&ParagraphStyle { size, tone }, class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <p
            class=class
            data-ui-primitive="true"
            data-ui-kind="paragraph"
            data-ui-size=size.token()
            data-ui-tone=tone.token()
            {..attrs}
        >
            {children()}
        </p>
    }
}

#[component]
/// Inline or block text rendered as `span`, `div`, or `p`.
pub fn Text(
    #[prop(default = TextElement::Span)] element: TextElement,
    #[prop(default = TextSize::Base)] size: TextSize,
    #[prop(default = TextTone::Standard)] tone: TextTone,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let mut element_attrs = vec![
        (
            "class",
            ds.class_name(&TextStyle { size, tone }, class)
                .into_attribute(),
        ),
        ("data-ui-primitive", "true".into_attribute()),
        ("data-ui-kind", "text".into_attribute()),
        ("data-ui-size", size.token().into_attribute()),
        ("data-ui-tone", tone.token().into_attribute()),
    ];
    element_attrs.extend(ds.forward_attrs(attrs));

    dynamic_element(element.tag(), element_attrs).child(children())
}
