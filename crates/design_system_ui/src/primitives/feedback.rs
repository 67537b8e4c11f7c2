use design_system_core::recipes::{
    AlertStyle, AlertVariant, BadgeSize, BadgeStyle, BadgeVariant, IconName, IconSize,
    ALERT_BODY_CLASS, ALERT_CONTENT_CLASS, ALERT_ICON_CLASS, ALERT_ROLE, ALERT_TITLE_CLASS,
};
use design_system_core::VariantAxis;

use super::*;

#[component]
/// Inline status message with a severity icon and optional title.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    /// Icon replacing the severity default.
    #[prop(optional)]
    icon: Option<IconName>,
    #[prop(optional)] hide_icon: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&AlertStyle { variant }, class);
    let attrs = ds.forward_attrs(attrs);
    let icon = (!hide_icon).then(|| icon.unwrap_or_else(|| variant.default_icon()));

    view! {
        <div
            role=ALERT_ROLE
            class=class
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
            {..attrs}
        >
            {icon.map(|icon| {
                view! {
                    <span aria-hidden="true">
                        <Icon icon size=IconSize::Md class=ALERT_ICON_CLASS />
                    </span>
                }
            })}
            <div class=ALERT_BODY_CLASS>
                {title.map(|title| view! { <p class=ALERT_TITLE_CLASS>{title}</p> })}
                <div class=ALERT_CONTENT_CLASS>{children()}</div>
            </div>
        </div>
    }
}

#[component]
/// Compact label for statuses and counts.
pub fn Badge(
    #[prop(default = BadgeVariant::Standard)] variant: BadgeVariant,
    #[prop(default = BadgeSize::Md)] size: BadgeSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&BadgeStyle { variant, size }, class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <span
            class=class
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            {..attrs}
        >
            {children()}
        </span>
    }
}
