//! Inline SVG icons.
//!
//! Glyphs follow Fluent UI System Icons (`@fluentui/svg-icons`, regular 24px); the icon set itself
//! is declared in `design_system_core` so recipes can name icons without a rendering dependency.

use design_system_core::recipes::{IconName, IconSize};
use leptos::*;

use crate::use_design_system;

/// SVG markup drawn inside the 24x24 viewBox for `icon`.
pub(crate) fn svg_body(icon: IconName) -> &'static str {
    match icon {
        IconName::ErrorCircle => {
            r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 3a.75.75 0 0 1 .75.75v5.5a.75.75 0 0 1-1.5 0v-5.5A.75.75 0 0 1 12 6.5Zm0 8.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
        }
        IconName::CheckmarkCircle => {
            r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm3.22 5.72a.75.75 0 0 1 1.06 1.06l-5 5a.75.75 0 0 1-1.06 0l-2.5-2.5a.75.75 0 1 1 1.06-1.06l1.97 1.97 4.47-4.47Z"/>"#
        }
        IconName::Warning => {
            r#"<path d="M10.03 3.66a2.25 2.25 0 0 1 3.94 0l7.74 13.5a2.25 2.25 0 0 1-1.97 3.34H4.26a2.25 2.25 0 0 1-1.97-3.34l7.74-13.5Zm2.64.75a.75.75 0 0 0-1.34 0L3.6 17.9a.75.75 0 0 0 .66 1.1h15.48a.75.75 0 0 0 .66-1.1L12.67 4.41ZM12 8.5a.75.75 0 0 1 .75.75v4.5a.75.75 0 0 1-1.5 0v-4.5A.75.75 0 0 1 12 8.5Zm0 7a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
        }
        IconName::Info => {
            r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 7a.75.75 0 0 1 .75.75v5.5a.75.75 0 0 1-1.5 0v-5.5A.75.75 0 0 1 12 10.5Zm0-3.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
        }
        IconName::Checkmark => {
            r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
        }
        IconName::WindowMinimize => {
            r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
        }
        IconName::WindowMaximize => {
            r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
        }
        IconName::WindowRestore => {
            r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
        }
        IconName::Dismiss => {
            r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
        }
    }
}

#[component]
/// Renders an icon as inline SVG. Icons are decorative and hidden from assistive technology.
pub fn Icon(
    /// Icon to draw.
    icon: IconName,
    /// Rendered size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Extra classes composed after `ui-icon`.
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let ds = use_design_system();
    let size_px = size.px().to_string();

    view! {
        <svg
            class=ds.compose(["ui-icon", class.unwrap_or_default()])
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=svg_body(icon)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_draws_a_single_path() {
        let icons = [
            IconName::ErrorCircle,
            IconName::CheckmarkCircle,
            IconName::Warning,
            IconName::Info,
            IconName::Checkmark,
            IconName::WindowMinimize,
            IconName::WindowMaximize,
            IconName::WindowRestore,
            IconName::Dismiss,
        ];
        for icon in icons {
            let body = svg_body(icon);
            assert!(
                body.starts_with("<path d=\"M") || body.starts_with("<path d=\"m"),
                "{icon:?}"
            );
            assert_eq!(body.matches("<path").count(), 1, "{icon:?}");
            assert!(body.ends_with("Z\"/>"), "{icon:?}");
        }
    }
}
