use design_system_core::recipes::{
    activates_control, IconSize, TerminalControl, TerminalWindowState, TERMINAL_ARIA_LABEL,
    TERMINAL_CONTROLS_CLASS, TERMINAL_CONTROLS_LABEL, TERMINAL_ID,
};

use super::*;
use crate::DesignSystemContext;

/// Window state and control handler a [`TerminalContainer`] shares with its chrome.
#[derive(Clone, Copy)]
struct TerminalChrome {
    state: Signal<TerminalWindowState>,
    on_control: Option<Callback<TerminalControl>>,
}

fn terminal_state(chrome: Option<TerminalChrome>) -> TerminalWindowState {
    chrome
        .map(|chrome| chrome.state.get())
        .unwrap_or_else(TerminalWindowState::open)
}

fn header_class(
    ds: DesignSystemContext,
    chrome: Option<TerminalChrome>,
    class: Option<&str>,
) -> String {
    ds.compose(terminal_state(chrome).header_fragments(class))
}

fn body_class(
    ds: DesignSystemContext,
    chrome: Option<TerminalChrome>,
    class: Option<&str>,
) -> String {
    ds.compose(terminal_state(chrome).body_fragments(class))
}

#[component]
/// Floating terminal dialog. Renders nothing while the window is not visible.
///
/// Header and body rendered inside pick up the window geometry from the container; `Alt+M`,
/// `Alt+Shift+M`, and `Alt+F4` inside the dialog report the matching [`TerminalControl`].
pub fn TerminalContainer(
    /// Visibility and geometry, owned by the caller.
    #[prop(into)]
    state: Signal<TerminalWindowState>,
    /// Receives activated controls and keyboard shortcuts.
    #[prop(optional)]
    on_control: Option<Callback<TerminalControl>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let ds = use_design_system();
    provide_context(TerminalChrome { state, on_control });
    let attrs = store_value(ds.forward_attrs(attrs));
    let class = store_value(class);
    let renders = create_memo(move |_| state.get().renders());

    move || {
        renders.get().then(|| {
            let attrs = attrs.get_value();
            let children = children.clone();
            view! {
                <section
                    id=TERMINAL_ID
                    role="dialog"
                    aria-label=TERMINAL_ARIA_LABEL
                    aria-modal="false"
                    aria-expanded=move || bool_token(state.get().aria_expanded())
                    tabindex="-1"
                    class=move || class.with_value(|class| ds.class_name(&state.get(), class.as_deref()))
                    data-ui-primitive="true"
                    data-ui-kind="terminal"
                    data-ui-maximized=move || bool_token(state.get().maximized)
                    data-ui-minimized=move || bool_token(state.get().minimized)
                    on:keydown=move |ev| {
                        let shortcut =
                            TerminalControl::from_shortcut(&ev.key(), ev.alt_key(), ev.shift_key());
                        if let (Some(control), Some(on_control)) = (shortcut, on_control.as_ref()) {
                            ev.prevent_default();
                            on_control.call(control);
                        }
                    }
                    {..attrs}
                >
                    <div class=move || ds.compose(state.get().inner_fragments())>{children()}</div>
                </section>
            }
        })
    }
}

#[component]
/// Title bar of a [`TerminalContainer`].
pub fn TerminalHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let chrome = use_context::<TerminalChrome>();
    let attrs = ds.forward_attrs(attrs);

    view! {
        <header
            role="banner"
            class=move || header_class(ds, chrome, class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="terminal-header"
            {..attrs}
        >
            {children()}
        </header>
    }
}

#[component]
/// Content area of a [`TerminalContainer`].
pub fn TerminalBody(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let chrome = use_context::<TerminalChrome>();
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            class=move || body_class(ds, chrome, class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="terminal-body"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Minimize, maximize/restore, and close buttons.
///
/// Inside a [`TerminalContainer`] the buttons follow its state and report to its handler unless
/// `maximized` or `on_control` are given.
pub fn TerminalControls(
    #[prop(optional, into)] maximized: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_control: Option<Callback<TerminalControl>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let chrome = use_context::<TerminalChrome>();
    let attrs = ds.forward_attrs(attrs);
    let maximized = move || match maximized {
        Some(maximized) => maximized.get(),
        None => terminal_state(chrome).maximized,
    };
    let on_control = on_control.or_else(|| chrome.and_then(|chrome| chrome.on_control));
    let activate = move |control: TerminalControl| {
        if let Some(on_control) = on_control.as_ref() {
            on_control.call(control);
        }
    };

    view! {
        <div
            class=TERMINAL_CONTROLS_CLASS
            role="toolbar"
            aria-label=TERMINAL_CONTROLS_LABEL
            data-ui-primitive="true"
            data-ui-kind="terminal-controls"
            {..attrs}
        >
            {TerminalControl::ALL
                .into_iter()
                .map(|control| {
                    view! {
                        <button
                            type="button"
                            class=control.class()
                            aria-label=move || control.label(maximized())
                            aria-pressed=move || control.aria_pressed(maximized()).map(bool_token)
                            title=move || control.title(maximized())
                            data-ui-control=control.token()
                            on:click=move |_| activate(control)
                            on:keydown=move |ev| {
                                if activates_control(&ev.key()) {
                                    ev.prevent_default();
                                    activate(control);
                                }
                            }
                        >
                            {move || view! { <Icon icon=control.icon(maximized()) size=IconSize::Xs /> }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provide_design_system_from_toml;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn chrome_classes_use_the_configured_policy() {
        let _ = leptos::create_runtime();
        let ds = provide_design_system_from_toml("[classes]\npolicy = \"dedupe-only\"");
        let header = header_class(ds, None, None);
        assert!(tokens(&header).contains(&"h-[2.5rem]"));
        assert!(tokens(&header).contains(&"h-auto"));

        let body = body_class(ds, None, Some("bg-zinc-900"));
        assert!(tokens(&body).contains(&"bg-zinc-900"));
    }

    #[test]
    fn chrome_classes_follow_context_window_state() {
        let _ = leptos::create_runtime();
        let ds = DesignSystemContext::new(Default::default());
        let minimized = TerminalWindowState {
            minimized: true,
            ..TerminalWindowState::open()
        };
        let chrome = TerminalChrome {
            state: Signal::derive(move || minimized),
            on_control: None,
        };
        assert_eq!(
            header_class(ds, Some(chrome), None),
            minimized.header_class(())
        );
        assert_eq!(
            header_class(ds, None, None),
            TerminalWindowState::open().header_class(())
        );
        assert!(!tokens(&header_class(ds, None, None)).contains(&"h-[2.5rem]"));
    }
}
