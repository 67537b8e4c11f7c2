use design_system_core::recipes::{
    button_disabled, ButtonSize, ButtonStyle, ButtonVariant, ControlStyle, FieldIds, IconName,
    IconSize, LabelSize, LabelStyle, LabelVariant, LinkButtonSize, LinkButtonStyle,
    LinkButtonVariant, BUTTON_LOADING_LABEL, BUTTON_SPINNER_CLASS, EXTERNAL_LINK_REL,
    EXTERNAL_LINK_TARGET, FIELD_CLASS, FIELD_ERROR_CLASS, FIELD_HINT_CLASS, REQUIRED_MARKER_CLASS,
    TEXTAREA_DEFAULT_ROWS,
};
use design_system_core::VariantAxis;

use super::*;

fn icon_slot(icon: IconName) -> impl IntoView {
    view! {
        <span aria-hidden="true">
            <Icon icon size=IconSize::Sm />
        </span>
    }
}

#[component]
/// Action button with a loading state and optional icon slots.
///
/// While `loading` is set the button is disabled, marked `aria-busy`, and its content is replaced
/// by a spinner plus screen-reader text.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&ButtonStyle::new(variant, size), class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <button
            type=button_type
            class=class
            disabled=move || button_disabled(disabled.get(), loading.get())
            aria-busy=move || loading.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if loading.get() { "loading" } else { "idle" }
            data-ui-disabled=move || bool_token(button_disabled(disabled.get(), loading.get()))
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            <Show
                when=move || loading.get()
                fallback=move || {
                    view! {
                        {left_icon.map(icon_slot)}
                        <span>{children()}</span>
                        {right_icon.map(icon_slot)}
                    }
                }
            >
                <span class=BUTTON_SPINNER_CLASS aria-hidden="true"></span>
                <span class="sr-only">{BUTTON_LOADING_LABEL}</span>
            </Show>
        </button>
    }
}

#[component]
/// Anchor styled as a button for in-app navigation.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = LinkButtonVariant::Primary)] variant: LinkButtonVariant,
    #[prop(default = LinkButtonSize::Md)] size: LinkButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&LinkButtonStyle::new(variant, size), class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <a
            href=href
            class=class
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            {..attrs}
        >
            {left_icon.map(icon_slot)}
            <span>{children()}</span>
            {right_icon.map(icon_slot)}
        </a>
    }
}

#[component]
/// Button-styled anchor opening an external page in a new tab.
pub fn ExternalLinkButton(
    #[prop(into)] href: String,
    #[prop(default = LinkButtonVariant::Primary)] variant: LinkButtonVariant,
    #[prop(default = LinkButtonSize::Md)] size: LinkButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&LinkButtonStyle::new(variant, size), class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <a
            href=href
            target=EXTERNAL_LINK_TARGET
            rel=EXTERNAL_LINK_REL
            class=class
            data-ui-primitive="true"
            data-ui-kind="external-link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            {..attrs}
        >
            {left_icon.map(icon_slot)}
            <span>{children()}</span>
            {right_icon.map(icon_slot)}
        </a>
    }
}

/// Ids and validation state a [`Field`] shares with the control rendered inside it.
#[derive(Clone, Copy)]
struct FieldContext {
    ids: StoredValue<FieldIds>,
    has_hint: bool,
    error: Signal<Option<String>>,
}

impl FieldContext {
    fn control_id(self) -> String {
        self.ids.with_value(|ids| ids.control.clone())
    }

    fn invalid(self) -> bool {
        self.error.with(Option::is_some)
    }

    fn described_by(self) -> Option<String> {
        let has_error = self.invalid();
        self.ids
            .with_value(|ids| ids.described_by(self.has_hint, has_error))
    }
}

/// Control wiring shared by [`Input`] and [`Textarea`]: an explicit id wins over the field's.
struct ControlWiring {
    id: Option<String>,
    field: Option<FieldContext>,
}

impl ControlWiring {
    fn resolve(id: Option<String>) -> Self {
        let field = use_context::<FieldContext>();
        let id = id.or_else(|| field.map(FieldContext::control_id));
        Self { id, field }
    }
}

#[component]
/// Single-line text input. Inside a [`Field`] it takes the field's id, description, and
/// validation state.
pub fn Input(
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let ControlWiring { id, field } = ControlWiring::resolve(id);
    let style = move || ControlStyle {
        invalid: invalid.get() || field.is_some_and(FieldContext::invalid),
    };
    let class = ds.class_name(&ControlStyle::default(), class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <input
            type=input_type
            id=id
            class=class
            node_ref=node_ref
            disabled=move || disabled.get()
            aria-invalid=move || style().aria_invalid()
            aria-describedby=move || field.and_then(FieldContext::described_by)
            data-invalid=move || style().data_invalid()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            {..attrs}
        />
    }
}

#[component]
/// Multi-line text input, five rows tall unless `rows` says otherwise.
pub fn Textarea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = TEXTAREA_DEFAULT_ROWS)] rows: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let ControlWiring { id, field } = ControlWiring::resolve(id);
    let style = move || ControlStyle {
        invalid: invalid.get() || field.is_some_and(FieldContext::invalid),
    };
    let class = ds.class_name(&ControlStyle::default(), class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <textarea
            id=id
            rows=rows
            class=class
            node_ref=node_ref
            disabled=move || disabled.get()
            aria-invalid=move || style().aria_invalid()
            aria-describedby=move || field.and_then(FieldContext::described_by)
            data-invalid=move || style().data_invalid()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            {..attrs}
        ></textarea>
    }
}

#[component]
/// Form label. `required` appends a decorative marker.
pub fn Label(
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(default = LabelSize::Sm)] size: LabelSize,
    #[prop(default = LabelVariant::Standard)] variant: LabelVariant,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&LabelStyle { size, variant }, class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <label
            for=html_for
            class=class
            data-ui-primitive="true"
            data-ui-kind="label"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            {..attrs}
        >
            {children()}
            {required.then(|| view! { <span class=REQUIRED_MARKER_CLASS aria-hidden="true">"*"</span> })}
        </label>
    }
}

#[component]
/// Labelled form field: label, the control passed as children, hint, and validation message.
///
/// The control picks up the field id and is described by whichever of hint and error are shown.
pub fn Field(
    #[prop(into)] id: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let ids = FieldIds::new(id);
    let error = Signal::derive(move || error.get());
    let field = FieldContext {
        ids: store_value(ids.clone()),
        has_hint: hint.is_some(),
        error,
    };
    provide_context(field);

    let class = ds.compose([FIELD_CLASS, class.as_deref().unwrap_or_default()]);
    let attrs = ds.forward_attrs(attrs);
    let FieldIds {
        control,
        hint: hint_id,
        error: error_id,
    } = ids;

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="field"
            data-ui-invalid=move || bool_token(field.invalid())
            {..attrs}
        >
            {label.map(|label| {
                view! {
                    <Label html_for=control required>
                        {label}
                    </Label>
                }
            })}
            {children()}
            {hint.map(|hint| view! { <p id=hint_id class=FIELD_HINT_CLASS>{hint}</p> })}
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p id=error_id.clone() class=FIELD_ERROR_CLASS role="alert">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn field_context_describes_control_by_visible_messages() {
        let _ = leptos::create_runtime();
        let error = create_rw_signal(None::<String>);
        let field = FieldContext {
            ids: store_value(FieldIds::new("email")),
            has_hint: true,
            error: error.into(),
        };
        assert_eq!(field.control_id(), "email");
        assert!(!field.invalid());
        assert_eq!(field.described_by().as_deref(), Some("email-hint"));

        error.set(Some("Enter a valid email".to_string()));
        assert!(field.invalid());
        assert_eq!(
            field.described_by().as_deref(),
            Some("email-hint email-error")
        );
    }
}
