use design_system_core::recipes::{
    plan_steps, step_aria_label, IconName, IconSize, PlannedStep, StepDescriptor, StepStatus,
    StepperItemStyle, StepperLineStyle, StepperNumberStyle, StepperOrientation, StepperRootStyle,
    StepperSize, STEPPER_ARIA_LABEL, STEPPER_ROLE,
};
use design_system_core::VariantAxis;

use super::*;

#[component]
/// Navigation landmark wrapping a row or column of steps.
pub fn StepperRoot(
    #[prop(default = StepperOrientation::Horizontal)] orientation: StepperOrientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&StepperRootStyle { orientation }, class);
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            role=STEPPER_ROLE
            aria-label=STEPPER_ARIA_LABEL
            class=class
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=orientation.token()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Numbered step circle. Completed steps show a checkmark instead of the number.
pub fn StepperNumber(
    step: u32,
    #[prop(default = StepStatus::Pending)] status: StepStatus,
    #[prop(default = StepperSize::Md)] size: StepperSize,
    /// Step name; labelled steps announce `"<label>: <status>"`.
    #[prop(optional_no_strip)]
    label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&StepperNumberStyle { status, size }, class);
    let attrs = ds.forward_attrs(attrs);
    let aria_label = label.map(|label| step_aria_label(&label, status));

    view! {
        <div
            class=class
            aria-current=status.aria_current()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="stepper-number"
            data-ui-status=status.token()
            data-ui-size=size.token()
            {..attrs}
        >
            {if status == StepStatus::Completed {
                view! { <Icon icon=IconName::Checkmark size=IconSize::Md class="w-5 h-5" /> }
                    .into_view()
            } else {
                step.into_view()
            }}
        </div>
    }
}

#[component]
/// Connector drawn after a step.
pub fn StepperLine(
    #[prop(default = StepStatus::Pending)] status: StepStatus,
    #[prop(default = StepperOrientation::Horizontal)] orientation: StepperOrientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(
        &StepperLineStyle {
            status,
            orientation,
        },
        class,
    );
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            class=class
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="stepper-line"
            data-ui-status=status.token()
            data-ui-orientation=orientation.token()
            {..attrs}
        ></div>
    }
}

#[component]
/// One step: its number and, unless it is the last step, the connector after it.
pub fn StepperItem(
    step: u32,
    #[prop(into)] current_step: MaybeSignal<u32>,
    total_steps: u32,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = true)] show_line: bool,
    #[prop(default = StepperOrientation::Horizontal)] orientation: StepperOrientation,
    #[prop(default = StepperSize::Md)] size: StepperSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    let class = ds.class_name(&StepperItemStyle { orientation }, class);
    let attrs = ds.forward_attrs(attrs);
    let is_last = step == total_steps;

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="stepper-item"
            data-ui-orientation=orientation.token()
            {..attrs}
        >
            {move || {
                let status = StepStatus::for_step(step, current_step.get());
                view! {
                    <StepperNumber step status size label=label.clone() />
                    {(show_line && !is_last)
                        .then(|| view! { <StepperLine status orientation /> })}
                }
            }}
        </div>
    }
}

fn planned_step_view(
    step: PlannedStep,
    orientation: StepperOrientation,
    size: StepperSize,
    item_class: &str,
) -> impl IntoView {
    let PlannedStep {
        number,
        label,
        status,
        is_last,
    } = step;

    view! {
        <div class=item_class.to_string() data-ui-slot="step" data-ui-status=status.token()>
            <StepperNumber step=number status size label />
            {(!is_last).then(|| view! { <StepperLine status orientation /> })}
        </div>
    }
}

#[component]
/// Progress indicator for a multi-step flow.
///
/// `steps` takes precedence over `total_steps`; without it, `total_steps` unlabelled steps
/// numbered from 1 are drawn.
pub fn Stepper(
    #[prop(into)] current_step: MaybeSignal<u32>,
    #[prop(optional)] total_steps: u32,
    #[prop(optional)] steps: Option<Vec<StepDescriptor>>,
    #[prop(default = StepperOrientation::Horizontal)] orientation: StepperOrientation,
    #[prop(default = StepperSize::Md)] size: StepperSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ds = use_design_system();
    if let Some(steps) = steps.as_ref() {
        if steps.len() != total_steps as usize && total_steps != 0 {
            logging::debug_warn!(
                "stepper received {} steps but total_steps is {total_steps}; drawing the steps",
                steps.len()
            );
        }
    }
    let class = ds.class_name(&StepperRootStyle { orientation }, class);
    let item_class = ds.class_name(&StepperItemStyle { orientation }, ());
    let attrs = ds.forward_attrs(attrs);

    view! {
        <div
            role=STEPPER_ROLE
            aria-label=STEPPER_ARIA_LABEL
            class=class
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=orientation.token()
            {..attrs}
        >
            {move || {
                plan_steps(current_step.get(), total_steps, steps.as_deref())
                    .into_iter()
                    .map(|step| planned_step_view(step, orientation, size, &item_class))
                    .collect_view()
            }}
        </div>
    }
}
