//! Built-in component recipes.
//!
//! Each component exposes one enum per styling axis (implementing [`VariantAxis`]) and a style
//! struct (implementing [`Recipe`]) that resolves the selected options to class fragments. The
//! modules also carry the non-class presentation state the components share: accessible labels,
//! element choices, and derived ids.
//!
//! [`VariantAxis`]: crate::VariantAxis
//! [`Recipe`]: crate::Recipe

mod alert;
mod badge;
mod button;
mod field;
mod icon;
mod stepper;
mod surface;
mod terminal;
mod typography;

pub use alert::{
    AlertStyle, AlertVariant, ALERT_BODY_CLASS, ALERT_CONTENT_CLASS, ALERT_ICON_CLASS,
    ALERT_ROLE, ALERT_TITLE_CLASS,
};
pub use badge::{BadgeSize, BadgeStyle, BadgeVariant};
pub use button::{
    button_disabled, ButtonSize, ButtonStyle, ButtonVariant, LinkButtonSize, LinkButtonStyle,
    LinkButtonVariant, BUTTON_LOADING_LABEL, BUTTON_SPINNER_CLASS, EXTERNAL_LINK_REL,
    EXTERNAL_LINK_TARGET,
};
pub use field::{
    ControlStyle, FieldIds, FIELD_CLASS, FIELD_ERROR_CLASS, FIELD_HINT_CLASS,
    TEXTAREA_DEFAULT_ROWS,
};
pub use icon::{IconName, IconSize};
pub use stepper::{
    plan_steps, step_aria_label, PlannedStep, StepDescriptor, StepStatus, StepperItemStyle,
    StepperLineStyle, StepperNumberStyle, StepperOrientation, StepperRootStyle, StepperSize,
    STEPPER_ARIA_LABEL, STEPPER_ROLE,
};
pub use surface::{
    ContainerStyle, ContainerVariant, SectionElement, SectionHeaderSize, SectionHeaderStyle,
    SectionStyle, SectionVariant, SECTION_CONTENT_CLASS, SECTION_HEADER_ICON_CLASS,
};
pub use terminal::{
    activates_control, TerminalControl, TerminalWindowState, TERMINAL_ARIA_LABEL,
    TERMINAL_CONTROLS_CLASS, TERMINAL_CONTROLS_LABEL, TERMINAL_ID,
};
pub use typography::{
    HeadingLevel, HeadingSize, HeadingStyle, HeadingVariant, LabelSize, LabelStyle, LabelVariant,
    ParagraphStyle, TextElement, TextSize, TextStyle, TextTone, REQUIRED_MARKER_CLASS,
};
