//! Leptos primitives rendering the design system recipes.
//!
//! Every primitive composes its recipe with the caller's `class` through the active
//! [`DesignSystemContext`](crate::DesignSystemContext), spreads the caller's remaining attributes
//! after denylist filtering, and stamps the `data-ui-*` DOM contract (`data-ui-primitive`,
//! `data-ui-kind`, and one attribute per resolved axis).

use leptos::ev::{Event, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{use_design_system, Icon};

mod controls;
mod feedback;
mod layout;
mod stepper;
mod terminal;
mod typography;

pub use controls::{Button, ExternalLinkButton, Field, Input, Label, LinkButton, Textarea};
pub use feedback::{Alert, Badge};
pub use layout::{Container, Section, SectionContent, SectionHeader, Styled};
pub use stepper::{Stepper, StepperItem, StepperLine, StepperNumber, StepperRoot};
pub use terminal::{TerminalBody, TerminalContainer, TerminalControls, TerminalHeader};
pub use typography::{Heading, Paragraph, Text};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Element with a tag chosen at runtime, carrying `attrs` in order.
pub(crate) fn dynamic_element(
    tag: &'static str,
    attrs: Vec<(&'static str, Attribute)>,
) -> HtmlElement<html::Custom> {
    attrs.into_iter().fold(
        html::custom(html::Custom::new(tag)),
        |element, (name, value)| element.attr(name, value),
    )
}
