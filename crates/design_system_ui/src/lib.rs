//! Leptos rendering of the design system.
//!
//! The crate turns the recipes of `design_system_core` into components. Each primitive composes
//! its classes through the active [`DesignSystemContext`], filters the attributes it spreads with
//! the configured denylist, and exposes the stable `data-ui-*` DOM contract used by styling and
//! tests. Wrap an application in [`DesignSystemProvider`] (or call [`provide_design_system`]) to
//! render with a non-default configuration.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod icon;
mod primitives;

pub use context::{
    provide_design_system, provide_design_system_from_toml, use_design_system, DesignSystemContext,
    DesignSystemProvider,
};
pub use icon::Icon;
pub use primitives::{
    Alert, Badge, Button, Container, ExternalLinkButton, Field, Heading, Input, Label, LinkButton,
    Paragraph, Section, SectionContent, SectionHeader, Stepper, StepperItem, StepperLine,
    StepperNumber, StepperRoot, Styled, TerminalBody, TerminalContainer, TerminalControls,
    TerminalHeader, Text, Textarea,
};

/// Convenience imports for applications rendering the design system.
pub mod prelude {
    pub use design_system_core::prelude::*;

    pub use crate::{
        provide_design_system, provide_design_system_from_toml, use_design_system, Alert, Badge,
        Button, Container, DesignSystemContext, DesignSystemProvider, ExternalLinkButton, Field,
        Heading, Icon, Input, Label, LinkButton, Paragraph, Section, SectionContent, SectionHeader,
        Stepper, StepperItem, StepperLine, StepperNumber, StepperRoot, Styled, TerminalBody,
        TerminalContainer, TerminalControls, TerminalHeader, Text, Textarea,
    };
}
