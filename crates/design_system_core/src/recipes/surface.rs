//! Glass container and section recipes.

use crate::class_names::ClassFragment;
use crate::variants::{Recipe, VariantAxis};

const CONTAINER_BASE: &str = "relative overflow-hidden rounded-2xl border backdrop-blur-[10px]";
const CONTAINER_GRADIENT: &str = r#"before:content-[""] before:absolute before:top-0 before:left-0 before:right-0 before:h-[3px] before:bg-gradient-accent-top before:opacity-80"#;

const SECTION_BASE: &str = "relative overflow-hidden rounded-xl border backdrop-blur-[10px]";
const SECTION_GRADIENT: &str = r#"before:content-[""] before:absolute before:top-0 before:left-0 before:right-0 before:h-0.5 before:bg-gradient-accent-top before:opacity-80"#;

const SECTION_HEADER_BASE: &str = "flex items-center gap-3 text-text-zinc-200";

/// Section body content.
pub const SECTION_CONTENT_CLASS: &str = "text-text-zinc-200";
/// Wrapper around a section header icon.
pub const SECTION_HEADER_ICON_CLASS: &str = "flex-shrink-0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Container variants.
pub enum ContainerVariant {
    /// Padded glass panel.
    Standard,
    /// Centered confirmation panel.
    Success,
}

impl Default for ContainerVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for ContainerVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Success => "success",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard => "bg-zinc-800-alpha-80 border-zinc-400-alpha-10 p-8",
            Self::Success => "bg-zinc-800-alpha-80 border-zinc-400-alpha-10 p-12 text-center",
        }
    }
}

/// Resolved container style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
    /// Variant.
    pub variant: ContainerVariant,
    /// Draws the accent gradient along the top edge.
    pub with_gradient: bool,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            variant: ContainerVariant::default(),
            with_gradient: true,
        }
    }
}

impl Recipe for ContainerStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            CONTAINER_BASE.into(),
            self.variant.classes().into(),
            ClassFragment::when(self.with_gradient, CONTAINER_GRADIENT),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Section variants.
pub enum SectionVariant {
    /// Content section.
    Standard,
    /// Card-like section.
    Card,
}

impl Default for SectionVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for SectionVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Card => "card",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard | Self::Card => "bg-zinc-800-alpha-80 border-zinc-400-alpha-10 p-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element rendered by a section.
pub enum SectionElement {
    /// `<section>`.
    Section,
    /// `<div>`.
    Div,
    /// `<article>`.
    Article,
}

impl Default for SectionElement {
    fn default() -> Self {
        Self::Section
    }
}

impl SectionElement {
    /// Element tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Div => "div",
            Self::Article => "article",
        }
    }
}

/// Resolved section style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    /// Variant.
    pub variant: SectionVariant,
    /// Draws the accent gradient along the top edge.
    pub with_gradient: bool,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            variant: SectionVariant::default(),
            with_gradient: true,
        }
    }
}

impl Recipe for SectionStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            SECTION_BASE.into(),
            self.variant.classes().into(),
            ClassFragment::when(self.with_gradient, SECTION_GRADIENT),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Section header spacing.
pub enum SectionHeaderSize {
    /// `mb-3`.
    Sm,
    /// `mb-4`.
    Md,
    /// `mb-6`.
    Lg,
}

impl Default for SectionHeaderSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for SectionHeaderSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "mb-3",
            Self::Md => "mb-4",
            Self::Lg => "mb-6",
        }
    }
}

/// Resolved section header style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionHeaderStyle {
    /// Spacing below the header.
    pub size: SectionHeaderSize,
}

impl Recipe for SectionHeaderStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![SECTION_HEADER_BASE.into(), self.size.classes().into()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn containers_draw_the_gradient_by_default() {
        let class = ContainerStyle::default().class_name();
        assert!(class.contains("before:h-[3px]"));
        assert!(class.contains("p-8"));

        let plain = ContainerStyle {
            variant: ContainerVariant::Success,
            with_gradient: false,
        };
        assert_eq!(
            plain.class_name(),
            "relative overflow-hidden rounded-2xl border backdrop-blur-[10px] bg-zinc-800-alpha-80 border-zinc-400-alpha-10 p-12 text-center"
        );
    }

    #[test]
    fn section_gradient_is_thinner_than_container_gradient() {
        let class = SectionStyle::default().class_name();
        assert!(class.contains("before:h-0.5"));
        assert!(!class.contains("before:h-[3px]"));
        assert_eq!(SectionElement::Article.tag(), "article");
    }

    #[test]
    fn section_header_spacing_follows_size() {
        assert_eq!(
            SectionHeaderStyle {
                size: SectionHeaderSize::Lg,
            }
            .class_name(),
            "flex items-center gap-3 text-text-zinc-200 mb-6"
        );
        assert_eq!(
            SectionHeaderStyle::default().class_name_with("mb-0"),
            "flex items-center gap-3 text-text-zinc-200 mb-0"
        );
    }
}
