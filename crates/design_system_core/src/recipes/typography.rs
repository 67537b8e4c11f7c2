//! Heading, paragraph, label, and inline text recipes.

use crate::class_names::ClassFragment;
use crate::variants::{Recipe, VariantAxis};

/// Required-field marker appended to labels.
pub const REQUIRED_MARKER_CLASS: &str = "ml-1 text-accent-amber";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading element level.
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

impl HeadingLevel {
    /// Element tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Size used when the caller does not pick one.
    pub fn default_size(self) -> HeadingSize {
        match self {
            Self::H1 => HeadingSize::Xl4,
            Self::H2 => HeadingSize::Xl3,
            Self::H3 => HeadingSize::Xl2,
            Self::H4 => HeadingSize::Xl,
            Self::H5 => HeadingSize::Lg,
            Self::H6 => HeadingSize::Base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading font sizes.
pub enum HeadingSize {
    /// `text-xs`.
    Xs,
    /// `text-sm`.
    Sm,
    /// `text-base`.
    Base,
    /// `text-lg`.
    Lg,
    /// `text-xl`.
    Xl,
    /// `text-2xl`.
    Xl2,
    /// `text-3xl`.
    Xl3,
    /// `text-4xl`.
    Xl4,
}

impl Default for HeadingSize {
    fn default() -> Self {
        HeadingLevel::default().default_size()
    }
}

impl VariantAxis for HeadingSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Base => "text-base",
            Self::Lg => "text-lg",
            Self::Xl => "text-xl",
            Self::Xl2 => "text-2xl",
            Self::Xl3 => "text-3xl",
            Self::Xl4 => "text-4xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading color variants.
pub enum HeadingVariant {
    /// Primary text color.
    Standard,
    /// Accent color.
    Accent,
    /// Subdued color.
    Muted,
}

impl Default for HeadingVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for HeadingVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Accent => "accent",
            Self::Muted => "muted",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard => "text-text-zinc-100",
            Self::Accent => "text-accent-lime",
            Self::Muted => "text-text-zinc-300",
        }
    }
}

/// Resolved heading style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingStyle {
    /// Element level.
    pub level: HeadingLevel,
    /// Explicit size; `None` follows [`HeadingLevel::default_size`].
    pub size: Option<HeadingSize>,
    /// Color variant.
    pub variant: HeadingVariant,
}

impl HeadingStyle {
    /// Size in effect.
    pub fn effective_size(&self) -> HeadingSize {
        self.size.unwrap_or_else(|| self.level.default_size())
    }
}

impl Recipe for HeadingStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            "font-semibold leading-tight".into(),
            self.effective_size().classes().into(),
            self.variant.classes().into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Body text sizes shared by paragraphs and inline text.
pub enum TextSize {
    /// `text-xs`.
    Xs,
    /// `text-sm`.
    Sm,
    /// `text-base`.
    Base,
    /// `text-lg`.
    Lg,
}

impl Default for TextSize {
    fn default() -> Self {
        Self::Base
    }
}

impl VariantAxis for TextSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Base => "text-base",
            Self::Lg => "text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Body text color tones.
pub enum TextTone {
    /// Primary body color.
    Standard,
    /// Subdued color.
    Muted,
    /// Accent color.
    Accent,
    /// Error color.
    Destructive,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for TextTone {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Muted => "muted",
            Self::Accent => "accent",
            Self::Destructive => "destructive",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard => "text-text-zinc-200",
            Self::Muted => "text-text-zinc-400",
            Self::Accent => "text-accent-lime",
            Self::Destructive => "text-destructive",
        }
    }
}

/// Resolved paragraph style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    /// Font size.
    pub size: TextSize,
    /// Color tone.
    pub tone: TextTone,
}

impl Recipe for ParagraphStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            "leading-relaxed".into(),
            self.size.classes().into(),
            self.tone.classes().into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element rendered by inline text.
pub enum TextElement {
    /// `<span>`.
    Span,
    /// `<div>`.
    Div,
    /// `<p>`.
    P,
}

impl Default for TextElement {
    fn default() -> Self {
        Self::Span
    }
}

impl TextElement {
    /// Element tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::Div => "div",
            Self::P => "p",
        }
    }
}

/// Resolved inline text style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size.
    pub size: TextSize,
    /// Color tone.
    pub tone: TextTone,
}

impl Recipe for TextStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![self.size.classes().into(), self.tone.classes().into()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Label font sizes.
pub enum LabelSize {
    /// `text-xs`.
    Xs,
    /// `text-sm`.
    Sm,
    /// `text-base`.
    Base,
}

impl Default for LabelSize {
    fn default() -> Self {
        Self::Sm
    }
}

impl VariantAxis for LabelSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Base => "text-base",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Label color variants.
pub enum LabelVariant {
    /// Primary label color.
    Standard,
    /// Label of a required field.
    Required,
    /// Subdued label.
    Muted,
}

impl Default for LabelVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for LabelVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Required => "required",
            Self::Muted => "muted",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard | Self::Required => "text-text-zinc-200",
            Self::Muted => "text-text-zinc-400",
        }
    }
}

/// Resolved label style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStyle {
    /// Font size.
    pub size: LabelSize,
    /// Color variant.
    pub variant: LabelVariant,
}

impl Recipe for LabelStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            "font-medium block".into(),
            self.size.classes().into(),
            self.variant.classes().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_size_follows_level_unless_explicit() {
        let h1 = HeadingStyle {
            level: HeadingLevel::H1,
            ..HeadingStyle::default()
        };
        assert_eq!(
            h1.class_name(),
            "font-semibold leading-tight text-4xl text-text-zinc-100"
        );

        let small_h1 = HeadingStyle {
            size: Some(HeadingSize::Sm),
            ..h1
        };
        assert_eq!(small_h1.effective_size(), HeadingSize::Sm);
        assert_eq!(HeadingStyle::default().effective_size(), HeadingSize::Xl3);
        assert_eq!(HeadingLevel::H6.default_size().token(), "base");
    }

    #[test]
    fn heading_color_override_keeps_size() {
        let style = HeadingStyle {
            level: HeadingLevel::H3,
            size: None,
            variant: HeadingVariant::Accent,
        };
        assert_eq!(
            style.class_name_with("text-red-400"),
            "font-semibold leading-tight text-2xl text-red-400"
        );
    }

    #[test]
    fn paragraph_and_text_share_size_and_tone_tables() {
        let muted_small = ParagraphStyle {
            size: TextSize::Sm,
            tone: TextTone::Muted,
        };
        assert_eq!(
            muted_small.class_name(),
            "leading-relaxed text-sm text-text-zinc-400"
        );
        assert_eq!(
            TextStyle {
                size: TextSize::Xs,
                tone: TextTone::Destructive,
            }
            .class_name(),
            "text-xs text-destructive"
        );
        assert_eq!(TextElement::default().tag(), "span");
    }

    #[test]
    fn label_defaults_to_small_standard() {
        assert_eq!(
            LabelStyle::default().class_name(),
            "font-medium block text-sm text-text-zinc-200"
        );
        assert_eq!(LabelVariant::Required.token(), "required");
    }
}
