use crate::class_names::ClassFragment;
use crate::variants::{Recipe, VariantAxis};

const BADGE_BASE: &str =
    "inline-flex items-center justify-center font-medium transition-colors rounded-full";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge tone variants.
pub enum BadgeVariant {
    /// Neutral zinc badge.
    Standard,
    /// Gradient accent badge.
    Accent,
    /// Transparent outlined badge.
    Outline,
    /// Low-emphasis badge.
    Muted,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl VariantAxis for BadgeVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Accent => "accent",
            Self::Outline => "outline",
            Self::Muted => "muted",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Standard => "bg-zinc-700 text-text-zinc-200 hover:bg-zinc-600",
            Self::Accent => "bg-gradient-to-r from-accent-emerald to-accent-lime text-zinc-900",
            Self::Outline => "border border-zinc-400-alpha-30 text-text-zinc-200 bg-transparent hover:bg-zinc-800-alpha-50",
            Self::Muted => "bg-zinc-800-alpha-50 text-text-zinc-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge sizing tokens.
pub enum BadgeSize {
    /// Compact badge.
    Sm,
    /// Default badge.
    Md,
    /// Large badge.
    Lg,
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for BadgeSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-0.5 text-xs",
            Self::Md => "px-3 py-1 text-sm",
            Self::Lg => "px-4 py-2 text-base",
        }
    }
}

/// Resolved badge style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Tone.
    pub variant: BadgeVariant,
    /// Size.
    pub size: BadgeSize,
}

impl Recipe for BadgeStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            BADGE_BASE.into(),
            self.variant.classes().into(),
            self.size.classes().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_badge_resolves_standard_medium() {
        assert_eq!(
            BadgeStyle::default().class_name(),
            "inline-flex items-center justify-center font-medium transition-colors rounded-full bg-zinc-700 text-text-zinc-200 hover:bg-zinc-600 px-3 py-1 text-sm"
        );
        assert_eq!(BadgeVariant::default().token(), "default");
    }

    #[test]
    fn caller_background_and_radius_replace_recipe_values() {
        let style = BadgeStyle {
            variant: BadgeVariant::Outline,
            size: BadgeSize::Lg,
        };
        assert_eq!(
            style.class_name_with("bg-zinc-900 rounded-md"),
            "inline-flex items-center justify-center font-medium transition-colors border border-zinc-400-alpha-30 text-text-zinc-200 hover:bg-zinc-800-alpha-50 px-4 py-2 text-base bg-zinc-900 rounded-md"
        );
    }
}
