//! Button and link-button recipes.

use crate::class_names::ClassFragment;
use crate::variants::{Recipe, VariantAxis};

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-semibold transition focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-focus-ring focus-visible:ring-offset-2 focus-visible:ring-offset-surface disabled:opacity-50 disabled:cursor-not-allowed";

const LINK_BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-semibold transition focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-focus-ring focus-visible:ring-offset-2 focus-visible:ring-offset-surface";

const OUTLINED_ICON_TINT: &str = r#"[&>span[aria-hidden="true"]_svg]:stroke-accent-emerald [&>span[aria-hidden="true"]_svg]:fill-accent-emerald"#;

/// Spinner shown in place of the label while a button is loading.
pub const BUTTON_SPINNER_CLASS: &str =
    "inline-block h-4 w-4 animate-spin rounded-full border-2 border-border-soft border-t-current";

/// Screen-reader text announced while a button is loading.
pub const BUTTON_LOADING_LABEL: &str = "Loading";

/// `target` of external link buttons.
pub const EXTERNAL_LINK_TARGET: &str = "_blank";

/// `rel` of external link buttons.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

/// A loading button is disabled even when the caller did not disable it.
pub fn button_disabled(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Gradient call-to-action.
    Primary,
    /// Bordered soft surface.
    Secondary,
    /// Gradient outline with gradient text.
    Outlined,
    /// Text-only button.
    Ghost,
    /// Destructive action.
    Destructive,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl VariantAxis for ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-accent-emerald to-accent-lime text-zinc-900 shadow-ds-soft hover:brightness-105",
            Self::Secondary => "border border-border-soft bg-surface-soft text-text-zinc-200 hover:bg-surface-glass",
            Self::Outlined => "border border-accent-emerald bg-gradient-to-r from-accent-emerald to-accent-lime bg-clip-text text-transparent hover:border-accent-lime hover:bg-emerald-500-alpha-15",
            Self::Ghost => "text-text-zinc-200 hover:bg-surface-soft/60",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:brightness-110",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for ButtonSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Resolved button style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Emphasis variant.
    pub variant: ButtonVariant,
    /// Size.
    pub size: ButtonSize,
}

impl ButtonStyle {
    /// Style for the given variant and size.
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }
}

impl Recipe for ButtonStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            BUTTON_BASE.into(),
            self.variant.classes().into(),
            ClassFragment::when(self.variant == ButtonVariant::Outlined, OUTLINED_ICON_TINT),
            self.size.classes().into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Link-button emphasis variants.
pub enum LinkButtonVariant {
    /// Gradient call-to-action.
    Primary,
    /// Bordered soft surface.
    Secondary,
    /// Gradient outline with gradient text.
    Outlined,
    /// Text-only link.
    Ghost,
    /// Oversized marketing call-to-action.
    Cta,
    /// LinkedIn brand link.
    Linkedin,
}

impl Default for LinkButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl VariantAxis for LinkButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
            Self::Cta => "cta",
            Self::Linkedin => "linkedin",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-accent-emerald to-accent-lime text-zinc-900 shadow-ds-soft hover:brightness-105 transform hover:scale-105",
            Self::Secondary => "border border-border-soft bg-surface-soft text-text-zinc-200 hover:bg-surface-glass transform hover:scale-105",
            Self::Outlined => "border border-accent-emerald bg-gradient-to-r from-accent-emerald to-accent-lime bg-clip-text text-transparent hover:border-accent-lime hover:bg-emerald-500-alpha-15 transform hover:scale-105",
            Self::Ghost => "text-text-zinc-200 hover:bg-surface-soft/60",
            Self::Cta => "rounded-xl bg-gradient-to-r from-emerald-500 to-lime-400 text-zinc-900 shadow-lg shadow-lime-500/30 hover:brightness-105 hover:scale-[1.02] duration-200",
            Self::Linkedin => "bg-blue-600 hover:bg-blue-700 text-white transform hover:scale-105",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Link-button sizing tokens.
pub enum LinkButtonSize {
    /// Dense link.
    Sm,
    /// Default link.
    Md,
    /// Large link.
    Lg,
    /// Hero-sized link.
    Xl,
}

impl Default for LinkButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for LinkButtonSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
            Self::Xl => "px-8 py-4 text-lg",
        }
    }
}

/// Resolved link-button style, shared by in-app and external links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkButtonStyle {
    /// Emphasis variant.
    pub variant: LinkButtonVariant,
    /// Size.
    pub size: LinkButtonSize,
}

impl LinkButtonStyle {
    /// Style for the given variant and size.
    pub fn new(variant: LinkButtonVariant, size: LinkButtonSize) -> Self {
        Self { variant, size }
    }
}

impl Recipe for LinkButtonStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            LINK_BUTTON_BASE.into(),
            self.variant.classes().into(),
            ClassFragment::when(
                self.variant == LinkButtonVariant::Outlined,
                OUTLINED_ICON_TINT,
            ),
            self.size.classes().into(),
        ]
    }
}
