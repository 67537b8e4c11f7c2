#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the built-in components.
pub enum IconName {
    /// Error alert glyph.
    ErrorCircle,
    /// Success alert glyph.
    CheckmarkCircle,
    /// Warning alert glyph.
    Warning,
    /// Informational alert glyph.
    Info,
    /// Completed-step checkmark.
    Checkmark,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss/close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for `data-ui-*` hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ErrorCircle => "error-circle",
            Self::CheckmarkCircle => "checkmark-circle",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Checkmark => "checkmark",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (terminal controls).
    Xs,
    /// 16px standard icon (buttons, spinners).
    #[default]
    Sm,
    /// 20px medium icon (alerts, completed steps).
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}
