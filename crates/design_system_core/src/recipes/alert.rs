use crate::class_names::ClassFragment;
use crate::recipes::IconName;
use crate::variants::{Recipe, VariantAxis};

const ALERT_BASE: &str =
    "relative p-4 rounded-lg border flex items-start gap-3 animate-[slideDown_0.2s_ease-out]";

/// Wrapper around the leading icon.
pub const ALERT_ICON_CLASS: &str = "w-5 h-5 flex-shrink-0";
/// Column holding the title and the message.
pub const ALERT_BODY_CLASS: &str = "flex-1 min-w-0";
/// Optional title line.
pub const ALERT_TITLE_CLASS: &str = "font-semibold mb-1";
/// Message content.
pub const ALERT_CONTENT_CLASS: &str = "text-sm";
/// ARIA role of the alert root.
pub const ALERT_ROLE: &str = "alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert severity variants.
pub enum AlertVariant {
    /// Failed action.
    Error,
    /// Completed action.
    Success,
    /// Needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl AlertVariant {
    /// Icon rendered when the caller supplies none.
    pub fn default_icon(self) -> IconName {
        match self {
            Self::Error => IconName::ErrorCircle,
            Self::Success => IconName::CheckmarkCircle,
            Self::Warning => IconName::Warning,
            Self::Info => IconName::Info,
        }
    }
}

impl VariantAxis for AlertVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Error => "bg-red-900/20 border-red-500/50 text-red-400",
            Self::Success => "bg-emerald-900/20 border-emerald-500/50 text-emerald-400",
            Self::Warning => "bg-amber-900/20 border-amber-500/50 text-amber-400",
            Self::Info => "bg-blue-900/20 border-blue-500/50 text-blue-400",
        }
    }
}

/// Resolved alert style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertStyle {
    /// Severity.
    pub variant: AlertVariant,
}

impl Recipe for AlertStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![ALERT_BASE.into(), self.variant.classes().into()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_alert_is_informational() {
        assert_eq!(AlertVariant::default(), AlertVariant::Info);
        assert_eq!(
            AlertStyle::default().class_name(),
            "relative p-4 rounded-lg border flex items-start gap-3 animate-[slideDown_0.2s_ease-out] bg-blue-900/20 border-blue-500/50 text-blue-400"
        );
    }

    #[test]
    fn each_severity_has_its_own_icon() {
        let icons = [
            AlertVariant::Error,
            AlertVariant::Success,
            AlertVariant::Warning,
            AlertVariant::Info,
        ]
        .map(AlertVariant::default_icon);
        assert_eq!(
            icons,
            [
                IconName::ErrorCircle,
                IconName::CheckmarkCircle,
                IconName::Warning,
                IconName::Info,
            ]
        );
    }

    #[test]
    fn caller_padding_and_border_width_win() {
        let style = AlertStyle {
            variant: AlertVariant::Error,
        };
        assert_eq!(
            style.class_name_with("p-6 border-2"),
            "relative rounded-lg flex items-start gap-3 animate-[slideDown_0.2s_ease-out] bg-red-900/20 border-red-500/50 text-red-400 p-6 border-2"
        );
    }
}
