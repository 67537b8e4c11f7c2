//! Form control recipes shared by inputs, textareas, and labelled fields.

use crate::class_names::ClassFragment;
use crate::variants::Recipe;

const CONTROL_BASE: &str = "w-full rounded-md border border-input-border bg-input-bg px-4 py-3 text-base text-input-text placeholder:text-text-zinc-400/80 shadow-inner transition-all duration-200 ease-in-out hover:border-border-strong focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-focus-ring focus-visible:ring-offset-2 focus-visible:ring-offset-surface-glass data-[invalid]:border-destructive data-[invalid]:focus-visible:ring-destructive";

/// Vertical stack holding label, control, hint, and error.
pub const FIELD_CLASS: &str = "flex flex-col gap-2";
/// Helper text below the control.
pub const FIELD_HINT_CLASS: &str = "text-sm text-text-zinc-400";
/// Validation message below the control.
pub const FIELD_ERROR_CLASS: &str = "text-sm text-destructive";
/// Default visible rows of a textarea.
pub const TEXTAREA_DEFAULT_ROWS: u32 = 5;

/// Style and validity state of a text control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlStyle {
    /// Marks the control as failing validation.
    pub invalid: bool,
}

impl ControlStyle {
    /// `data-invalid` value: present and empty when invalid, absent otherwise.
    pub fn data_invalid(self) -> Option<&'static str> {
        self.invalid.then_some("")
    }

    /// `aria-invalid` value: `"true"` when invalid, absent otherwise.
    pub fn aria_invalid(self) -> Option<&'static str> {
        self.invalid.then_some("true")
    }
}

impl Recipe for ControlStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![CONTROL_BASE.into()]
    }
}

/// Element ids of a labelled field, derived from the control id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    /// Id of the control; the label's `for`.
    pub control: String,
    /// Id of the hint element.
    pub hint: String,
    /// Id of the error element.
    pub error: String,
}

impl FieldIds {
    /// Ids for a control named `control`.
    pub fn new(control: impl Into<String>) -> Self {
        let control = control.into();
        Self {
            hint: format!("{control}-hint"),
            error: format!("{control}-error"),
            control,
        }
    }

    /// `aria-describedby` for the rendered hint and error, in that order.
    pub fn described_by(&self, has_hint: bool, has_error: bool) -> Option<String> {
        let ids: Vec<&str> = [(has_hint, &self.hint), (has_error, &self.error)]
            .into_iter()
            .filter(|(present, _)| *present)
            .map(|(_, id)| id.as_str())
            .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}
