//! Terminal window chrome: container geometry per window state and the control toolbar.

use crate::class_names::{compose, ClassFragment};
use crate::recipes::IconName;
use crate::variants::Recipe;

const CONTAINER_BASE: &str = "terminal terminal-container fixed";
const CONTAINER_MAXIMIZED: &str = "inset-0 translate-x-0 w-screen h-screen max-w-none bottom-0";
const CONTAINER_DOCKED: &str =
    "left-1/2 -translate-x-1/2 bottom-[20%] w-[92vw] sm:w-[86vw] md:w-[72vw] max-w-5xl";
const CONTAINER_MINIMIZED: &str = "h-[2.5rem] overflow-hidden md:w-[16rem]";
const CONTAINER_RESTORED: &str = "min-h-[9rem] sm:min-h-[10rem] md:min-h-[12rem] max-h-[50vh]";
const CONTAINER_MOTION: &str = "transition-[bottom,width,height,transform] duration-300";
const CONTAINER_FOCUS: &str = "focus-within:outline-2 focus-within:outline focus-within:outline-blue-500 focus-within:outline-offset-2";

const INNER_MINIMIZED: &str = "!md:h-[2.5rem] !md:max-h-[2.5rem] !md:min-h-[2.5rem]";

const HEADER_BASE: &str =
    "terminal-header flex flex-row items-center justify-between h-[2.5rem] px-3";
const HEADER_FRAME: &str = "flex justify-between items-center h-auto min-h-[2.5rem]";

const BODY_BASE: &str = "terminal-body transition-all duration-300";
const BODY_MINIMIZED: &str = "h-[2.5rem] md:h-[2.5rem] md:overflow-hidden";
const BODY_RESTORED: &str = "h-[2.5rem] md:h-[2.5rem] flex-1 md:opacity-1 md:visible";

/// Element id of the terminal dialog.
pub const TERMINAL_ID: &str = "terminal-info";
/// Accessible name of the terminal dialog.
pub const TERMINAL_ARIA_LABEL: &str = "Contact information terminal";
/// Control toolbar classes.
pub const TERMINAL_CONTROLS_CLASS: &str =
    "terminal-controls flex items-center content-center flex-row gap-2";
/// Accessible name of the control toolbar.
pub const TERMINAL_CONTROLS_LABEL: &str = "Terminal controls";

/// Visibility and geometry of the terminal window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalWindowState {
    /// Whether the terminal is rendered at all.
    pub visible: bool,
    /// Fills the viewport.
    pub maximized: bool,
    /// Collapsed to the header bar.
    pub minimized: bool,
}

impl TerminalWindowState {
    /// Visible, restored window.
    pub fn open() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// An invisible terminal renders nothing.
    pub fn renders(self) -> bool {
        self.visible
    }

    /// `aria-expanded` of the dialog.
    pub fn aria_expanded(self) -> bool {
        !self.minimized
    }

    /// Fragments of the column wrapping header and body.
    pub fn inner_fragments(self) -> Vec<ClassFragment<'static>> {
        vec![
            ClassFragment::from("flex flex-col"),
            ClassFragment::when(self.minimized, INNER_MINIMIZED),
        ]
    }

    /// Header fragments with caller overrides between the header's own classes and the frame.
    pub fn header_fragments<'a>(
        self,
        overrides: impl Into<ClassFragment<'a>>,
    ) -> Vec<ClassFragment<'a>> {
        vec![
            ClassFragment::from(HEADER_BASE),
            overrides.into(),
            ClassFragment::from(HEADER_FRAME),
            ClassFragment::when(self.minimized, "md:h-[2.5rem]"),
        ]
    }

    /// Body fragments with caller overrides ahead of the state-driven sizing.
    pub fn body_fragments<'a>(
        self,
        overrides: impl Into<ClassFragment<'a>>,
    ) -> Vec<ClassFragment<'a>> {
        vec![
            ClassFragment::from(BODY_BASE),
            overrides.into(),
            ClassFragment::either(self.minimized, BODY_MINIMIZED, BODY_RESTORED),
        ]
    }

    /// Classes of the column wrapping header and body.
    pub fn inner_class(self) -> String {
        compose(self.inner_fragments())
    }

    /// Header classes, see [`TerminalWindowState::header_fragments`].
    pub fn header_class<'a>(self, overrides: impl Into<ClassFragment<'a>>) -> String {
        compose(self.header_fragments(overrides))
    }

    /// Body classes, see [`TerminalWindowState::body_fragments`].
    pub fn body_class<'a>(self, overrides: impl Into<ClassFragment<'a>>) -> String {
        compose(self.body_fragments(overrides))
    }

    /// Window state after `control` is activated.
    pub fn apply(self, control: TerminalControl) -> Self {
        match control {
            TerminalControl::Minimize => Self {
                minimized: !self.minimized,
                maximized: false,
                ..self
            },
            TerminalControl::Maximize => Self {
                maximized: !self.maximized,
                minimized: false,
                ..self
            },
            TerminalControl::Close => Self {
                visible: false,
                ..self
            },
        }
    }
}

impl Recipe for TerminalWindowState {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        let size = if self.maximized {
            ClassFragment::Absent
        } else {
            ClassFragment::either(self.minimized, CONTAINER_MINIMIZED, CONTAINER_RESTORED)
        };
        vec![
            CONTAINER_BASE.into(),
            ClassFragment::either(self.maximized, CONTAINER_MAXIMIZED, CONTAINER_DOCKED),
            size,
            CONTAINER_MOTION.into(),
            CONTAINER_FOCUS.into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Window controls shown in the terminal toolbar.
pub enum TerminalControl {
    /// Collapse to the header bar.
    Minimize,
    /// Toggle between docked and full-viewport.
    Maximize,
    /// Hide the terminal.
    Close,
}

impl TerminalControl {
    /// Toolbar order.
    pub const ALL: [Self; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Stable token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Close => "close",
        }
    }

    /// Button classes.
    pub fn class(self) -> &'static str {
        match self {
            Self::Minimize => "terminal-controls__button terminal-controls__button--minimize",
            Self::Maximize => "terminal-controls__button terminal-controls__button--maximize",
            Self::Close => "terminal-controls__button terminal-controls__button--close",
        }
    }

    /// Accessible name; the maximize control reads as "restore" while maximized.
    pub fn label(self, maximized: bool) -> &'static str {
        match self {
            Self::Minimize => "Minimize terminal",
            Self::Maximize if maximized => "Restore terminal",
            Self::Maximize => "Maximize terminal",
            Self::Close => "Close terminal",
        }
    }

    /// Keyboard shortcut hint.
    pub fn shortcut(self) -> &'static str {
        match self {
            Self::Minimize => "Alt+M",
            Self::Maximize => "Alt+Shift+M",
            Self::Close => "Alt+F4",
        }
    }

    /// Tooltip: label followed by the shortcut.
    pub fn title(self, maximized: bool) -> String {
        format!("{} ({})", self.label(maximized), self.shortcut())
    }

    /// Glyph shown in the button.
    pub fn icon(self, maximized: bool) -> IconName {
        match self {
            Self::Minimize => IconName::WindowMinimize,
            Self::Maximize if maximized => IconName::WindowRestore,
            Self::Maximize => IconName::WindowMaximize,
            Self::Close => IconName::Dismiss,
        }
    }

    /// `aria-pressed`; only the maximize control is a toggle.
    pub fn aria_pressed(self, maximized: bool) -> Option<bool> {
        (self == Self::Maximize).then_some(maximized)
    }

    /// Control bound to a keyboard shortcut, given `KeyboardEvent.key` and modifier state.
    pub fn from_shortcut(key: &str, alt: bool, shift: bool) -> Option<Self> {
        if !alt {
            return None;
        }
        match key {
            "m" | "M" if shift => Some(Self::Maximize),
            "m" | "M" => Some(Self::Minimize),
            "F4" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Enter and Space activate a focused control.
pub fn activates_control(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
