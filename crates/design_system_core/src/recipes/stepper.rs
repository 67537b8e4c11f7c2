//! Stepper recipes and step planning.
//!
//! A step's status is derived from the current step alone: steps before it are completed, the
//! step equal to it is current, and later steps are pending. [`plan_steps`] turns the stepper's
//! inputs into the ordered list of steps to render.

use crate::class_names::ClassFragment;
use crate::variants::{Recipe, VariantAxis};

const STEPPER_NUMBER_BASE: &str =
    "flex items-center justify-center rounded-full font-bold transition-all duration-300 flex-shrink-0";
const STEPPER_LINE_BASE: &str = "transition-all duration-300";
const STEP_REACHED: &str = "bg-gradient-to-br from-accent-emerald to-accent-lime border-2 border-emerald-500-alpha-60 text-text-zinc-100 shadow-[0_0_20px_hsl(var(--ds-emerald-500-alpha-30))]";

/// ARIA role of the stepper root.
pub const STEPPER_ROLE: &str = "navigation";
/// Accessible name of the stepper root.
pub const STEPPER_ARIA_LABEL: &str = "Form progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stepper layout direction.
pub enum StepperOrientation {
    /// Steps in a row.
    Horizontal,
    /// Steps in a column.
    Vertical,
}

impl Default for StepperOrientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl VariantAxis for StepperOrientation {
    fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Horizontal => "flex-row gap-4",
            Self::Vertical => "flex-col gap-4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress status of one step.
pub enum StepStatus {
    /// Not reached yet.
    Pending,
    /// The active step.
    Current,
    /// Already passed.
    Completed,
}

impl Default for StepStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl StepStatus {
    /// Status of `step` while `current` is active.
    pub fn for_step(step: u32, current: u32) -> Self {
        if current > step {
            Self::Completed
        } else if current == step {
            Self::Current
        } else {
            Self::Pending
        }
    }

    /// Human-readable status used in accessible labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Current => "Current",
            Self::Completed => "Completed",
        }
    }

    /// `aria-current` value.
    pub fn aria_current(self) -> Option<&'static str> {
        (self == Self::Current).then_some("step")
    }

    fn number_classes(self) -> &'static str {
        match self {
            Self::Pending => "bg-zinc-800-alpha-50 border-2 border-zinc-400-alpha-30 text-text-zinc-400",
            Self::Current | Self::Completed => STEP_REACHED,
        }
    }

    fn line_classes(self) -> &'static str {
        match self {
            Self::Pending | Self::Current => "bg-zinc-400-alpha-20",
            Self::Completed => "bg-gradient-to-r from-accent-emerald to-accent-lime",
        }
    }
}

impl VariantAxis for StepStatus {
    fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Current => "current",
            Self::Completed => "completed",
        }
    }

    fn classes(self) -> &'static str {
        self.number_classes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Step number sizes.
pub enum StepperSize {
    /// 32px circles.
    Sm,
    /// 48px circles.
    Md,
    /// 56px circles.
    Lg,
}

impl Default for StepperSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantAxis for StepperSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "w-8 h-8 text-sm",
            Self::Md => "w-12 h-12 text-base",
            Self::Lg => "w-14 h-14 text-lg",
        }
    }
}

/// Stepper root layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperRootStyle {
    /// Layout direction.
    pub orientation: StepperOrientation,
}

impl Recipe for StepperRootStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            "flex items-center justify-center".into(),
            self.orientation.classes().into(),
        ]
    }
}

/// Layout of one step (number plus connecting line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperItemStyle {
    /// Layout direction.
    pub orientation: StepperOrientation,
}

impl Recipe for StepperItemStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            "flex items-center".into(),
            ClassFragment::either(
                self.orientation == StepperOrientation::Horizontal,
                "gap-4",
                "flex-col gap-2",
            ),
        ]
    }
}

/// Step number circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperNumberStyle {
    /// Step status.
    pub status: StepStatus,
    /// Circle size.
    pub size: StepperSize,
}

impl Recipe for StepperNumberStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        vec![
            STEPPER_NUMBER_BASE.into(),
            self.status.number_classes().into(),
            self.size.classes().into(),
        ]
    }
}

/// Line connecting a step to the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepperLineStyle {
    /// Status of the step the line leaves from.
    pub status: StepStatus,
    /// Layout direction.
    pub orientation: StepperOrientation,
}

impl Recipe for StepperLineStyle {
    fn fragments(&self) -> Vec<ClassFragment<'static>> {
        let extent = match self.orientation {
            StepperOrientation::Horizontal => "w-16 h-0.5",
            StepperOrientation::Vertical => "w-0.5 h-16",
        };
        vec![
            STEPPER_LINE_BASE.into(),
            self.status.line_classes().into(),
            extent.into(),
        ]
    }
}

/// Caller-provided description of one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDescriptor {
    /// Visible label, also used in the accessible name.
    pub label: Option<String>,
    /// Explicit step number; defaults to the 1-based position.
    pub number: Option<u32>,
}

impl StepDescriptor {
    /// Labelled step numbered by position.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            number: None,
        }
    }
}

/// One step ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    /// Displayed step number.
    pub number: u32,
    /// Optional label.
    pub label: Option<String>,
    /// Status relative to the current step.
    pub status: StepStatus,
    /// The last step draws no connecting line.
    pub is_last: bool,
}

impl PlannedStep {
    /// Accessible name of the step number, when the step is labelled.
    pub fn aria_label(&self) -> Option<String> {
        self.label
            .as_deref()
            .map(|label| step_aria_label(label, self.status))
    }
}

/// `"<label>: <status>"`, the accessible name of a labelled step.
pub fn step_aria_label(label: &str, status: StepStatus) -> String {
    format!("{label}: {}", status.label())
}

/// Plans the steps of a stepper.
///
/// Explicit `steps` win over `total`; without them, `total` unlabelled steps numbered from 1 are
/// produced.
pub fn plan_steps(current: u32, total: u32, steps: Option<&[StepDescriptor]>) -> Vec<PlannedStep> {
    let descriptors: Vec<StepDescriptor> = match steps {
        Some(steps) => steps.to_vec(),
        None => (1..=total)
            .map(|number| StepDescriptor {
                label: None,
                number: Some(number),
            })
            .collect(),
    };
    let count = descriptors.len();
    descriptors
        .into_iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let number = descriptor
                .number
                .unwrap_or_else(|| u32::try_from(index + 1).unwrap_or(u32::MAX));
            PlannedStep {
                number,
                label: descriptor.label,
                status: StepStatus::for_step(number, current),
                is_last: index + 1 == count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_compares_step_with_current() {
        assert_eq!(StepStatus::for_step(1, 2), StepStatus::Completed);
        assert_eq!(StepStatus::for_step(2, 2), StepStatus::Current);
        assert_eq!(StepStatus::for_step(3, 2), StepStatus::Pending);
        assert_eq!(StepStatus::Current.aria_current(), Some("step"));
        assert_eq!(StepStatus::Completed.aria_current(), None);
    }

    #[test]
    fn plan_without_descriptors_numbers_from_one() {
        let plan = plan_steps(2, 3, None);
        let summary: Vec<(u32, StepStatus, bool)> = plan
            .iter()
            .map(|step| (step.number, step.status, step.is_last))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, StepStatus::Completed, false),
                (2, StepStatus::Current, false),
                (3, StepStatus::Pending, true),
            ]
        );
    }

    #[test]
    fn descriptors_override_total_and_carry_labels() {
        let steps = [
            StepDescriptor::labelled("Personal details"),
            StepDescriptor::labelled("Address"),
        ];
        let plan = plan_steps(1, 5, Some(&steps));
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan[0].aria_label().as_deref(),
            Some("Personal details: Current")
        );
        assert_eq!(plan[1].aria_label().as_deref(), Some("Address: Pending"));
        assert!(plan[1].is_last);
    }

    #[test]
    fn explicit_numbers_drive_status() {
        let steps = [StepDescriptor {
            label: None,
            number: Some(7),
        }];
        let plan = plan_steps(9, 1, Some(&steps));
        assert_eq!(plan[0].number, 7);
        assert_eq!(plan[0].status, StepStatus::Completed);
        assert_eq!(plan[0].aria_label(), None);
    }

    #[test]
    fn empty_stepper_plans_nothing() {
        assert!(plan_steps(1, 0, None).is_empty());
        assert!(plan_steps(1, 3, Some(&[])).is_empty());
    }

    #[test]
    fn number_and_line_classes_follow_status() {
        let pending = StepperNumberStyle::default().class_name();
        assert!(pending.contains("text-text-zinc-400"));
        assert!(pending.ends_with("w-12 h-12 text-base"));

        let completed_line = StepperLineStyle {
            status: StepStatus::Completed,
            orientation: StepperOrientation::Vertical,
        };
        assert_eq!(
            completed_line.class_name(),
            "transition-all duration-300 bg-gradient-to-r from-accent-emerald to-accent-lime w-0.5 h-16"
        );
        assert_eq!(
            StepperItemStyle {
                orientation: StepperOrientation::Vertical,
            }
            .class_name(),
            "flex items-center flex-col gap-2"
        );
    }
}
