//! Interactive setup flow - UI-agnostic step state machine.
//!
//! The CLI renders prompts; this module owns the rules of moving between
//! them. A flow is an ordered list of steps plus a draft
//! [`ProjectConfigBuilder`]. Advancing validates the current step and, on
//! success, commits its answer into the draft. Going back never
//! re-validates; answers are retained and simply re-committed (and thus
//! overwritten) when the user moves forward again.
//!
//! The position one past the last step is the *summary*: a terminal
//! position where the only legal moves are [`StepFlow::confirm`],
//! [`StepFlow::back`], and cancellation. Cancellation is an explicit
//! [`CollectOutcome::Aborted`], never a panic or a silent exit.
//!
//! The flow is generic over the step trait so front-ends can require extra
//! capabilities (e.g. a render method) on top of [`SetupStep`].

use crate::domain::{DomainError, ProjectConfig, ProjectConfigBuilder};

/// One question (or page) of the setup dialogue.
pub trait SetupStep {
    /// Short human title, shown as the page heading.
    fn title(&self) -> &str;

    /// Check the step's current answer. The error string is shown to the
    /// user next to the re-displayed step.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Write the answer into the draft. Only called after a successful
    /// [`validate`](Self::validate).
    fn commit(&self, draft: &mut ProjectConfigBuilder) -> Result<(), DomainError>;
}

/// Result of a [`StepFlow::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowProgress {
    /// Validation failed; the flow stayed on the current step.
    Stayed,
    /// Moved to the next step.
    Moved,
    /// Moved past the last step onto the summary.
    Summary,
}

/// Terminal outcome of a collection session.
#[derive(Debug)]
pub enum CollectOutcome {
    Completed(ProjectConfig),
    Aborted,
}

/// Ordered steps + cursor + draft configuration.
pub struct StepFlow<S: SetupStep + ?Sized> {
    steps: Vec<Box<S>>,
    draft: ProjectConfigBuilder,
    cursor: usize,
    error: Option<String>,
}

impl<S: SetupStep + ?Sized> StepFlow<S> {
    pub fn new(steps: Vec<Box<S>>) -> Self {
        Self::with_draft(steps, ProjectConfigBuilder::new())
    }

    /// Start from a pre-seeded draft (e.g. app-config defaults).
    pub fn with_draft(steps: Vec<Box<S>>, draft: ProjectConfigBuilder) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            steps,
            draft,
            cursor: 0,
            error: None,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Zero-based position; equals `step_count()` at the summary.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn at_summary(&self) -> bool {
        self.cursor == self.steps.len()
    }

    pub fn at_first_step(&self) -> bool {
        self.cursor == 0
    }

    /// The step under the cursor. Panics at the summary; check
    /// [`at_summary`](Self::at_summary) first.
    pub fn current(&self) -> &S {
        &self.steps[self.cursor]
    }

    /// Mutable access for the front-end to record the user's answer.
    pub fn current_mut(&mut self) -> &mut S {
        self.error = None;
        &mut self.steps[self.cursor]
    }

    /// Validation error from the last rejected advance, for re-display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Draft state, for summary rendering.
    pub fn draft(&self) -> &ProjectConfigBuilder {
        &self.draft
    }

    /// Validate the current step and, on success, commit and move forward.
    pub fn advance(&mut self) -> FlowProgress {
        debug_assert!(!self.at_summary(), "advance called at summary");

        let step = &self.steps[self.cursor];
        if let Err(message) = step.validate() {
            self.error = Some(message);
            return FlowProgress::Stayed;
        }

        if let Err(e) = step.commit(&mut self.draft) {
            self.error = Some(e.to_string());
            return FlowProgress::Stayed;
        }

        self.error = None;
        self.cursor += 1;
        if self.at_summary() {
            FlowProgress::Summary
        } else {
            FlowProgress::Moved
        }
    }

    /// Step back without re-validation. No-op on the first step.
    pub fn back(&mut self) {
        self.error = None;
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Finalize at the summary.
    pub fn confirm(self) -> Result<CollectOutcome, DomainError> {
        debug_assert!(self.at_summary(), "confirm called before summary");
        Ok(CollectOutcome::Completed(self.draft.build()?))
    }

    /// Abort the session.
    pub fn cancel(self) -> CollectOutcome {
        CollectOutcome::Aborted
    }
}
