//! Wizard controller: step navigation and the submit/complete state machine

pub mod submission;

pub use submission::{
    Ack, PendingSubmission, RegistrationSubmitter, SimulatedSubmitter, SubmissionOutcome,
    SubmissionRunner, SubmitError,
};

/// Steps of the registration wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    GarageInfo,
    AboutGarage,
    AvailableBrands,
    StaffDetails,
    PickAndDrop,
    PaymentAndServices,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::GarageInfo,
            WizardStep::AboutGarage,
            WizardStep::AvailableBrands,
            WizardStep::StaffDetails,
            WizardStep::PickAndDrop,
            WizardStep::PaymentAndServices,
        ]
    }

    pub fn count() -> usize {
        Self::all().len()
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all().get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::GarageInfo => "Garage Info",
            WizardStep::AboutGarage => "About Garage",
            WizardStep::AvailableBrands => "Available Brands",
            WizardStep::StaffDetails => "Staff Details",
            WizardStep::PickAndDrop => "Pick & Drop",
            WizardStep::PaymentAndServices => "Payment & Services",
        }
    }
}

/// Coarse lifecycle of a registration session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Filling in steps
    Editing,
    /// Submission in flight, completion pending
    Submitting,
    /// Submission acknowledged
    Completed,
}

/// Result of a navigation or submission action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// State changed
    Moved,
    /// Action did not apply in the current state
    Unchanged,
    /// Submission started with this ticket
    Submitted(u64),
}

/// Wizard navigation and submission state.
///
/// Holds no form data and performs no I/O; the screen owns both and feeds
/// submission outcomes back through [`Wizard::complete_submission`].
#[derive(Debug, Clone)]
pub struct Wizard {
    current: usize,
    phase: WizardPhase,
    show_success_popup: bool,
    pending_ticket: Option<u64>,
    next_ticket: u64,
    last_ack: Option<Ack>,
    last_error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            current: 0,
            phase: WizardPhase::Editing,
            show_success_popup: false,
            pending_ticket: None,
            next_ticket: 1,
            last_ack: None,
            last_error: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::from_index(self.current).unwrap_or(WizardStep::GarageInfo)
    }

    pub fn last_index(&self) -> usize {
        WizardStep::count() - 1
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.last_index()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn show_success_popup(&self) -> bool {
        self.show_success_popup
    }

    pub fn is_completed(&self) -> bool {
        self.phase == WizardPhase::Completed
    }

    pub fn pending_ticket(&self) -> Option<u64> {
        self.pending_ticket
    }

    /// Acknowledgement of the last completed submission
    pub fn last_ack(&self) -> Option<&Ack> {
        self.last_ack.as_ref()
    }

    /// Error from the last failed submission
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Move to the next step; silent no-op on the last step
    pub fn advance(&mut self) -> WizardResult {
        if self.current < self.last_index() {
            self.current += 1;
            WizardResult::Moved
        } else {
            WizardResult::Unchanged
        }
    }

    /// Move to the previous step; silent no-op on the first step
    pub fn retreat(&mut self) -> WizardResult {
        if self.current > 0 {
            self.current -= 1;
            WizardResult::Moved
        } else {
            WizardResult::Unchanged
        }
    }

    /// Start submission. Only valid while editing the last step.
    pub fn submit(&mut self) -> WizardResult {
        if self.phase != WizardPhase::Editing || !self.is_last_step() {
            return WizardResult::Unchanged;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending_ticket = Some(ticket);
        self.phase = WizardPhase::Submitting;
        self.show_success_popup = true;
        self.last_error = None;
        tracing::info!(ticket, "Registration submitted");
        WizardResult::Submitted(ticket)
    }

    /// Close the success popup without touching the pending completion
    pub fn dismiss_popup(&mut self) -> WizardResult {
        if self.phase == WizardPhase::Submitting && self.show_success_popup {
            self.show_success_popup = false;
            WizardResult::Moved
        } else {
            WizardResult::Unchanged
        }
    }

    /// Apply the outcome of submission `ticket`.
    ///
    /// Outcomes for any ticket other than the pending one are dropped, so
    /// each submission completes at most once.
    pub fn complete_submission(&mut self, ticket: u64, result: Result<Ack, SubmitError>) -> bool {
        if self.pending_ticket != Some(ticket) || self.phase != WizardPhase::Submitting {
            tracing::debug!(ticket, "Ignoring stale submission outcome");
            return false;
        }
        self.pending_ticket = None;
        self.show_success_popup = false;

        match result {
            Ok(ack) => {
                tracing::info!(ticket, reference = %ack.reference, "Registration completed");
                self.phase = WizardPhase::Completed;
                self.last_ack = Some(ack);
            }
            Err(e) => {
                tracing::warn!(ticket, error = %e, "Registration submission failed");
                self.phase = WizardPhase::Editing;
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Discard everything and return to the first step
    pub fn restart(&mut self) {
        let next_ticket = self.next_ticket;
        *self = Self::new();
        // Keep tickets unique across restarts so late outcomes stay stale
        self.next_ticket = next_ticket;
    }

    /// Filled flag for each progress segment
    pub fn progress_segments(&self) -> Vec<bool> {
        (0..WizardStep::count()).map(|i| i <= self.current).collect()
    }
}
