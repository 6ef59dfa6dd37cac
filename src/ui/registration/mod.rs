//! Registration wizard screen: focus, key handling and submission plumbing

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{FieldRef, FormState, RegistrationPayload};
use crate::ui::dialogs::HelpDialog;
use crate::ui::form_field::FieldEditor;
use crate::wizard::{
    PendingSubmission, RegistrationSubmitter, SubmissionRunner, Wizard, WizardResult, WizardStep,
};

pub mod rows;
pub mod steps;

pub use rows::{rows_for, Row};

#[cfg(test)]
mod tests;

/// Result of handling a key on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    Continue,
    Quit,
}

/// The registration wizard: one session's form plus its navigation state
pub struct RegistrationScreen {
    pub(crate) wizard: Wizard,
    pub(crate) form: FormState,
    /// Index into the current step's rows
    pub(crate) focus: usize,
    /// Editing state of the focused field, if the focus is on one
    pub(crate) editor: Option<(FieldRef, FieldEditor)>,
    pub(crate) help: HelpDialog,
    runner: SubmissionRunner,
    pending: Option<PendingSubmission>,
    in_flight: Option<RegistrationPayload>,
    completed: Vec<RegistrationPayload>,
}

impl RegistrationScreen {
    pub fn new(submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        let mut screen = Self {
            wizard: Wizard::new(),
            form: FormState::new(),
            focus: 0,
            editor: None,
            help: HelpDialog::new(),
            runner: SubmissionRunner::new(submitter),
            pending: None,
            in_flight: None,
            completed: Vec::new(),
        };
        screen.sync_editor();
        screen
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn rows(&self) -> Vec<Row> {
        rows_for(self.step(), &self.form)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_row(&self) -> Option<Row> {
        self.rows().get(self.focus).copied()
    }

    /// Payloads of every registration completed this session
    pub fn completed_payloads(&self) -> &[RegistrationPayload] {
        &self.completed
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    fn editing_multiline(&self) -> bool {
        self.editor
            .as_ref()
            .is_some_and(|(_, editor)| editor.is_multiline())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return ScreenResult::Quit;
        }

        if self.help.visible {
            self.help.visible = false;
            return ScreenResult::Continue;
        }
        if key.code == KeyCode::F(1) {
            self.help.toggle();
            return ScreenResult::Continue;
        }

        if self.wizard.show_success_popup() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x')) {
                self.wizard.dismiss_popup();
            }
            return ScreenResult::Continue;
        }

        if self.wizard.is_completed() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => return ScreenResult::Quit,
                _ => {}
            }
            return ScreenResult::Continue;
        }

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::PageDown => {
                if self.wizard.advance() == WizardResult::Moved {
                    self.focus = 0;
                }
            }
            KeyCode::PageUp => {
                if self.wizard.retreat() == WizardResult::Moved {
                    self.focus = 0;
                }
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down if !self.editing_multiline() => self.focus_next(),
            KeyCode::Up if !self.editing_multiline() => self.focus_prev(),
            _ => self.handle_row_key(key),
        }

        self.clamp_focus();
        self.sync_editor();
        ScreenResult::Continue
    }

    fn focus_next(&mut self) {
        if self.focus + 1 < self.rows().len() {
            self.focus += 1;
        }
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    fn handle_row_key(&mut self, key: KeyEvent) {
        let Some(row) = self.focused_row() else {
            return;
        };

        if row.is_activatable() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.activate(row);
            }
            return;
        }

        let Some((field, editor)) = self.editor.as_mut() else {
            return;
        };
        let spec = field.spec();
        if let Some(value) = self.form.value_mut(field) {
            editor.handle_key(spec, value, key);
        }
    }

    /// Press a button or toggle a checkbox row
    fn activate(&mut self, row: Row) {
        match row {
            Row::AddFluid => {
                let id = self.form.fluids.add();
                tracing::debug!(%id, "Added fluid entry");
            }
            Row::RemoveFluid(id) => {
                self.form.fluids.remove(id);
                tracing::debug!(%id, "Removed fluid entry");
            }
            Row::AddStaff => {
                let id = self.form.staff.add();
                tracing::debug!(%id, "Added staff entry");
            }
            Row::RemoveStaff(id) => {
                self.form.staff.remove(id);
                tracing::debug!(%id, "Removed staff entry");
            }
            Row::Service { service, .. } => {
                let selected = self.form.services.toggle(service.id);
                tracing::debug!(service = service.id, selected, "Toggled service");
            }
            Row::Field(_) => {}
        }
    }

    fn submit(&mut self) {
        let WizardResult::Submitted(ticket) = self.wizard.submit() else {
            return;
        };
        let payload = RegistrationPayload::from_state(&self.form);
        self.pending = Some(self.runner.spawn(ticket, payload.clone()));
        self.in_flight = Some(payload);
    }

    /// Apply any submission outcome that arrived. Returns true if the
    /// wizard changed.
    pub fn poll_submission(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.runner.try_next() {
            let succeeded = outcome.result.is_ok();
            if !self.wizard.complete_submission(outcome.ticket, outcome.result) {
                continue;
            }
            changed = true;
            self.pending = None;
            let payload = self.in_flight.take();
            if succeeded {
                self.completed.extend(payload);
            }
        }
        if changed {
            self.clamp_focus();
            self.sync_editor();
        }
        changed
    }

    /// Discard the session and start over on the first step
    pub fn restart(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.in_flight = None;
        self.wizard.restart();
        self.form = FormState::new();
        self.focus = 0;
        self.editor = None;
        self.help.visible = false;
        self.sync_editor();
        tracing::info!("Registration restarted");
    }

    /// Keep focus inside the row list after it shrinks
    fn clamp_focus(&mut self) {
        let len = self.rows().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    /// Rebind the editor when focus lands on a different field
    fn sync_editor(&mut self) {
        let focused = self.focused_row().and_then(|row| row.field());
        match focused {
            Some(field) => {
                if self.editor.as_ref().is_some_and(|(f, _)| *f == field) {
                    return;
                }
                let value = self.form.get(&field).unwrap_or("");
                self.editor = Some((field, FieldEditor::for_field(field.spec(), value)));
            }
            None => self.editor = None,
        }
    }
}
