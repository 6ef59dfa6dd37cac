use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::form::RegistrationPayload;
use crate::ui::{install_panic_hook, RegistrationScreen, ScreenResult, TerminalGuard};
use crate::wizard::{RegistrationSubmitter, SimulatedSubmitter};

pub struct App {
    config: Config,
    screen: RegistrationScreen,
    should_quit: bool,
}

impl App {
    /// Build the app with the simulated submitter configured in `submission.delay_ms`
    pub fn new(config: Config) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submission_delay()));
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: Config, submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self {
            config,
            screen: RegistrationScreen::new(submitter),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &RegistrationScreen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the TUI until the user quits.
    ///
    /// Must be called inside a tokio runtime; submissions are spawned onto it.
    pub async fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.clear().context("Failed to clear terminal")?;

        let tick_rate = self.config.tick_rate();
        tracing::info!(
            tick_rate_ms = self.config.ui.tick_rate_ms,
            submission_delay_ms = self.config.submission.delay_ms,
            "Starting registration wizard"
        );

        while !self.should_quit {
            terminal.draw(|f| self.screen.render(f))?;

            if event::poll(tick_rate)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            self.tick();
        }

        terminal.show_cursor()?;
        tracing::info!(
            completed = self.screen.completed_payloads().len(),
            "Registration wizard closed"
        );
        Ok(())
    }

    /// Feed one terminal event to the screen. Only key presses are handled.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press
                && self.screen.handle_key(key) == ScreenResult::Quit
            {
                self.should_quit = true;
            }
        }
    }

    /// Pick up finished submissions
    pub fn tick(&mut self) {
        if self.screen.poll_submission() {
            tracing::debug!(phase = ?self.screen.wizard().phase(), "Submission outcome applied");
        }
    }

    /// Payloads of every registration completed during the run
    pub fn into_completed(self) -> Vec<RegistrationPayload> {
        self.screen.completed_payloads().to_vec()
    }
}
