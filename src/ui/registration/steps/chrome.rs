//! Progress bar, step title, status line and navigation hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::ui::registration::RegistrationScreen;
use crate::wizard::{WizardPhase, WizardStep};

impl RegistrationScreen {
    /// One equal-width segment per step, filled up to the current step
    pub(crate) fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let segments = self.wizard.progress_segments();
        let constraints: Vec<Constraint> = segments
            .iter()
            .map(|_| Constraint::Ratio(1, segments.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (filled, cell) in segments.iter().zip(cells.iter()) {
            let color = if *filled { Color::Cyan } else { Color::DarkGray };
            let inner = Block::default()
                .padding(Padding::horizontal(1))
                .inner(*cell);
            let fill = "━".repeat(inner.width as usize);
            frame.render_widget(
                Paragraph::new(Span::styled(fill, Style::default().fg(color))),
                inner,
            );
        }
    }

    pub(crate) fn render_step_title(&self, frame: &mut Frame, area: Rect) {
        let step = self.step();
        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                step.title(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Step {} of {}", step.index() + 1, WizardStep::count()),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    pub(crate) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(error) = self.wizard.last_error() {
            Line::from(Span::styled(
                format!("Submission failed: {error}"),
                Style::default().fg(Color::Red),
            ))
        } else if self.wizard.phase() == WizardPhase::Submitting {
            Line::from(Span::styled(
                "Submitting registration...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    pub(crate) fn render_navigation(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow);
        let disabled = Style::default().fg(Color::DarkGray);

        let mut spans = if self.wizard.is_first_step() {
            vec![Span::styled("PgUp Previous", disabled)]
        } else {
            vec![Span::styled("PgUp", key), Span::raw(" Previous")]
        };
        spans.push(Span::raw("  |  "));

        if self.wizard.is_last_step() {
            if self.wizard.phase() == WizardPhase::Editing {
                spans.push(Span::styled("Ctrl+S", key));
                spans.push(Span::raw(" Submit"));
            } else {
                spans.push(Span::styled("Ctrl+S Submit", disabled));
            }
        } else {
            spans.push(Span::styled("PgDn", key));
            spans.push(Span::raw(" Next"));
        }

        spans.push(Span::raw("  |  "));
        spans.push(Span::styled("F1", key));
        spans.push(Span::raw(" help  "));
        spans.push(Span::styled("Ctrl+C", key));
        spans.push(Span::raw(" quit"));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}
