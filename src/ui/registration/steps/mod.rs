//! Render methods for the registration screen and each wizard step

mod chrome;
mod entries;
mod payment;
mod static_info;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::{RegistrationScreen, Row};
use crate::form::FieldRef;
use crate::ui::dialogs::{render_completed_view, render_success_popup};
use crate::ui::form_field::value_spans;
use crate::wizard::WizardStep;

const LABEL_WIDTH: usize = 30;

/// Header lines shown above a row, e.g. "Fluid 2" or a service category
pub(crate) type HeaderFn<'a> = dyn Fn(usize, &Row) -> Vec<Line<'static>> + 'a;

impl RegistrationScreen {
    /// Render the whole screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.wizard.is_completed() {
            render_completed_view(frame, area, self.wizard.last_ack());
            self.help.render(frame);
            return;
        }

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Garage Partner Registration",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Progress bar
                Constraint::Length(2), // Step title
                Constraint::Min(4),    // Step content
                Constraint::Length(1), // Status
                Constraint::Length(1), // Navigation
            ])
            .split(inner);

        self.render_progress(frame, chunks[0]);
        self.render_step_title(frame, chunks[1]);

        let (content, pane) = if self.editing_multiline() {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(7)])
                .split(chunks[2]);
            (split[0], Some(split[1]))
        } else {
            (chunks[2], None)
        };

        match self.step() {
            WizardStep::GarageInfo => self.render_garage_info_step(frame, content),
            WizardStep::AboutGarage => self.render_about_garage_step(frame, content),
            WizardStep::AvailableBrands => self.render_available_brands_step(frame, content),
            WizardStep::StaffDetails => self.render_staff_details_step(frame, content),
            WizardStep::PickAndDrop => self.render_pick_and_drop_step(frame, content),
            WizardStep::PaymentAndServices => self.render_payment_step(frame, content),
        }

        if let (Some(pane), Some((field, editor))) = (pane, self.editor.as_mut()) {
            editor.render_pane(frame, pane, field.spec().label);
        }

        self.render_status(frame, chunks[3]);
        self.render_navigation(frame, chunks[4]);

        if self.wizard.show_success_popup() {
            render_success_popup(frame);
        }
        self.help.render(frame);
    }

    /// Render the current rows as a scrolling list, with optional headers
    /// interleaved above rows.
    pub(crate) fn render_rows(&self, frame: &mut Frame, area: Rect, header_for: &HeaderFn<'_>) {
        let rows = self.rows();
        let mut items = Vec::with_capacity(rows.len());
        let mut selected = None;

        for (i, row) in rows.iter().enumerate() {
            for header in header_for(i, row) {
                items.push(ListItem::new(header));
            }
            if i == self.focus {
                selected = Some(items.len());
            }
            items.push(ListItem::new(self.row_line(row, i == self.focus)));
        }

        if items.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "Nothing to fill in here",
                Style::default().fg(Color::DarkGray),
            ))));
        }

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn row_line(&self, row: &Row, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        match row {
            Row::Field(field) => {
                let spec = field.spec();
                let indent = match field {
                    FieldRef::Static(_) => "",
                    FieldRef::Fluid(..) | FieldRef::Staff(..) => "  ",
                    FieldRef::Service(..) => "      ",
                };
                let value = self.form.get(field).unwrap_or("");
                let cursor = if focused {
                    self.editor.as_ref().and_then(|(_, e)| e.cursor())
                } else {
                    None
                };
                let mut spans = vec![Span::styled(
                    format!("{indent}{:<width$}", spec.label, width = LABEL_WIDTH),
                    label_style,
                )];
                spans.extend(value_spans(spec, value, cursor));
                Line::from(spans)
            }
            Row::AddFluid => button("[ + Add Fluid ]", Color::Green),
            Row::AddStaff => button("[ + Add Staff Member ]", Color::Green),
            Row::RemoveFluid(_) | Row::RemoveStaff(_) => button("  [ Remove ]", Color::Red),
            Row::Service { service, .. } => {
                let selected = self.form.services.is_selected(service.id);
                let (checkbox, color) = if selected {
                    ("[x]", Color::Green)
                } else {
                    ("[ ]", Color::DarkGray)
                };
                Line::from(vec![
                    Span::styled(format!("  {checkbox}"), Style::default().fg(color)),
                    Span::raw(" "),
                    Span::styled(service.label, label_style),
                ])
            }
        }
    }
}

fn button(text: &'static str, color: Color) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(color)))
}

/// Bold section header line
pub(crate) fn header_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    ))
}
