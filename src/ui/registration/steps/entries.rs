//! Available Brands and Staff Details steps.
//!
//! Entry headings are numbered by position, so they close up after a removal
//! even though entry ids never change.

use ratatui::{layout::Rect, Frame};

use super::header_line;
use crate::ui::registration::{RegistrationScreen, Row};

impl RegistrationScreen {
    pub(crate) fn render_available_brands_step(&self, frame: &mut Frame, area: Rect) {
        self.render_rows(frame, area, &|_, row| match row {
            Row::AddFluid => vec![header_line("Available Fluids")],
            Row::RemoveFluid(id) => self
                .form
                .fluids
                .ordinal(*id)
                .map(|n| header_line(format!("Fluid {n}")))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        });
    }

    pub(crate) fn render_staff_details_step(&self, frame: &mut Frame, area: Rect) {
        self.render_rows(frame, area, &|_, row| match row {
            Row::RemoveStaff(id) => self
                .form
                .staff
                .ordinal(*id)
                .map(|n| header_line(format!("Staff Member {n}")))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        });
    }
}
