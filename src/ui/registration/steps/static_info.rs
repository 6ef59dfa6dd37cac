//! Garage Info, About Garage and Pick & Drop steps

use ratatui::{layout::Rect, Frame};

use super::header_line;
use crate::ui::registration::RegistrationScreen;

impl RegistrationScreen {
    pub(crate) fn render_garage_info_step(&self, frame: &mut Frame, area: Rect) {
        self.render_rows(frame, area, &|_, _| Vec::new());
    }

    pub(crate) fn render_about_garage_step(&self, frame: &mut Frame, area: Rect) {
        self.render_rows(frame, area, &|_, _| Vec::new());
    }

    /// Details only appear while pick & drop is available
    pub(crate) fn render_pick_and_drop_step(&self, frame: &mut Frame, area: Rect) {
        self.render_rows(frame, area, &|index, _| {
            if index == 1 {
                vec![header_line("Pick & Drop Details")]
            } else {
                Vec::new()
            }
        });
    }
}
