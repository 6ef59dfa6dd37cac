//! Payment & Services step

use ratatui::{layout::Rect, Frame};

use super::header_line;
use crate::ui::registration::{RegistrationScreen, Row};

impl RegistrationScreen {
    pub(crate) fn render_payment_step(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows();
        self.render_rows(frame, area, &|index, row| {
            let Row::Service { category, .. } = row else {
                return if index == 0 {
                    vec![header_line("Payment Details")]
                } else {
                    Vec::new()
                };
            };

            let previous = rows[..index].iter().rev().find_map(|r| match r {
                Row::Service { category, .. } => Some(*category),
                _ => None,
            });
            match previous {
                None => vec![
                    header_line(""),
                    header_line("Services Offered"),
                    header_line(format!("  {category}")),
                ],
                Some(prev) if prev != *category => vec![header_line(format!("  {category}"))],
                Some(_) => Vec::new(),
            }
        });
    }
}
