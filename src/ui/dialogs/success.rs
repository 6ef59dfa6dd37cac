//! Submission popup and the completed view

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::wizard::Ack;

/// Transient confirmation shown right after submitting
pub fn render_success_popup(frame: &mut Frame) {
    let area = centered_rect(50, 35, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "x",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" close "),
        ]))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Form Submitted Successfully!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your garage partner registration has been submitted. \
             We'll review your information shortly.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let popup = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(popup, area);
}

/// Terminal view after a registration completed
pub fn render_completed_view(frame: &mut Frame, area: Rect, ack: Option<&Ack>) {
    let area = centered_rect(70, 60, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(7),    // Message
            Constraint::Length(2), // Reference
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Registration Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your garage partner registration has been submitted successfully.",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "Our team will review your application and get back to you shortly.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    if let Some(ack) = ack {
        let reference = Paragraph::new(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::raw(ack.reference.to_string()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(reference, chunks[1]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Register Another Garage  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
