//! Editing widgets for form rows.
//!
//! Values live in [`FormState`](crate::form::FormState); a `FieldEditor` only
//! holds transient editing state (cursor, textarea buffer) and writes every
//! change straight back into the value it is handed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

use crate::form::fields::{FieldKind, FieldSpec, SelectOption};

const DATE_MAX_LEN: usize = 10;

/// Editing state for the focused field
pub enum FieldEditor {
    /// Single-line text or date, cursor counted in chars
    Line { cursor: usize },
    /// Multi-line text using tui-textarea
    Area(Box<TextArea<'static>>),
    /// Select or yes/no; the stored value is the whole state
    Choice,
}

impl FieldEditor {
    /// Editor for `spec` seeded from its current value
    pub fn for_field(spec: &FieldSpec, value: &str) -> Self {
        match spec.kind {
            FieldKind::Text | FieldKind::Date => FieldEditor::Line {
                cursor: value.chars().count(),
            },
            FieldKind::MultiLine => {
                let mut textarea = if value.is_empty() {
                    TextArea::default()
                } else {
                    TextArea::from(value.split('\n').map(str::to_string))
                };
                textarea.move_cursor(tui_textarea::CursorMove::Bottom);
                textarea.move_cursor(tui_textarea::CursorMove::End);
                if !spec.placeholder.is_empty() {
                    textarea.set_placeholder_text(spec.placeholder);
                    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
                }
                FieldEditor::Area(Box::new(textarea))
            }
            FieldKind::Select(_) | FieldKind::YesNo => FieldEditor::Choice,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldEditor::Area(_))
    }

    /// Cursor position for single-line editors
    pub fn cursor(&self) -> Option<usize> {
        match self {
            FieldEditor::Line { cursor } => Some(*cursor),
            _ => None,
        }
    }

    /// Apply `key` to `value`, returns true if the key was consumed
    pub fn handle_key(&mut self, spec: &FieldSpec, value: &mut String, key: KeyEvent) -> bool {
        match self {
            FieldEditor::Line { cursor } => {
                let is_date = spec.kind == FieldKind::Date;
                edit_line(value, cursor, key, is_date)
            }
            FieldEditor::Area(textarea) => match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::PageUp | KeyCode::PageDown => false,
                KeyCode::Esc | KeyCode::F(_) => false,
                _ => {
                    if textarea.input(key) {
                        *value = textarea.lines().join("\n");
                    }
                    true
                }
            },
            FieldEditor::Choice => match spec.kind {
                FieldKind::Select(options) => match key.code {
                    KeyCode::Right => {
                        *value = cycle_option(options, value, true).to_string();
                        true
                    }
                    KeyCode::Left => {
                        *value = cycle_option(options, value, false).to_string();
                        true
                    }
                    _ => false,
                },
                FieldKind::YesNo => match key.code {
                    KeyCode::Left => {
                        *value = "yes".to_string();
                        true
                    }
                    KeyCode::Right => {
                        *value = "no".to_string();
                        true
                    }
                    KeyCode::Char(' ') => {
                        let next = if value == "yes" { "no" } else { "yes" };
                        *value = next.to_string();
                        true
                    }
                    _ => false,
                },
                _ => false,
            },
        }
    }

    /// Render the multi-line editor pane
    pub fn render_pane(&mut self, frame: &mut Frame, area: Rect, title: &str) {
        let FieldEditor::Area(textarea) = self else {
            return;
        };
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_block(
            Block::default()
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(title.to_string(), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        " (Enter: newline, Tab: next field) ",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(&**textarea, area);
    }
}

fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(i, _)| i)
}

fn edit_line(value: &mut String, cursor: &mut usize, key: KeyEvent, is_date: bool) -> bool {
    let len = value.chars().count();
    *cursor = (*cursor).min(len);

    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Char(c) => {
            if is_date && !(c.is_ascii_digit() || c == '-') {
                return true;
            }
            if is_date && len >= DATE_MAX_LEN {
                return true;
            }
            value.insert(byte_index(value, *cursor), c);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                value.remove(byte_index(value, *cursor));
            }
            true
        }
        KeyCode::Delete => {
            if *cursor < len {
                value.remove(byte_index(value, *cursor));
            }
            true
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            if *cursor < len {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = len;
            true
        }
        _ => false,
    }
}

/// Next or previous option value; an empty selection starts at either end
fn cycle_option(options: &[SelectOption], current: &str, forward: bool) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let last = options.len() - 1;
    let next = match options.iter().position(|o| o.value == current) {
        None if forward => 0,
        None => last,
        Some(i) if forward => (i + 1) % options.len(),
        Some(0) => last,
        Some(i) => i - 1,
    };
    options[next].value
}

/// One-line display of a field value for the row list
pub fn value_spans(spec: &FieldSpec, value: &str, cursor: Option<usize>) -> Vec<Span<'static>> {
    let placeholder =
        |text: &str| Span::styled(text.to_string(), Style::default().fg(Color::DarkGray));

    match spec.kind {
        FieldKind::Text | FieldKind::Date => {
            if let Some(pos) = cursor {
                let mut text = value.to_string();
                text.insert(byte_index(&text, pos), '|');
                vec![Span::styled(text, Style::default().fg(Color::White))]
            } else if value.is_empty() {
                vec![placeholder(spec.placeholder)]
            } else {
                vec![Span::raw(value.to_string())]
            }
        }
        FieldKind::MultiLine => {
            let mut lines = value.lines();
            match lines.next() {
                None => vec![placeholder(spec.placeholder)],
                Some(first) if first.is_empty() && value.trim().is_empty() => {
                    vec![placeholder(spec.placeholder)]
                }
                Some(first) => {
                    let more = lines.count();
                    let mut spans = vec![Span::raw(first.to_string())];
                    if more > 0 {
                        spans.push(Span::styled(
                            format!(" (+{more} lines)"),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    spans
                }
            }
        }
        FieldKind::Select(_) => match spec.kind.option_label(value) {
            Some(label) => vec![
                Span::styled("< ", Style::default().fg(Color::DarkGray)),
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" >", Style::default().fg(Color::DarkGray)),
            ],
            None => {
                let text = if spec.placeholder.is_empty() {
                    "Select..."
                } else {
                    spec.placeholder
                };
                vec![placeholder(&format!("< {text} >"))]
            }
        },
        FieldKind::YesNo => {
            let yes = value == "yes";
            let yes_style = if yes {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let no_style = if yes {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            };
            vec![
                Span::styled("[Yes]", yes_style),
                Span::raw(" / "),
                Span::styled("[No]", no_style),
            ]
        }
    }
}
