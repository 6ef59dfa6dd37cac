//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the wizard's key bindings, consumed by the
//! `HelpDialog` and the `keys` subcommand.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g. arrow variant)
    pub alt_key: Option<KeyCode>,
    /// Shown instead of the key names when set (e.g. "Ctrl+S")
    pub label: Option<&'static str>,
    pub description: &'static str,
    pub category: ShortcutCategory,
    pub context: ShortcutContext,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Editing,
    Actions,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Filling in a wizard step
    Form,
    /// Success popup visible
    Popup,
    /// Registration completed view
    Completed,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Editing => "Editing",
            ShortcutCategory::Actions => "Actions",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Editing,
            ShortcutCategory::Actions,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Form => "Registration Form",
            ShortcutContext::Popup => "Success Popup",
            ShortcutContext::Completed => "Completed View",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Form,
            ShortcutContext::Popup,
            ShortcutContext::Completed,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "Tab", "PgDn", "Enter/r")
    pub fn key_display(&self) -> String {
        if let Some(label) = self.label {
            return label.to_string();
        }
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Format key for help dialog (left-padded to 14 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<14}", self.key_display())
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => format!("{key:?}"),
    }
}

const fn shortcut(
    key: KeyCode,
    alt_key: Option<KeyCode>,
    description: &'static str,
    category: ShortcutCategory,
    context: ShortcutContext,
) -> Shortcut {
    Shortcut {
        key,
        alt_key,
        label: None,
        description,
        category,
        context,
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Form ===
    Shortcut {
        key: KeyCode::Char('c'),
        alt_key: None,
        label: Some("Ctrl+C"),
        description: "Quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Form,
    },
    shortcut(
        KeyCode::F(1),
        None,
        "Toggle help",
        ShortcutCategory::General,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::Tab,
        Some(KeyCode::Down),
        "Next field",
        ShortcutCategory::Navigation,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::BackTab,
        Some(KeyCode::Up),
        "Previous field",
        ShortcutCategory::Navigation,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::PageDown,
        None,
        "Next step",
        ShortcutCategory::Navigation,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::PageUp,
        None,
        "Previous step",
        ShortcutCategory::Navigation,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::Left,
        Some(KeyCode::Right),
        "Move cursor / change choice",
        ShortcutCategory::Editing,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::Home,
        Some(KeyCode::End),
        "Start / end of text",
        ShortcutCategory::Editing,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::Enter,
        None,
        "New line in multi-line fields",
        ShortcutCategory::Editing,
        ShortcutContext::Form,
    ),
    shortcut(
        KeyCode::Enter,
        Some(KeyCode::Char(' ')),
        "Press button / toggle service",
        ShortcutCategory::Actions,
        ShortcutContext::Form,
    ),
    Shortcut {
        key: KeyCode::Char('s'),
        alt_key: None,
        label: Some("Ctrl+S"),
        description: "Submit registration (last step)",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Form,
    },
    // === Popup ===
    shortcut(
        KeyCode::Esc,
        Some(KeyCode::Enter),
        "Close popup",
        ShortcutCategory::General,
        ShortcutContext::Popup,
    ),
    shortcut(
        KeyCode::Char('x'),
        None,
        "Close popup",
        ShortcutCategory::General,
        ShortcutContext::Popup,
    ),
    // === Completed ===
    shortcut(
        KeyCode::Enter,
        Some(KeyCode::Char('r')),
        "Register another garage",
        ShortcutCategory::Actions,
        ShortcutContext::Completed,
    ),
    shortcut(
        KeyCode::Char('q'),
        Some(KeyCode::Esc),
        "Quit",
        ShortcutCategory::General,
        ShortcutContext::Completed,
    ),
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = shortcuts_for_context(context)
            .filter(|s| s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}

/// Grouped shortcuts by category
pub type GroupedByCategory = Vec<(ShortcutCategory, Vec<&'static Shortcut>)>;

/// Get all shortcuts grouped by context, then by category
pub fn all_shortcuts_grouped() -> Vec<(ShortcutContext, GroupedByCategory)> {
    ShortcutContext::all()
        .iter()
        .map(|ctx| (*ctx, shortcuts_by_category_for_context(*ctx)))
        .collect()
}
