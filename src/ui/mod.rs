pub mod dialogs;
pub mod form_field;
pub mod keybindings;
pub mod registration;
pub mod terminal_guard;

pub use registration::{RegistrationScreen, ScreenResult};
pub use terminal_guard::{install_panic_hook, TerminalGuard};
