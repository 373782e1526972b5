pub mod command;
pub mod stream;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::{command_to_app_event, parse_command, Command};
pub use stream::StreamWriter;
pub use terminal::{TuiManager, TuiPacer};
pub use terminal_guard::TerminalGuard;
