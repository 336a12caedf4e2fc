// App module for sagalearn-tui
// Handles application state and business logic

pub mod actions;
pub mod command;
pub mod input;
pub mod notify;
pub mod state;

pub use input::handle_input;
pub use state::App;
