/// Inbound adapters - drive the dashboard from user input
mod interactive_session;

pub use interactive_session::{InteractiveCommand, InteractiveSession, SessionStep};
