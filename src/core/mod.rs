//! Document discovery, storage and session state, independent of the UI

pub mod error;
pub mod scanner;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use session::{LoadRequest, OpenOutcome, Session, SwitchPrompt};
