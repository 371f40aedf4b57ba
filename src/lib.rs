pub mod error;
pub mod platform;
pub mod search;
pub mod session;
pub mod shortcut;
pub mod snapshot;
pub mod tracing;
pub mod types;

pub use search::{DISPLAY_LINE_COUNT, RankedEntry, Ranking};
pub use session::{Key, KeyEvent, Outcome, Session};
pub use types::{Candidate, Entry, WindowHandle};
