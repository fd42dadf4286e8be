//! Game flow
//!
//! Turn state machine, draft input, keyboard aggregation, reveal sequencing and
//! the session that ties them together.

mod draft;
mod keyboard;
mod presenter;
mod reveal;
mod session;
mod source;
mod state;

pub use draft::Draft;
pub use keyboard::{KeyboardAggregator, KeyboardState};
pub use presenter::{Presenter, RevealProgress, SessionView};
pub use reveal::{RevealSequence, RevealStep};
pub use session::Session;
pub use source::WordSource;
pub use state::{GameState, Guess, MAX_ATTEMPTS, Status};
