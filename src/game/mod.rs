//! Game session and its collaborators
//!
//! The session drives feedback calculation and tracks attempts; the picker
//! supplies secrets and letter states summarise what a round has revealed.

mod letters;
mod picker;
mod session;

pub use letters::LetterStates;
pub use picker::{FixedPicker, RandomPicker, SecretPicker};
pub use session::{GuessRecord, NUM_GUESSES, Session, Status};
