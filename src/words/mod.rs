//! Word acquisition for new games.
//!
//! The core only needs a non-empty word; where it comes from is a collaborator
//! concern. [`WordSource`] is the seam, [`WordList`] the bundled
//! implementation.

pub mod list;
pub mod source;

pub use list::DEFAULT_WORDS;
pub use source::{WordList, WordSource};
