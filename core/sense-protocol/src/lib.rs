#![no_std] // Shared by the wasm binding

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod frame;
pub mod lexicon;
pub mod pos;
pub mod token;

pub use frame::*;
pub use lexicon::*;
pub use pos::PartOfSpeech;
pub use token::{Span, TaggedToken, Token};
