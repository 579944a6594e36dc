pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod grouping;

pub use crate::core::classifier::{classify, soundex_table, ClassRow, PhoneticClass};
pub use crate::core::encoder::{are_similar, encode, generate_soundex, EncodingResult};
pub use crate::core::trace::Step;
pub use error::SoundexError;
pub use grouping::{group, partition, BatchOutcome, NameGroup, SAMPLE_NAMES};
