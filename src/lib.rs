//! Optimal pairwise alignment of sequences over arbitrary element types,
//! with exhaustive enumeration of co-optimal alignments and profile
//! alignment built on the same machinery.

pub mod align;
pub mod structs;

mod vocabulary;
pub use vocabulary::{DecodeError, Vocabulary};

mod util;
