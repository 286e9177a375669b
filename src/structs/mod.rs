pub mod sequence;
pub use sequence::{Element, EncodedSequence, Sequence, GAP_CODE, GAP_ELEMENT};

pub mod profile;
pub use profile::{Profile, SoftElement};

pub mod alignment;
pub use alignment::Alignment;
