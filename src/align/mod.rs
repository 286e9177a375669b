mod matrix;
pub use matrix::ScoreMatrix;

mod scoring;
pub use scoring::{Scoring, SimpleScoring, SoftScoring};

mod aligner;
pub use aligner::Aligner;

mod global;
pub use global::GlobalAligner;

mod strict_global;
pub use strict_global::StrictGlobalAligner;

mod local;
pub use local::LocalAligner;
