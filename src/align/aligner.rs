use crate::structs::{Alignment, Element, Sequence};

use super::ScoreMatrix;

/// The shared interface of the three alignment strategies. The strategies
/// differ only in their matrix boundary conditions and backtrace termination
/// rules; the recurrence plumbing and the depth-first multi-path backtrace
/// are common to all of them.
///
/// The same strategies align plain sequences and profiles: instantiating an
/// aligner with `E = SoftElement<_>` and a [`SoftScoring`] turns it into a
/// profile aligner with no further changes.
///
/// [`SoftScoring`]: crate::align::SoftScoring
pub trait Aligner<E: Element> {
    /// Fill the cumulative score matrix for the two inputs.
    fn compute_matrix(&self, first: &Sequence<E>, second: &Sequence<E>) -> ScoreMatrix;

    /// The optimal alignment score recorded in a computed matrix.
    fn best_score(&self, matrix: &ScoreMatrix) -> f32;

    /// Enumerate every alignment that achieves the optimal score, by
    /// exhaustive depth-first exploration of all reconstructing paths.
    fn backtrace(
        &self,
        first: &Sequence<E>,
        second: &Sequence<E>,
        matrix: &ScoreMatrix,
    ) -> Vec<Alignment<E>>;

    /// Compute the best score and, when asked, the alignments achieving it.
    fn align(
        &self,
        first: &Sequence<E>,
        second: &Sequence<E>,
        backtrace: bool,
    ) -> (f32, Option<Vec<Alignment<E>>>) {
        let matrix = self.compute_matrix(first, second);
        let score = self.best_score(&matrix);
        if backtrace {
            (score, Some(self.backtrace(first, second, &matrix)))
        } else {
            (score, None)
        }
    }

    /// An empty alignment carrying the input identifiers, preallocated for
    /// the longest path the backtrace can take.
    fn empty_alignment(&self, first: &Sequence<E>, second: &Sequence<E>) -> Alignment<E> {
        let capacity = first.len() + second.len();
        Alignment::new(
            Sequence::with_capacity(capacity).with_id(first.id.clone()),
            Sequence::with_capacity(capacity).with_id(second.id.clone()),
            E::gap(),
        )
    }
}
