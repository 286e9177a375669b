use crate::max_f32;
use crate::structs::{Alignment, Element, Sequence};

use super::{Aligner, ScoreMatrix, Scoring};

/// The Smith-Waterman local aligner: every cell is floored at zero, the best
/// score is the matrix maximum, and a backtrace path ends the moment it
/// reaches a zero cell — the implicit start of the local alignment.
///
/// By default alignments are traced from every cell holding the matrix
/// maximum; an explicit `min_score` lowers that threshold so sub-optimal
/// local alignments are enumerated too.
#[derive(Debug, Clone)]
pub struct LocalAligner<S> {
    scoring: S,
    gap_score: f32,
    min_score: Option<f32>,
}

impl<S> LocalAligner<S> {
    pub fn new(scoring: S, gap_score: f32) -> Self {
        LocalAligner {
            scoring,
            gap_score,
            min_score: None,
        }
    }

    pub fn with_min_score(scoring: S, gap_score: f32, min_score: f32) -> Self {
        LocalAligner {
            scoring,
            gap_score,
            min_score: Some(min_score),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn backtrace_from<E: Element>(
        &self,
        first: &Sequence<E>,
        second: &Sequence<E>,
        matrix: &ScoreMatrix,
        row: usize,
        col: usize,
        alignments: &mut Vec<Alignment<E>>,
        alignment: &mut Alignment<E>,
    ) where
        S: Scoring<E>,
    {
        let current = matrix.get(row, col);
        if current == 0.0 {
            alignments.push(alignment.reversed());
            return;
        }

        // a positive cell is never in the base row or column,
        // so the element lookups below cannot underflow
        let a = &first[row - 1];
        let b = &second[col - 1];

        let diagonal = matrix.get(row - 1, col - 1);
        if current == diagonal + self.scoring.score(a, b) {
            alignment.push(a.clone(), b.clone(), current - diagonal);
            self.backtrace_from(first, second, matrix, row - 1, col - 1, alignments, alignment);
            alignment.pop();
        }

        let left = matrix.get(row, col - 1);
        if current == left + self.gap_score {
            alignment.push(E::gap(), b.clone(), current - left);
            self.backtrace_from(first, second, matrix, row, col - 1, alignments, alignment);
            alignment.pop();
        }

        let up = matrix.get(row - 1, col);
        if current == up + self.gap_score {
            alignment.push(a.clone(), E::gap(), current - up);
            self.backtrace_from(first, second, matrix, row - 1, col, alignments, alignment);
            alignment.pop();
        }
    }
}

impl<E: Element, S: Scoring<E>> Aligner<E> for LocalAligner<S> {
    fn compute_matrix(&self, first: &Sequence<E>, second: &Sequence<E>) -> ScoreMatrix {
        let rows = first.len() + 1;
        let cols = second.len() + 1;
        let mut matrix = ScoreMatrix::new(rows, cols);

        for row in 1..rows {
            for col in 1..cols {
                let diagonal = matrix.get(row - 1, col - 1)
                    + self.scoring.score(&first[row - 1], &second[col - 1]);
                let left = matrix.get(row, col - 1) + self.gap_score;
                let up = matrix.get(row - 1, col) + self.gap_score;

                matrix.set(row, col, max_f32!(0.0f32, diagonal, left, up));
            }
        }
        matrix
    }

    fn best_score(&self, matrix: &ScoreMatrix) -> f32 {
        matrix.max()
    }

    fn backtrace(
        &self,
        first: &Sequence<E>,
        second: &Sequence<E>,
        matrix: &ScoreMatrix,
    ) -> Vec<Alignment<E>> {
        let min_score = match self.min_score {
            Some(min_score) => min_score,
            None => self.best_score(matrix),
        };

        let mut alignments = vec![];
        let mut alignment = self.empty_alignment(first, second);

        // a backtrace starts at every qualifying cell; zero cells are
        // excluded so no zero-length alignment is ever reported
        for row in 0..matrix.rows {
            for col in 0..matrix.cols {
                let value = matrix.get(row, col);
                if value >= min_score && value > 0.0 {
                    self.backtrace_from(
                        first,
                        second,
                        matrix,
                        row,
                        col,
                        &mut alignments,
                        &mut alignment,
                    );
                }
            }
        }
        alignments
    }
}
