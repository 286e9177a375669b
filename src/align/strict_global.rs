use crate::max_f32;
use crate::structs::{Alignment, Element, Sequence};

use super::{Aligner, ScoreMatrix, Scoring};

/// The classic Needleman-Wunsch aligner: the base row and column accumulate
/// gap cost, every boundary gap is charged, and the backtrace runs all the
/// way to the matrix origin.
#[derive(Debug, Clone)]
pub struct StrictGlobalAligner<S> {
    scoring: S,
    gap_score: f32,
}

impl<S> StrictGlobalAligner<S> {
    pub fn new(scoring: S, gap_score: f32) -> Self {
        StrictGlobalAligner { scoring, gap_score }
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
        if row == 0 && col == 0 {
            alignments.push(alignment.reversed());
            return;
        }

        let current = matrix.get(row, col);

        if row > 0 && col > 0 {
            let diagonal = matrix.get(row - 1, col - 1);
            let a = &first[row - 1];
            let b = &second[col - 1];
            if current == diagonal + self.scoring.score(a, b) {
                alignment.push(a.clone(), b.clone(), current - diagonal);
                self.backtrace_from(first, second, matrix, row - 1, col - 1, alignments, alignment);
                alignment.pop();
            }
        }

        if row > 0 {
            let up = matrix.get(row - 1, col);
            if current == up + self.gap_score {
                alignment.push(first[row - 1].clone(), E::gap(), current - up);
                self.backtrace_from(first, second, matrix, row - 1, col, alignments, alignment);
                alignment.pop();
            }
        }

        if col > 0 {
            let left = matrix.get(row, col - 1);
            if current == left + self.gap_score {
                alignment.push(E::gap(), second[col - 1].clone(), current - left);
                self.backtrace_from(first, second, matrix, row, col - 1, alignments, alignment);
                alignment.pop();
            }
        }
    }
}

impl<E: Element, S: Scoring<E>> Aligner<E> for StrictGlobalAligner<S> {
    fn compute_matrix(&self, first: &Sequence<E>, second: &Sequence<E>) -> ScoreMatrix {
        let rows = first.len() + 1;
        let cols = second.len() + 1;
        let mut matrix = ScoreMatrix::new(rows, cols);

        // the base row and column accumulate gap cost
        for row in 1..rows {
            matrix.set(row, 0, matrix.get(row - 1, 0) + self.gap_score);
        }
        for col in 1..cols {
            matrix.set(0, col, matrix.get(0, col - 1) + self.gap_score);
        }

        for row in 1..rows {
            for col in 1..cols {
                let diagonal = matrix.get(row - 1, col - 1)
                    + self.scoring.score(&first[row - 1], &second[col - 1]);
                let left = matrix.get(row, col - 1) + self.gap_score;
                let up = matrix.get(row - 1, col) + self.gap_score;

                matrix.set(row, col, max_f32!(diagonal, left, up));
            }
        }
        matrix
    }

    fn best_score(&self, matrix: &ScoreMatrix) -> f32 {
        matrix.get(matrix.rows - 1, matrix.cols - 1)
    }

    fn backtrace(
        &self,
        first: &Sequence<E>,
        second: &Sequence<E>,
        matrix: &ScoreMatrix,
    ) -> Vec<Alignment<E>> {
        let mut alignments = vec![];
        let mut alignment = self.empty_alignment(first, second);
        self.backtrace_from(
            first,
            second,
            matrix,
            matrix.rows - 1,
            matrix.cols - 1,
            &mut alignments,
            &mut alignment,
        );
        alignments
    }
}
