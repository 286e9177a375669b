use crate::max_f32;
use crate::structs::{Alignment, Element, Sequence};

use super::{Aligner, ScoreMatrix, Scoring};

/// The free-end-gap (semi-global) aligner: internal gaps are penalized, but
/// overhangs past the ends of the shorter input are free. Once the last row
/// of the matrix is reached, moves along the second input cost nothing, and
/// symmetrically for the last column; the backtrace consumes those overhang
/// elements without emitting alignment columns.
#[derive(Debug, Clone)]
pub struct GlobalAligner<S> {
    scoring: S,
    gap_score: f32,
}

impl<S> GlobalAligner<S> {
    pub fn new(scoring: S, gap_score: f32) -> Self {
        GlobalAligner { scoring, gap_score }
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
        if row == 0 || col == 0 {
            alignments.push(alignment.reversed());
            return;
        }

        let current = matrix.get(row, col);
        let a = &first[row - 1];
        let b = &second[col - 1];

        // every branch that reconstructs the score is explored; the diagonal
        // goes first so match columns are reported before gap columns
        let diagonal = matrix.get(row - 1, col - 1);
        if current == diagonal + self.scoring.score(a, b) {
            alignment.push(a.clone(), b.clone(), current - diagonal);
            self.backtrace_from(first, second, matrix, row - 1, col - 1, alignments, alignment);
            alignment.pop();
        }

        let left = matrix.get(row, col - 1);
        if row == matrix.rows - 1 {
            // free overhang: the element is consumed without a column
            if current == left {
                self.backtrace_from(first, second, matrix, row, col - 1, alignments, alignment);
            }
        } else if current == left + self.gap_score {
            alignment.push(E::gap(), b.clone(), current - left);
            self.backtrace_from(first, second, matrix, row, col - 1, alignments, alignment);
            alignment.pop();
        }

        let up = matrix.get(row - 1, col);
        if col == matrix.cols - 1 {
            if current == up {
                self.backtrace_from(first, second, matrix, row - 1, col, alignments, alignment);
            }
        } else if current == up + self.gap_score {
            alignment.push(a.clone(), E::gap(), current - up);
            self.backtrace_from(first, second, matrix, row - 1, col, alignments, alignment);
            alignment.pop();
        }
    }
}

impl<E: Element, S: Scoring<E>> Aligner<E> for GlobalAligner<S> {
    fn compute_matrix(&self, first: &Sequence<E>, second: &Sequence<E>) -> ScoreMatrix {
        let rows = first.len() + 1;
        let cols = second.len() + 1;
        let mut matrix = ScoreMatrix::new(rows, cols);

        for row in 1..rows {
            for col in 1..cols {
                let diagonal = matrix.get(row - 1, col - 1)
                    + self.scoring.score(&first[row - 1], &second[col - 1]);

                // overhang moves along the matrix edges are free
                let left = if row == rows - 1 {
                    matrix.get(row, col - 1)
                } else {
                    matrix.get(row, col - 1) + self.gap_score
                };

                let up = if col == cols - 1 {
                    matrix.get(row - 1, col)
                } else {
                    matrix.get(row - 1, col) + self.gap_score
                };

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
