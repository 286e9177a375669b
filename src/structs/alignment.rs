use std::fmt::{Display, Formatter};

use super::sequence::Sequence;

/// A pairwise alignment: two equal-length output sequences with explicit gap
/// markers, a per-column score trace, and running statistics.
///
/// An alignment is grown column by column with [`Alignment::push`] during
/// backtrace and shrunk with [`Alignment::pop`] when a branch backs out of a
/// dead end; the statistics are maintained incrementally and never recomputed
/// from scratch. Paths are discovered backward from the end of the score
/// matrix, so a completed path is finalized with [`Alignment::reversed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment<E> {
    pub first: Sequence<E>,
    pub second: Sequence<E>,
    pub score: f32,
    gap: E,
    scores: Vec<f32>,
    identical_count: usize,
    similar_count: usize,
    gap_count: usize,
}

impl<E: PartialEq> Alignment<E> {
    pub fn new(first: Sequence<E>, second: Sequence<E>, gap: E) -> Self {
        assert!(
            first.len() == second.len(),
            "alignment sequences must have equal lengths"
        );
        let scores = vec![0.0; first.len()];
        Alignment {
            first,
            second,
            gap,
            scores,
            score: 0.0,
            identical_count: 0,
            similar_count: 0,
            gap_count: 0,
        }
    }

    /// Append one aligned column and fold its contribution into the running
    /// score and statistics.
    pub fn push(&mut self, first_element: E, second_element: E, score: f32) {
        self.score += score;
        self.scores.push(score);
        if first_element == second_element {
            self.identical_count += 1;
        }
        if score > 0.0 {
            self.similar_count += 1;
        }
        if first_element == self.gap || second_element == self.gap {
            self.gap_count += 1;
        }
        self.first.push(first_element);
        self.second.push(second_element);
    }

    /// Remove the most recently pushed column, unwinding its contribution.
    pub fn pop(&mut self) -> Option<(E, E)> {
        let first_element = self.first.pop()?;
        let second_element = self.second.pop()?;
        let score = self.scores.pop()?;

        self.score -= score;
        if first_element == second_element {
            self.identical_count -= 1;
        }
        if score > 0.0 {
            self.similar_count -= 1;
        }
        if first_element == self.gap || second_element == self.gap {
            self.gap_count -= 1;
        }
        Some((first_element, second_element))
    }

    /// Materialize the columns in front-to-back order, carrying the
    /// statistics over unchanged.
    pub fn reversed(&self) -> Self
    where
        E: Clone,
    {
        Alignment {
            first: self.first.reversed(),
            second: self.second.reversed(),
            gap: self.gap.clone(),
            scores: self.scores.iter().rev().copied().collect(),
            score: self.score,
            identical_count: self.identical_count,
            similar_count: self.similar_count,
            gap_count: self.gap_count,
        }
    }

    pub fn gap(&self) -> &E {
        &self.gap
    }

    /// The score contribution of each column, front to back.
    pub fn position_scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn identical_count(&self) -> usize {
        self.identical_count
    }

    pub fn similar_count(&self) -> usize {
        self.similar_count
    }

    pub fn gap_count(&self) -> usize {
        self.gap_count
    }

    pub fn len(&self) -> usize {
        debug_assert!(self.first.len() == self.second.len());
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The aligned pair at a column.
    pub fn pair(&self, idx: usize) -> (&E, &E) {
        (&self.first[idx], &self.second[idx])
    }

    /// Identical columns over alignment length, as a percentage.
    /// Empty alignments score 0.0 rather than dividing by zero.
    pub fn percent_identity(&self) -> f64 {
        self.percent_of(self.identical_count)
    }

    /// Columns with a strictly positive score contribution over alignment
    /// length, as a percentage.
    pub fn percent_similarity(&self) -> f64 {
        self.percent_of(self.similar_count)
    }

    /// Columns with a gap on either side over alignment length, as a
    /// percentage.
    pub fn percent_gap(&self) -> f64 {
        self.percent_of(self.gap_count)
    }

    /// A ranking tuple: better alignments sort higher by score, then
    /// identity, then similarity, then fewer gaps.
    pub fn quality(&self) -> (f32, f64, f64, f64) {
        (
            self.score,
            self.percent_identity(),
            self.percent_similarity(),
            -self.percent_gap(),
        )
    }

    fn percent_of(&self, count: usize) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            count as f64 / self.len() as f64 * 100.0
        }
    }
}

impl<E: Display> Display for Alignment<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let first: Vec<String> = self.first.iter().map(|e| e.to_string()).collect();
        let second: Vec<String> = self.second.iter().map(|e| e.to_string()).collect();

        // pad each column pair to a common width so the rows line up
        let widths: Vec<usize> = first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| a.len().max(b.len()))
            .collect();

        let row = |elements: &[String]| {
            elements
                .iter()
                .zip(widths.iter())
                .map(|(e, width)| format!("{e:<width$}"))
                .collect::<Vec<String>>()
                .join(" ")
                .trim_end()
                .to_string()
        };

        write!(f, "{}\n{}", row(&first), row(&second))
    }
}
