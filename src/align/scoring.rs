use crate::structs::SoftElement;

/// A pure element-pair scoring function. Totality and determinism are part
/// of the contract; symmetry is up to the implementation.
pub trait Scoring<E> {
    fn score(&self, first: &E, second: &E) -> f32;
}

/// Fixed match/mismatch scoring for any equality-comparable element.
#[derive(Debug, Clone, Copy)]
pub struct SimpleScoring {
    pub match_score: f32,
    pub mismatch_score: f32,
}

impl SimpleScoring {
    pub fn new(match_score: f32, mismatch_score: f32) -> Self {
        SimpleScoring {
            match_score,
            mismatch_score,
        }
    }
}

impl<E: PartialEq> Scoring<E> for SimpleScoring {
    fn score(&self, first: &E, second: &E) -> f32 {
        if first == second {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// Lifts a base scoring onto soft elements: the score of two columns is the
/// expectation of the base scoring over the product of their support
/// distributions. Under this lifting a probability-weighted column behaves,
/// in the same recurrence, like a single element with an expected match
/// score.
#[derive(Debug, Clone)]
pub struct SoftScoring<S> {
    pub scoring: S,
}

impl<S> SoftScoring<S> {
    pub fn new(scoring: S) -> Self {
        SoftScoring { scoring }
    }
}

impl<E: Ord, S: Scoring<E>> Scoring<SoftElement<E>> for SoftScoring<S> {
    fn score(&self, first: &SoftElement<E>, second: &SoftElement<E>) -> f32 {
        let mut score = 0.0;
        for (a, p) in first.probabilities() {
            for (b, q) in second.probabilities() {
                score += p * q * self.scoring.score(a, b);
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORING: SimpleScoring = SimpleScoring {
        match_score: 3.0,
        mismatch_score: -1.0,
    };

    #[test]
    fn test_simple_scoring() {
        assert_eq!(SCORING.score(&'a', &'a'), 3.0);
        assert_eq!(SCORING.score(&'a', &'b'), -1.0);
    }

    #[test]
    fn test_soft_scoring_of_unambiguous_columns_matches_base() {
        let soft = SoftScoring::new(SCORING);
        let a = SoftElement::single('a');
        let b = SoftElement::single('b');

        assert_eq!(soft.score(&a, &a), 3.0);
        assert_eq!(soft.score(&a, &b), -1.0);
    }

    #[test]
    fn test_soft_scoring_takes_expectation() {
        let soft = SoftScoring::new(SCORING);
        let certain = SoftElement::single('a');
        let split = SoftElement::new([('a', 1), ('b', 1)]);

        // 0.5 * match + 0.5 * mismatch
        assert_eq!(soft.score(&certain, &split), 1.0);

        // 0.25 * match * 2 + 0.25 * mismatch * 2
        assert_eq!(soft.score(&split, &split), 1.0);
    }

    #[test]
    fn test_soft_scoring_respects_weights() {
        let soft = SoftScoring::new(SCORING);
        let certain = SoftElement::single('a');
        let skewed = SoftElement::new([('a', 3), ('b', 1)]);

        // 0.75 * 3.0 + 0.25 * -1.0
        assert_eq!(soft.score(&certain, &skewed), 2.0);
    }
}
