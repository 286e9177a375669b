use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::alignment::Alignment;
use super::sequence::{Element, Sequence};

/// A weighted multiset of elements: one column of a profile, holding the
/// support count for every element observed at that position.
///
/// The weights are kept in a `BTreeMap` so that iteration order — and with it
/// the floating point summation order of [`SoftScoring`] — is deterministic.
///
/// [`SoftScoring`]: crate::align::SoftScoring
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoftElement<E: Ord> {
    weights: BTreeMap<E, u32>,
}

impl<E: Ord> SoftElement<E> {
    /// Weights must be positive; a zero support count is a caller logic error.
    pub fn new(weights: impl IntoIterator<Item = (E, u32)>) -> Self {
        let weights: BTreeMap<E, u32> = weights.into_iter().collect();
        assert!(
            weights.values().all(|&weight| weight > 0),
            "soft element weights must be positive"
        );
        SoftElement { weights }
    }

    /// An unambiguous column supporting a single element.
    pub fn single(element: E) -> Self {
        SoftElement {
            weights: BTreeMap::from_iter([(element, 1)]),
        }
    }

    /// The single supported element if this column is unambiguous.
    pub fn key(&self) -> Option<&E> {
        if self.weights.len() == 1 {
            self.weights.keys().next()
        } else {
            None
        }
    }

    /// Combine two columns by summing support counts per element.
    pub fn merged_with(&self, other: &Self) -> Self
    where
        E: Clone,
    {
        let mut weights = self.weights.clone();
        for (element, weight) in other.weights.iter() {
            *weights.entry(element.clone()).or_insert(0) += weight;
        }
        SoftElement { weights }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&E, u32)> + '_ {
        self.weights.iter().map(|(element, &weight)| (element, weight))
    }

    /// Weight pairs by descending weight, then element order.
    pub fn sorted(&self) -> Vec<(&E, u32)> {
        let mut pairs: Vec<(&E, u32)> = self.pairs().collect();
        pairs.sort_by(|(a_elem, a_weight), (b_elem, b_weight)| {
            b_weight.cmp(a_weight).then(a_elem.cmp(b_elem))
        });
        pairs
    }

    pub fn total_weight(&self) -> u32 {
        self.weights.values().sum()
    }

    /// The normalized support distribution: weight over total weight.
    pub fn probabilities(&self) -> Vec<(&E, f32)> {
        let total = self.total_weight() as f32;
        self.pairs()
            .map(|(element, weight)| (element, weight as f32 / total))
            .collect()
    }

    pub fn weight(&self, element: &E) -> Option<u32> {
        self.weights.get(element).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.weights.keys()
    }
}

impl<E: Element + Ord> Element for SoftElement<E> {
    fn gap() -> Self {
        SoftElement::single(E::gap())
    }
}

impl<E: Ord + Display> Display for SoftElement<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sorted = self.sorted();
        if let [(element, _)] = sorted.as_slice() {
            write!(f, "{element}")
        } else {
            write!(f, "{{")?;
            let mut iter = sorted.iter().peekable();
            while let Some((element, weight)) = iter.next() {
                write!(f, "{element}:{weight}")?;
                if iter.peek().is_some() {
                    write!(f, ",")?;
                }
            }
            write!(f, "}}")
        }
    }
}

/// An ordered run of soft elements: the generalization of [`Sequence`] where
/// every position is a support distribution rather than a single element.
pub type Profile<E> = Sequence<SoftElement<E>>;

impl<E: Ord + Clone> Profile<E> {
    /// Lift a plain sequence into a profile of weight-1 columns.
    pub fn from_sequence(sequence: &Sequence<E>) -> Self {
        Sequence::from_elements(
            sequence
                .iter()
                .map(|element| SoftElement::single(element.clone())),
        )
    }

    /// Fold the columns of a finished pairwise alignment into a profile:
    /// a matched pair becomes weight 2 on the shared element, a mismatched
    /// or gapped pair weight 1 on each side.
    pub fn from_alignment(alignment: &Alignment<E>) -> Self
    where
        E: PartialEq,
    {
        let mut profile = Sequence::with_capacity(alignment.len());
        for idx in 0..alignment.len() {
            let (a, b) = alignment.pair(idx);
            let column = if a == b {
                SoftElement::new([(a.clone(), 2)])
            } else {
                SoftElement::new([(a.clone(), 1), (b.clone(), 1)])
            };
            profile.push(column);
        }
        profile
    }

    /// Merge another profile of the same alignment columns into this one,
    /// summing support counts columnwise.
    ///
    /// Panics if the profiles differ in length; they would not represent the
    /// same columns.
    pub fn merge_with(&mut self, other: &Self) {
        if self.len() != other.len() {
            panic!("profiles with different lengths cannot be merged");
        }
        for (column, other_column) in self.elements.iter_mut().zip(other.iter()) {
            *column = column.merged_with(other_column);
        }
    }

    /// The unambiguous element of each column, where one exists.
    pub fn column_keys(&self) -> Vec<Option<&E>> {
        self.iter().map(|column| column.key()).collect()
    }

    /// Render unambiguous columns and a `*` wildcard for ambiguous ones.
    pub fn pattern(&self) -> String
    where
        E: Display,
    {
        self.column_keys()
            .iter()
            .map(|key| match key {
                Some(element) => element.to_string(),
                None => "*".to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// The element count of the widest column: a lower bound on the number
    /// of distinct sequences this profile summarizes.
    pub fn min_variation_count(&self) -> usize {
        self.iter().map(|column| column.len()).max().unwrap_or(0)
    }

    /// The number of distinct sequences representable by picking one element
    /// per column.
    pub fn max_variation_count(&self) -> usize {
        self.iter().map(|column| column.len()).product()
    }
}
