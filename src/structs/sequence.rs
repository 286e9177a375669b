use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The vocabulary code reserved for the gap marker.
pub const GAP_CODE: u32 = 0;
/// The display form of the gap marker.
pub const GAP_ELEMENT: char = '-';

/// The element bound required by the alignment engine: elements are cloned
/// into alignment columns, compared for equality, and each alignable element
/// type designates its own gap marker.
pub trait Element: Clone + PartialEq {
    /// The designated gap marker for this element type.
    fn gap() -> Self;
}

impl Element for u32 {
    fn gap() -> Self {
        GAP_CODE
    }
}

impl Element for char {
    fn gap() -> Self {
        GAP_ELEMENT
    }
}

/// An ordered, mutable run of elements with an optional identifier.
///
/// The container follows stack discipline (`push`/`pop` at the end) so that
/// backtraces can grow and shrink an in-progress alignment cheaply; a
/// finished backward path is finalized with [`Sequence::reversed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence<E> {
    pub elements: Vec<E>,
    pub id: Option<String>,
}

/// A sequence in vocabulary code space; what the aligners chew on.
pub type EncodedSequence = Sequence<u32>;

impl<E> Sequence<E> {
    pub fn new() -> Self {
        Sequence {
            elements: vec![],
            id: None,
        }
    }

    /// An empty sequence with storage preallocated for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            elements: Vec::with_capacity(capacity),
            id: None,
        }
    }

    pub fn from_elements(elements: impl IntoIterator<Item = E>) -> Self {
        Sequence {
            elements: elements.into_iter().collect(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn push(&mut self, element: E) {
        self.elements.push(element);
    }

    pub fn pop(&mut self) -> Option<E> {
        self.elements.pop()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element run that equality and hashing fall back to
    /// when no identifier is present.
    pub fn key(&self) -> &[E] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn reversed(&self) -> Self
    where
        E: Clone,
    {
        Sequence {
            elements: self.elements.iter().rev().cloned().collect(),
            id: self.id.clone(),
        }
    }
}

impl<E> Default for Sequence<E> {
    fn default() -> Self {
        Sequence::new()
    }
}

// Identifiers take precedence: two sequences that both carry an id compare
// by id alone; otherwise they compare element-wise.
impl<E: PartialEq> PartialEq for Sequence<E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(self_id), Some(other_id)) => self_id == other_id,
            _ => self.elements == other.elements,
        }
    }
}

impl<E: Eq> Eq for Sequence<E> {}

impl<E: Hash> Hash for Sequence<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.id {
            Some(id) => id.hash(state),
            None => self.elements.hash(state),
        }
    }
}

impl<E> Index<usize> for Sequence<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.elements[index]
    }
}

impl<E> IndexMut<usize> for Sequence<E> {
    fn index_mut(&mut self, index: usize) -> &mut E {
        &mut self.elements[index]
    }
}

impl<E> IntoIterator for Sequence<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Sequence<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: Display> Display for Sequence<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(ref id) = self.id {
            writeln!(f, "> {id}")?;
        }

        let mut iter = self.elements.iter().peekable();
        while let Some(element) = iter.next() {
            write!(f, "{element}")?;
            if iter.peek().is_some() {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_push_pop() {
        let mut seq: Sequence<char> = Sequence::new();
        seq.push('a');
        seq.push('b');
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.pop(), Some('b'));
        assert_eq!(seq.pop(), Some('a'));
        assert_eq!(seq.pop(), None);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_reversed_keeps_id() {
        let seq = Sequence::from_elements("abc".chars()).with_id(Some("s1".to_string()));
        let rev = seq.reversed();
        assert_eq!(rev.elements, vec!['c', 'b', 'a']);
        assert_eq!(rev.id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_equality_prefers_ids() {
        let a = Sequence::from_elements("abc".chars()).with_id(Some("x".to_string()));
        let b = Sequence::from_elements("def".chars()).with_id(Some("x".to_string()));
        let c = Sequence::from_elements("abc".chars());
        let d = Sequence::from_elements("abc".chars());

        // both carry ids: id comparison wins despite different elements
        assert_eq!(a, b);
        // only one side carries an id: element comparison
        assert_eq!(a, c);
        assert_eq!(c, d);

        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&c), hash_of(&d));
    }

    #[test]
    fn test_display() {
        let seq = Sequence::from_elements("abc".chars());
        assert_eq!(seq.to_string(), "a b c");

        let named = Sequence::from_elements("ab".chars()).with_id(Some("s1".to_string()));
        assert_eq!(named.to_string(), "> s1\na b");
    }
}
