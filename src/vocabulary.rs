use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use crate::structs::{Alignment, EncodedSequence, Profile, Sequence, SoftElement, GAP_CODE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no element in the vocabulary is encoded as {code}")]
pub struct DecodeError {
    pub code: u32,
}

/// A bidirectional mapping between domain elements and the dense `u32`
/// codes the aligners operate on. Code 0 is always the gap.
///
/// Encoding is additive: an unseen element is assigned the next free code,
/// so the vocabulary grows as sequences pass through it.
#[derive(Debug, Clone)]
pub struct Vocabulary<E: Eq + Hash + Clone> {
    element_to_code: HashMap<E, u32>,
    code_to_element: Vec<E>,
}

impl<E: Eq + Hash + Clone> Vocabulary<E> {
    pub fn new(gap: E) -> Self {
        let mut element_to_code = HashMap::new();
        element_to_code.insert(gap.clone(), GAP_CODE);
        Vocabulary {
            element_to_code,
            code_to_element: vec![gap],
        }
    }

    pub fn has(&self, element: &E) -> bool {
        self.element_to_code.contains_key(element)
    }

    pub fn has_code(&self, code: u32) -> bool {
        (code as usize) < self.code_to_element.len()
    }

    pub fn encode(&mut self, element: &E) -> u32 {
        match self.element_to_code.get(element) {
            Some(&code) => code,
            None => {
                let code = self.code_to_element.len() as u32;
                self.element_to_code.insert(element.clone(), code);
                self.code_to_element.push(element.clone());
                code
            }
        }
    }

    pub fn decode(&self, code: u32) -> Result<&E, DecodeError> {
        self.code_to_element
            .get(code as usize)
            .ok_or(DecodeError { code })
    }

    pub fn encode_sequence(&mut self, sequence: &Sequence<E>) -> EncodedSequence {
        let mut encoded = Sequence::with_capacity(sequence.len());
        encoded.id = sequence.id.clone();
        for element in sequence.iter() {
            encoded.push(self.encode(element));
        }
        encoded
    }

    pub fn decode_sequence(&self, sequence: &EncodedSequence) -> Result<Sequence<E>, DecodeError> {
        let mut decoded = Sequence::with_capacity(sequence.len());
        decoded.id = sequence.id.clone();
        for &code in sequence.iter() {
            decoded.push(self.decode(code)?.clone());
        }
        Ok(decoded)
    }

    /// Decodes both rows of an alignment, rebuilding the per-position
    /// scores and derived statistics on the decoded side.
    pub fn decode_alignment(&self, alignment: &Alignment<u32>) -> Result<Alignment<E>, DecodeError> {
        let first = self.decode_sequence(&alignment.first)?;
        let second = self.decode_sequence(&alignment.second)?;
        let gap = self.decode(*alignment.gap())?.clone();

        let mut decoded = Alignment::new(Sequence::new(), Sequence::new(), gap);
        decoded.first.id = first.id.clone();
        decoded.second.id = second.id.clone();
        for (idx, &score) in alignment.position_scores().iter().enumerate() {
            decoded.push(first[idx].clone(), second[idx].clone(), score);
        }
        Ok(decoded)
    }

    pub fn decode_soft(&self, element: &SoftElement<u32>) -> Result<SoftElement<E>, DecodeError>
    where
        E: Ord,
    {
        let mut pairs = Vec::with_capacity(element.len());
        for (&code, weight) in element.pairs() {
            pairs.push((self.decode(code)?.clone(), weight));
        }
        Ok(SoftElement::new(pairs))
    }

    pub fn decode_profile(&self, profile: &Profile<u32>) -> Result<Profile<E>, DecodeError>
    where
        E: Ord,
    {
        let mut decoded = Sequence::with_capacity(profile.len());
        decoded.id = profile.id.clone();
        for element in profile.iter() {
            decoded.push(self.decode_soft(element)?);
        }
        Ok(decoded)
    }

    pub fn decode_profile_alignment(
        &self,
        alignment: &Alignment<SoftElement<u32>>,
    ) -> Result<Alignment<SoftElement<E>>, DecodeError>
    where
        E: Ord,
    {
        let first = self.decode_profile(&alignment.first)?;
        let second = self.decode_profile(&alignment.second)?;
        let gap = self.decode_soft(alignment.gap())?;

        let mut decoded = Alignment::new(Sequence::new(), Sequence::new(), gap);
        decoded.first.id = first.id.clone();
        decoded.second.id = second.id.clone();
        for (idx, &score) in alignment.position_scores().iter().enumerate() {
            decoded.push(first[idx].clone(), second[idx].clone(), score);
        }
        Ok(decoded)
    }

    pub fn elements(&self) -> &[E] {
        &self.code_to_element
    }

    pub fn len(&self) -> usize {
        self.code_to_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_element.is_empty()
    }
}
