//! Validated bit sequences.
//!
//! [`BitSeq`] is the input and output representation shared by the codec and
//! checksum modules: an ordered sequence of bits whose length is fixed at
//! construction. Building one from integer slices rejects anything outside
//! {0, 1}, so downstream operations never re-validate element values.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// An ordered, fixed-length sequence of bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSeq {
    bits: BitVec<u8, Msb0>,
}

impl BitSeq {
    /// Builds a sequence from a slice of 0/1 integers.
    ///
    /// # Arguments
    ///
    /// * `bits` - Bit values in sequence order; every element must be 0 or 1
    ///
    /// # Returns
    ///
    /// The sequence, or `InvalidBit` naming the first offending element
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let mut seq = BitVec::<u8, Msb0>::with_capacity(bits.len());
        for (index, &value) in bits.iter().enumerate() {
            match value {
                0 => seq.push(false),
                1 => seq.push(true),
                _ => return Err(Error::InvalidBit { value, index }),
            }
        }
        Ok(BitSeq { bits: seq })
    }

    /// Creates an all-zero sequence of the given length
    pub fn zeros(len: usize) -> Self {
        BitSeq {
            bits: bitvec![u8, Msb0; 0; len],
        }
    }

    /// Number of bits in the sequence
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the sequence holds no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`; panics when out of bounds
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Overwrites the bit at `index`; panics when out of bounds
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Inverts the bit at `index`; panics when out of bounds
    pub fn flip(&mut self, index: usize) {
        let value = self.bits[index];
        self.bits.set(index, !value);
    }

    /// Iterates over the bits in sequence order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// The sequence as a vector of 0/1 integers
    pub fn to_bits(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitSeq {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Display for BitSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}
