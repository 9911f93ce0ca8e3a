//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by
//! Richard Hamming in 1950. A codeword keeps its parity bits at the positions
//! whose 1-based index is a power of two and its data bits everywhere else;
//! re-running the parity checks on a received word and reading the results as
//! a binary number yields the 1-based position of a single flipped bit. The
//! most common variant is the (7,4) code, which encodes 4 data bits into 7
//! bits with 3 parity bits.
//!
//! This implementation provides:
//! - Encoding with configurable (n, m) code parameters
//! - Decoding with single-bit error correction and an explicit correction
//!   report
//!
//! Error patterns of even weight (two flips in particular) can cancel out to
//! a zero syndrome and pass through both undetected and uncorrected. That is
//! an inherent property of the code, not a recoverable condition; callers
//! needing an independent signal should pair decoding with a checksum such as
//! [`crate::ecc::fletcher`].
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::bits::BitSeq;
use crate::ecc::Result;
use crate::error::Error;
use log::debug;

/// Returns true when `index` holds a parity bit, i.e. when `index + 1` is a
/// power of two. Encode and decode both partition the codeword with this
/// predicate, so the data-bit layout can never diverge between them.
pub fn is_parity_position(index: usize) -> bool {
    ((index + 1) & index) == 0
}

/// Represents a Hamming code configuration.
/// A Hamming(n,m) code carries m data bits in an n-bit codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    /// Total codeword length
    total_bits: usize,
    /// Number of data bits per codeword
    data_bits: usize,
}

impl HammingCode {
    /// Creates a new Hamming code configuration.
    ///
    /// # Arguments
    ///
    /// * `n` - Total codeword length (data bits + parity bits)
    /// * `m` - Number of data bits per codeword
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance, or an error when the pair cannot
    /// describe a codeword: `n` must exceed `m`, and the number of non-parity
    /// positions in an `n`-bit codeword must equal `m`
    pub fn new(n: usize, m: usize) -> Result<Self> {
        if n <= m {
            return Err(Error::InvalidParameters(format!(
                "codeword length must exceed data length: n={}, m={}",
                n, m
            )));
        }

        let data_positions = (0..n).filter(|&i| !is_parity_position(i)).count();
        if data_positions != m {
            return Err(Error::InvalidParameters(format!(
                "a {}-bit codeword has {} data positions, got m={}",
                n, data_positions, m
            )));
        }

        Ok(HammingCode {
            total_bits: n,
            data_bits: m,
        })
    }

    /// Creates the standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        // We know this is valid, no need to handle Result
        Self::new(7, 4).unwrap()
    }

    /// Gets the total codeword length (data bits + parity bits)
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Gets the number of data bits per codeword
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Gets the number of parity bits per codeword
    pub fn parity_bits(&self) -> usize {
        self.total_bits - self.data_bits
    }

    /// Encodes a data sequence into a codeword.
    ///
    /// Data bits fill the non-parity positions in their original order, then
    /// each parity check writes its result to position `2^c - 1`. Recomputing
    /// every check over the returned codeword yields an all-zero syndrome.
    ///
    /// # Arguments
    ///
    /// * `data` - Data bits to encode; length must equal `data_bits()`
    ///
    /// # Returns
    ///
    /// The n-bit codeword, or `LengthMismatch` when `data` has the wrong
    /// length
    pub fn encode(&self, data: &BitSeq) -> Result<BitSeq> {
        if data.len() != self.data_bits {
            return Err(Error::LengthMismatch {
                expected: self.data_bits,
                actual: data.len(),
            });
        }

        let mut code = BitSeq::zeros(self.total_bits);

        let mut data_index = 0;
        for i in 0..self.total_bits {
            if is_parity_position(i) {
                continue;
            }
            code.set(i, data.get(data_index));
            data_index += 1;
        }

        for c in 0..self.parity_bits() {
            let parity = self.check(&code, c);
            code.set((1 << c) - 1, parity);
        }

        Ok(code)
    }

    /// Decodes a received word, correcting at most one flipped bit.
    ///
    /// The syndrome folds check `c` in with weight `2^c` (check 0 is least
    /// significant) and names the 1-based position of a single-bit error, or
    /// 0 when every check passes. A non-zero syndrome flips that bit in a
    /// working copy and reports the 0-based index in [`Decoded::corrected`];
    /// a zero syndrome leaves the word untouched, which is also what an
    /// even-weight error pattern produces (see the module docs). For codes
    /// whose syndrome range exceeds `n` (e.g. (12,8)), a multi-bit error can
    /// name a position outside the codeword, which is reported as
    /// `Uncorrectable`.
    ///
    /// # Arguments
    ///
    /// * `received` - Received word; length must equal `total_bits()`
    ///
    /// # Returns
    ///
    /// The recovered data bits and the corrected position, if any
    pub fn decode(&self, received: &BitSeq) -> Result<Decoded> {
        if received.len() != self.total_bits {
            return Err(Error::LengthMismatch {
                expected: self.total_bits,
                actual: received.len(),
            });
        }

        let mut syndrome = 0usize;
        for c in 0..self.parity_bits() {
            if self.check(received, c) {
                syndrome |= 1 << c;
            }
        }

        let mut word = received.clone();
        let corrected = if syndrome != 0 {
            if syndrome > self.total_bits {
                return Err(Error::Uncorrectable { syndrome });
            }
            let error_index = syndrome - 1;
            word.flip(error_index);
            debug!(
                "corrected single-bit error at index {} of {}-bit codeword",
                error_index, self.total_bits
            );
            Some(error_index)
        } else {
            None
        };

        let data = (0..self.total_bits)
            .filter(|&i| !is_parity_position(i))
            .map(|i| word.get(i))
            .collect();

        Ok(Decoded { data, corrected })
    }

    /// Parity check `c` over a full word: XOR of the bits whose 1-based
    /// position has bit `c` set. Covers the same positions as walking blocks
    /// of `2^c` bits spaced `2^(c+1)` apart from position `2^c - 1`.
    fn check(&self, word: &BitSeq, c: usize) -> bool {
        let mut parity = false;
        for i in 0..self.total_bits {
            if ((i + 1) & (1 << c)) != 0 && word.get(i) {
                parity = !parity;
            }
        }
        parity
    }
}

/// Outcome of decoding a received word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered data bits
    pub data: BitSeq,
    /// 0-based codeword index flipped during correction, or `None` when the
    /// syndrome was zero
    pub corrected: Option<usize>,
}

/// Encodes data bits with an (n, m) Hamming code built per call
pub fn hamming_encode(data: &BitSeq, n: usize, m: usize) -> Result<BitSeq> {
    HammingCode::new(n, m)?.encode(data)
}

/// Decodes a received word with an (n, m) Hamming code built per call
pub fn hamming_decode(received: &BitSeq, n: usize, m: usize) -> Result<Decoded> {
    HammingCode::new(n, m)?.decode(received)
}
