//! Error correction and detection for short bit sequences.
//!
//! This module provides two cooperating components:
//! - Hamming codes with single-bit error correction
//! - A Fletcher-style 3-bit checksum as an independent error-detection signal
//!
//! The canonical flow encodes data bits into a codeword, checksums the
//! codeword before and after transmission, and decodes the received word,
//! correcting at most one flipped bit.
//!
//! # Examples
//!
//! ```rust
//! use bitfec::bits::BitSeq;
//! use bitfec::ecc::hamming::HammingCode;
//!
//! let data = BitSeq::from_bits(&[1, 0, 0, 1]).unwrap();
//! let code = HammingCode::standard_7_4();
//!
//! let mut received = code.encode(&data).unwrap();
//! received.flip(2);
//!
//! let decoded = code.decode(&received).unwrap();
//! assert_eq!(decoded.data, data);
//! assert_eq!(decoded.corrected, Some(2));
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fletcher-style checksum for error detection
pub mod fletcher;
/// Hamming codes for single-bit error correction
pub mod hamming;

pub use fletcher::{exists_error, fletcher3, Fletcher3};
pub use hamming::{hamming_decode, hamming_encode, Decoded, HammingCode};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitSeq;

    /// The full transmit/verify/correct sequence over the classic (7,4) code.
    #[test]
    fn test_end_to_end_roundtrip_with_corruption() {
        let data = BitSeq::from_bits(&[1, 0, 0, 1]).unwrap();
        let code = HammingCode::standard_7_4();

        let encoded = code.encode(&data).unwrap();
        assert_eq!(encoded.to_bits(), vec![0, 0, 1, 1, 0, 0, 1]);

        let sent_checksum = Fletcher3::compute(&encoded);
        assert_eq!(sent_checksum.to_string(), "110");
        assert_eq!(sent_checksum.value(), 6);
        assert!(!exists_error(&sent_checksum, &sent_checksum));

        let mut received = encoded.clone();
        received.flip(2);

        let received_checksum = Fletcher3::compute(&received);
        assert_eq!(received_checksum.to_string(), "101");
        assert!(exists_error(&sent_checksum, &received_checksum));

        let decoded = code.decode(&received).unwrap();
        assert_eq!(decoded.corrected, Some(2));
        assert_eq!(decoded.data, data);
    }

    #[test]
    fn test_clean_transmission_reports_no_error() {
        let data = BitSeq::from_bits(&[1, 1, 0, 1]).unwrap();
        let code = HammingCode::standard_7_4();

        let encoded = code.encode(&data).unwrap();
        let checksum = Fletcher3::compute(&encoded);
        assert!(!exists_error(&checksum, &Fletcher3::compute(&encoded)));

        let decoded = code.decode(&encoded).unwrap();
        assert_eq!(decoded.corrected, None);
        assert_eq!(decoded.data, data);
    }
}
