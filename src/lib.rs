pub mod bits;
pub mod ecc;
pub mod error;

pub use bits::BitSeq;
pub use ecc::{fletcher, hamming};
pub use error::{Error, Result};
