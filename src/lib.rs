//! # mrle: marker-based run-length encoding
//!
//! A byte-oriented RLE codec. Runs of a repeated byte are collapsed into a
//! compact `marker, count, value` block; everything else is carried as
//! literal bytes. The count field width is configurable from 1 to 4 bytes,
//! packed big-endian.
//!
//! ## Features
//!
//! - **Break-even aware**: runs too short to pay for a block stay literal,
//!   so incompressible data grows by nothing
//! - **Configurable**: pick the reserved marker byte and the run-count
//!   width per codec configuration
//! - **Headerless**: the encoded stream is exactly the token sequence; the
//!   configuration travels out-of-band
//! - **Pure**: encoding and decoding are synchronous, allocation-only
//!   transforms with no shared state, safe to call from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use mrle::{decode, encode, RleConfig};
//!
//! let config = RleConfig::default(); // marker 27, 1-byte counts
//! let data = b"aaaaaaaabcd";
//!
//! let encoded = encode(data, &config);
//! assert!(encoded.len() < data.len());
//!
//! let decoded = decode(&encoded, &config).unwrap();
//! assert_eq!(decoded, data);
//! ```
//!
//! ## Choosing a configuration
//!
//! ```rust
//! use mrle::{decode, encode, RleConfig};
//!
//! // Wider counts pay off when runs are very long
//! let config = RleConfig::new(0x00, 2);
//! let data = vec![7u8; 40_000];
//!
//! let encoded = encode(&data, &config);
//! assert_eq!(encoded.len(), 4); // marker + two count bytes + value
//! assert_eq!(decode(&encoded, &config).unwrap(), data);
//! ```
//!
//! The marker byte is reserved for block starts. Short runs of the marker
//! in payload data are emitted literally and will not survive a round trip;
//! pick a marker value that does not occur in the payload (see
//! [`codec::encode`]).

pub mod cli;
pub mod codec;
pub mod config;
pub mod count;
pub mod error;

// Re-export commonly used items for convenience
pub use codec::{decode, decode_to_string, encode, encode_str};
pub use config::{RleConfig, DEFAULT_COUNT_WIDTH, DEFAULT_MARKER};
pub use error::{Result, RleError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_round_trip() {
        let config = RleConfig::default();
        let data = b"run-length encoding collapses ruuuuuuuuuuns";

        let encoded = encode(data, &config);
        let decoded = decode(&encoded, &config).unwrap();
        assert_eq!(decoded, data.to_vec());
    }

    #[test]
    fn test_error_display_names_remaining_bytes() {
        let config = RleConfig::default();
        let err = decode(&[27, 9], &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad encoding: truncated block after marker (1 bytes left, need count and value)"
        );
    }
}
