//! Marker-based run-length codec.
//!
//! Runs of a repeated byte are collapsed into a three-part block:
//! `marker, count, value`, where `count` occupies a configurable number of
//! big-endian bytes (see [`crate::count`]). Runs too short to pay for a
//! block stay literal. The stream has no header; both sides must share the
//! same [`RleConfig`].

use crate::config::RleConfig;
use crate::count;
use crate::error::RleError;

/// Encode `data`, collapsing runs longer than `count_width + 2` into
/// `marker, count, value` blocks.
///
/// Shorter runs are emitted literally, since a block would not shrink them.
/// That includes short runs of the marker byte itself: a payload in which
/// the marker occurs in runs of `count_width + 2` or fewer bytes will not
/// decode back to itself. Pick a marker absent from the payload (or present
/// only in long runs) when round-tripping matters.
///
/// Runs longer than the count field can represent are split into several
/// blocks, so no run length is ever truncated. When such a split leaves a
/// sub-threshold tail of the marker byte, the tail is emitted as a block
/// despite the size cost: a bare marker literal would corrupt the stream.
///
/// Encoding never fails; empty input yields empty output.
pub fn encode(data: &[u8], config: &RleConfig) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let width = config.effective_count_width();
    let threshold = width + 2;
    let max_run = count::max_count(width) as usize;

    let mut encoded = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];

        // Measure the run
        let mut run = 1;
        while i + run < data.len() && data[i + run] == byte {
            run += 1;
        }
        i += run;

        let mut split = false;
        while run > 0 {
            let chunk = run.min(max_run);
            if chunk <= threshold && !(split && byte == config.marker) {
                // A block costs 2 + width bytes, not worth it. The tail of
                // a split marker run is the exception: literal markers are
                // not valid there, so it takes a block regardless.
                encoded.extend(std::iter::repeat(byte).take(chunk));
            } else {
                encoded.push(config.marker);
                count::write_count(&mut encoded, chunk as u32, width);
                encoded.push(byte);
            }
            run -= chunk;
            split = true;
        }
    }

    encoded
}

/// Decode a stream produced by [`encode`] under the same configuration.
///
/// Bytes up to the next marker are literals; each marker must be followed
/// by `count_width` count bytes and one value byte. A marker with fewer
/// bytes after it fails with [`RleError::BadEncoding`], carrying the
/// unconsumed tail of the input. On error, discard any output: the carried
/// tail is diagnostic, not a partial decode.
///
/// A zero count decodes to nothing. No other validation is performed;
/// corrupt-but-complete blocks decode into garbage without error.
pub fn decode(data: &[u8], config: &RleConfig) -> Result<Vec<u8>, RleError> {
    let width = config.effective_count_width();

    let mut decoded = Vec::with_capacity(data.len());
    let mut rest = data;

    while !rest.is_empty() {
        let p = match rest.iter().position(|&b| b == config.marker) {
            Some(p) => p,
            None => {
                decoded.extend_from_slice(rest);
                break;
            }
        };

        // Literals up to the marker; the marker itself is not data
        decoded.extend_from_slice(&rest[..p]);
        rest = &rest[p + 1..];

        if rest.len() < width + 1 {
            return Err(RleError::BadEncoding {
                remaining: rest.to_vec(),
            });
        }

        let run = count::read_count(&rest[..width]) as usize;
        let value = rest[width];
        rest = &rest[width + 1..];

        decoded.extend(std::iter::repeat(value).take(run));
    }

    Ok(decoded)
}

/// Encode a UTF-8 string's bytes.
pub fn encode_str(input: &str, config: &RleConfig) -> Vec<u8> {
    encode(input.as_bytes(), config)
}

/// Decode into a `String`; fails if the decoded bytes are not valid UTF-8.
pub fn decode_to_string(data: &[u8], config: &RleConfig) -> Result<String, RleError> {
    Ok(String::from_utf8(decode(data, config)?)?)
}
