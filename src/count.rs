//! Packing of run counts into a fixed number of big-endian bytes.
//!
//! Counts travel as the low `width` bytes of a 32-bit value, `width` being
//! 1 to 4. Kept separate from the codec so the truncation/extension logic
//! can be tested on its own.

use crate::config::{MAX_COUNT_WIDTH, MIN_COUNT_WIDTH};
use byteorder::{BigEndian, ByteOrder};

/// Append the low `width` bytes of `value`, big-endian order.
pub fn write_count(buf: &mut Vec<u8>, value: u32, width: usize) {
    debug_assert!((MIN_COUNT_WIDTH..=MAX_COUNT_WIDTH).contains(&width));
    let mut scratch = [0u8; 4];
    BigEndian::write_u32(&mut scratch, value);
    buf.extend_from_slice(&scratch[4 - width..]);
}

/// Zero-extend 1 to 4 big-endian bytes into a `u32`.
pub fn read_count(bytes: &[u8]) -> u32 {
    debug_assert!((MIN_COUNT_WIDTH..=MAX_COUNT_WIDTH).contains(&bytes.len()));
    let mut scratch = [0u8; 4];
    scratch[4 - bytes.len()..].copy_from_slice(bytes);
    BigEndian::read_u32(&scratch)
}

/// Largest run count representable at the given width: `2^(8*width) - 1`.
pub fn max_count(width: usize) -> u32 {
    debug_assert!((MIN_COUNT_WIDTH..=MAX_COUNT_WIDTH).contains(&width));
    (u64::MAX >> (64 - 8 * width as u64)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_count_widths() {
        let mut buf = Vec::new();
        write_count(&mut buf, 0x01020304, 1);
        assert_eq!(buf, vec![0x04]);

        buf.clear();
        write_count(&mut buf, 0x01020304, 2);
        assert_eq!(buf, vec![0x03, 0x04]);

        buf.clear();
        write_count(&mut buf, 0x01020304, 3);
        assert_eq!(buf, vec![0x02, 0x03, 0x04]);

        buf.clear();
        write_count(&mut buf, 0x01020304, 4);
        assert_eq!(buf, vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_read_count_zero_extends() {
        assert_eq!(read_count(&[0xFF]), 255);
        assert_eq!(read_count(&[0x01, 0x00]), 256);
        assert_eq!(read_count(&[0x01, 0x00, 0x00]), 65536);
        assert_eq!(read_count(&[0xFF, 0xFF, 0xFF, 0xFF]), u32::MAX);
    }

    #[test]
    fn test_round_trip_all_widths() {
        for width in 1..=4 {
            let mut buf = Vec::new();
            let value = max_count(width);
            write_count(&mut buf, value, width);
            assert_eq!(buf.len(), width);
            assert_eq!(read_count(&buf), value);
        }
    }

    #[test]
    fn test_max_count() {
        assert_eq!(max_count(1), 255);
        assert_eq!(max_count(2), 65_535);
        assert_eq!(max_count(3), 16_777_215);
        assert_eq!(max_count(4), u32::MAX);
    }
}
