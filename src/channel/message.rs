//! Message preparation: text to a frame-aligned sequence of character codes.

use crate::error::{Error, Result};

/// Marks the end of the message in the decoded offset sequence.
///
/// Doubles as the no-op offset for padding frames, so a padded frame's
/// encoded sample equals its reference value.
pub(super) const TERMINATOR: i32 = 0;

/// Maps `text` to one code per frame, padded with [`TERMINATOR`] to exactly
/// `capacity` values.
///
/// Fails before producing anything if the text is longer than the capacity
/// or contains a character above `u8::MAX`.
pub(super) fn prepare(text: &str, capacity: usize) -> Result<Vec<i32>> {
    let len = text.chars().count();
    if len > capacity {
        return Err(Error::CapacityExceeded { len, capacity });
    }

    let mut codes = Vec::with_capacity(capacity);
    for (index, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code > u32::from(u8::MAX) {
            return Err(Error::UnsupportedCharacter { ch, index });
        }

        codes.push(code as i32);
    }

    codes.resize(capacity, TERMINATOR);
    Ok(codes)
}
