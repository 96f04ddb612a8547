//! Per-frame reference values, the zero-point for message offsets.
//!
//! Both sides of the codec must agree on the reference exactly. The encoder
//! computes it over all channels of the original frame; the decoder excludes
//! the trailing channel it is reading the message from, which recovers the
//! identical set of samples and therefore the identical mean.

/// The floored mean of a frame's samples.
///
/// Floor division, not truncation: a frame summing to `-7` over two
/// channels has a reference of `-4`.
pub(super) fn of_frame(frame: &[i16]) -> i32 {
    let sum: i64 = frame.iter().map(|&sample| i64::from(sample)).sum();
    sum.div_euclid(frame.len() as i64) as i32
}

/// The reference of a frame whose trailing channel carries message data.
///
/// Callers must ensure the frame has at least two channels.
pub(super) fn of_package_frame(frame: &[i16]) -> i32 {
    of_frame(&frame[..frame.len() - 1])
}
