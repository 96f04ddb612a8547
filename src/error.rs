//! Error and result types shared across the crate.

use thiserror::Error;

/// A specialized result type whose error defaults to [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the codec and the container adapter.
#[derive(Debug, Error)]
pub enum Error {
    /// The message has more characters than the cover has frames.
    ///
    /// Detected before any encoding work begins; nothing is written.
    #[error("message of {len} characters exceeds the {capacity}-frame capacity of the cover")]
    CapacityExceeded { len: usize, capacity: usize },

    /// A message character does not fit in a single byte.
    #[error("character {ch:?} at index {index} is outside the single-byte range")]
    UnsupportedCharacter { ch: char, index: usize },

    /// An encoded sample fell outside the representable 16-bit range.
    ///
    /// The whole encode is aborted; samples are never clipped or wrapped.
    #[error("encoded sample {value} at frame {frame} does not fit a 16-bit sample")]
    SampleOverflow { frame: usize, value: i32 },

    /// The matrix has too few channels for the requested operation.
    #[error("unsupported channel count: {channels}")]
    InvalidChannelCount { channels: usize },

    /// An interleaved buffer does not divide evenly into whole frames.
    #[error("{samples} interleaved samples do not divide into frames of {channels} channels")]
    ShapeMismatch { samples: usize, channels: usize },

    /// The WAV container could not be read or written.
    #[error(transparent)]
    Wave(#[from] hound::Error),
}
