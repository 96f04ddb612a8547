//! # Sotto
//!
//! The **sotto** library hides short text messages in uncompressed PCM audio
//! by appending a synthetic extra channel whose per-frame sample encodes one
//! character, and recovers them by inspecting that channel relative to the
//! original ones.
//!
//! ## Channel implementation
//!
//! The [`channel`] module implements the frame-level codec: each message
//! character is stored as an offset from the per-frame mean of the original
//! channels, so a receiver can recompute the mean from the untouched channels
//! and subtract it back out. See its [documentation][`channel`] for details.
//!
//! ## Container handling
//!
//! The [`wave`] module adapts WAV files to and from the [`SampleMatrix`]
//! model that the codec operates on.
//!
//! ## Examples
//!
//! ```
//! use sotto::channel::{Decoder, Encoder};
//! use sotto::{Embed, Extract, SampleMatrix};
//!
//! let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60], 2)?;
//!
//! let package = Encoder::new(cover).embed("A")?;
//!
//! let extracted = Decoder::new(package).extract()?;
//! assert_eq!("A", extracted.text);
//! assert!(extracted.terminated);
//! # Ok::<(), sotto::Error>(())
//! ```

pub mod channel;
pub mod error;
pub mod matrix;
pub mod wave;

pub use channel::Extracted;
pub use error::{Error, Result};
pub use matrix::SampleMatrix;

/// A trait for objects able to embed a steganographic message, or encoders.
///
/// Encoders are defined by a single required method, [`embed`][Embed::embed],
/// which hides the message in the cover data the encoder owns.
///
/// # Examples
///
/// [`channel::Encoder`] can be used to embed messages in PCM sample matrices.
pub trait Embed {
    /// The error type returned when the message cannot be embedded.
    type Err;

    /// Consumes the encoder and returns the cover with the message embedded.
    ///
    /// Implementations must either embed the message in its entirety or fail
    /// without producing output; a partially embedded message is never
    /// returned.
    ///
    /// # Errors
    ///
    /// This function returns an error if the message does not fit inside the
    /// cover in its embedded form, or if the cover cannot carry an embedded
    /// message at all.
    fn embed(self, message: &str) -> Result<SampleMatrix, Self::Err>;
}

/// A trait for objects able to recover an embedded message, or decoders.
///
/// Decoders are defined by a single required method,
/// [`extract`][Extract::extract], which recovers the hidden message from the
/// package data the decoder owns.
///
/// # Examples
///
/// [`channel::Decoder`] can be used to recover messages from PCM sample
/// matrices produced by [`channel::Encoder`].
pub trait Extract {
    /// The error type returned when the package cannot be read.
    type Err;

    /// Consumes the decoder and returns the recovered message.
    ///
    /// It is up to the implementations to establish how the end of the
    /// message is detected. An implementation that scans for a terminator
    /// should report its absence through the result rather than fail, as a
    /// package without a terminator still carries a best-effort message.
    ///
    /// # Errors
    ///
    /// This function returns an error only if the package is structurally
    /// unable to carry a message.
    fn extract(self) -> Result<Extracted, Self::Err>;
}
