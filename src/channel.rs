//! Side-channel implementations of the [`Embed`][crate::Embed] and
//! [`Extract`][crate::Extract] traits.
//!
//! The [`Encoder`] and [`Decoder`] structures hide and recover text messages
//! in PCM sample matrices by appending one synthetic channel to the cover.
//!
//! ## The scheme
//!
//! For every frame of the cover, the codec computes a *reference value*: the
//! floored mean of that frame's channels. The message is mapped to one
//! character code per frame, padded with the terminator value `0`, and each
//! code is written to the new trailing channel as `reference + code`.
//!
//! The receiver recomputes the same reference from the untouched leading
//! channels and subtracts it from the trailing channel, recovering the code
//! sequence exactly regardless of the audio content. A recovered `0` marks
//! the end of the message; a package with no `0` before its last frame still
//! decodes, but is flagged as unterminated.
//!
//! The side channel survives only containers that keep samples bit-exact.
//! Transcoding to a lossy codec destroys it.
//!
//! ## Examples
//!
//! Hiding a message in a two-channel cover and recovering it:
//!
//! ```
//! use sotto::channel::{Decoder, Encoder};
//! use sotto::{Embed, Extract, SampleMatrix};
//!
//! let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60], 2)?;
//!
//! // The encoder appends a third channel carrying the message.
//! let package = Encoder::new(cover).embed("A")?;
//! assert_eq!(3, package.channels());
//!
//! let extracted = Decoder::new(package).extract()?;
//! assert_eq!("A", extracted.text);
//! # Ok::<(), sotto::Error>(())
//! ```

mod decoder;
mod encoder;
mod message;
mod reference;

pub use decoder::{Decoder, Extracted};
pub use encoder::Encoder;
