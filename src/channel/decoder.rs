use crate::channel::{message, reference};
use crate::error::{Error, Result};
use crate::{Extract, SampleMatrix};

/// A message recovered from a package matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// The recovered text, one character per frame up to the terminator.
    pub text: String,
    /// Whether a terminator was found before the matrix ran out.
    ///
    /// An unterminated package is not an error: the text then covers every
    /// frame of the package and may or may not be a real message.
    pub terminated: bool,
}

/// A side-channel decoder that recovers the message from the package it owns.
///
/// Extraction scans frames in time order and stops at the first frame whose
/// trailing sample equals the frame's reference value, i.e. at the first
/// zero offset. Codes outside the single-byte range can only come from data
/// that was never produced by an encoder; they decode to `U+FFFD` rather
/// than fail, keeping extraction total over arbitrary packages.
///
/// # Examples
///
/// Recovering a message from a three-channel package:
///
/// ```
/// use sotto::channel::Decoder;
/// use sotto::{Extract, SampleMatrix};
///
/// let package = SampleMatrix::from_interleaved(vec![10, 20, 80, 30, 40, 35], 3)?;
///
/// let extracted = Decoder::new(package).extract()?;
/// assert_eq!("A", extracted.text);
/// # Ok::<(), sotto::Error>(())
/// ```
#[derive(Debug)]
pub struct Decoder {
    package: SampleMatrix,
}

impl Decoder {
    /// Creates a new [`Decoder`] that will read from `package`.
    #[must_use]
    pub fn new(package: SampleMatrix) -> Self {
        Self { package }
    }
}

impl Extract for Decoder {
    type Err = Error;

    fn extract(self) -> Result<Extracted> {
        let channels = self.package.channels();
        if channels < 2 {
            // A lone message channel leaves no channels to recompute the
            // reference from.
            return Err(Error::InvalidChannelCount { channels });
        }

        let mut text = String::new();
        for frame in self.package.frames() {
            let trailing = i32::from(frame[channels - 1]);
            let code = trailing - reference::of_package_frame(frame);
            if code == message::TERMINATOR {
                return Ok(Extracted {
                    text,
                    terminated: true,
                });
            }

            text.push(u8::try_from(code).map_or(char::REPLACEMENT_CHARACTER, char::from));
        }

        Ok(Extracted {
            text,
            terminated: false,
        })
    }
}
