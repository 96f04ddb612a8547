use crate::channel::{message, reference};
use crate::error::{Error, Result};
use crate::{Embed, SampleMatrix};

/// A side-channel encoder that embeds a message into the cover it owns.
///
/// Embedding appends one channel to the cover, holding one character per
/// frame as an offset from that frame's reference value. The encoder fails
/// without producing output if either occurs:
///
/// 1. The message has more characters than the cover has frames, or
/// 2. An encoded sample would leave the 16-bit sample range, which may
///    happen when a frame's reference value sits within a character code
///    of `i16::MAX`. In this case it is recommended to use quieter cover
///    audio.
///
/// # Examples
///
/// Embedding a message into a cover matrix:
///
/// ```
/// use sotto::channel::Encoder;
/// use sotto::{Embed, SampleMatrix};
///
/// let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40], 2)?;
///
/// let package = Encoder::new(cover).embed("h")?;
/// assert_eq!(3, package.channels());
/// # Ok::<(), sotto::Error>(())
/// ```
#[derive(Debug)]
pub struct Encoder {
    cover: SampleMatrix,
}

impl Encoder {
    /// Creates a new [`Encoder`] that will embed into `cover`.
    ///
    /// The cover's frame count is the message capacity: one character per
    /// frame, with unused frames padded by the terminator.
    #[must_use]
    pub fn new(cover: SampleMatrix) -> Self {
        Self { cover }
    }
}

impl Embed for Encoder {
    type Err = Error;

    fn embed(self, message: &str) -> Result<SampleMatrix> {
        let codes = message::prepare(message, self.cover.frame_count())?;

        let mut encoded = Vec::with_capacity(codes.len());
        for (frame_index, (frame, code)) in self.cover.frames().zip(&codes).enumerate() {
            let value = reference::of_frame(frame) + code;
            let sample = i16::try_from(value).map_err(|_| Error::SampleOverflow {
                frame: frame_index,
                value,
            })?;

            encoded.push(sample);
        }

        Ok(self.cover.with_channel(&encoded))
    }
}
