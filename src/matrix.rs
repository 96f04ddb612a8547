//! The rectangular sample matrix the codec operates on.

use crate::error::{Error, Result};

/// A rectangular matrix of 16-bit PCM samples, stored frame-major.
///
/// Every frame holds exactly one sample per channel, in the interleaved
/// order used by uncompressed audio containers: all samples of frame 0,
/// then all samples of frame 1, and so on. The matrix is moved between
/// pipeline stages, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    samples: Vec<i16>,
    channels: usize,
}

impl SampleMatrix {
    /// Creates a matrix from an interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `channels` is zero, and
    /// [`Error::ShapeMismatch`] if the buffer does not divide evenly into
    /// frames of `channels` samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use sotto::SampleMatrix;
    ///
    /// let matrix = SampleMatrix::from_interleaved(vec![10, 20, 30, 40], 2)?;
    /// assert_eq!(2, matrix.frame_count());
    /// # Ok::<(), sotto::Error>(())
    /// ```
    pub fn from_interleaved(samples: Vec<i16>, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannelCount { channels });
        }

        if samples.len() % channels != 0 {
            return Err(Error::ShapeMismatch {
                samples: samples.len(),
                channels,
            });
        }

        Ok(Self { samples, channels })
    }

    /// The number of samples in each frame.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The number of frames in the matrix.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Iterates over the frames in time order.
    pub fn frames(&self) -> impl Iterator<Item = &[i16]> {
        self.samples.chunks_exact(self.channels)
    }

    /// Appends one value per frame as a new trailing channel.
    ///
    /// The result stays frame-major, so it can be handed directly to a
    /// container writer with a channel count one higher than the input's.
    ///
    /// # Panics
    ///
    /// Panics if `channel` does not hold exactly one value per frame.
    #[must_use]
    pub fn with_channel(self, channel: &[i16]) -> Self {
        assert_eq!(
            self.frame_count(),
            channel.len(),
            "trailing channel must hold one sample per frame",
        );

        let mut samples = Vec::with_capacity(self.samples.len() + channel.len());
        for (frame, &extra) in self.frames().zip(channel) {
            samples.extend_from_slice(frame);
            samples.push(extra);
        }

        Self {
            samples,
            channels: self.channels + 1,
        }
    }

    /// Borrows the interleaved sample buffer.
    #[must_use]
    pub fn as_interleaved(&self) -> &[i16] {
        &self.samples
    }

    /// Consumes the matrix and returns the interleaved sample buffer.
    #[must_use]
    pub fn into_interleaved(self) -> Vec<i16> {
        self.samples
    }
}
