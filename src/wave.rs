//! WAV container adapter between files and [`SampleMatrix`] values.
//!
//! The codec itself never touches the container format; this module reads a
//! WAV file into a matrix plus a [`WaveMetadata`] value, and serializes a
//! matrix back out under the metadata captured at read time. The metadata
//! travels with the matrix through the pipeline instead of living in any
//! shared state.
//!
//! Only integer 16-bit PCM is supported, matching the sample width of the
//! matrix model.

use std::io::{Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::error::Result;
use crate::matrix::SampleMatrix;

/// Container header fields captured when a file is read.
///
/// The channel count and frame count describe the matrix as it was read;
/// a writer takes the channel count from the matrix it is given, so the
/// same metadata value serializes both covers and packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveMetadata {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub frame_count: u32,
}

/// Reads a WAV file into a sample matrix and its metadata.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not integer 16-bit
/// PCM.
pub fn read<P: AsRef<Path>>(path: P) -> Result<(SampleMatrix, WaveMetadata)> {
    decode_reader(WavReader::open(path)?)
}

/// Reads a WAV stream into a sample matrix and its metadata.
///
/// # Errors
///
/// Returns an error if the stream is not a valid integer 16-bit PCM WAV.
pub fn read_from<R: Read>(reader: R) -> Result<(SampleMatrix, WaveMetadata)> {
    decode_reader(WavReader::new(reader)?)
}

/// Writes a sample matrix to a WAV file.
///
/// The channel count is taken from the matrix; sample rate and width come
/// from `metadata`, so a package produced from a cover keeps the cover's
/// timing.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written in full.
pub fn write<P: AsRef<Path>>(
    path: P,
    matrix: &SampleMatrix,
    metadata: &WaveMetadata,
) -> Result<()> {
    encode_writer(WavWriter::create(path, spec_for(matrix, metadata))?, matrix)
}

/// Writes a sample matrix to a WAV stream.
///
/// # Errors
///
/// Returns an error if the stream rejects a write.
pub fn write_to<W: Write + Seek>(
    writer: W,
    matrix: &SampleMatrix,
    metadata: &WaveMetadata,
) -> Result<()> {
    encode_writer(
        WavWriter::new(writer, spec_for(matrix, metadata))?,
        matrix,
    )
}

fn spec_for(matrix: &SampleMatrix, metadata: &WaveMetadata) -> WavSpec {
    WavSpec {
        channels: matrix.channels() as u16,
        sample_rate: metadata.sample_rate,
        bits_per_sample: metadata.bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

fn decode_reader<R: Read>(mut reader: WavReader<R>) -> Result<(SampleMatrix, WaveMetadata)> {
    let spec = reader.spec();
    let metadata = WaveMetadata {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frame_count: reader.duration(),
    };

    debug!(
        "sample rate = {} Hz, frames = {}, channels = {}, {} bits per sample",
        metadata.sample_rate, metadata.frame_count, metadata.channels, metadata.bits_per_sample,
    );

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let matrix = SampleMatrix::from_interleaved(samples, usize::from(metadata.channels))?;
    Ok((matrix, metadata))
}

fn encode_writer<W: Write + Seek>(mut writer: WavWriter<W>, matrix: &SampleMatrix) -> Result<()> {
    for &sample in matrix.as_interleaved() {
        writer.write_sample(sample)?;
    }

    debug!(
        "wrote {} frames of {} channels",
        matrix.frame_count(),
        matrix.channels(),
    );

    writer.finalize()?;
    Ok(())
}
