use std::io::Cursor;

use sotto::channel::{Decoder, Encoder};
use sotto::wave::{self, WaveMetadata};
use sotto::{Embed, Extract, Result, SampleMatrix};

fn cover_metadata(matrix: &SampleMatrix) -> WaveMetadata {
    WaveMetadata {
        channels: matrix.channels() as u16,
        sample_rate: 44100,
        bits_per_sample: 16,
        frame_count: matrix.frame_count() as u32,
    }
}

#[test]
fn it_round_trips_a_matrix_through_the_container() -> Result<()> {
    let matrix = SampleMatrix::from_interleaved(vec![10, -20, 30, -40, 32767, -32768], 2)?;
    let metadata = cover_metadata(&matrix);

    let mut buffer = Cursor::new(Vec::new());
    wave::write_to(&mut buffer, &matrix, &metadata)?;

    let (read_back, read_metadata) = wave::read_from(Cursor::new(buffer.into_inner()))?;
    assert_eq!(matrix, read_back);
    assert_eq!(metadata, read_metadata);

    Ok(())
}

#[test]
fn it_serializes_packages_with_the_extra_channel() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60, 70, 80], 2)?;
    let metadata = cover_metadata(&cover);

    let package = Encoder::new(cover).embed("hi")?;

    let mut buffer = Cursor::new(Vec::new());
    wave::write_to(&mut buffer, &package, &metadata)?;

    let (read_back, read_metadata) = wave::read_from(Cursor::new(buffer.into_inner()))?;

    // The container gains a channel but keeps the cover's timing.
    assert_eq!(3, read_metadata.channels);
    assert_eq!(metadata.sample_rate, read_metadata.sample_rate);
    assert_eq!(metadata.frame_count, read_metadata.frame_count);

    let extracted = Decoder::new(read_back).extract()?;
    assert_eq!("hi", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}
