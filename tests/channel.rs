use sotto::channel::{Decoder, Encoder};
use sotto::{Embed, Error, Extract, Result, SampleMatrix};

#[test]
fn it_embeds_and_extracts_a_single_character() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60], 2)?;

    let package = Encoder::new(cover).embed("A")?;

    // References are [15, 35, 55]; 'A' is 65, the rest is terminator padding.
    assert_eq!(3, package.channels());
    assert_eq!(
        &[10, 20, 80, 30, 40, 35, 50, 60, 55],
        package.as_interleaved(),
    );

    let extracted = Decoder::new(package).extract()?;
    assert_eq!("A", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}

#[test]
fn it_round_trips_through_varied_audio() -> Result<()> {
    let samples = vec![
        -32768, 32767, 0, 1, -1, 441, -12000, 12000, 7, -7, 250, -250, 32000, -32000, 100, 99,
    ];
    let cover = SampleMatrix::from_interleaved(samples, 2)?;

    let package = Encoder::new(cover).embed("hi\x7f!")?;
    let extracted = Decoder::new(package).extract()?;

    assert_eq!("hi\x7f!", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}

#[test]
fn it_floors_references_on_negative_frames() -> Result<()> {
    // The frame sums are -7 and -1; floored means are -4 and -1, not -3
    // and 0. Both sides must agree or recovery would be off by one.
    let cover = SampleMatrix::from_interleaved(vec![-3, -4, -1, 0], 2)?;

    let package = Encoder::new(cover).embed("z")?;
    assert_eq!(&[-3, -4, 118, -1, 0, -1], package.as_interleaved());

    let extracted = Decoder::new(package).extract()?;
    assert_eq!("z", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}

#[test]
fn it_agrees_on_references_across_channel_layouts() -> Result<()> {
    for channels in [1, 2, 5] {
        let samples: Vec<i16> = (0..4 * channels)
            .map(|i| (i as i16 - 7) * 311)
            .collect();
        let cover = SampleMatrix::from_interleaved(samples, channels)?;

        let package = Encoder::new(cover).embed("ok")?;
        let extracted = Decoder::new(package).extract()?;

        assert_eq!("ok", extracted.text, "{channels} channel(s)");
        assert!(extracted.terminated);
    }

    Ok(())
}

#[test]
fn it_fills_the_cover_to_capacity() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60], 2)?;

    // Three characters, three frames: no room left for a terminator.
    let package = Encoder::new(cover).embed("abc")?;
    let extracted = Decoder::new(package).extract()?;

    assert_eq!("abc", extracted.text);
    assert!(!extracted.terminated);

    Ok(())
}

#[test]
fn it_rejects_messages_longer_than_the_cover() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40, 50, 60], 2)?;

    assert!(matches!(
        Encoder::new(cover).embed("abcd"),
        Err(Error::CapacityExceeded {
            len: 4,
            capacity: 3,
        }),
    ));

    Ok(())
}

#[test]
fn it_round_trips_the_empty_message() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40], 2)?;

    let package = Encoder::new(cover).embed("")?;
    let extracted = Decoder::new(package).extract()?;

    assert_eq!("", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}

#[test]
fn it_handles_empty_covers() -> Result<()> {
    let empty = SampleMatrix::from_interleaved(Vec::new(), 2)?;
    let package = Encoder::new(empty).embed("")?;
    assert_eq!(0, package.frame_count());

    let extracted = Decoder::new(package).extract()?;
    assert_eq!("", extracted.text);
    assert!(!extracted.terminated);

    let empty = SampleMatrix::from_interleaved(Vec::new(), 2)?;
    assert!(matches!(
        Encoder::new(empty).embed("A"),
        Err(Error::CapacityExceeded {
            len: 1,
            capacity: 0,
        }),
    ));

    Ok(())
}

#[test]
fn it_reports_missing_terminators() -> Result<()> {
    // Trailing samples sit a constant 7 above the reference, so no frame
    // ever decodes to a zero offset.
    let package = SampleMatrix::from_interleaved(vec![10, 17, 20, 27, 30, 37], 2)?;

    let extracted = Decoder::new(package).extract()?;
    assert_eq!(3, extracted.text.chars().count());
    assert!(!extracted.terminated);

    Ok(())
}

#[test]
fn it_rejects_overflowing_samples() -> Result<()> {
    let loud = SampleMatrix::from_interleaved(vec![i16::MAX, i16::MAX], 2)?;

    assert!(matches!(
        Encoder::new(loud).embed("A"),
        Err(Error::SampleOverflow {
            frame: 0,
            value: 32832,
        }),
    ));

    Ok(())
}

#[test]
fn it_rejects_characters_above_one_byte() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![10, 20, 30, 40], 2)?;

    assert!(matches!(
        Encoder::new(cover).embed("a\u{20ac}"),
        Err(Error::UnsupportedCharacter {
            ch: '\u{20ac}',
            index: 1,
        }),
    ));

    Ok(())
}

#[test]
fn it_accepts_the_full_single_byte_range() -> Result<()> {
    let cover = SampleMatrix::from_interleaved(vec![100, 200, 300, 400], 2)?;

    // U+00FF is the highest code the side channel can carry.
    let package = Encoder::new(cover).embed("\u{ff}")?;
    let extracted = Decoder::new(package).extract()?;

    assert_eq!("\u{ff}", extracted.text);
    assert!(extracted.terminated);

    Ok(())
}

#[test]
fn it_rejects_packages_without_a_reference_channel() -> Result<()> {
    let narrow = SampleMatrix::from_interleaved(vec![1, 2, 3], 1)?;

    assert!(matches!(
        Decoder::new(narrow).extract(),
        Err(Error::InvalidChannelCount { channels: 1 }),
    ));

    Ok(())
}

#[test]
fn it_rejects_invalid_matrix_shapes() {
    assert!(matches!(
        SampleMatrix::from_interleaved(vec![1, 2, 3], 0),
        Err(Error::InvalidChannelCount { channels: 0 }),
    ));

    assert!(matches!(
        SampleMatrix::from_interleaved(vec![1, 2, 3], 2),
        Err(Error::ShapeMismatch {
            samples: 3,
            channels: 2,
        }),
    ));
}
