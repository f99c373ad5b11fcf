use thiserror::Error;

/// A byte with both high bits set opens a run; anything below is a literal.
pub const RUN_MARKER_THRESHOLD: u8 = 0xc0;

/// Low six bits of a run marker hold the repeat count (0..=63).
pub const RUN_COUNT_MASK: u8 = 0x3f;

#[derive(Error, Debug)]
pub enum RleDecompressionError {
    #[error("Run marker at offset {offset} has no following data byte")]
    TruncatedRun { offset: usize },
}

/// Expands a run-length-encoded byte stream.
///
/// Each run marker must be followed by exactly one data byte, which is
/// emitted `count` times; a count of zero still consumes the data byte and
/// emits nothing. Literal bytes are emitted once, unmodified. Empty input
/// decodes to empty output.
///
/// # Errors
/// - `RleDecompressionError::TruncatedRun` if the input ends immediately
///   after a run marker
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, RleDecompressionError> {
    let mut decoded = Vec::with_capacity(data.len() * 2);

    let mut i = 0;
    while i < data.len() {
        let byte = data[i];
        if byte >= RUN_MARKER_THRESHOLD {
            let count = (byte & RUN_COUNT_MASK) as usize;
            let value = *data
                .get(i + 1)
                .ok_or(RleDecompressionError::TruncatedRun { offset: i })?;
            decoded.extend(std::iter::repeat(value).take(count));
            i += 2;
        } else {
            decoded.push(byte);
            i += 1;
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rle_empty_input() {
        assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_rle_literals_pass_through() {
        // No byte reaches 0xc0, so the stream is its own decoding.
        let input: Vec<u8> = (0..RUN_MARKER_THRESHOLD).collect();
        assert_eq!(decompress(&input).unwrap(), input);
    }

    #[test]
    fn test_rle_run_expansion() {
        assert_eq!(decompress(&[0xc3, 0x41]).unwrap(), vec![0x41, 0x41, 0x41]);
    }

    #[test]
    fn test_rle_zero_count_run() {
        // Count 0 consumes the data byte but emits nothing.
        assert_eq!(decompress(&[0xc0, 0x41]).unwrap(), Vec::<u8>::new());
        assert_eq!(decompress(&[0xc0, 0x41, 0x07]).unwrap(), vec![0x07]);
    }

    #[test]
    fn test_rle_max_count_run() {
        assert_eq!(decompress(&[0xff, 0xaa]).unwrap(), vec![0xaa; 63]);
    }

    #[test]
    fn test_rle_truncated_run() {
        assert!(matches!(
            decompress(&[0xc3]),
            Err(RleDecompressionError::TruncatedRun { offset: 0 })
        ));
        assert!(matches!(
            decompress(&[0x01, 0x02, 0xc5]),
            Err(RleDecompressionError::TruncatedRun { offset: 2 })
        ));
    }

    #[test]
    fn test_rle_mixed_stream() {
        // Literal, run of 2, literal. 0xc1's data byte may itself be >= 0xc0.
        let input = [0x10, 0xc2, 0x20, 0x30, 0xc1, 0xc1];
        assert_eq!(
            decompress(&input).unwrap(),
            vec![0x10, 0x20, 0x20, 0x30, 0xc1]
        );
    }
}
