use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::{AudioFile, FileType};
use lofty::probe::Probe;

use super::error::DecodeError;

/// Something that can tell how long an audio file plays.
pub trait DurationDecoder {
    /// Playing time of the file at `path`, in fractional seconds.
    fn decode(&self, path: &Path) -> Result<f64, DecodeError>;
}

/// Reads MPEG audio properties with `lofty`.
///
/// The file type is forced to MPEG regardless of the name, and tags are not
/// parsed since only the stream length matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyDecoder;

impl DurationDecoder for LoftyDecoder {
    fn decode(&self, path: &Path) -> Result<f64, DecodeError> {
        let tagged = Probe::open(path)?
            .set_file_type(FileType::Mpeg)
            .options(ParseOptions::new().read_tags(false))
            .read()?;

        Ok(tagged.properties().duration().as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // MPEG-1 Layer III, 128 kbit/s, 44.1 kHz, no CRC, no padding: 417 bytes,
    // 1152 samples per frame.
    const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
    const FRAME_LEN: usize = 417;

    fn mpeg_frames(count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count * FRAME_LEN);
        for _ in 0..count {
            out.extend_from_slice(&FRAME_HEADER);
            out.resize(out.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
        }
        out
    }

    // 100 frames * 1152 samples / 44100 Hz
    const EXPECTED_SECONDS: f64 = 2.612;

    #[test]
    fn lofty_decoder_reads_cbr_stream_duration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.mp3");
        fs::write(&path, mpeg_frames(100)).unwrap();

        let seconds = LoftyDecoder.decode(&path).unwrap();
        assert!((seconds - EXPECTED_SECONDS).abs() < 0.1, "got {seconds}");
    }

    #[test]
    fn lofty_decoder_skips_leading_id3v2_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tagged.mp3");

        // ID3v2.4 header, no flags, synchsafe size 64, body all padding.
        let mut bytes = vec![b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 64];
        bytes.resize(bytes.len() + 64, 0);
        bytes.extend(mpeg_frames(100));
        fs::write(&path, bytes).unwrap();

        let seconds = LoftyDecoder.decode(&path).unwrap();
        assert!((seconds - EXPECTED_SECONDS).abs() < 0.1, "got {seconds}");
    }

    #[test]
    fn lofty_decoder_rejects_non_mpeg_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.mp3");
        fs::write(&path, b"this is plain text, not an mpeg stream").unwrap();

        assert!(LoftyDecoder.decode(&path).is_err());
    }

    #[test]
    fn lofty_decoder_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = LoftyDecoder.decode(&dir.path().join("gone.mp3")).unwrap_err();
        assert!(matches!(err, DecodeError::Lofty(_)));
    }
}
