//! Raw point files: a headerless sequence of 8-byte big-endian IEEE-754 doubles,
//! read pairwise as (x, y). A trailing partial pair is ignored.

use crate::error::LoadError;
use crate::models::{Point, PointSeries};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// Bytes per encoded value.
pub const VALUE_BYTES: usize = 8;
/// Bytes per (x, y) record.
pub const RECORD_BYTES: usize = 2 * VALUE_BYTES;

/// Load a point file.
///
/// ### Errors
/// - [`LoadError::FileNotFound`] when the path is missing, unreadable or a directory
/// - [`LoadError::Read`] on any I/O failure while reading the byte stream
///
/// A file with fewer than 16 bytes loads as an empty series; callers decide
/// what "no data" means for them.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PointSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => LoadError::file_not_found(path, e),
        _ => LoadError::read(path, e),
    })?;

    let meta = file.metadata().map_err(|e| LoadError::read(path, e))?;
    if meta.is_dir() {
        return Err(LoadError::file_not_found(
            path,
            io::Error::new(ErrorKind::InvalidInput, "path is a directory"),
        ));
    }

    read_points(BufReader::new(file), path)
}

/// Read a whole point stream. `path` only labels errors and log lines.
///
/// Any I/O failure before end of stream is [`LoadError::Read`].
pub fn read_points<R: Read>(mut reader: R, path: &Path) -> Result<PointSeries, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| LoadError::read(path, e))?;

    let series = parse_points(&bytes);
    debug!("read {} points from {}", series.len(), path.display());
    if !series.is_x_sorted() {
        warn!(
            "{}: x values are not ascending; bounds use a full scan",
            path.display()
        );
    }
    Ok(series)
}

/// Decode raw bytes into points, dropping a trailing partial record.
pub fn parse_points(bytes: &[u8]) -> PointSeries {
    let chunks = bytes.chunks_exact(RECORD_BYTES);
    let rest = chunks.remainder().len();
    if rest > 0 {
        warn!("ignoring {} trailing bytes (incomplete record)", rest);
    }
    chunks
        .map(|rec| {
            let (x, y) = rec.split_at(VALUE_BYTES);
            Point::new(read_f64_be(x), read_f64_be(y))
        })
        .collect()
}

fn read_f64_be(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; VALUE_BYTES];
    buf.copy_from_slice(bytes);
    f64::from_be_bytes(buf)
}

/// Encode points in the raw file layout.
pub fn encode_points(points: &[Point]) -> Vec<u8> {
    let mut out = Vec::with_capacity(points.len() * RECORD_BYTES);
    for p in points {
        out.extend_from_slice(&p.x.to_be_bytes());
        out.extend_from_slice(&p.y.to_be_bytes());
    }
    out
}

/// Save points in the raw file layout.
pub fn save<P: AsRef<Path>>(points: &[Point], path: P) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(&encode_points(points))?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_drops_partial_record() {
        let mut bytes = encode_points(&[Point::new(1.0, 2.0), Point::new(3.0, -4.5)]);
        bytes.extend_from_slice(&[0xAB; 9]);
        let s = parse_points(&bytes);
        assert_eq!(s.points(), &[Point::new(1.0, 2.0), Point::new(3.0, -4.5)]);
    }

    #[test]
    fn parse_reads_big_endian() {
        // 1.0 = 0x3FF0_0000_0000_0000, 2.0 = 0x4000_0000_0000_0000
        let bytes = [
            0x3F, 0xF0, 0, 0, 0, 0, 0, 0, 0x40, 0x00, 0, 0, 0, 0, 0, 0,
        ];
        let s = parse_points(&bytes);
        assert_eq!(s.points(), &[Point::new(1.0, 2.0)]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device went away"))
        }
    }

    #[test]
    fn stream_failure_is_read_error() {
        let err = read_points(FailingReader, Path::new("points.bin")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
        assert_eq!(err.path(), Path::new("points.bin"));
        assert_eq!(
            err.user_message(),
            "Failed to read point coordinates from the file."
        );
    }

    #[test]
    fn load_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }
}
