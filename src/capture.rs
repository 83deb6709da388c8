use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};

use crate::{
    config::{CaptureSettings, EXTENSION, LOG_TARGET},
    display::{DisplaySubsystem, FramebufferView},
    ppm,
};

pub use self::error::CaptureError;

pub mod error;

/// source of the wall-clock time used in file names
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// local time of the device
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// `<directory>/<prefix>YYYYMMDDHHMMSS.ppm`
pub fn screenshot_path(settings: &CaptureSettings, timestamp: &NaiveDateTime) -> PathBuf {
    let name = format!(
        "{}{}.{EXTENSION}",
        settings.prefix,
        timestamp.format("%Y%m%d%H%M%S")
    );
    settings.directory.join(name)
}

/// save whatever is currently on screen
///
/// Returns the path of the written image. Nothing is created when the
/// display has no surface or pixel data. A file that fails mid-write is
/// removed again.
pub fn save_screenshot(
    display: &dyn DisplaySubsystem,
    clock: &dyn Clock,
    settings: &CaptureSettings,
) -> Result<PathBuf, CaptureError> {
    let frame = FramebufferView::acquire(display)?;
    let path = screenshot_path(settings, &clock.now());
    log::info!(
        target: LOG_TARGET,
        "Saving screenshot to {} ({}x{})",
        path.display(),
        frame.width(),
        frame.height()
    );

    let file = match File::create(&path) {
        Ok(f) => f,
        Err(source) => return Err(CaptureError::DestinationOpen { path, source }),
    };
    write_or_remove(&path, BufWriter::new(file), &frame)?;

    log::info!(target: LOG_TARGET, "Screenshot saved: {}", path.display());
    Ok(path)
}

fn write_or_remove<W: Write>(
    path: &Path,
    writer: W,
    frame: &FramebufferView<'_>,
) -> Result<(), CaptureError> {
    if let Err(source) = ppm::write(writer, frame) {
        if let Err(e) = fs::remove_file(path) {
            log::warn!(target: LOG_TARGET, "could not remove {}: {e}", path.display());
        }
        return Err(CaptureError::Write {
            path: path.to_owned(),
            source,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::NaiveDate;

    use super::*;
    use crate::display::dummy::DummyDisplay;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn clock(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
        let time = NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap();
        FixedClock(time)
    }

    /// accepts `limit` bytes, then fails
    struct ShortWriter {
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.limit == 0 {
                return Err(io::Error::other("no space left"));
            }
            let n = buf.len().min(self.limit);
            self.limit -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn path_is_zero_padded() {
        let settings = CaptureSettings::default();
        let path = screenshot_path(&settings, &clock(2024, 3, 5, 9, 7, 2).now());
        assert_eq!(path, Path::new("/sd/screenshot-20240305090702.ppm"));
        assert!(path.to_string_lossy().ends_with("20240305090702.ppm"));
    }

    #[test]
    fn path_end_of_year() {
        let settings = CaptureSettings::new("/tmp/shots");
        let path = screenshot_path(&settings, &clock(1999, 12, 31, 23, 59, 59).now());
        assert_eq!(path, Path::new("/tmp/shots/screenshot-19991231235959.ppm"));
    }

    #[test]
    fn saves_image() {
        crate::test_util::init_logging();
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let display = DummyDisplay::filled(3, 2, [1, 2, 3]);

        let path = save_screenshot(&display, &clock(2024, 3, 5, 9, 7, 2), &settings).unwrap();

        assert_eq!(path, dir.path().join("screenshot-20240305090702.ppm"));
        let image = fs::read(&path).unwrap();
        let header = b"P6\n3 2\n255\n";
        assert_eq!(&image[..header.len()], header);
        let payload = &image[header.len()..];
        assert_eq!(payload.len(), 3 * 2 * 3);
        assert!(payload.chunks_exact(3).all(|p| p == [3, 2, 1]));
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let clock = clock(2024, 3, 5, 9, 7, 2);
        let target = screenshot_path(&settings, &clock.now());
        fs::write(&target, vec![0xaa; 4096]).unwrap();

        let display = DummyDisplay::filled(1, 1, [0, 0, 0]);
        save_screenshot(&display, &clock, &settings).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"P6\n1 1\n255\n\0\0\0");
    }

    #[test]
    fn no_surface_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let display = DummyDisplay::without_surface();

        let res = save_screenshot(&display, &LocalClock, &settings);

        assert!(matches!(res, Err(CaptureError::SurfaceUnavailable)));
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn no_pixels_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let display = DummyDisplay::without_pixels(320, 240);

        let res = save_screenshot(&display, &LocalClock, &settings);

        assert!(matches!(res, Err(CaptureError::PixelBufferUnavailable)));
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn short_pixel_buffer_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let display = DummyDisplay::new(4, 4, vec![0; 4 * 4 * 3 - 1]);

        let res = save_screenshot(&display, &LocalClock, &settings);

        assert!(matches!(
            res,
            Err(CaptureError::PixelBufferTooSmall {
                expected: 48,
                actual: 47
            })
        ));
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn zero_sized_surface_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path());
        let display = DummyDisplay::new(0, 240, Vec::new());

        let res = save_screenshot(&display, &LocalClock, &settings);

        assert!(matches!(res, Err(CaptureError::EmptySurface { .. })));
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CaptureSettings::new(dir.path().join("missing"));
        let display = DummyDisplay::filled(2, 2, [9, 9, 9]);

        let res = save_screenshot(&display, &LocalClock, &settings);

        match res {
            Err(CaptureError::DestinationOpen { path, .. }) => {
                assert!(path.starts_with(dir.path().join("missing")))
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(entries(dir.path()), 0);
    }

    #[test]
    fn failed_write_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ppm");
        fs::write(&path, b"P6\n").unwrap();
        let pixels = [0u8; 4 * 4 * 3];
        let frame = FramebufferView::new(4, 4, &pixels).unwrap();

        let res = write_or_remove(&path, ShortWriter { limit: 20 }, &frame);

        assert!(matches!(res, Err(CaptureError::Write { .. })));
        assert!(!path.exists());
    }
}
