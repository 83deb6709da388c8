//! binary portable pixmap (P6) encoding of a BGR framebuffer

use std::io::{self, Write};

use crate::display::{FramebufferView, BYTES_PER_PIXEL};

/// magic number of a binary portable pixmap
pub const MAGIC: &str = "P6";
/// maximum value of a color channel
pub const MAX_VALUE: u8 = 255;

/// write the three header lines
pub fn write_header<W: Write>(writer: &mut W, width: u32, height: u32) -> io::Result<()> {
    write!(writer, "{MAGIC}\n{width} {height}\n{MAX_VALUE}\n")
}

/// write `frame` as a P6 image, converting each pixel from BGR to RGB
///
/// The writer is flushed before returning.
pub fn write<W: Write>(mut writer: W, frame: &FramebufferView<'_>) -> io::Result<()> {
    write_header(&mut writer, frame.width(), frame.height())?;
    let mut line = Vec::with_capacity(frame.stride());
    for row in frame.rows() {
        line.clear();
        for pixel in row.chunks_exact(BYTES_PER_PIXEL) {
            line.extend_from_slice(&[pixel[2], pixel[1], pixel[0]]);
        }
        writer.write_all(&line)?;
    }
    writer.flush()
}
