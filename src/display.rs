use crate::capture::CaptureError;

/// in-memory display (tests, host-less runs)
pub mod dummy;

/// the framebuffer is fixed to 24 bit, 3 bytes per pixel
pub const BYTES_PER_PIXEL: usize = 3;

/// display subsystem of the host firmware
pub trait DisplaySubsystem {
    /// the surface currently shown on screen, if any
    fn active_surface(&self) -> Option<&dyn Surface>;
}

/// a pixel surface owned by the display subsystem
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// raw pixel bytes, 3 per pixel in (blue, green, red) order,
    /// row-major without padding
    fn pixels(&self) -> Option<&[u8]>;
}

/// read-only view of one framebuffer snapshot
#[derive(Debug, Clone, Copy)]
pub struct FramebufferView<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> FramebufferView<'a> {
    /// borrow `pixels` as a `width` x `height` framebuffer
    ///
    /// bytes beyond `width * height * 3` are ignored.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Result<Self, CaptureError> {
        if width == 0 || height == 0 {
            return Err(CaptureError::EmptySurface { width, height });
        }
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(BYTES_PER_PIXEL);
        if pixels.len() < expected {
            return Err(CaptureError::PixelBufferTooSmall {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: &pixels[..expected],
        })
    }

    /// fetch the active surface and its pixels from `display`
    pub fn acquire(display: &'a dyn DisplaySubsystem) -> Result<Self, CaptureError> {
        let surface = display
            .active_surface()
            .ok_or(CaptureError::SurfaceUnavailable)?;
        let pixels = surface
            .pixels()
            .ok_or(CaptureError::PixelBufferUnavailable)?;
        Self::new(surface.width(), surface.height(), pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// bytes per row
    pub fn stride(&self) -> usize {
        (self.width as usize).saturating_mul(BYTES_PER_PIXEL)
    }

    /// rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.pixels.chunks_exact(self.stride())
    }
}
