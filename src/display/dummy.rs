use super::{DisplaySubsystem, Surface, BYTES_PER_PIXEL};

/// display backed by an owned buffer
#[derive(Debug, Default)]
pub struct DummyDisplay {
    surface: Option<DummySurface>,
}

#[derive(Debug)]
pub struct DummySurface {
    width: u32,
    height: u32,
    pixels: Option<Vec<u8>>,
}

impl DummyDisplay {
    /// display showing `pixels` (BGR, row-major)
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            surface: Some(DummySurface {
                width,
                height,
                pixels: Some(pixels),
            }),
        }
    }

    /// display filled with a single BGR color
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&bgr);
        }
        Self::new(width, height, pixels)
    }

    /// display without an active surface
    pub fn without_surface() -> Self {
        Self { surface: None }
    }

    /// display whose surface exposes no pixel buffer
    pub fn without_pixels(width: u32, height: u32) -> Self {
        Self {
            surface: Some(DummySurface {
                width,
                height,
                pixels: None,
            }),
        }
    }
}

impl DisplaySubsystem for DummyDisplay {
    fn active_surface(&self) -> Option<&dyn Surface> {
        self.surface.as_ref().map(|s| s as &dyn Surface)
    }
}

impl Surface for DummySurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }
}
