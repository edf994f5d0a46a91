//! Software framebuffer for headless hosts

/// Single-channel pixel grid (0 = black, 255 = white)
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    color: u8,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            color: 255,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `value`
    pub fn clear(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    /// Color used by subsequent draw calls
    pub fn set_color(&mut self, value: u8) {
        self.color = value;
    }

    /// Pixel value, `None` when out of range
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Number of non-black pixels
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Horizontal span from `x0` to `x1` inclusive, clipped to the buffer
    fn hline(&mut self, x0: i32, x1: i32, y: i32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + start as usize..=row + end as usize].fill(self.color);
    }

    /// Filled midpoint circle. Centre and radius are truncated to whole pixels.
    pub fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        let (cx, cy, radius) = (x as i32, y as i32, radius as i32);
        if radius <= 0 {
            return;
        }

        let mut px = radius - 1;
        let mut py = 0;
        let mut tx = 1;
        let mut ty = 1;
        let mut err = tx - (radius << 1);

        while px >= py {
            self.hline(cx - px, cx + px, cy - py);
            self.hline(cx - px, cx + px, cy + py);
            self.hline(cx - py, cx + py, cy - px);
            self.hline(cx - py, cx + py, cy + px);

            if err <= 0 {
                py += 1;
                err += ty;
                ty += 2;
            } else {
                px -= 1;
                tx += 2;
                err += tx - (radius << 1);
            }
        }
    }
}
