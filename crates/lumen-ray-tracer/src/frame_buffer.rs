use crate::Color;

/// Output of a render pass, rows are stored bottom-up to match screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// # Panics
    ///
    /// When `width * height` pixels cannot be addressed, see [`FrameBuffer::try_new`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::try_new(width, height)
            .unwrap_or_else(|| panic!("A {width}x{height} frame buffer cannot be addressed."))
    }

    /// Black buffer, `None` when its size in bytes cannot be allocated.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        len.checked_mul(std::mem::size_of::<Color>())
            .filter(|bytes| *bytes <= isize::MAX as usize)?;

        Some(Self {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Tightly packed `f32` RGB triplets for handing to a presentation layer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bottom-up rows as slices.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Averages each `factor × factor` block into one pixel, trailing partial blocks are dropped.
    pub fn downsample(&self, factor: u32) -> FrameBuffer {
        let factor = factor.max(1);
        let mut result = FrameBuffer::new(self.width / factor, self.height / factor);
        let weight = (factor as f32).powi(2).recip();

        for y in 0..result.height {
            for x in 0..result.width {
                let mut sum = Color::BLACK;
                for block_y in 0..factor {
                    for block_x in 0..factor {
                        sum += self.get(x * factor + block_x, y * factor + block_y);
                    }
                }
                result.set(x, y, sum * weight);
            }
        }

        result
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x}, {y}) is outside of a {}x{} frame buffer.",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffers_are_black() {
        let buffer = FrameBuffer::new(3, 2);

        assert_eq!(buffer.pixels().len(), 6);
        assert!(buffer.pixels().iter().all(|pixel| *pixel == Color::BLACK));
        assert_eq!(buffer.as_bytes().len(), 6 * 3 * 4);
    }

    #[test]
    fn set_and_get_address_the_same_pixel() {
        let mut buffer = FrameBuffer::new(3, 2);
        buffer.set(2, 1, Color::WHITE);

        assert_eq!(buffer.get(2, 1), Color::WHITE);
        assert_eq!(buffer.rows().nth(1).unwrap()[2], Color::WHITE);
        assert_eq!(buffer.get(1, 2 - 1), Color::BLACK);
    }

    #[test]
    fn unaddressable_sizes_are_refused() {
        assert!(FrameBuffer::try_new(u32::MAX, u32::MAX).is_none());
        assert!(FrameBuffer::try_new(0, u32::MAX).is_some());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        FrameBuffer::new(2, 2).get(2, 0);
    }

    #[test]
    fn downsample_averages_blocks() {
        let mut buffer = FrameBuffer::new(4, 2);
        buffer.set(0, 0, Color::WHITE);
        buffer.set(1, 1, Color::WHITE);
        buffer.set(2, 0, Color::new(1.0, 0.0, 0.0));

        let downsampled = buffer.downsample(2);

        assert_eq!((downsampled.width(), downsampled.height()), (2, 1));
        assert_eq!(downsampled.get(0, 0), Color::new(0.5, 0.5, 0.5));
        assert_eq!(downsampled.get(1, 0), Color::new(0.25, 0.0, 0.0));
    }
}
