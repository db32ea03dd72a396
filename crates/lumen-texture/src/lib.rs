use glam::{UVec2, Vec2, Vec4};

mod image_loading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgba8Unorm,
    Rgb8Unorm,
}

impl TextureFormat {
    pub fn num_channels(&self) -> usize {
        match self {
            Self::Rgb8Unorm => 3,
            Self::Rgba8Unorm => 4,
        }
    }
}

pub struct TextureCreateDesc {
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Box<[u8]>,
}

/// Texels kept in system memory for sampling on the CPU.
#[derive(Debug)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    format: TextureFormat,
    data: Box<[u8]>,
}

impl Texture {
    /// # Panics
    /// When `data` does not hold exactly `width * height` texels of `format`.
    pub fn new(create_desc: TextureCreateDesc) -> Self {
        assert_eq!(
            create_desc.data.len(),
            (create_desc.width * create_desc.height) as usize * create_desc.format.num_channels(),
            "Texture data does not match its dimensions."
        );

        Self {
            name: create_desc
                .name
                .unwrap_or_else(|| "Unnamed Texture".to_owned()),
            width: create_desc.width,
            height: create_desc.height,
            format: create_desc.format,
            data: create_desc.data,
        }
    }

    /// Two-color checker pattern with `cells` squares along each axis.
    pub fn checkerboard(size: u32, cells: u32, a: [u8; 3], b: [u8; 3]) -> Self {
        let cell_size = (size / cells.max(1)).max(1);

        let mut data = Vec::with_capacity((size * size) as usize * 3);
        for y in 0..size {
            for x in 0..size {
                let color = if ((x / cell_size) + (y / cell_size)) % 2 == 0 {
                    a
                } else {
                    b
                };
                data.extend_from_slice(&color);
            }
        }

        Self::new(TextureCreateDesc {
            name: Some("Checkerboard".to_owned()),
            width: size,
            height: size,
            format: TextureFormat::Rgb8Unorm,
            data: data.into_boxed_slice(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn stride(&self) -> usize {
        self.format.num_channels()
    }

    /// Fetches a single texel, formats without alpha report an opaque texel.
    pub fn load(&self, id: UVec2) -> Vec4 {
        let pixel_id = (id.y * self.width + id.x) as usize;

        let mut result = Vec4::W;
        for i in 0..self.format.num_channels() {
            result[i] = self.data[pixel_id * self.format.num_channels() + i] as f32 / 255.0;
        }
        result
    }

    /// Bilinearly filtered sample, `uv` repeats outside of `[0, 1)`.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        if self.width == 0 || self.height == 0 {
            return Vec4::ZERO;
        }

        let x = (uv.x * self.width as f32).rem_euclid(self.width as f32);
        let y = (uv.y * self.height as f32).rem_euclid(self.height as f32);

        let tx = x.fract();
        let ty = y.fract();

        let x0 = (x as u32).min(self.width - 1);
        let y0 = (y as u32).min(self.height - 1);
        let x1 = (x0 + 1) % self.width;
        let y1 = (y0 + 1) % self.height;

        let c00 = self.load(UVec2::new(x0, y0));
        let c10 = self.load(UVec2::new(x1, y0));
        let c01 = self.load(UVec2::new(x0, y1));
        let c11 = self.load(UVec2::new(x1, y1));

        bilinear(tx, ty, c00, c10, c01, c11)
    }
}

fn bilinear(tx: f32, ty: f32, c00: Vec4, c10: Vec4, c01: Vec4, c11: Vec4) -> Vec4 {
    let a = c00 * (1.0 - tx) + c10 * tx;
    let b = c01 * (1.0 - tx) + c11 * tx;
    a * (1.0 - ty) + b * ty
}
