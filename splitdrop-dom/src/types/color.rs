#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// Translucent color, composited over whatever lies beneath at draw time.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Parse `#rrggbb`. Returns None for anything else.
    pub fn hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Rgb { .. } => 1.0,
            Self::Rgba { a, .. } => a.clamp(0.0, 1.0),
        }
    }

    /// CSS notation, used in logs and element data.
    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("#{r:02x}{g:02x}{b:02x}"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }

    /// Resolve to an opaque color by compositing over `background`.
    pub fn over(&self, background: Rgb) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Rgba { r, g, b, .. } => composite(Rgb::new(r, g, b), background, self.alpha()),
        }
    }
}

// Blend in linear light; mixing gamma-encoded channels darkens the result.
fn composite(fg: Rgb, bg: Rgb, alpha: f32) -> Rgb {
    use palette::{LinSrgb, Srgb};

    let fg: LinSrgb = Srgb::new(fg.r, fg.g, fg.b)
        .into_format::<f32>()
        .into_linear();
    let bg: LinSrgb = Srgb::new(bg.r, bg.g, bg.b)
        .into_format::<f32>()
        .into_linear();
    let mixed = fg * alpha + bg * (1.0 - alpha);
    let (r, g, b) = Srgb::<f32>::from_linear(mixed)
        .into_format::<u8>()
        .into_components();

    Rgb::new(r, g, b)
}
