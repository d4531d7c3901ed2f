use marrow_core::{MarrowError, Result};

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `RRGGBBAA` (or `RRGGBB`, opaque) hex.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || MarrowError::InvalidColor(hex.to_string());

        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |start: usize| -> Result<f32> {
            u8::from_str_radix(&hex[start..start + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| invalid())
        };

        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A draw-order entry binding an attachment to a bone.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotData {
    pub name: String,
    /// Index of the bone this slot follows.
    pub bone: usize,
    pub color: Color,
    /// Name of the attachment visible in the setup pose.
    pub attachment: Option<String>,
}

impl SlotData {
    #[must_use]
    pub fn new(name: impl Into<String>, bone: usize) -> Self {
        Self {
            name: name.into(),
            bone,
            color: Color::WHITE,
            attachment: None,
        }
    }
}
