/// Represents a single RGBA8888 texel, as consumed by the block encoders
/// and produced by the block decoders.
///
/// The position of each channel inside a source pixel is decided by the
/// [`ChannelOrder`](crate::raster::ChannelOrder) of the raster it was read from;
/// once extracted, every texel uses these logical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Approximate luminance used to order texels when picking endpoints.
    ///
    /// Weights are `2R + 4G + B`, i.e. `R + 2G + 0.5B` scaled by two so the
    /// computation stays in integers. Only the ordering matters.
    #[inline(always)]
    pub const fn luminance(&self) -> i32 {
        ((self.r as i32) << 1) + ((self.g as i32) << 2) + self.b as i32
    }

    /// Returns this texel with the RGB channels of `other` and the alpha of `self`.
    #[inline]
    pub const fn with_rgb_of(self, other: Color8888) -> Self {
        Self::new(other.r, other.g, other.b, self.a)
    }

    /// Returns the texel as a `u32` with the alpha byte cleared, for colour-only comparisons.
    #[inline]
    pub const fn without_alpha(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 0])
    }
}
