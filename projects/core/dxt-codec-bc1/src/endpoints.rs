//! # Endpoint Selection
//!
//! Picks the two colours a DXT1/DXT5 block interpolates between, along with the alpha
//! extrema used by DXT5.
//!
//! Two selectors are available:
//!
//! - [`EndpointSelection::Luminance`] (default): the texels with the lowest and highest
//!   approximate luminance (`2R + 4G + B`) become the endpoints. Only texels with a
//!   non-zero alpha take part, so the colour of fully transparent texels never leaks into
//!   the palette.
//! - [`EndpointSelection::BoundingBox`]: per-channel minimum and maximum over all 16 texels,
//!   each inset towards the other by 1/16th of the channel range.
//!
//! In both cases the alpha extrema cover all 16 texels, including fully transparent ones.
//!
//! After selection the colours are ordered so that the 5:6:5 packing of `max` is never
//! smaller than the packing of `min`; the DXT1 index assignment relies on this.
//!
//! ```
//! use dxt_codec_bc1::endpoints::{select_endpoints, EndpointSelection};
//! use dxt_codec_common::color_8888::Color8888;
//! use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let mut block = Decoded4x4Block::new(Color8888::new(10, 10, 10, 255));
//! block.set_pixel(3, 3, Color8888::new(200, 200, 200, 128));
//!
//! let endpoints = select_endpoints(&block, EndpointSelection::Luminance);
//! assert_eq!(endpoints.max, Color8888::new(200, 200, 200, 255));
//! assert_eq!(endpoints.min, Color8888::new(10, 10, 10, 128));
//! ```

use derive_enum_all_values::AllValues;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// The algorithm used to pick the endpoint colours of a block.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum EndpointSelection {
    /// Lowest and highest luminance texel, ignoring fully transparent texels.
    Luminance = 0,
    /// Per-channel bounding box, inset by 1/16th of its extent.
    BoundingBox = 1,
}

impl Default for EndpointSelection {
    fn default() -> Self {
        Self::Luminance
    }
}

/// The endpoints of a block.
///
/// The `r`, `g` and `b` fields of `min` and `max` are the endpoint colours; the `a` fields
/// are the alpha extrema, which are tracked independently of the colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorEndpoints {
    /// The low endpoint colour, with the minimum alpha.
    pub min: Color8888,
    /// The high endpoint colour, with the maximum alpha.
    pub max: Color8888,
}

impl ColorEndpoints {
    /// Creates endpoints from two colours, ordering their RGB by 5:6:5 packing.
    /// Alpha values stay where they were passed in.
    #[inline]
    pub fn new(min: Color8888, max: Color8888) -> Self {
        let mut endpoints = Self { min, max };
        endpoints.order_by_565();
        endpoints
    }

    /// The high endpoint quantized to 5:6:5.
    #[inline]
    pub fn max_565(&self) -> Color565 {
        Color565::from_color_8888(self.max)
    }

    /// The low endpoint quantized to 5:6:5.
    #[inline]
    pub fn min_565(&self) -> Color565 {
        Color565::from_color_8888(self.min)
    }

    /// Swaps the RGB channels of the endpoints if `max` would pack below `min`.
    #[inline]
    fn order_by_565(&mut self) {
        if self.max_565() < self.min_565() {
            let (min, max) = (self.min, self.max);
            self.min = min.with_rgb_of(max);
            self.max = max.with_rgb_of(min);
        }
    }
}

/// Selects the endpoints of a block with the given algorithm.
#[inline]
pub fn select_endpoints(block: &Decoded4x4Block, selection: EndpointSelection) -> ColorEndpoints {
    match selection {
        EndpointSelection::Luminance => luminance_endpoints(block),
        EndpointSelection::BoundingBox => bounding_box_endpoints(block),
    }
}

/// Selects the texels with the lowest and highest approximate luminance as endpoints.
///
/// Ties keep the first texel in row-major order. Texels with an alpha of 0 are skipped;
/// if every texel is transparent both colours are black.
pub fn luminance_endpoints(block: &Decoded4x4Block) -> ColorEndpoints {
    let mut min = Color8888::new(0, 0, 0, 255);
    let mut max = Color8888::new(0, 0, 0, 0);
    let mut min_luminance = i32::MAX;
    let mut max_luminance = -1;

    for texel in block.pixels {
        min.a = min.a.min(texel.a);
        max.a = max.a.max(texel.a);

        if texel.a == 0 {
            continue;
        }

        let luminance = texel.luminance();
        if luminance > max_luminance {
            max_luminance = luminance;
            max = max.with_rgb_of(texel);
        }
        if luminance < min_luminance {
            min_luminance = luminance;
            min = min.with_rgb_of(texel);
        }
    }

    ColorEndpoints::new(min, max)
}

/// Selects per-channel extrema, with the colour channels inset by 1/16th of their range.
pub fn bounding_box_endpoints(block: &Decoded4x4Block) -> ColorEndpoints {
    let mut min = Color8888::new(255, 255, 255, 255);
    let mut max = Color8888::new(0, 0, 0, 0);

    for texel in block.pixels {
        min.r = min.r.min(texel.r);
        min.g = min.g.min(texel.g);
        min.b = min.b.min(texel.b);
        min.a = min.a.min(texel.a);
        max.r = max.r.max(texel.r);
        max.g = max.g.max(texel.g);
        max.b = max.b.max(texel.b);
        max.a = max.a.max(texel.a);
    }

    // inset never crosses over, as it is at most 1/16th of (max - min)
    let inset = |min: &mut u8, max: &mut u8| {
        let amount = (*max - *min) >> 4;
        *min += amount;
        *max -= amount;
    };
    inset(&mut min.r, &mut max.r);
    inset(&mut min.g, &mut max.g);
    inset(&mut min.b, &mut max.b);

    ColorEndpoints::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn luminance_picks_darkest_and_brightest() {
        let endpoints = luminance_endpoints(&grey_ramp());
        assert_eq!(endpoints.min, Color8888::new(0, 0, 0, 255));
        assert_eq!(endpoints.max, Color8888::new(255, 255, 255, 255));
    }

    #[test]
    fn luminance_ties_keep_first_texel() {
        // Same luminance (2R + 4G + B = 200), different colours.
        let mut block = Decoded4x4Block::new(Color8888::new(0, 50, 0, 255));
        block.set_pixel(0, 0, Color8888::new(100, 0, 0, 255));

        let endpoints = luminance_endpoints(&block);
        assert_eq!(endpoints.min.without_alpha(), Color8888::new(100, 0, 0, 0).without_alpha());
        assert_eq!(endpoints.max.without_alpha(), Color8888::new(100, 0, 0, 0).without_alpha());
    }

    #[test]
    fn transparent_texels_do_not_affect_colour() {
        let mut block = Decoded4x4Block::new(Color8888::new(100, 100, 100, 255));
        block.set_pixel(1, 1, Color8888::new(255, 255, 255, 0));
        block.set_pixel(2, 2, Color8888::new(0, 0, 0, 0));

        let endpoints = luminance_endpoints(&block);
        assert_eq!(endpoints.min, Color8888::new(100, 100, 100, 0));
        assert_eq!(endpoints.max, Color8888::new(100, 100, 100, 255));
    }

    #[test]
    fn fully_transparent_block_has_black_endpoints() {
        let block = Decoded4x4Block::new(Color8888::new(90, 180, 45, 0));
        let endpoints = luminance_endpoints(&block);
        assert_eq!(endpoints.min, Color8888::new(0, 0, 0, 0));
        assert_eq!(endpoints.max, Color8888::new(0, 0, 0, 0));
        assert_eq!(endpoints.max_565().raw_value(), 0);
    }

    #[test]
    fn endpoints_are_ordered_by_565_packing() {
        // Pure blue is brighter than this dark red in luminance, but packs lower.
        let mut block = Decoded4x4Block::new(Color8888::new(0, 0, 255, 200));
        block.set_pixel(0, 0, Color8888::new(64, 0, 0, 10));

        let endpoints = luminance_endpoints(&block);
        assert!(endpoints.max_565() >= endpoints.min_565());
        assert_eq!(endpoints.max, Color8888::new(64, 0, 0, 200));
        assert_eq!(endpoints.min, Color8888::new(0, 0, 255, 10));
    }

    #[rstest]
    #[case(0, 255, 15, 240)]
    #[case(100, 115, 100, 115)]
    #[case(0, 31, 1, 30)]
    #[case(50, 50, 50, 50)]
    fn bounding_box_insets_by_one_sixteenth(
        #[case] low: u8,
        #[case] high: u8,
        #[case] expected_low: u8,
        #[case] expected_high: u8,
    ) {
        let mut block = Decoded4x4Block::new(Color8888::new(low, low, low, 255));
        block.set_pixel(3, 0, Color8888::new(high, high, high, 7));

        let endpoints = bounding_box_endpoints(&block);
        assert_eq!(
            endpoints.min,
            Color8888::new(expected_low, expected_low, expected_low, 7)
        );
        assert_eq!(
            endpoints.max,
            Color8888::new(expected_high, expected_high, expected_high, 255)
        );
    }

    #[test]
    fn selection_dispatches() {
        let block = grey_ramp();
        assert_eq!(
            select_endpoints(&block, EndpointSelection::Luminance),
            luminance_endpoints(&block)
        );
        assert_eq!(
            select_endpoints(&block, EndpointSelection::BoundingBox),
            bounding_box_endpoints(&block)
        );
        assert_eq!(EndpointSelection::all_values().len(), 2);
        assert_eq!(EndpointSelection::default(), EndpointSelection::Luminance);
    }
}
