//! RGBA pixel values and channel distance metrics.
//!
//! Every matcher and the thresholder compare colors through the two metrics
//! here. Both ignore alpha.

/// RGBA color with 8-bit channels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color channel selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Maps a numeric selector (0 = red, 1 = green, 2 = blue) to a channel.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            _ => None,
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gray color `(v, v, v)` with the given alpha.
    pub const fn gray(v: u8, a: u8) -> Self {
        Self {
            r: v,
            g: v,
            b: v,
            a,
        }
    }

    pub fn get(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Channel by numeric selector; selectors outside `0..=2` read as 0.
    pub fn channel(self, index: usize) -> u8 {
        Channel::from_index(index).map_or(0, |ch| self.get(ch))
    }

    /// True when the red channel is neither pure black nor pure white.
    ///
    /// Binarized images only contain 0 or 255, so anything else marks an
    /// anti-aliased edge pixel.
    pub(crate) fn is_intermediate_gray(self) -> bool {
        self.r != 0 && self.r != 255
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self::rgba(value[0], value[1], value[2], value[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::rgb(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

/// Largest absolute per-channel difference over R, G and B.
#[inline]
pub fn max_channel_diff(c1: Color, c2: Color) -> u8 {
    c1.r.abs_diff(c2.r)
        .max(c1.g.abs_diff(c2.g))
        .max(c1.b.abs_diff(c2.b))
}

/// Sum of absolute per-channel differences over R, G and B.
#[inline]
pub fn sum_channel_diff(c1: Color, c2: Color) -> u16 {
    u16::from(c1.r.abs_diff(c2.r)) + u16::from(c1.g.abs_diff(c2.g)) + u16::from(c1.b.abs_diff(c2.b))
}

/// Exact R, G, B equality.
#[inline]
pub fn colors_equal(c1: Color, c2: Color) -> bool {
    c1.r == c2.r && c1.g == c2.g && c1.b == c2.b
}

#[cfg(test)]
mod tests {
    use super::{colors_equal, max_channel_diff, sum_channel_diff, Color};

    #[test]
    fn metrics_ignore_alpha() {
        let a = Color::rgba(10, 20, 30, 0);
        let b = Color::rgba(10, 20, 30, 255);
        assert_eq!(max_channel_diff(a, b), 0);
        assert_eq!(sum_channel_diff(a, b), 0);
        assert!(colors_equal(a, b));
    }

    #[test]
    fn metrics_match_hand_computed_values() {
        let a = Color::rgb(0, 100, 250);
        let b = Color::rgb(30, 90, 255);
        assert_eq!(max_channel_diff(a, b), 30);
        assert_eq!(sum_channel_diff(a, b), 45);
        assert_eq!(sum_channel_diff(Color::BLACK, Color::WHITE), 765);
    }

    #[test]
    fn out_of_range_channel_reads_zero() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.channel(0), 1);
        assert_eq!(c.channel(2), 3);
        assert_eq!(c.channel(3), 0);
    }

    #[test]
    fn intermediate_gray_uses_red_channel() {
        assert!(!Color::BLACK.is_intermediate_gray());
        assert!(!Color::WHITE.is_intermediate_gray());
        assert!(Color::rgb(128, 0, 0).is_intermediate_gray());
        assert!(!Color::rgb(255, 17, 17).is_intermediate_gray());
    }
}
