//! Channel ranges for HSV thresholding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One channel of the 8-bit HSV representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Channel {
    /// Hue, stored as degrees / 2.
    Hue,
    /// Saturation.
    Saturation,
    /// Value (brightness).
    Value,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Value];

    /// Largest legal value of this channel.
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Channel::Hue => 179,
            Channel::Saturation | Channel::Value => u8::MAX,
        }
    }

    /// Index of this channel in an `[h, s, v]` triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Channel::Hue => 0,
            Channel::Saturation => 1,
            Channel::Value => 2,
        }
    }

    /// Single-letter label used in control names ("H", "S", "V").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Value => "V",
        }
    }

    fn clamp(self, value: u8) -> u8 {
        value.min(self.max())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Hue => write!(f, "hue"),
            Channel::Saturation => write!(f, "saturation"),
            Channel::Value => write!(f, "value"),
        }
    }
}

/// Inclusive accept region in HSV space: a low and a high bound per channel.
///
/// Bounds are always clamped to their channel's legal range. A low bound
/// above its high bound is allowed and makes the range empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelRange {
    lower: [u8; 3],
    upper: [u8; 3],
}

impl ChannelRange {
    /// Creates a range from `[h, s, v]` bounds, clamping each component.
    #[must_use]
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        let mut range = Self::zeroed();
        for channel in Channel::ALL {
            range.set_lower(channel, lower[channel.index()]);
            range.set_upper(channel, upper[channel.index()]);
        }
        range
    }

    /// Range accepting every pixel.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            lower: [0, 0, 0],
            upper: [
                Channel::Hue.max(),
                Channel::Saturation.max(),
                Channel::Value.max(),
            ],
        }
    }

    /// All six bounds at zero.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            lower: [0; 3],
            upper: [0; 3],
        }
    }

    /// Builds a range from slices of components, as parsed from the command line.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] unless both slices have exactly three components.
    pub fn from_components(lower: &[u8], upper: &[u8]) -> Result<Self> {
        let lower: [u8; 3] = lower.try_into().map_err(|_| {
            Error::ConfigError(format!(
                "lower bound needs 3 components (h,s,v), got {}",
                lower.len()
            ))
        })?;
        let upper: [u8; 3] = upper.try_into().map_err(|_| {
            Error::ConfigError(format!(
                "upper bound needs 3 components (h,s,v), got {}",
                upper.len()
            ))
        })?;
        Ok(Self::new(lower, upper))
    }

    /// Low bound of `channel`.
    #[must_use]
    pub fn lower(&self, channel: Channel) -> u8 {
        self.lower[channel.index()]
    }

    /// High bound of `channel`.
    #[must_use]
    pub fn upper(&self, channel: Channel) -> u8 {
        self.upper[channel.index()]
    }

    /// Low bounds as an `[h, s, v]` triple.
    #[must_use]
    pub fn lower_bounds(&self) -> [u8; 3] {
        self.lower
    }

    /// High bounds as an `[h, s, v]` triple.
    #[must_use]
    pub fn upper_bounds(&self) -> [u8; 3] {
        self.upper
    }

    /// Sets the low bound of `channel`, clamped to the channel maximum.
    pub fn set_lower(&mut self, channel: Channel, value: u8) {
        self.lower[channel.index()] = channel.clamp(value);
    }

    /// Sets the high bound of `channel`, clamped to the channel maximum.
    pub fn set_upper(&mut self, channel: Channel, value: u8) {
        self.upper[channel.index()] = channel.clamp(value);
    }

    /// Returns true if every component of `hsv` lies within its bounds.
    #[inline]
    #[must_use]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }

    /// Returns true if some low bound exceeds its high bound, so nothing matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.lower[i] > self.upper[i])
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h_min, s_min, v_min] = self.lower;
        let [h_max, s_max, v_max] = self.upper;
        write!(
            f,
            "(hMin = {h_min}, sMin = {s_min}, vMin = {v_min}), \
             (hMax = {h_max}, sMax = {s_max}, vMax = {v_max})"
        )
    }
}
