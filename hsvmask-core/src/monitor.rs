//! Change detection for the tuner's diagnostic output.

use crate::ChannelRange;

/// Remembers the last reported range and reports only when it changes.
///
/// Starts from an all-zero range, so the first observation of any non-zero
/// range is reported.
#[derive(Debug, Clone)]
pub struct RangeMonitor {
    previous: ChannelRange,
}

impl RangeMonitor {
    /// Creates a monitor that has not reported anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: ChannelRange::zeroed(),
        }
    }

    /// Returns a report line if `current` differs from the previous observation.
    pub fn observe(&mut self, current: &ChannelRange) -> Option<String> {
        if *current == self.previous {
            return None;
        }
        self.previous = *current;
        Some(current.to_string())
    }

    /// The most recently reported range.
    #[must_use]
    pub fn last_reported(&self) -> &ChannelRange {
        &self.previous
    }
}

impl Default for RangeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Channel;

    #[test]
    fn test_reports_once_per_change() {
        let mut monitor = RangeMonitor::new();
        let mut range = ChannelRange::full();

        assert!(monitor.observe(&range).is_some());
        assert!(monitor.observe(&range).is_none());
        assert!(monitor.observe(&range).is_none());

        range.set_lower(Channel::Saturation, 40);
        let line = monitor.observe(&range).unwrap();
        assert!(line.contains("sMin = 40"));
        assert!(monitor.observe(&range).is_none());
        assert_eq!(monitor.last_reported(), &range);
    }

    #[test]
    fn test_zero_range_is_not_reported_initially() {
        let mut monitor = RangeMonitor::default();
        assert!(monitor.observe(&ChannelRange::zeroed()).is_none());
    }

    #[test]
    fn test_change_and_revert_are_both_reported() {
        let mut monitor = RangeMonitor::new();
        let original = ChannelRange::full();
        let mut changed = original;
        changed.set_upper(Channel::Hue, 90);

        let reports: Vec<_> = [original, changed, changed, original]
            .iter()
            .map(|r| monitor.observe(r).is_some())
            .collect();
        assert_eq!(reports, vec![true, true, false, true]);
    }
}
