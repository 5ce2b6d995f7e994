use std::time::Duration;

/// An immutable playback position sample, published by the synchronizer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    pub elapsed: Duration,
    pub total: Duration,
}

impl Progress {
    /// Build a snapshot from raw engine readings.
    ///
    /// Returns `None` for a negative or NaN `elapsed` (nothing to show); a bad
    /// `total` is coerced to zero.
    pub fn from_seconds(elapsed: f64, total: f64) -> Option<Self> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return None;
        }
        let total = if total.is_finite() && total >= 0.0 {
            total
        } else {
            0.0
        };
        Some(Self {
            elapsed: Duration::from_secs_f64(elapsed),
            total: Duration::from_secs_f64(total),
        })
    }

    /// `MM:SS / MM:SS`, truncated to whole seconds.
    pub fn label(&self) -> String {
        format!("{} / {}", format_mmss(self.elapsed), format_mmss(self.total))
    }

    /// Raw elapsed seconds for a progress gauge.
    pub fn position_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Elapsed share of the track in `[0, 1]`; zero when the length is unknown.
    pub fn ratio(&self) -> f64 {
        let total = self.total.as_secs_f64();
        if total <= 0.0 {
            0.0
        } else {
            (self.position_seconds() / total).clamp(0.0, 1.0)
        }
    }
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
