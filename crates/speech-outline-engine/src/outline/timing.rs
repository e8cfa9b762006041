use serde::{Deserialize, Serialize};

use super::model::Speech;

/// Session timing recorded against one main point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTiming {
    pub timestamp: Option<u64>,
    pub previous_timestamp: Option<u64>,
}

impl Speech {
    /// Copies session timings onto a freshly parsed speech by position.
    ///
    /// Timing `i` lands on `main_points[i]`. Extra timings are ignored and
    /// points without a timing keep whatever they already had.
    pub fn overlay_timings(&mut self, timings: &[PointTiming]) {
        for (point, timing) in self.main_points.iter_mut().zip(timings) {
            point.timestamp = timing.timestamp;
            point.previous_timestamp = timing.previous_timestamp;
        }
    }

    /// Current timings of the main points, in order.
    pub fn timings(&self) -> Vec<PointTiming> {
        self.main_points
            .iter()
            .map(|point| PointTiming {
                timestamp: point.timestamp,
                previous_timestamp: point.previous_timestamp,
            })
            .collect()
    }
}
