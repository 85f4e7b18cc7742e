//! Fault statistics for a simulation run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::replacer::Access;
use crate::simulation::TraceEvent;

/// Counters describing how a policy fared over a reference sequence.
///
/// `evictions` only counts faults that displaced a resident page, so
/// `faults - evictions` is the number of compulsory (cold) misses that
/// landed in an empty slot.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let stats = FaultStats { hits: 3, faults: 1, evictions: 0 };
/// assert_eq!(stats.references(), 4);
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultStats {
    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that replaced a resident page.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the statistics of a recorded trace.
    pub fn from_events(events: &[TraceEvent]) -> Self {
        let mut stats = Self::new();
        for event in events {
            if !event.fault {
                stats.hits += 1;
            } else {
                stats.faults += 1;
                if event.evicted.is_some() {
                    stats.evictions += 1;
                }
            }
        }
        stats
    }

    /// Count one reference outcome.
    pub fn record(&mut self, access: &Access) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted, .. } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Total references seen.
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0). Zero when nothing was referenced.
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FrameId, PageId};

    #[test]
    fn test_stats_new() {
        let stats = FaultStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = FaultStats::new();

        stats.record(&Access::Fault {
            frame_id: FrameId::new(0),
            evicted: None,
        });
        stats.record(&Access::Hit);
        stats.record(&Access::Fault {
            frame_id: FrameId::new(0),
            evicted: Some(PageId::new(3)),
        });
        stats.record(&Access::Hit);

        assert_eq!(stats.hits, 2);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_stats_from_events() {
        let events = vec![
            TraceEvent {
                step: 0,
                page: PageId::new(1),
                frames: vec![Some(PageId::new(1))],
                fault: true,
                evicted: None,
            },
            TraceEvent {
                step: 1,
                page: PageId::new(1),
                frames: vec![Some(PageId::new(1))],
                fault: false,
                evicted: None,
            },
            TraceEvent {
                step: 2,
                page: PageId::new(2),
                frames: vec![Some(PageId::new(2))],
                fault: true,
                evicted: Some(PageId::new(1)),
            },
        ];

        let stats = FaultStats::from_events(&events);
        assert_eq!(
            stats,
            FaultStats {
                hits: 1,
                faults: 2,
                evictions: 1
            }
        );
    }

    #[test]
    fn test_stats_display() {
        let stats = FaultStats {
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
