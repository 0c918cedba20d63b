//! Status Tool
//!
//! Runtime status of the calculator service, plus the usage guide handed to
//! assistants driving it.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Recipe Portion Calculator Instructions

The calculator holds ONE recipe at a time: a list of ingredient rows and two
portion counts. Every editing tool answers with the full recalculated summary.

## Ingredient Rows

Each row has text fields: name, quantity, unit, calories, protein, carbs, fat.

- Macro values are **per 100 units of quantity** (e.g. per 100 g).
- Non-numeric text is allowed while editing; it simply counts as missing.
- A row appears in the ingredient table and totals only once it has both a
  name and a quantity.
- Units are labels only. Nothing is converted between grams, cups, etc.

Tools: `add_ingredient`, `update_ingredient`, `remove_ingredient`.
The last remaining row cannot be removed.

## Portions

`set_portions` takes `original` (what the recipe makes, at least 1) and/or
`desired` (1 to 20). Values are truncated to whole numbers and clamped; the
response shows the effective values.

Adjusted quantity = quantity x desired / original, shown with up to 2 decimals.

## Nutrition

- Totals and per-serving values are shown with up to 1 decimal.
- Macro percentages use 4 kcal/g protein, 4 kcal/g carbs, 9 kcal/g fat against
  the recorded calories. They can add up to more or less than 100.
- No calories means no percentages.

## Ingredient Search

1. `search_ingredients` with at least 3 characters (shorter clears results)
2. Pick a result with `select_candidate` (row index + result index)
3. The row's name, unit, quantity and macros are replaced by the result

Only the newest search's results are ever shown.
"#;

/// Runtime status of the calculator service
#[derive(Debug, Clone, Serialize)]
pub struct PortionsStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub ingredient_rows: usize,
    pub search_requests: u64,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, ingredient_rows: usize, search_requests: u64) -> PortionsStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PortionsStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            ingredient_rows,
            search_requests,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_session_counters() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(3, 7);
        assert_eq!(status.ingredient_rows, 3);
        assert_eq!(status.search_requests, 7);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
