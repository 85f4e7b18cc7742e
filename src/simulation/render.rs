//! Renderers for simulation results.
//!
//! Every renderer is a pure function of a [`SimulationResult`]; none of them
//! reach into policy state.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::common::{FrameId, Result};
use crate::simulation::SimulationResult;

const PAGE_COLUMN: usize = 7;
const FRAME_COLUMN: usize = 10;

/// Render a result as a fixed-width text table.
///
/// ```text
/// Page Faults: 2
///
/// FIFO Algorithm
///
/// Pages: [1, 2, 1]
///
/// Page   Frame1    Frame2    Fault?
/// 1      1         -         Yes
/// 2      1         2         Yes
/// 1      1         2         No
/// ```
pub fn table(result: &SimulationResult) -> String {
    let mut out = String::new();
    let pages: Vec<String> = result.pages().map(|p| p.to_string()).collect();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Page Faults: {}\n", result.total_faults);
    let _ = writeln!(out, "{} Algorithm\n", result.policy);
    let _ = writeln!(out, "Pages: [{}]\n", pages.join(", "));

    let mut header = format!("{:<width$}", "Page", width = PAGE_COLUMN);
    for i in 0..result.capacity {
        let _ = write!(header, "{:<width$}", FrameId::new(i).to_string(), width = FRAME_COLUMN);
    }
    header.push_str("Fault?");
    out.push_str(&header);
    out.push('\n');

    for event in &result.steps {
        let mut row = format!("{:<width$}", event.page.to_string(), width = PAGE_COLUMN);
        for slot in &event.frames {
            let cell = slot.map_or_else(|| "-".to_string(), |p| p.to_string());
            let _ = write!(row, "{:<width$}", cell, width = FRAME_COLUMN);
        }
        row.push_str(if event.fault { "Yes" } else { "No" });
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Render a result as pretty-printed JSON.
pub fn json(result: &SimulationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render several results as a JSON array.
pub fn json_all(results: &[SimulationResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// One line per policy: fault count, evictions and hit rate.
pub fn summary(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    for result in results {
        let stats = result.stats();
        let _ = writeln!(
            out,
            "{:<6}faults: {:<6}evictions: {:<6}hit rate: {:.2}%",
            result.policy.name(),
            result.total_faults,
            stats.evictions,
            stats.hit_rate() * 100.0
        );
    }
    out
}

/// Write a rendered report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report)?;
    log::info!("wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PolicyKind;
    use crate::simulation::run_simulation;
    use crate::workload::ReferenceSequence;

    #[test]
    fn test_table_layout() {
        let refs = ReferenceSequence::from(vec![1, 2, 1]);
        let result = run_simulation(PolicyKind::Fifo, &refs, 2).unwrap();
        let text = table(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Page Faults: 2");
        assert_eq!(lines[2], "FIFO Algorithm");
        assert_eq!(lines[4], "Pages: [1, 2, 1]");
        assert_eq!(lines[6], "Page   Frame1    Frame2    Fault?");
        assert_eq!(lines[7], "1      1         -         Yes");
        assert_eq!(lines[8], "2      1         2         Yes");
        assert_eq!(lines[9], "1      1         2         No");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_table_empty_sequence() {
        let result = run_simulation(PolicyKind::Optimal, &[], 1).unwrap();
        let text = table(&result);

        assert!(text.starts_with("Page Faults: 0\n"));
        assert!(text.contains("Pages: []"));
        assert!(text.ends_with("Page   Frame1    Fault?\n"));
    }

    #[test]
    fn test_json_roundtrip() {
        let refs = ReferenceSequence::from(vec![3, 3, 4]);
        let result = run_simulation(PolicyKind::Lru, &refs, 1).unwrap();

        let text = json(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
        assert!(text.contains("\"totalFaults\": 2"));
    }

    #[test]
    fn test_summary_lists_every_policy() {
        let refs = ReferenceSequence::from(vec![1, 2, 3, 1]);
        let results: Vec<_> = PolicyKind::ALL
            .iter()
            .map(|&p| run_simulation(p, &refs, 2).unwrap())
            .collect();

        let text = summary(&results);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().starts_with("FIFO"));
        assert!(text.contains("OPT"));
    }
}
