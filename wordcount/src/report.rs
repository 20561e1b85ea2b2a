//! Side-by-side timing of the search implementations.
//!
//! Output goes to a caller-supplied writer so the binary, tests and
//! benchmarks can each decide where it lands.

use crate::bench::Benchmark;
use crate::search::{search_with, SearchMode};
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

/// Width of the `"<Label>:"` column in text output.
const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// One timed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub mode: SearchMode,
    #[serde(flatten)]
    pub bench: Benchmark<usize>,
}

impl Run {
    pub fn count(&self) -> usize {
        self.bench.result
    }
}

/// Time `term` against `corpus` once per mode, in order.
pub fn run_all(corpus: &str, term: &str, modes: &[SearchMode]) -> Vec<Run> {
    modes
        .iter()
        .map(|&mode| {
            let bench = Benchmark::of(|| search_with(corpus, term, mode));
            info!(
                %mode,
                count = bench.result,
                elapsed_us = bench.elapsed.as_micros() as u64,
                "search finished"
            );
            Run { mode, bench }
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, runs: &[Run], format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            for run in runs {
                let label = format!("{}:", run.mode.label());
                writeln!(out, "{:<width$}{}", label, run.bench, width = LABEL_WIDTH)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, runs)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Run every mode and write the report; returns the runs for further checks.
pub fn compare<W: Write>(
    corpus: &str,
    term: &str,
    modes: &[SearchMode],
    format: ReportFormat,
    out: &mut W,
) -> io::Result<Vec<Run>> {
    let runs = run_all(corpus, term, modes);
    write_report(out, &runs, format)?;
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fixed_run(mode: SearchMode, count: usize, nanos: u32) -> Run {
        Run {
            mode,
            bench: Benchmark::new(count, Duration::new(0, nanos)),
        }
    }

    #[test]
    fn test_text_report_aligns_labels() {
        let runs = vec![
            fixed_run(SearchMode::Sequential, 3, 2_000_500),
            fixed_run(SearchMode::Parallel, 3, 40_000),
        ];
        let mut out = Vec::new();
        write_report(&mut out, &runs, ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Sequential:    3 [2ms, 500ns]\nParallel:      3 [40μs]\n");
    }

    #[test]
    fn test_json_report() {
        let runs = vec![fixed_run(SearchMode::Parallel, 7, 9)];
        let mut out = Vec::new();
        write_report(&mut out, &runs, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "mode": "parallel", "result": 7, "elapsed_ns": 9 }])
        );
    }

    #[test]
    fn test_compare_runs_every_mode() {
        let corpus = "0,1,2,3,Thee thee thee,\n";
        let mut out = Vec::new();
        let runs = compare(corpus, "thee", &SearchMode::ALL, ReportFormat::Text, &mut out).unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.count() == 3));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Sequential:    3 ["));
        assert!(text.contains("\nParallel:      3 ["));
    }
}
