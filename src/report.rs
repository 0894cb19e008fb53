// ABOUTME: Output stream for scenario feedback and ship reports.
// ABOUTME: Supports human-readable text and JSON-lines modes.

use crate::ship::ShipReport;
use serde::Serialize;

/// Output mode for scenario feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly text.
    Text,
    /// JSON lines for scripting.
    Json,
}

/// Emits scenario events in the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a scenario progress line.
    pub fn step(&self, message: &str) {
        match self.mode {
            OutputMode::Text => println!("{message}"),
            OutputMode::Json => emit_stdout(&JsonEvent {
                event: "step",
                message: Some(message),
                label: None,
                report: None,
            }),
        }
    }

    /// Report a caught operation failure. The scenario continues after these.
    pub fn failure(&self, message: &str) {
        match self.mode {
            OutputMode::Text => eprintln!("error: {message}"),
            OutputMode::Json => emit_stderr(&JsonEvent {
                event: "failure",
                message: Some(message),
                label: None,
                report: None,
            }),
        }
    }

    /// Print a labelled ship report.
    pub fn ship(&self, label: &str, report: &ShipReport) {
        match self.mode {
            OutputMode::Text => {
                println!("{label}:");
                print!("{report}");
            }
            OutputMode::Json => emit_stdout(&JsonEvent {
                event: "ship_report",
                message: None,
                label: Some(label),
                report: Some(report),
            }),
        }
    }
}

fn emit_stdout(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

fn emit_stderr(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        eprintln!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ShipReport>,
}
