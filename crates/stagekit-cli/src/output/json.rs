//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use stagekit_core::ArchiveReport;
use stagekit_core::CopyReport;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_copy_result(&self, target_dir: &Path, report: &CopyReport) -> Result<()> {
        #[derive(Serialize)]
        struct CopyOutput {
            target_dir: String,
            files_copied: usize,
            bytes_copied: u64,
            duration_ms: u128,
        }

        let data = CopyOutput {
            target_dir: target_dir.display().to_string(),
            files_copied: report.files_copied,
            bytes_copied: report.bytes_copied,
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("copy", data);
        Self::output(&output)
    }

    fn format_pack_result(&self, output_path: &Path, report: &ArchiveReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput {
            output_path: String,
            files_added: usize,
            bytes_written: u64,
            duration_ms: u128,
        }

        let data = PackOutput {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, message: &str) {
        #[derive(Serialize)]
        struct SuccessData {
            message: String,
        }

        let output = JsonOutput::success(
            "unknown",
            SuccessData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
