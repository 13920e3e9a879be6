//! Copy command implementation.

use crate::cli::CopyArgs;
use crate::error::convert_stage_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use stagekit_core::copy_by_suffix;

pub fn execute(args: &CopyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = copy_by_suffix(&args.source_dir, &args.suffix, &args.target_dir)
        .map_err(|e| convert_stage_error(e, "copy from", &args.source_dir))?;

    formatter.format_copy_result(&args.target_dir, &report)
}
