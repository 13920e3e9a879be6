//! Pack command implementation.
//!
//! Owns the archive writer's lifecycle: opens the output file, hands an
//! entry sink to the core archiver, and finalizes the zip afterwards.

use crate::cli::PackArgs;
use crate::error::convert_stage_error;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use stagekit_core::archive::ZipSink;
use stagekit_core::archive_tree;
use std::fs::File;
use zip::ZipWriter;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "output file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let file = File::create(&args.output)
        .with_context(|| format!("cannot create output file: {}", args.output.display()))?;
    let mut writer = ZipWriter::new(file);

    let report = {
        let mut sink = ZipSink::new(&mut writer);
        if let Some(level) = args.compression_level {
            sink = sink.with_compression_level(level);
        }
        archive_tree(&args.source_dir, &mut sink)
            .map_err(|e| convert_stage_error(e, "pack", &args.source_dir))?
    };

    writer
        .finish()
        .with_context(|| format!("failed to finalize archive: {}", args.output.display()))?;

    formatter.format_pack_result(&args.output, &report)
}
