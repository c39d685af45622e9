use crate::prompts::Prompt;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write each prompt as a top-level Org heading, one per line, in order.
///
/// Text is written verbatim, so a prompt containing newlines spans several lines.
pub fn write_outline<W: Write>(writer: &mut W, prompts: &[Prompt]) -> std::io::Result<()> {
    for prompt in prompts {
        writeln!(writer, "* {}", prompt.text())?;
    }
    Ok(())
}

/// Create or overwrite `output_file` with the outline for `prompts`.
pub fn export_prompts(prompts: &[Prompt], output_file: &Path) -> Result<()> {
    let file = File::create(output_file)
        .wrap_err_with(|| format!("Failed to create: {}", output_file.display()))?;
    let mut writer = BufWriter::new(file);
    write_outline(&mut writer, prompts)
        .wrap_err_with(|| format!("Failed to write: {}", output_file.display()))?;
    writer.flush().wrap_err("Failed to flush org file")?;
    Ok(())
}
