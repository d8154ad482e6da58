use anyhow::Result;
use std::io::Write;

pub fn execute<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "tinyfetch v{}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
