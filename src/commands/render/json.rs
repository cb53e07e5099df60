//! JSON lines output

use std::io::Write;

use serde::Serialize;

use compass_core::error::Result;

/// Write `value` as a single JSON line
pub fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
