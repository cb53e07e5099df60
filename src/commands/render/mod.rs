//! Output rendering for command replies

pub mod human;
pub mod json;

use std::io::Write;

use compass_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::session::Reply;

pub fn write_reply<W: Write>(out: &mut W, format: OutputFormat, reply: &Reply) -> Result<()> {
    match format {
        OutputFormat::Human => human::write_response(out, &reply.response)?,
        OutputFormat::Json => json::write_line(out, reply)?,
    }
    Ok(())
}
