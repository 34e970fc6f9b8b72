use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter stock symbol: ";

/// Ask for a symbol on `out` and read one line from `input`.
///
/// End of input yields an empty string, which symbol parsing rejects.
pub fn read_symbol<R, W>(input: &mut R, out: &mut W) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
