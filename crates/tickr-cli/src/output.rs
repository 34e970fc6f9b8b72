use std::io::Write;

use tickr_core::Quote;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render<W: Write>(
    out: &mut W,
    quote: &Quote,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => render_text(out, quote)?,
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(quote)?
            } else {
                serde_json::to_string(quote)?
            };
            writeln!(out, "{payload}")?;
        }
    }

    Ok(())
}

fn render_text<W: Write>(out: &mut W, quote: &Quote) -> std::io::Result<()> {
    match &quote.name {
        Some(name) => writeln!(out, "{}  {name}", quote.symbol)?,
        None => writeln!(out, "{}", quote.symbol)?,
    }
    writeln!(out, "  Price:     ${:.2}", quote.price)?;
    writeln!(out, "  Open:      ${:.2}", quote.open)?;
    writeln!(out, "  Day High:  ${:.2}", quote.day_high)?;
    writeln!(out, "  Day Low:   ${:.2}", quote.day_low)?;
    if let (Some(change), Some(percent)) = (quote.change(), quote.change_percent()) {
        writeln!(out, "  Change:    {change:+.2} ({percent:+.2}%)")?;
    }
    if let Some(as_of) = quote.as_of {
        writeln!(out, "  As of:     {as_of}")?;
    }
    Ok(())
}
