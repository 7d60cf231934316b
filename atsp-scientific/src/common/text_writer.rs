#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use std::io::{Error, Write};

/// Writes tokens separated by a single space, starting a new indented line when the current one
/// would exceed `max_width` characters.
pub(crate) fn write_wrapped<W: Write>(
    writer: &mut W,
    tokens: impl Iterator<Item = String>,
    indent: &str,
    max_width: usize,
) -> Result<(), Error> {
    let mut width = 0;

    for token in tokens {
        if width > 0 && width + 1 + token.len() > max_width {
            writer.write_all(b"\n")?;
            width = 0;
        }

        if width == 0 {
            writer.write_all(indent.as_bytes())?;
            width = indent.len();
        } else {
            writer.write_all(b" ")?;
            width += 1;
        }

        writer.write_all(token.as_bytes())?;
        width += token.len();
    }

    if width > 0 {
        writer.write_all(b"\n")?;
    }

    Ok(())
}
