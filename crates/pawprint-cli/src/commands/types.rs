//! Types command for listing loggable entry types.

use std::io::Write;

use anyhow::Result;

use pawprint_core::EntryType;

pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{:<6}  {:<5}  ICON", "TYPE", "GLYPH")?;
    for kind in EntryType::ALL {
        let asset = kind.asset();
        writeln!(writer, "{:<6}  {}     {}", kind, asset.glyph, asset.icon)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_lists_every_variant() {
        let mut output = Vec::new();
        run(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), EntryType::ALL.len() + 1);
        for kind in EntryType::ALL {
            assert!(output.contains(kind.as_str()));
            assert!(output.contains(kind.asset().icon));
        }
    }
}
