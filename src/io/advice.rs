//! Advice file (spec §6): each line is a bc, the literal `suggestion:`, then
//! an integer item size — a hint the large-item heuristic's strategy search
//! may consult before falling back to full enumeration.

use crate::binconf::{parse_bc, BinConf};
use crate::error::{ParseError, Result};
use crate::zobrist::Zobrist;
use std::path::Path;

pub struct Advice {
    pub bc: BinConf,
    pub suggested_item: u8,
}

/// missing file is not an error (spec §7): returns an empty advice list.
pub fn load_advice(path: impl AsRef<Path>, z: &Zobrist) -> Result<Vec<Advice>> {
    let path = path.as_ref();
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Ok(Vec::new());
    };
    let mut advice = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        advice.push(parse_advice_line(line, line_no + 1, z)?);
    }
    Ok(advice)
}

fn parse_advice_line(line: &str, line_no: usize, z: &Zobrist) -> Result<Advice> {
    let (bc, rest) = parse_bc(line, line_no, z)?;
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix("suggestion:")
        .ok_or_else(|| ParseError::new("expected 'suggestion:'", line_no, rest))?;
    let suggested_item: u8 = rest
        .trim()
        .parse()
        .map_err(|_| ParseError::new("bad suggested item", line_no, rest))?;
    Ok(Advice { bc, suggested_item })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_advice() {
        let z = Zobrist::fixed();
        let advice = load_advice("/nonexistent/path/advice.txt", &z).unwrap();
        assert!(advice.is_empty());
    }

    #[test]
    fn parses_a_single_suggestion_line() {
        let z = Zobrist::fixed();
        let line = "[0 0 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0 suggestion: 9";
        let advice = parse_advice_line(line, 1, &z).unwrap();
        assert_eq!(advice.suggested_item, 9);
    }
}
