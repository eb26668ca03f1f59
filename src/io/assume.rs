//! Assumption file (spec §6): each line is a bc, the literal `assumption:`,
//! then `adv` or `alg` — forces generating-mode search to treat that vertex
//! as already decided for the named player without expanding it further.

use crate::binconf::{parse_bc, BinConf};
use crate::error::{ParseError, Result};
use crate::zobrist::Zobrist;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assumption {
    Adv,
    Alg,
}

pub struct Assumed {
    pub bc: BinConf,
    pub player: Assumption,
}

/// missing file is not an error (spec §7): returns an empty assumption list.
pub fn load_assumptions(path: impl AsRef<Path>, z: &Zobrist) -> Result<Vec<Assumed>> {
    let path = path.as_ref();
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Ok(Vec::new());
    };
    let mut assumptions = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        assumptions.push(parse_assumption_line(line, line_no + 1, z)?);
    }
    Ok(assumptions)
}

fn parse_assumption_line(line: &str, line_no: usize, z: &Zobrist) -> Result<Assumed> {
    let (bc, rest) = parse_bc(line, line_no, z)?;
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix("assumption:")
        .ok_or_else(|| ParseError::new("expected 'assumption:'", line_no, rest))?;
    let player = match rest.trim() {
        "adv" => Assumption::Adv,
        "alg" => Assumption::Alg,
        other => return Err(ParseError::new("expected 'adv' or 'alg'", line_no, other).into()),
    };
    Ok(Assumed { bc, player })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_assumptions() {
        let z = Zobrist::fixed();
        let assumptions = load_assumptions("/nonexistent/path/assume.txt", &z).unwrap();
        assert!(assumptions.is_empty());
    }

    #[test]
    fn parses_adv_and_alg_lines() {
        let z = Zobrist::fixed();
        let adv_line = "[0 0 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0 assumption: adv";
        let alg_line = "[0 0 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0 assumption: alg";
        assert_eq!(parse_assumption_line(adv_line, 1, &z).unwrap().player, Assumption::Adv);
        assert_eq!(parse_assumption_line(alg_line, 1, &z).unwrap().player, Assumption::Alg);
    }

    #[test]
    fn rejects_unknown_player_token() {
        let z = Zobrist::fixed();
        let line = "[0 0 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0 assumption: queen";
        assert!(parse_assumption_line(line, 1, &z).is_err());
    }
}
