//! Textual bc format (spec §6): `[l1 l2 … lm] (i1 i2 … iS) last_item`,
//! whitespace-separated, brackets literal. Used by `--root`, and as the
//! per-line payload of the advice/assumption files (`io::advice`,
//! `io::assume`).

use crate::binconf::BinConf;
use crate::config::{M, S};
use crate::error::ParseError;
use crate::zobrist::Zobrist;

/// parse one `[l1 l2 … lm] (i1 i2 … iS) last_item` token sequence, consuming
/// it from the front of `rest` and returning what follows. `line` is only
/// used to build a location-identifying `ParseError` (spec §7).
pub fn parse_bc<'a>(rest: &'a str, line: usize, z: &Zobrist) -> Result<(BinConf, &'a str), ParseError> {
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('[')
        .ok_or_else(|| ParseError::new("missing '[' in bc", line, rest))?;
    let (loads_str, rest) = rest
        .split_once(']')
        .ok_or_else(|| ParseError::new("missing ']' in bc", line, rest))?;
    let loads: Vec<u8> = loads_str
        .split_whitespace()
        .map(|tok| tok.parse::<u8>().map_err(|_| ParseError::new("bad load", line, tok)))
        .collect::<Result<_, _>>()?;
    if loads.len() != M {
        return Err(ParseError::new("wrong number of bins", line, loads_str));
    }
    if !loads.windows(2).all(|w| w[0] >= w[1]) {
        return Err(ParseError::new("loads must be sorted descending", line, loads_str));
    }

    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| ParseError::new("missing '(' in bc", line, rest))?;
    let (items_str, rest) = rest
        .split_once(')')
        .ok_or_else(|| ParseError::new("missing ')' in bc", line, rest))?;
    let counts: Vec<u32> = items_str
        .split_whitespace()
        .map(|tok| tok.parse::<u32>().map_err(|_| ParseError::new("bad item count", line, tok)))
        .collect::<Result<_, _>>()?;
    if counts.len() != S {
        return Err(ParseError::new("wrong number of item sizes", line, items_str));
    }
    let mut items = vec![0u32; S + 1];
    items[1..=S].copy_from_slice(&counts);

    let rest = rest.trim_start();
    let (last_tok, rest) = rest.split_once(char::is_whitespace).unwrap_or((rest.trim_end(), ""));
    let last_item: u8 = last_tok
        .trim()
        .parse()
        .map_err(|_| ParseError::new("bad last_item", line, last_tok))?;
    if last_item as usize > S {
        return Err(ParseError::new("last_item exceeds S", line, last_tok));
    }

    let bc = BinConf::from_parts(loads, items, last_item, z);
    Ok((bc, rest))
}

/// render a bc in the same format `parse_bc` accepts.
pub fn format_bc(bc: &BinConf) -> String {
    let loads = bc
        .loads()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let items = (1..=S)
        .map(|size| bc.multiplicity(size).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{loads}] ({items}) {}", bc.last_item())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_format_and_parse() {
        let z = Zobrist::fixed();
        let mut bc = BinConf::empty(&z);
        bc.assign(2, 9, &z);
        bc.assign(1, 5, &z);
        let text = format_bc(&bc);
        let (parsed, rest) = parse_bc(&text, 0, &z).expect("valid bc text");
        assert_eq!(rest.trim(), "");
        assert_eq!(parsed.loads(), bc.loads());
        assert_eq!(parsed.items(), bc.items());
        assert_eq!(parsed.last_item(), bc.last_item());
    }

    #[test]
    fn rejects_wrong_bin_count() {
        let z = Zobrist::fixed();
        assert!(parse_bc("[0 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0", 1, &z).is_err());
    }

    #[test]
    fn rejects_unsorted_loads() {
        let z = Zobrist::fixed();
        assert!(parse_bc("[0 1 0] (0 0 0 0 0 0 0 0 0 0 0 0 0 0) 0", 1, &z).is_err());
    }
}
