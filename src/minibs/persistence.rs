//! Binary minibs cache (de)serialisation (spec §6): a signature-checked,
//! Zobrist-table-checked dump of the item-configuration universe, the
//! known-sum winning set, and the per-item-configuration winning load-hash
//! sets, so a second run can skip the precomputation entirely when the
//! on-disk cache was built for the same game parameters and the same
//! random tables as the current build.
//!
//! Mirrors `binary_storage<DENOMINATOR>` (`check_signature`/`write_signature`,
//! `check_zobrist_table`/`write_zobrist_table`, delimiter-terminated sets):
//! a missing or mismatched signature or Zobrist table aborts restoration
//! (spec §7) rather than trusting stale or foreign-seed data.

use crate::binconf::ItemConf;
use crate::config::{D, M, MINIBS_CACHE_VERSION, R, S};
use crate::error::{ParseError, Result};
use crate::minibs::itemconf::ItemConfUniverse;
use crate::zobrist::Zobrist;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::HashSet;
use std::io::{Read, Write};

/// terminates every variable-length set, matching `write_delimeter`'s `-1`.
const DELIMITER: i32 = -1;

pub fn write<W: Write>(
    mut w: W,
    universe: &ItemConfUniverse,
    z: &Zobrist,
    known_sum: &HashSet<u64>,
    layers: &[HashSet<u64>],
) -> Result<()> {
    write_signature(&mut w)?;
    write_zobrist_table(&mut w, z)?;
    write_universe(&mut w, universe)?;
    write_one_set(&mut w, known_sum)?;
    w.write_u32::<LittleEndian>(layers.len() as u32)?;
    for set in layers {
        write_one_set(&mut w, set)?;
    }
    Ok(())
}

pub struct LoadedMinibs {
    pub universe: ItemConfUniverse,
    pub known_sum: HashSet<u64>,
    pub layers: Vec<HashSet<u64>>,
}

/// returns `None` (triggering a rebuild, spec §7 "missing/mismatched minibs
/// cache file") rather than an error when the signature or Zobrist tables
/// don't match the running build's.
pub fn read<Rd: Read>(mut r: Rd, z: &Zobrist) -> Result<Option<LoadedMinibs>> {
    if !check_signature(&mut r)? {
        return Ok(None);
    }
    if !check_zobrist_table(&mut r, z)? {
        return Ok(None);
    }

    let universe = read_universe(&mut r)?;
    let known_sum = read_one_set(&mut r)?;

    let layer_count = r.read_u32::<LittleEndian>()?;
    let mut layers = Vec::with_capacity(layer_count as usize);
    for _ in 0..layer_count {
        layers.push(read_one_set(&mut r)?);
    }

    Ok(Some(LoadedMinibs { universe, known_sum, layers }))
}

fn write_signature<W: Write>(w: &mut W) -> Result<()> {
    w.write_i32::<LittleEndian>(M as i32)?;
    w.write_i32::<LittleEndian>(R as i32)?;
    w.write_i32::<LittleEndian>(S as i32)?;
    w.write_i32::<LittleEndian>(D as i32)?;
    w.write_i32::<LittleEndian>(MINIBS_CACHE_VERSION)?;
    Ok(())
}

/// `Ok(false)` on any field mismatch, matching the original's
/// `check_signature` returning a soft false rather than aborting the read.
fn check_signature<R2: Read>(r: &mut R2) -> Result<bool> {
    let read_m = r.read_i32::<LittleEndian>()?;
    let read_r = r.read_i32::<LittleEndian>()?;
    let read_s = r.read_i32::<LittleEndian>()?;
    let read_d = r.read_i32::<LittleEndian>()?;
    let read_version = r.read_i32::<LittleEndian>()?;
    Ok(read_m == M as i32
        && read_r == R as i32
        && read_s == S as i32
        && read_d == D as i32
        && read_version == MINIBS_CACHE_VERSION)
}

fn write_zobrist_table<W: Write>(w: &mut W, z: &Zobrist) -> Result<()> {
    write_u64_table(w, z.zi_table())?;
    write_u64_table(w, z.zl_table())
}

fn check_zobrist_table<R2: Read>(r: &mut R2, z: &Zobrist) -> Result<bool> {
    Ok(read_u64_table_matches(r, z.zi_table())? && read_u64_table_matches(r, z.zl_table())?)
}

fn write_u64_table<W: Write>(w: &mut W, rows: &[Vec<u64>]) -> Result<()> {
    w.write_u32::<LittleEndian>(rows.len() as u32)?;
    for row in rows {
        w.write_u32::<LittleEndian>(row.len() as u32)?;
        for &token in row {
            w.write_u64::<LittleEndian>(token)?;
        }
    }
    Ok(())
}

fn read_u64_table_matches<R2: Read>(r: &mut R2, expected: &[Vec<u64>]) -> Result<bool> {
    let row_count = r.read_u32::<LittleEndian>()? as usize;
    if row_count != expected.len() {
        return Ok(false);
    }
    let mut matches = true;
    for row in expected {
        let col_count = r.read_u32::<LittleEndian>()? as usize;
        if col_count != row.len() {
            matches = false;
        }
        for j in 0..col_count {
            let token = r.read_u64::<LittleEndian>()?;
            if matches && token != row[j] {
                matches = false;
            }
        }
    }
    Ok(matches)
}

fn write_universe<W: Write>(w: &mut W, universe: &ItemConfUniverse) -> Result<()> {
    w.write_u32::<LittleEndian>(universe.len() as u32)?;
    for ic in universe.iter() {
        for &count in ic.buckets() {
            w.write_u32::<LittleEndian>(count)?;
        }
    }
    write_delimiter(w)
}

fn read_universe<R2: Read>(r: &mut R2) -> Result<ItemConfUniverse> {
    let universe_len = r.read_u32::<LittleEndian>()?;
    let mut confs = Vec::with_capacity(universe_len as usize);
    for _ in 0..universe_len {
        let mut buckets = vec![0u32; D];
        for slot in buckets.iter_mut() {
            *slot = r.read_u32::<LittleEndian>()?;
        }
        confs.push(ItemConf::new(buckets));
    }
    read_delimiter(r)?;
    Ok(ItemConfUniverse::from_confs(confs))
}

fn write_one_set<W: Write>(w: &mut W, set: &HashSet<u64>) -> Result<()> {
    w.write_u32::<LittleEndian>(set.len() as u32)?;
    for &hash in set {
        w.write_u64::<LittleEndian>(hash)?;
    }
    write_delimiter(w)
}

fn read_one_set<R2: Read>(r: &mut R2) -> Result<HashSet<u64>> {
    let size = r.read_u32::<LittleEndian>()?;
    let mut set = HashSet::with_capacity(size as usize);
    for _ in 0..size {
        set.insert(r.read_u64::<LittleEndian>()?);
    }
    read_delimiter(r)?;
    Ok(set)
}

fn write_delimiter<W: Write>(w: &mut W) -> Result<()> {
    w.write_i32::<LittleEndian>(DELIMITER)?;
    Ok(())
}

fn read_delimiter<R2: Read>(r: &mut R2) -> Result<()> {
    let del = r.read_i32::<LittleEndian>()?;
    if del != DELIMITER {
        return Err(ParseError::new("missing delimiter in minibs cache", 0, del.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binconf::BinomialTable;
    use crate::cache::KnownSumCache;
    use crate::minibs::layer::MinibsLayer;
    use std::io::Cursor;

    #[test]
    fn round_trips_a_small_table() {
        let universe = ItemConfUniverse::build();
        let binomial = BinomialTable::new();
        let z = Zobrist::new(1);
        let mut known_sum = KnownSumCache::new();
        // restrict to the top of the load-configuration space so the test
        // precomputation finishes quickly.
        let layer = MinibsLayer::compute(&universe, &binomial, &z, &mut known_sum, crate::config::S as u32 * crate::config::M as u32);
        let layers = layer.winning_sets(&universe, &z);

        let mut buf = Vec::new();
        write(&mut buf, &universe, &z, known_sum.hashes(), &layers).unwrap();
        let loaded = read(Cursor::new(buf), &z).unwrap().expect("signature and zobrist tables match");
        assert_eq!(loaded.universe.len(), universe.len());
        assert_eq!(loaded.known_sum, *known_sum.hashes());
        assert_eq!(loaded.layers.len(), layers.len());
        assert_eq!(loaded.layers, layers);
    }

    #[test]
    fn mismatched_signature_triggers_rebuild() {
        let z = Zobrist::new(1);
        let mut buf = Vec::new();
        buf.write_i32::<LittleEndian>(M as i32 + 1).unwrap();
        buf.write_i32::<LittleEndian>(R as i32).unwrap();
        buf.write_i32::<LittleEndian>(S as i32).unwrap();
        buf.write_i32::<LittleEndian>(D as i32).unwrap();
        buf.write_i32::<LittleEndian>(MINIBS_CACHE_VERSION).unwrap();
        assert!(read(Cursor::new(buf), &z).unwrap().is_none());
    }

    #[test]
    fn mismatched_zobrist_table_triggers_rebuild() {
        let z = Zobrist::new(1);
        let other = Zobrist::new(2);
        let universe = ItemConfUniverse::build();
        let empty_set = HashSet::new();
        let mut buf = Vec::new();
        write(&mut buf, &universe, &other, &empty_set, &[]).unwrap();
        assert!(read(Cursor::new(buf), &z).unwrap().is_none());
    }
}
