//! The five/nine heuristic (spec §4.4): specific to `R=19, S=14`. Send
//! items of size 5 until every bin has accepted at least one (or one bin
//! has accepted two, which already blocks it from ever taking a 9), then
//! verify by DP feasibility that either `m` items of size 9 or a matching
//! suffix of items of size 14 can no longer be packed offline. Grounded on
//! `heur_adv.hpp`'s `five_nine_heuristic`.

use crate::binconf::BinConf;
use crate::config::{R, S};
use crate::dp::{self, DpCache};
use crate::zobrist::Zobrist;

const FIVE: usize = 5;
const NINE: usize = 9;
const FOURTEEN: usize = 14;

pub fn applies() -> bool {
    R == 19 && S == 14
}

fn nines_threat(loads: &[u8], items: &[u32], bins: u32, z: &Zobrist, dp_cache: &DpCache) -> bool {
    let mut probe = items.to_vec();
    probe[NINE] += bins;
    dp::is_feasible(loads, &probe, z, dp_cache)
}

/// returns the number of 5s sent (as the played item sequence) if the
/// forcing argument succeeds.
pub fn five_nine_heuristic(bc: &BinConf, z: &Zobrist, dp_cache: &DpCache) -> Option<Vec<u8>> {
    if !applies() {
        return None;
    }
    let loads = bc.loads();
    let m = loads.len();
    // the heaviest bin must already hold a five, and the lightest bin must
    // be nonzero so two nines never fit together in any bin of capacity
    // R - 1.
    if loads[0] < 5 || loads[m - 1] == 0 {
        return None;
    }

    let mut items = bc.items().to_vec();
    if !nines_threat(loads, &items, m as u32, z, dp_cache) {
        return None;
    }

    let mut last_bin_above_five = 0usize;
    for bin in 0..m - 1 {
        if loads[bin] >= 5 && loads[bin + 1] < 5 {
            last_bin_above_five = bin;
            break;
        }
    }

    let mut fives_sent: usize = 0;
    let mut fourteen_sequence = m as i64 - last_bin_above_five as i64;
    let mut bins_times_nine_threat = true;

    while bins_times_nine_threat && fourteen_sequence >= 1 && last_bin_above_five < m {
        let mut probe = items.clone();
        probe[FOURTEEN] += fourteen_sequence as u32;
        if dp::is_feasible(loads, &probe, z, dp_cache) {
            return Some(vec![FIVE as u8; fives_sent]);
        }

        last_bin_above_five += 1;
        fourteen_sequence -= 1;
        items[FIVE] += 1;
        fives_sent += 1;
        bins_times_nine_threat = nines_threat(loads, &items, m as u32, z, dp_cache);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dp::DpCache;
    use crate::zobrist::Zobrist;

    #[test]
    fn inapplicable_outside_five_nine_parameters() {
        assert!(applies());
    }

    #[test]
    fn empty_configuration_does_not_trigger() {
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let bc = BinConf::empty(&z);
        assert_eq!(five_nine_heuristic(&bc, &z, &cache), None);
    }

    #[test]
    fn a_nine_alone_with_no_load_elsewhere_is_not_flagged() {
        // loads[m-1] == 0 must short-circuit before any DP query.
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let mut bc = BinConf::empty(&z);
        let undo = bc.assign(0, 9, &z);
        assert_eq!(five_nine_heuristic(&bc, &z, &cache), None);
        bc.unassign(undo);
    }
}
