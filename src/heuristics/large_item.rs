//! Large-item heuristic (spec §4.4): enumerate candidate sequences of
//! same-sized "large" items that no algorithm placement can absorb.
//!
//! For bin rank `i` (1-indexed, heaviest first), `build_choices` sizes an
//! item so it cannot land on any of the `i` heaviest bins without reaching
//! `R`, and cannot land twice on the lightest bin either; sending one more
//! copy than there are remaining "safe" bins then forces an overflow by
//! pigeonhole, regardless of where the algorithm places each copy. Each
//! candidate is only a real adversary move if the current items plus the
//! candidate sequence still admit an offline packing within `S` per bin,
//! checked via the DP oracle. Grounded on `heur_adv.hpp`'s
//! `build_lih_choices`/`compatible`/`large_item_heuristic`.

use crate::binconf::BinConf;
use crate::config::{M, R, S};
use crate::dp::{self, DpCache};
use crate::zobrist::Zobrist;

const LARGE_THRESHOLD: u8 = (S / 2 + 1) as u8;

pub fn is_large(item: u8) -> bool {
    item >= LARGE_THRESHOLD
}

fn instance_possible(total_load: u32, items_to_send: i64, item: i64) -> bool {
    total_load as i64 + item * items_to_send <= (S * M) as i64
}

fn instance_possible_odd(total_load: u32, items_to_send: i64, item: i64) -> bool {
    total_load as i64 + (item - 1) * items_to_send + (items_to_send - 1) <= (S * M) as i64
}

/// candidate forcing sequences, ranked from the bin holding the most load
/// down to the least (`build_lih_choices`). Each entry is the list of item
/// sizes to send, in order.
fn build_choices(bc: &BinConf) -> Vec<Vec<u8>> {
    let loads = bc.loads();
    let m = loads.len();
    let lightest = loads[m - 1] as i64;
    let not_twice_into_last = (R as i64 - lightest + 1) / 2;
    let oddness = (R as i64 - lightest) % 2 == 1;
    let total_load = bc.total_load();

    let mut choices = Vec::new();
    for i in (1..=m).rev() {
        let current = loads[i - 1] as i64;
        let not_once_into_current = R as i64 - current;
        let items_to_send = (m - i + 1) as i64;
        if not_once_into_current > S as i64 {
            continue;
        }
        if oddness && not_once_into_current <= not_twice_into_last - 1 {
            if not_twice_into_last >= 2 && instance_possible_odd(total_load, items_to_send, not_twice_into_last) {
                let mut items = vec![not_twice_into_last as u8; (items_to_send - 1) as usize];
                items.push((not_twice_into_last - 1) as u8);
                choices.push(items);
            }
        } else {
            let item = not_twice_into_last.max(not_once_into_current);
            if item >= 1 && item <= S as i64 && instance_possible(total_load, items_to_send, item) {
                choices.push(vec![item as u8; items_to_send as usize]);
            }
        }
    }
    choices
}

/// returns the item sequence to send if some candidate forcing sequence
/// both forces an overflow by construction and keeps the instance
/// realisable offline within `S` per bin.
pub fn large_item_heuristic(bc: &BinConf, z: &Zobrist, dp_cache: &DpCache) -> Option<Vec<u8>> {
    for choice in build_choices(bc) {
        let mut items = bc.items().to_vec();
        for &item in &choice {
            items[item as usize] += 1;
        }
        if dp::is_feasible(bc.loads(), &items, z, dp_cache) {
            return Some(choice);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dp::DpCache;
    use crate::zobrist::Zobrist;

    #[test]
    fn threshold_is_just_above_half_of_s() {
        assert!(is_large(LARGE_THRESHOLD));
        assert!(!is_large(LARGE_THRESHOLD - 1));
    }

    #[test]
    fn empty_configuration_has_no_large_item_hit() {
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let bc = BinConf::empty(&z);
        assert_eq!(large_item_heuristic(&bc, &z, &cache), None);
    }

    #[test]
    fn three_matching_mid_loads_are_not_a_false_adversary_win() {
        // a configuration shaped like {8, 8, 8} must not be flagged: the
        // adversary cannot actually force R here, so this used to be the
        // unsound case the old `large_count >= m` proxy got wrong.
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let mut bc = BinConf::empty(&z);
        let u0 = bc.assign(0, 8, &z);
        let u1 = bc.assign(1, 8, &z);
        let u2 = bc.assign(2, 8, &z);
        assert_eq!(large_item_heuristic(&bc, &z, &cache), None);
        bc.unassign(u2);
        bc.unassign(u1);
        bc.unassign(u0);
    }

    #[test]
    fn a_genuinely_forced_item_is_flagged() {
        // loads [11, 6, 6]: the only remaining safe move (item 13 sent once
        // to the lightest bin) already overflows every bin, and the DP
        // confirms {11, 6, 6, 13} still packs offline into three bins of S.
        let z = Zobrist::new(1);
        let cache = DpCache::new(6);
        let mut bc = BinConf::empty(&z);
        let u0 = bc.assign(0, 11, &z);
        let u1 = bc.assign(1, 6, &z);
        let u2 = bc.assign(2, 6, &z);
        assert_eq!(large_item_heuristic(&bc, &z, &cache), Some(vec![13]));
        bc.unassign(u2);
        bc.unassign(u1);
        bc.unassign(u0);
    }
}
