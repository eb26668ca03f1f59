//! Enumeration of feasible quantised item configurations (spec §4.5): every
//! `ItemConf` whose total quantised volume respects the `(D-1)*m` bound,
//! assigned a stable, dense `u32` id in enumeration order so the layered
//! fixed point can index tables by id instead of hashing `ItemConf` on
//! every lookup.

use crate::binconf::ItemConf;
use crate::config::{D, M};
use std::collections::HashMap;

pub struct ItemConfUniverse {
    by_id: Vec<ItemConf>,
    by_conf: HashMap<ItemConf, u32>,
}

impl ItemConfUniverse {
    pub fn build() -> Self {
        let mut by_id = Vec::new();
        let mut by_conf = HashMap::new();
        let mut stack = vec![ItemConf::empty()];
        let mut seen = std::collections::HashSet::new();

        while let Some(ic) = stack.pop() {
            if !seen.insert(ic.clone()) {
                continue;
            }
            if !ic.is_within_volume_bound() {
                continue;
            }
            let id = by_id.len() as u32;
            by_conf.insert(ic.clone(), id);
            by_id.push(ic.clone());

            for bucket in 0..D {
                let next = ic.with_incremented(bucket);
                if next.is_within_volume_bound() && !seen.contains(&next) {
                    stack.push(next);
                }
            }
        }

        Self { by_id, by_conf }
    }

    /// rebuild a universe from a list of configurations in a fixed, known
    /// id order — used when loading the binary cache, where ids must match
    /// the ones baked into the persisted table exactly (spec §6).
    pub fn from_confs(confs: Vec<ItemConf>) -> Self {
        let mut by_conf = HashMap::with_capacity(confs.len());
        for (id, ic) in confs.iter().enumerate() {
            by_conf.insert(ic.clone(), id as u32);
        }
        Self { by_id: confs, by_conf }
    }

    pub fn id_of(&self, ic: &ItemConf) -> Option<u32> {
        self.by_conf.get(ic).copied()
    }

    pub fn conf_of(&self, id: u32) -> &ItemConf {
        &self.by_id[id as usize]
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemConf> {
        self.by_id.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_contains_the_empty_configuration() {
        let universe = ItemConfUniverse::build();
        assert_eq!(universe.id_of(&ItemConf::empty()), Some(0));
    }

    #[test]
    fn every_member_respects_the_volume_bound() {
        let universe = ItemConfUniverse::build();
        for ic in universe.iter() {
            assert!(ic.total() <= (crate::config::D as u32 - 1) * M as u32);
        }
    }
}
