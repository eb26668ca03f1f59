//! Quantisation helpers (spec §4.5): mapping a real item size to its bucket
//! and back to the largest real size that bucket could represent, used to
//! keep the minibs oracle's placement checks conservative (sound for every
//! real item that could have produced a given bucket count).

use crate::binconf::ItemConf;
use crate::config::{D, S};

pub fn shrink(real_size: usize) -> usize {
    ItemConf::shrink(real_size)
}

/// largest real size that quantises into `bucket`, used whenever the
/// minibs oracle needs a concrete capacity check: testing against the
/// worst case within the bucket keeps the result sound.
pub fn bucket_upper_bound(bucket: usize) -> usize {
    let mut largest = 1;
    for size in 1..=S {
        if ItemConf::shrink(size) == bucket {
            largest = size;
        }
    }
    largest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_upper_bound_round_trips_through_shrink() {
        for bucket in 0..D {
            let upper = bucket_upper_bound(bucket);
            assert_eq!(shrink(upper), bucket);
        }
    }
}
