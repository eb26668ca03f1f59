//! Minibs: the layered fixed-point precomputation over quantised item
//! configurations (spec §4.5).

mod chain;
mod itemconf;
mod layer;
mod persistence;
mod quantize;

pub use chain::ChainCover;
pub use itemconf::ItemConfUniverse;
pub use layer::MinibsLayer;
pub use persistence::{read, write, LoadedMinibs};
pub use quantize::{bucket_upper_bound, shrink};
