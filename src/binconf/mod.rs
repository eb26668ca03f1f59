//! bc / lc / ic: the data model shared by every other module (spec §3).

mod binary;
mod conf;
mod item;
mod load;
mod text;

pub use binary::BinomialTable;
pub use conf::{BinConf, Undo};
pub use item::ItemConf;
pub use load::LoadConf;
pub use text::{format_bc, parse_bc};
