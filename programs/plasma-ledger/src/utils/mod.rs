pub mod custody_cpi;

pub use custody_cpi::*;
