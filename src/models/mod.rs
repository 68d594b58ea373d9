pub mod record;
pub mod stats;
pub mod wire;

pub use record::*;
pub use stats::*;
pub use wire::*;
