pub mod embedded;
pub mod gazetteer;
pub mod states;

pub use gazetteer::{Gazetteer, ZipLookup};
pub use states::state_code;
