pub mod nav;
pub mod scheme;

pub use nav::*;
pub use scheme::*;
