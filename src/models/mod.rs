pub mod offer;
pub mod product;
pub mod search;
pub mod sub;

pub use offer::*;
pub use product::*;
pub use search::*;
pub use sub::*;
