//! Response decoders turning raw response bodies into domain records.
//!
//! The offers listing and product lookups are decoded strictly through serde:
//! any structural mismatch fails the call. Search results are decoded
//! tolerantly, field by field (see [`search`]).

mod field;
pub mod offers;
pub mod product;
pub mod search;

pub use offers::decode_offer_list;
pub use product::decode_product_detail;
pub use search::{decode_search_result, decode_search_result_with, zero_time};
