//! Request and static-resource URL construction.
//!
//! Everything here is string templating over an [`Endpoints`] value. Nothing
//! is validated: a malformed input simply produces a malformed URL, which the
//! transport then rejects.

use url::form_urlencoded;

use crate::config::Endpoints;

impl Endpoints {
    /// Address of the incredible-offers listing.
    pub fn offers_address(&self) -> String {
        self.incredible_offers.clone()
    }

    /// Search address with `keyword` form-urlencoded into the `keyword`
    /// query parameter (`"a b&c"` becomes `a+b%26c`).
    pub fn search_address(&self, keyword: &str) -> String {
        let query: String = form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
        format!("{}?keyword={}", self.search, query)
    }

    /// Product lookup address with `id` as the trailing path segment.
    pub fn product_address(&self, id: u64) -> String {
        format!("{}/{}", self.product.trim_end_matches('/'), id)
    }

    /// Static file address; `relative_path` is appended verbatim.
    pub fn static_resource_address(&self, relative_path: &str) -> String {
        format!("{}{}", self.static_files, relative_path)
    }
}
