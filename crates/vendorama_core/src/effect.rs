use crate::product::Product;
use crate::query::QueryParams;
use crate::session::FetchTicket;

/// Side effects the embedding layer executes on the session's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one page fetch with these parameters.
    FetchPage {
        ticket: FetchTicket,
        params: QueryParams,
        bypass_cache: bool,
    },
    /// Hand newly admitted products to the product cache collaborator.
    CacheProducts { products: Vec<Product> },
}
