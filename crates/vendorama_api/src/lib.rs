//! Vendorama api: the remote search engine boundary.
//!
//! Wire decode, the fetch trait and its reqwest implementation, and the
//! background handle the binding layer talks to.
mod client;
mod decode;
mod fetch;
mod types;

pub use client::{ApiEvent, ApiHandle};
pub use decode::{decode_page, DecodeError};
pub use fetch::{ApiSettings, ReqwestSearchApi, SearchApi};
pub use types::{
    FailureKind, FetchError, FetchTag, ParamPair, ProductRow, SearchPage, VendorCategoryRow,
    VendorRow,
};
