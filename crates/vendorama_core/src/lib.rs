//! Vendorama core: the pure search-session state machine.
mod dedup;
mod effect;
mod error;
mod filters;
mod history;
mod msg;
mod product;
mod query;
mod session;
mod update;
mod view_model;

pub use dedup::SeenKeys;
pub use effect::Effect;
pub use error::{SearchFailure, SearchFailureKind};
pub use filters::{FilterSet, TreeSelection};
pub use history::{HistoryEntry, HistoryStack};
pub use msg::Msg;
pub use product::{
    CategoryId, LocationId, Page, Product, ProductId, ProductKey, Vendor, VendorCategory, VendorId,
};
pub use query::{build_query, is_reserved_term, normalize_query, QueryParams, QUERY_MAX_CHARS};
pub use session::{
    FetchTicket, Phase, SearchMode, SearchSession, DEFAULT_SCROLL_AHEAD,
};
pub use update::update;
pub use view_model::{ProductRowView, SessionViewModel, VendorView};
