use crate::error::SearchFailure;
use crate::filters::FilterSet;
use crate::product::{CategoryId, LocationId, Page, ProductKey, VendorId};
use crate::session::FetchTicket;

/// Everything that can happen to a session: UI intents plus engine results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the search box.
    SearchSubmitted { query: String },
    /// User tapped through to a storefront.
    VendorOpened { vendor_id: VendorId },
    /// User asked for items related to one product.
    RelatedRequested { key: ProductKey },
    /// Explicit next-page request.
    NextPageRequested,
    /// The view scrolled item `index` into sight (infinite-scroll trigger).
    ItemViewed { index: usize },
    /// Pull-to-refresh.
    RefreshRequested,
    /// Back control.
    BackRequested,
    /// A fully edited filter set coming back from the filter sheet.
    FiltersApplied(FilterSet),
    /// Clear-all-filters control.
    FiltersReset,
    /// Vendor-scoped category refinement; meaningful in vendor mode only.
    VendorCategoryRefined(Option<CategoryId>),
    /// Vendor-scoped location refinement; meaningful in vendor mode only.
    VendorLocationRefined(Option<LocationId>),
    /// "Search within this store" toggle.
    WithinVendorToggled(bool),
    /// Drop the back stack without touching the live session.
    HistoryCleared,
    /// Home/logo control: fresh session, filters and history.
    SessionReset,
    /// Engine delivered a decoded page.
    PageLoaded { ticket: FetchTicket, page: Page },
    /// Engine reported a failed fetch.
    PageFailed {
        ticket: FetchTicket,
        error: SearchFailure,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
