use crate::dedup::SeenKeys;
use crate::error::SearchFailure;
use crate::filters::FilterSet;
use crate::history::{HistoryEntry, HistoryStack};
use crate::product::{CategoryId, LocationId, Product, ProductKey, Vendor, VendorId};
use crate::view_model::{ProductRowView, SessionViewModel, VendorView};

/// Which identifying parameter drives the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Free-text query against the whole marketplace.
    #[default]
    Search,
    /// Browsing one storefront, optionally refined.
    Vendor,
    /// Items related to one product; relevance-driven, not filterable.
    Related,
}

/// Coarse lifecycle of the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Loaded,
}

/// Identifies one fetch against one accumulation generation.
///
/// The epoch increments whenever the accumulated list is reinitialized, so a
/// result carrying a ticket from a superseded session can never be mistaken
/// for the one currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub page: u32,
}

/// How close to the end of the list the view may get before the next page is
/// requested.
pub const DEFAULT_SCROLL_AHEAD: usize = 6;

/// The full mutable state of one browsing context.
///
/// All mutation funnels through [`update`](crate::update); the session itself
/// only offers read accessors, the view-model projection and the dirty flag
/// used to coalesce renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub(crate) mode: SearchMode,
    pub(crate) query: String,
    pub(crate) filters: FilterSet,
    pub(crate) page: u32,
    pub(crate) has_more: bool,
    pub(crate) total_count: Option<u32>,
    pub(crate) products: Vec<Product>,
    pub(crate) seen: SeenKeys,
    pub(crate) vendor_target: Option<VendorId>,
    pub(crate) vendor_profile: Option<Vendor>,
    pub(crate) vendor_category: Option<CategoryId>,
    pub(crate) vendor_location: Option<LocationId>,
    pub(crate) within_vendor: bool,
    pub(crate) related_target: Option<ProductKey>,
    pub(crate) phase: Phase,
    pub(crate) in_flight: Option<FetchTicket>,
    pub(crate) has_searched: bool,
    pub(crate) last_error: Option<SearchFailure>,
    pub(crate) history: HistoryStack,
    pub(crate) epoch: u64,
    pub(crate) scroll_ahead: usize,
    dirty: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            mode: SearchMode::Search,
            query: String::new(),
            filters: FilterSet::default(),
            page: 1,
            has_more: false,
            total_count: None,
            products: Vec::new(),
            seen: SeenKeys::new(),
            vendor_target: None,
            vendor_profile: None,
            vendor_category: None,
            vendor_location: None,
            within_vendor: false,
            related_target: None,
            phase: Phase::Idle,
            in_flight: None,
            has_searched: false,
            last_error: None,
            history: HistoryStack::new(),
            epoch: 0,
            scroll_ahead: DEFAULT_SCROLL_AHEAD,
            dirty: false,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> Option<u32> {
        self.total_count
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn vendor_target(&self) -> Option<VendorId> {
        self.vendor_target
    }

    pub fn vendor_profile(&self) -> Option<&Vendor> {
        self.vendor_profile.as_ref()
    }

    pub fn vendor_category(&self) -> Option<CategoryId> {
        self.vendor_category
    }

    pub fn vendor_location(&self) -> Option<LocationId> {
        self.vendor_location
    }

    pub fn within_vendor(&self) -> bool {
        self.within_vendor
    }

    pub fn related_target(&self) -> Option<ProductKey> {
        self.related_target
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == Phase::Fetching
    }

    /// Ticket of the outstanding fetch, if one is in flight.
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn last_error(&self) -> Option<&SearchFailure> {
        self.last_error.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn scroll_ahead(&self) -> usize {
        self.scroll_ahead
    }

    /// Tunes the infinite-scroll look-ahead distance. Kept out of the
    /// transition logic so product can adjust it without touching behaviour.
    pub fn set_scroll_ahead(&mut self, distance: usize) {
        self.scroll_ahead = distance;
    }

    /// Projects the observable fields the UI binds to.
    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            mode: self.mode,
            products: self.products.iter().map(ProductRowView::from).collect(),
            loading: self.phase == Phase::Fetching,
            has_more: self.has_more,
            total_count: self.total_count,
            has_searched: self.has_searched,
            active_filter_count: self.filters.active_count(),
            can_go_back: self.history.can_go_back(),
            query: self.query.clone(),
            vendor: self.vendor_profile.as_ref().map(VendorView::from),
            last_error: self.last_error.as_ref().map(ToString::to_string),
        }
    }

    /// Returns whether the state changed since the last call, resetting the
    /// flag. The embedding layer uses this to skip redundant renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True iff `ticket` belongs to the fetch currently in flight. Results
    /// carrying any other ticket were superseded and must be discarded.
    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Snapshot pushed before a mode-changing search replaces this session.
    pub(crate) fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            mode: self.mode,
            query: self.query.clone(),
            filters: self.filters.clone(),
            page: self.page,
            total_count: self.total_count,
            products: self.products.clone(),
            seen: self.seen.clone(),
            vendor_target: self.vendor_target,
            vendor_profile: self.vendor_profile.clone(),
            vendor_category: self.vendor_category,
            vendor_location: self.vendor_location,
            within_vendor: self.within_vendor,
            related_target: self.related_target,
            has_searched: self.has_searched,
        }
    }

    pub(crate) fn push_history_if_results(&mut self) {
        if !self.products.is_empty() {
            let entry = self.snapshot();
            self.history.push(entry);
        }
    }

    /// Replays a snapshot. Pagination stays disabled until a fresh search:
    /// the stored cursor may no longer line up with the server's result set.
    pub(crate) fn restore(&mut self, entry: HistoryEntry) {
        self.mode = entry.mode;
        self.query = entry.query;
        self.filters = entry.filters;
        self.page = entry.page;
        self.total_count = entry.total_count;
        self.products = entry.products;
        self.seen = entry.seen;
        self.vendor_target = entry.vendor_target;
        self.vendor_profile = entry.vendor_profile;
        self.vendor_category = entry.vendor_category;
        self.vendor_location = entry.vendor_location;
        self.within_vendor = entry.within_vendor;
        self.related_target = entry.related_target;
        self.has_searched = entry.has_searched;
        self.has_more = false;
        self.phase = Phase::Loaded;
        self.in_flight = None;
        self.last_error = None;
        self.epoch += 1;
        self.mark_dirty();
    }

    /// Reinitializes paging, dedup and accumulation for a fresh result set.
    /// Mode, targets and filters are left for the caller to arrange.
    pub(crate) fn reset_results(&mut self) {
        self.page = 1;
        self.has_more = true;
        self.total_count = None;
        self.products.clear();
        self.seen.clear();
        self.last_error = None;
        self.in_flight = None;
        self.epoch += 1;
        self.mark_dirty();
    }

    /// Drops every vendor-scoped refinement; leaving vendor mode or opening a
    /// different storefront both land here.
    pub(crate) fn clear_vendor_scope(&mut self) {
        self.vendor_target = None;
        self.vendor_profile = None;
        self.vendor_category = None;
        self.vendor_location = None;
        self.within_vendor = false;
    }

    /// Full app-level reset (home/logo control): fresh session, empty
    /// filters, empty history. The epoch keeps counting so late results from
    /// before the reset still miss.
    pub(crate) fn reset_all(&mut self) {
        let epoch = self.epoch + 1;
        let scroll_ahead = self.scroll_ahead;
        *self = Self::default();
        self.epoch = epoch;
        self.scroll_ahead = scroll_ahead;
        self.mark_dirty();
    }
}
