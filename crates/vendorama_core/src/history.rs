use crate::dedup::SeenKeys;
use crate::filters::FilterSet;
use crate::product::{CategoryId, LocationId, Product, ProductKey, Vendor, VendorId};
use crate::session::SearchMode;

/// An immutable copy of one session's result-bearing state.
///
/// Captured right before a mode-changing search replaces the session, and
/// replayed wholesale on back-navigation. Pagination is deliberately not
/// resumable after a restore: the stale cursor could point into a result set
/// the server has since reshuffled, so the restoring side forces
/// `has_more = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) mode: SearchMode,
    pub(crate) query: String,
    pub(crate) filters: FilterSet,
    pub(crate) page: u32,
    pub(crate) total_count: Option<u32>,
    pub(crate) products: Vec<Product>,
    pub(crate) seen: SeenKeys,
    pub(crate) vendor_target: Option<VendorId>,
    pub(crate) vendor_profile: Option<Vendor>,
    pub(crate) vendor_category: Option<CategoryId>,
    pub(crate) vendor_location: Option<LocationId>,
    pub(crate) within_vendor: bool,
    pub(crate) related_target: Option<ProductKey>,
    pub(crate) has_searched: bool,
}

/// Prior result sets, most recent on top. In-memory only; depth is bounded
/// solely by how far the user navigates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
