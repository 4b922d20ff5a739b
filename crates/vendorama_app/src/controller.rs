use std::sync::Arc;

use client_logging::{client_debug, client_info, client_warn};
use vendorama_api::{ApiEvent, ApiHandle, FetchTag};
use vendorama_core::{
    update, CategoryId, Effect, FetchTicket, FilterSet, LocationId, Msg, ProductKey,
    SearchSession, SessionViewModel, VendorId,
};

use crate::collaborators::{FavoriteStore, NameDirectory, ProductCache};
use crate::map::{map_error, map_page};

/// The binding layer the UI embeds.
///
/// Owns the session, funnels every mutation through the core's `update`,
/// executes effects against the api handle and the collaborators, and pumps
/// finished fetches back in as messages. All methods run on the embedding
/// layer's single thread; the background runtime only ever talks back over
/// the event channel.
pub struct SearchController {
    session: SearchSession,
    api: ApiHandle,
    favorites: Arc<dyn FavoriteStore>,
    cache: Arc<dyn ProductCache>,
    names: Arc<dyn NameDirectory>,
}

impl SearchController {
    pub fn new(
        api: ApiHandle,
        favorites: Arc<dyn FavoriteStore>,
        cache: Arc<dyn ProductCache>,
        names: Arc<dyn NameDirectory>,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            api,
            favorites,
            cache,
            names,
        }
    }

    pub fn search(&mut self, query: impl Into<String>) {
        let query = query.into();
        client_info!("search submitted, len={}", query.len());
        self.dispatch(Msg::SearchSubmitted { query });
    }

    pub fn search_vendor(&mut self, vendor_id: VendorId) {
        client_info!("vendor opened: {vendor_id}");
        self.dispatch(Msg::VendorOpened { vendor_id });
    }

    pub fn search_related(&mut self, key: ProductKey) {
        client_info!("related requested for {key}");
        self.dispatch(Msg::RelatedRequested { key });
    }

    pub fn load_next_page(&mut self) {
        self.dispatch(Msg::NextPageRequested);
    }

    /// Infinite-scroll hook: the view reports each row as it becomes visible
    /// and the session decides when the look-ahead distance is reached.
    pub fn item_viewed(&mut self, index: usize) {
        self.dispatch(Msg::ItemViewed { index });
    }

    pub fn refresh_first_page(&mut self) {
        client_debug!("refresh requested");
        self.dispatch(Msg::RefreshRequested);
    }

    pub fn go_back(&mut self) {
        client_info!("back requested, depth={}", self.session.history_depth());
        self.dispatch(Msg::BackRequested);
    }

    pub fn apply_filters(&mut self, filters: FilterSet) {
        self.dispatch(Msg::FiltersApplied(filters));
    }

    pub fn reset_filters(&mut self) {
        self.dispatch(Msg::FiltersReset);
    }

    pub fn refine_vendor_category(&mut self, category: Option<CategoryId>) {
        self.dispatch(Msg::VendorCategoryRefined(category));
    }

    pub fn refine_vendor_location(&mut self, location: Option<LocationId>) {
        self.dispatch(Msg::VendorLocationRefined(location));
    }

    pub fn set_within_vendor(&mut self, enabled: bool) {
        self.dispatch(Msg::WithinVendorToggled(enabled));
    }

    pub fn clear_history(&mut self) {
        self.dispatch(Msg::HistoryCleared);
    }

    /// Home/logo control: fresh session, filters and history.
    pub fn reset(&mut self) {
        client_info!("session reset");
        self.dispatch(Msg::SessionReset);
    }

    /// Drains every pending api event through the update loop. Returns how
    /// many events were applied; callers poll this from their frame loop.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.api.try_recv() {
            let ApiEvent::PageFetched { tag, result } = event;
            let ticket = FetchTicket {
                epoch: tag.epoch,
                page: tag.page,
            };
            if self.session.in_flight() != Some(ticket) {
                client_debug!(
                    "discarding stale result: epoch={} page={}",
                    tag.epoch,
                    tag.page
                );
                continue;
            }
            let msg = match result {
                Ok(page) => Msg::PageLoaded {
                    ticket,
                    page: map_page(page),
                },
                Err(error) => {
                    client_warn!("page {} fetch failed: {} {}", tag.page, error.kind, error.message);
                    Msg::PageFailed {
                        ticket,
                        error: map_error(error),
                    }
                }
            };
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    pub fn view(&self) -> SessionViewModel {
        self.session.view()
    }

    /// Render coalescing passthrough.
    pub fn consume_dirty(&mut self) -> bool {
        self.session.consume_dirty()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn set_scroll_ahead(&mut self, distance: usize) {
        self.session.set_scroll_ahead(distance);
    }

    pub fn is_favorite(&self, key: ProductKey) -> bool {
        self.favorites.is_favorite(key)
    }

    /// True when the storefront itself (not an item) is favorited.
    pub fn is_favorite_vendor(&self, vendor_id: VendorId) -> bool {
        self.favorites.is_favorite(ProductKey::vendor_only(vendor_id))
    }

    pub fn category_name(&self, id: CategoryId) -> Option<String> {
        self.names.category_name(id)
    }

    pub fn location_name(&self, id: LocationId) -> Option<String> {
        self.names.location_name(id)
    }

    pub fn vendor_name(&self, id: VendorId) -> Option<String> {
        self.names.vendor_name(id)
    }

    fn dispatch(&mut self, msg: Msg) {
        let session = std::mem::take(&mut self.session);
        let (session, effects) = update(session, msg);
        self.session = session;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    ticket,
                    params,
                    bypass_cache,
                } => {
                    client_debug!(
                        "fetching page {} (epoch {}, {} params)",
                        ticket.page,
                        ticket.epoch,
                        params.len()
                    );
                    let tag = FetchTag {
                        epoch: ticket.epoch,
                        page: ticket.page,
                    };
                    self.api
                        .fetch_page(tag, params.pairs().to_vec(), bypass_cache);
                }
                Effect::CacheProducts { products } => {
                    self.cache.populate(&products);
                }
            }
        }
    }
}
