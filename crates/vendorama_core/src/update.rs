use crate::effect::Effect;
use crate::filters::FilterSet;
use crate::msg::Msg;
use crate::product::Page;
use crate::query::build_query;
use crate::session::{FetchTicket, Phase, SearchMode, SearchSession};

/// Pure update function: applies a message to the session and returns any
/// effects. The only mutation path into a [`SearchSession`].
pub fn update(mut session: SearchSession, msg: Msg) -> (SearchSession, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchSubmitted { query } => {
            if session.mode == SearchMode::Vendor
                && session.within_vendor
                && session.vendor_target.is_some()
            {
                // Narrowing inside a storefront reloads the same vendor
                // session in place; not a mode change, so no history push.
                session.query = query;
                reload_in_place(&mut session, false)
            } else {
                session.push_history_if_results();
                session.reset_results();
                session.mode = SearchMode::Search;
                session.query = query;
                session.clear_vendor_scope();
                session.related_target = None;
                start_fetch(&mut session, false)
            }
        }
        Msg::VendorOpened { vendor_id } => {
            session.push_history_if_results();
            session.reset_results();
            session.mode = SearchMode::Vendor;
            session.query.clear();
            session.clear_vendor_scope();
            session.vendor_target = Some(vendor_id);
            session.related_target = None;
            start_fetch(&mut session, false)
        }
        Msg::RelatedRequested { key } => {
            session.push_history_if_results();
            session.reset_results();
            session.mode = SearchMode::Related;
            session.query.clear();
            session.clear_vendor_scope();
            session.related_target = Some(key);
            start_fetch(&mut session, false)
        }
        Msg::NextPageRequested => next_page(&mut session),
        Msg::ItemViewed { index } => {
            if !session.products.is_empty()
                && index + session.scroll_ahead >= session.products.len()
            {
                next_page(&mut session)
            } else {
                Vec::new()
            }
        }
        Msg::RefreshRequested => {
            match session.phase {
                // Nothing to refresh before the first search; and while a
                // fetch is out the same data is already on its way.
                Phase::Idle | Phase::Fetching => Vec::new(),
                Phase::Loaded => reload_in_place(&mut session, true),
            }
        }
        Msg::BackRequested => {
            if let Some(entry) = session.history.pop() {
                session.restore(entry);
            }
            Vec::new()
        }
        Msg::FiltersApplied(filters) => {
            if session.filters == filters {
                Vec::new()
            } else {
                session.filters = filters;
                session.mark_dirty();
                reload_if_active(&mut session)
            }
        }
        Msg::FiltersReset => {
            if session.filters == FilterSet::default() {
                Vec::new()
            } else {
                session.filters = FilterSet::default();
                session.mark_dirty();
                reload_if_active(&mut session)
            }
        }
        Msg::VendorCategoryRefined(category) => {
            if in_vendor_session(&session) && session.vendor_category != category {
                session.vendor_category = category;
                session.mark_dirty();
                reload_in_place(&mut session, false)
            } else {
                Vec::new()
            }
        }
        Msg::VendorLocationRefined(location) => {
            if in_vendor_session(&session) && session.vendor_location != location {
                session.vendor_location = location;
                session.mark_dirty();
                reload_in_place(&mut session, false)
            } else {
                Vec::new()
            }
        }
        Msg::WithinVendorToggled(enabled) => {
            if !in_vendor_session(&session) || session.within_vendor == enabled {
                Vec::new()
            } else {
                session.within_vendor = enabled;
                session.mark_dirty();
                if !enabled && !session.query.is_empty() {
                    // Dropping the toggle widens back to the whole storefront.
                    session.query.clear();
                    reload_in_place(&mut session, false)
                } else {
                    Vec::new()
                }
            }
        }
        Msg::HistoryCleared => {
            if session.history.can_go_back() {
                session.history.clear();
                session.mark_dirty();
            }
            Vec::new()
        }
        Msg::SessionReset => {
            session.reset_all();
            Vec::new()
        }
        Msg::PageLoaded { ticket, page } => {
            if session.is_current(ticket) {
                apply_page(&mut session, ticket, page)
            } else {
                // Superseded fetch; let it die quietly.
                Vec::new()
            }
        }
        Msg::PageFailed { ticket, error } => {
            if session.is_current(ticket) {
                session.in_flight = None;
                session.phase = Phase::Loaded;
                session.has_searched = true;
                // Keep what is already on screen; retry stays user-driven.
                if ticket.page > 1 {
                    session.page = ticket.page - 1;
                }
                session.last_error = Some(error);
                session.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (session, effects)
}

/// Emits the fetch effect for the session's current page, or nothing when the
/// active mode's target id is missing.
fn start_fetch(session: &mut SearchSession, bypass_cache: bool) -> Vec<Effect> {
    let Some(params) = build_query(session) else {
        return Vec::new();
    };
    let ticket = FetchTicket {
        epoch: session.epoch,
        page: session.page,
    };
    session.phase = Phase::Fetching;
    session.in_flight = Some(ticket);
    session.mark_dirty();
    vec![Effect::FetchPage {
        ticket,
        params,
        bypass_cache,
    }]
}

/// At most one fetch per session may be outstanding; a second request while
/// one is in flight is a no-op by construction.
fn next_page(session: &mut SearchSession) -> Vec<Effect> {
    if session.phase != Phase::Loaded
        || !session.has_more
        || session.in_flight.is_some()
        || session.products.is_empty()
    {
        return Vec::new();
    }
    session.page += 1;
    let effects = start_fetch(session, false);
    if effects.is_empty() {
        session.page -= 1;
    }
    effects
}

/// Refresh semantics: same mode, targets and filters, page 1, cleared
/// accumulation, replacing results when they land.
fn reload_in_place(session: &mut SearchSession, bypass_cache: bool) -> Vec<Effect> {
    session.reset_results();
    start_fetch(session, bypass_cache)
}

/// Filter-style mutations reload only once a session exists; before the first
/// search they merely store the new values.
fn reload_if_active(session: &mut SearchSession) -> Vec<Effect> {
    match session.phase {
        Phase::Idle => Vec::new(),
        Phase::Fetching | Phase::Loaded => reload_in_place(session, false),
    }
}

fn in_vendor_session(session: &SearchSession) -> bool {
    session.mode == SearchMode::Vendor && session.vendor_target.is_some()
}

fn apply_page(session: &mut SearchSession, ticket: FetchTicket, page: Page) -> Vec<Effect> {
    session.in_flight = None;
    session.phase = Phase::Loaded;
    session.has_searched = true;
    session.last_error = None;

    let fresh = session.seen.filter_new(page.products);
    let fresh_empty = fresh.is_empty();
    if ticket.page <= 1 {
        session.products = fresh.clone();
    } else {
        session.products.extend(fresh.clone());
    }
    session.total_count = Some(page.total);

    let vendors = page.vendors;
    match session.mode {
        SearchMode::Search => {
            // A search that matched exactly one storefront becomes that
            // storefront. The single sanctioned exception to target
            // exclusivity: the query is cleared as the vendor target lands.
            if vendors.len() == 1 {
                if let Some(vendor) = vendors.into_iter().next() {
                    session.query.clear();
                    session.within_vendor = false;
                    session.vendor_category = None;
                    session.vendor_location = None;
                    session.vendor_target = Some(vendor.id);
                    session.vendor_profile = Some(vendor);
                    session.mode = SearchMode::Vendor;
                }
            }
        }
        SearchMode::Vendor => {
            if let Some(vendor) = vendors
                .into_iter()
                .find(|vendor| Some(vendor.id) == session.vendor_target)
            {
                session.vendor_profile = Some(vendor);
            }
        }
        SearchMode::Related => {}
    }

    // Either the count line is satisfied or the server handed us a page of
    // nothing new; both end pagination for this session.
    let reached_total = session
        .total_count
        .is_some_and(|total| session.products.len() >= total as usize);
    session.has_more = !(reached_total || fresh_empty);
    session.mark_dirty();

    if fresh.is_empty() {
        Vec::new()
    } else {
        vec![Effect::CacheProducts { products: fresh }]
    }
}
