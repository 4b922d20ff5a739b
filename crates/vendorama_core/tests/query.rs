use vendorama_core::{
    update, Effect, FilterSet, Msg, ProductKey, QueryParams, SearchSession, TreeSelection,
    QUERY_MAX_CHARS,
};

fn fetch_params(effects: &[Effect]) -> &QueryParams {
    match effects.first() {
        Some(Effect::FetchPage { params, .. }) => params,
        other => panic!("expected a fetch effect, got {other:?}"),
    }
}

fn pairs(params: &QueryParams) -> Vec<(&'static str, &str)> {
    params
        .pairs()
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect()
}

#[test]
fn plain_search_normalizes_the_query() {
    let (_, effects) = update(
        SearchSession::new(),
        Msg::SearchSubmitted {
            query: "  ShOes  ".to_string(),
        },
    );
    assert_eq!(pairs(fetch_params(&effects)), vec![("vq", "shoes")]);
}

#[test]
fn long_queries_truncate_on_a_char_boundary() {
    let long = "ä".repeat(QUERY_MAX_CHARS + 50);
    let (_, effects) = update(
        SearchSession::new(),
        Msg::SearchSubmitted { query: long },
    );
    let sent = fetch_params(&effects).get("vq").unwrap();
    assert_eq!(sent.chars().count(), QUERY_MAX_CHARS);
    assert_eq!(sent, "ä".repeat(QUERY_MAX_CHARS));
}

#[test]
fn reserved_term_passes_through_when_no_filters_are_active() {
    let (_, effects) = update(
        SearchSession::new(),
        Msg::SearchSubmitted {
            query: " Trending ".to_string(),
        },
    );
    // The bare term reaches the server so its feed logic can trigger.
    assert_eq!(pairs(fetch_params(&effects)), vec![("vq", "trending")]);
}

#[test]
fn reserved_term_is_dropped_once_filters_narrow_the_request() {
    let filters = FilterSet {
        price_from: Some(50),
        ..FilterSet::default()
    };
    let (session, _) = update(SearchSession::new(), Msg::FiltersApplied(filters));
    let (_, effects) = update(
        session,
        Msg::SearchSubmitted {
            query: "new arrivals".to_string(),
        },
    );
    assert_eq!(pairs(fetch_params(&effects)), vec![("price_from", "50")]);
}

#[test]
fn search_emits_filters_in_canonical_order() {
    let mut filters = FilterSet {
        price_from: Some(10),
        price_to: Some(200),
        on_sale: true,
        restricted: true,
        ..FilterSet::default()
    };
    filters.select_category(5);
    filters.select_location(30);

    let (session, _) = update(SearchSession::new(), Msg::FiltersApplied(filters));
    let (_, effects) = update(
        session,
        Msg::SearchSubmitted {
            query: "shoes".to_string(),
        },
    );
    assert_eq!(
        pairs(fetch_params(&effects)),
        vec![
            ("vq", "shoes"),
            ("vc", "5"),
            ("vl", "30"),
            ("price_from", "10"),
            ("price_to", "200"),
            ("onsale", "1"),
            ("restricted", "1"),
        ]
    );
}

#[test]
fn multi_select_wins_over_single_sub_over_top() {
    // Multi set present: deduplicated, ascending, comma-joined.
    let selection = TreeSelection {
        top: 5,
        sub: Some(7),
        multi: vec![9, 3, 9],
    };
    assert_eq!(selection.param_value(), "3,9");

    // No multi set: the single sub wins over the top id.
    let selection = TreeSelection {
        top: 5,
        sub: Some(7),
        multi: Vec::new(),
    };
    assert_eq!(selection.param_value(), "7");

    assert_eq!(TreeSelection::top_only(5).param_value(), "5");
}

#[test]
fn switching_top_level_clears_sub_selections() {
    let mut filters = FilterSet::default();
    filters.select_category(5);
    filters.select_sub_category(7);
    filters.set_sub_categories(vec![8, 9]);

    // Re-selecting the same top keeps the subs.
    filters.select_category(5);
    assert_eq!(filters.category.as_ref().unwrap().sub, Some(7));

    // A different top drops both sub forms.
    filters.select_category(6);
    let selection = filters.category.as_ref().unwrap();
    assert_eq!(selection.top, 6);
    assert_eq!(selection.sub, None);
    assert!(selection.multi.is_empty());

    filters.select_location(1);
    filters.select_sub_location(2);
    filters.select_location(3);
    assert_eq!(filters.location.as_ref().unwrap().sub, None);
}

#[test]
fn page_is_implicit_on_page_one_and_explicit_after() {
    let session = SearchSession::new();
    let (session, effects) = update(
        session,
        Msg::SearchSubmitted {
            query: "shoes".to_string(),
        },
    );
    let params = fetch_params(&effects);
    assert_eq!(params.get("page"), None);
    let ticket = match effects.first() {
        Some(Effect::FetchPage { ticket, .. }) => *ticket,
        _ => unreachable!(),
    };

    let products = (1..=8)
        .map(|id| vendorama_core::Product {
            key: ProductKey::new(1, id),
            name: String::new(),
            price: String::new(),
            sale_price: None,
            image: String::new(),
            url: String::new(),
            vendor_name: String::new(),
            locality: String::new(),
            category: None,
        })
        .collect();
    let (session, _) = update(
        session,
        Msg::PageLoaded {
            ticket,
            page: vendorama_core::Page {
                products,
                vendors: Vec::new(),
                total: 20,
            },
        },
    );
    let (_, effects) = update(session, Msg::NextPageRequested);
    assert_eq!(fetch_params(&effects).get("page"), Some("2"));
}

#[test]
fn vendor_mode_emits_target_and_refinements() {
    let session = SearchSession::new();
    let (session, effects) = update(session, Msg::VendorOpened { vendor_id: 12 });
    assert_eq!(pairs(fetch_params(&effects)), vec![("vu", "12")]);

    let (session, effects) = update(session, Msg::VendorCategoryRefined(Some(3)));
    assert_eq!(
        pairs(fetch_params(&effects)),
        vec![("vu", "12"), ("ci", "3")]
    );

    let (_, effects) = update(session, Msg::VendorLocationRefined(Some(8)));
    assert_eq!(
        pairs(fetch_params(&effects)),
        vec![("vu", "12"), ("ci", "3"), ("nm", "8")]
    );
}

#[test]
fn vendor_query_is_sent_only_with_the_toggle_on() {
    let session = SearchSession::new();
    let (session, _) = update(session, Msg::VendorOpened { vendor_id: 12 });
    let (session, _) = update(session, Msg::WithinVendorToggled(true));
    let (_, effects) = update(
        session,
        Msg::SearchSubmitted {
            query: "  Mugs ".to_string(),
        },
    );
    assert_eq!(
        pairs(fetch_params(&effects)),
        vec![("vu", "12"), ("vq", "mugs")]
    );
}

#[test]
fn vendor_filters_still_apply() {
    let session = SearchSession::new();
    let (session, _) = update(session, Msg::VendorOpened { vendor_id: 12 });
    let filters = FilterSet {
        on_sale: true,
        ..FilterSet::default()
    };
    let (_, effects) = update(session, Msg::FiltersApplied(filters));
    assert_eq!(
        pairs(fetch_params(&effects)),
        vec![("vu", "12"), ("onsale", "1")]
    );
}

#[test]
fn related_mode_emits_only_the_target() {
    // Filters set beforehand must not leak into a related request.
    let filters = FilterSet {
        price_from: Some(10),
        on_sale: true,
        ..FilterSet::default()
    };
    let (session, _) = update(SearchSession::new(), Msg::FiltersApplied(filters));
    let (_, effects) = update(
        session,
        Msg::RelatedRequested {
            key: ProductKey::new(12, 340),
        },
    );
    assert_eq!(pairs(fetch_params(&effects)), vec![("vs", "12.340")]);
}

#[test]
fn composite_key_parses_and_prints_canonically() {
    let key = ProductKey::parse("12.340").unwrap();
    assert_eq!(key, ProductKey::new(12, 340));
    assert_eq!(key.to_string(), "12.340");

    assert!(ProductKey::parse("12").is_none());
    assert!(ProductKey::parse("12.3.4").is_none());
    assert!(ProductKey::parse("a.4").is_none());
    assert!(ProductKey::parse("12.").is_none());

    let storefront = ProductKey::vendor_only(12);
    assert_eq!(storefront.to_string(), "12.0");
    assert!(storefront.is_vendor_only());
    assert!(!key.is_vendor_only());
}
