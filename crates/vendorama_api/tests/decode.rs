use pretty_assertions::assert_eq;
use vendorama_api::{decode_page, DecodeError};

#[test]
fn decodes_a_full_envelope() {
    let body = br#"{
        "results": [
            {
                "user_id": 12,
                "item_id": 340,
                "name": "Leather boots",
                "price": "120",
                "sale_price": "90",
                "image": "/img/boots.jpg",
                "url": "/p/12.340",
                "store_name": "Boot Barn",
                "locality": "Tbilisi",
                "cat": 7
            }
        ],
        "total_rs": 41,
        "page": 1,
        "per_page": 20,
        "vendor": []
    }"#;

    let page = decode_page(body).unwrap();
    assert_eq!(page.total, 41);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 20);
    assert!(page.vendors.is_empty());
    assert_eq!(page.products.len(), 1);

    let row = &page.products[0];
    assert_eq!(row.vendor_id, 12);
    assert_eq!(row.product_id, 340);
    assert_eq!(row.name, "Leather boots");
    assert_eq!(row.sale_price.as_deref(), Some("90"));
    assert_eq!(row.category, Some(7));
}

#[test]
fn accepts_numeric_string_ids() {
    let body = br#"{
        "results": [
            {"user_id": "12", "item_id": "340", "name": "A"}
        ],
        "total_rs": "41",
        "page": "2",
        "vendor": [
            {"user_id": "55", "name": "Store", "username": "store55"}
        ]
    }"#;

    let page = decode_page(body).unwrap();
    assert_eq!(page.total, 41);
    assert_eq!(page.page, 2);
    assert_eq!(page.products[0].vendor_id, 12);
    assert_eq!(page.products[0].product_id, 340);
    assert_eq!(page.vendors[0].id, 55);
}

#[test]
fn drops_rows_with_unresolvable_ids() {
    // Never coerce: "12a" and a missing item_id both fail closed, reducing
    // the row set rather than failing the page.
    let body = br#"{
        "results": [
            {"user_id": "12a", "item_id": 1, "name": "bad vendor id"},
            {"user_id": 12, "name": "missing item id"},
            {"user_id": 12, "item_id": 2, "name": "kept"}
        ],
        "total_rs": 3,
        "vendor": [
            {"user_id": true, "name": "bad", "username": "x"}
        ]
    }"#;

    let page = decode_page(body).unwrap();
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "kept");
    assert!(page.vendors.is_empty());
}

#[test]
fn vendor_categories_decode_with_flexible_ids() {
    let body = br#"{
        "results": [],
        "total_rs": 0,
        "vendor": [{
            "user_id": 9,
            "name": "Niche Goods",
            "username": "niche",
            "locality": "Batumi",
            "categories": [
                {"id": "3", "name": "Hats"},
                {"id": 4, "name": "Scarves"},
                {"id": "oops", "name": "dropped"}
            ]
        }]
    }"#;

    let page = decode_page(body).unwrap();
    let vendor = &page.vendors[0];
    assert_eq!(vendor.locality.as_deref(), Some("Batumi"));
    assert_eq!(vendor.categories.len(), 2);
    assert_eq!(vendor.categories[0].id, 3);
    assert_eq!(vendor.categories[1].name, "Scarves");
}

#[test]
fn missing_optional_fields_default() {
    let body = br#"{"results": [{"user_id": 1, "item_id": 2}], "total_rs": 1}"#;

    let page = decode_page(body).unwrap();
    let row = &page.products[0];
    assert_eq!(row.name, "");
    assert_eq!(row.sale_price, None);
    assert_eq!(row.category, None);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 0);
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = decode_page(b"{not json").unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn wrong_envelope_shape_is_a_decode_error() {
    // total_rs is part of the envelope contract, not row-level noise.
    let err = decode_page(br#"{"results": []}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}
