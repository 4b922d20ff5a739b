use serde::Deserialize;

use crate::types::{ProductRow, SearchPage, VendorCategoryRow, VendorRow};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed response json: {0}")]
    Json(String),
}

/// An id field the server sends sometimes as a JSON number, sometimes as a
/// numeric string. Resolution fails closed: integer accepted, numeric string
/// parsed, anything else `None`. Never coerced.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
enum FlexId {
    Int(u64),
    Text(String),
    // Bools, floats, nulls, objects: present but not an id. Captured so one
    // bad row cannot fail the envelope; resolution returns `None`.
    Other(serde_json::Value),
}

impl FlexId {
    fn resolve(&self) -> Option<u64> {
        match self {
            FlexId::Int(value) => Some(*value),
            FlexId::Text(text) => text.trim().parse().ok(),
            FlexId::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    results: Vec<RawProduct>,
    total_rs: FlexId,
    #[serde(default)]
    page: Option<FlexId>,
    #[serde(default)]
    per_page: Option<FlexId>,
    #[serde(default)]
    vendor: Vec<RawVendor>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    user_id: Option<FlexId>,
    item_id: Option<FlexId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    sale_price: Option<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    store_name: String,
    #[serde(default)]
    locality: String,
    #[serde(default)]
    cat: Option<FlexId>,
}

#[derive(Debug, Deserialize)]
struct RawVendor {
    user_id: Option<FlexId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    about: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(default)]
    categories: Vec<RawVendorCategory>,
}

#[derive(Debug, Deserialize)]
struct RawVendorCategory {
    id: Option<FlexId>,
    #[serde(default)]
    name: String,
}

/// Decodes one response body into a [`SearchPage`].
///
/// Fails only on malformed JSON or a wrong envelope shape. Row-level id
/// failures never fail the page: a product or vendor row whose id does not
/// resolve to an integer is dropped at this boundary, so nothing downstream
/// ever sees a stringly or missing id.
pub fn decode_page(bytes: &[u8]) -> Result<SearchPage, DecodeError> {
    let raw: RawEnvelope =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))?;

    let products = raw
        .results
        .into_iter()
        .filter_map(decode_product)
        .collect();
    let vendors = raw.vendor.into_iter().filter_map(decode_vendor).collect();

    Ok(SearchPage {
        products,
        vendors,
        total: resolve_count(raw.total_rs.resolve()),
        page: raw.page.and_then(|id| id.resolve()).unwrap_or(1) as u32,
        per_page: resolve_count(raw.per_page.and_then(|id| id.resolve())),
    })
}

fn resolve_count(value: Option<u64>) -> u32 {
    value.map(|count| count.min(u32::MAX as u64) as u32).unwrap_or(0)
}

fn decode_product(raw: RawProduct) -> Option<ProductRow> {
    let vendor_id = raw.user_id.as_ref()?.resolve()?;
    let product_id = raw.item_id.as_ref()?.resolve()?;
    Some(ProductRow {
        vendor_id,
        product_id,
        name: raw.name,
        price: raw.price,
        sale_price: raw.sale_price,
        image: raw.image,
        url: raw.url,
        vendor_name: raw.store_name,
        locality: raw.locality,
        category: raw.cat.and_then(|id| id.resolve()),
    })
}

fn decode_vendor(raw: RawVendor) -> Option<VendorRow> {
    let id = raw.user_id.as_ref()?.resolve()?;
    let categories = raw
        .categories
        .into_iter()
        .filter_map(|category| {
            let id = category.id.as_ref()?.resolve()?;
            Some(VendorCategoryRow {
                id,
                name: category.name,
            })
        })
        .collect();
    Some(VendorRow {
        id,
        name: raw.name,
        username: raw.username,
        about: raw.about,
        phone: raw.phone,
        email: raw.email,
        website: raw.website,
        locality: raw.locality,
        categories,
    })
}
