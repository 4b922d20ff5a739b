use crate::product::{CategoryId, Product, ProductKey, Vendor, VendorCategory, VendorId};
use crate::session::SearchMode;

/// Observable surface the UI binds to. Recomputed from the session after
/// every dirty update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub mode: SearchMode,
    pub products: Vec<ProductRowView>,
    pub loading: bool,
    pub has_more: bool,
    pub total_count: Option<u32>,
    /// Distinguishes "never searched" from "searched, zero results".
    pub has_searched: bool,
    pub active_filter_count: usize,
    pub can_go_back: bool,
    pub query: String,
    /// Storefront header data when browsing a vendor.
    pub vendor: Option<VendorView>,
    /// Last fetch failure, display-formatted; informational only.
    pub last_error: Option<String>,
}

/// One result row. `composite_id` is the stable diffing key across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowView {
    pub composite_id: String,
    pub key: ProductKey,
    pub name: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub image: String,
    pub url: String,
    pub vendor_name: String,
    pub locality: String,
    pub category: Option<CategoryId>,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            composite_id: product.key.to_string(),
            key: product.key,
            name: product.name.clone(),
            price: product.price.clone(),
            sale_price: product.sale_price.clone(),
            image: product.image.clone(),
            url: product.url.clone(),
            vendor_name: product.vendor_name.clone(),
            locality: product.locality.clone(),
            category: product.category,
        }
    }
}

/// Storefront header fields for vendor mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorView {
    pub id: VendorId,
    pub name: String,
    pub username: String,
    pub locality: Option<String>,
    pub about: Option<String>,
    pub categories: Vec<VendorCategory>,
}

impl From<&Vendor> for VendorView {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name.clone(),
            username: vendor.username.clone(),
            locality: vendor.locality.clone(),
            about: vendor.about.clone(),
            categories: vendor.categories.clone(),
        }
    }
}
