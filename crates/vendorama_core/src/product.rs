use std::fmt;

pub type VendorId = u64;
pub type ProductId = u64;
pub type CategoryId = u64;
pub type LocationId = u64;

/// Composite product identity: `"{vendor_id}.{product_id}"`.
///
/// This pair, not a server-issued single id, is the stable key used for
/// deduplication, favoriting and list diffing. `product_id == 0` is the
/// vendor-only sentinel (a favorited storefront rather than an item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey {
    pub vendor_id: VendorId,
    pub product_id: ProductId,
}

impl ProductKey {
    pub fn new(vendor_id: VendorId, product_id: ProductId) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }

    /// Key for a favorited storefront rather than an item.
    pub fn vendor_only(vendor_id: VendorId) -> Self {
        Self {
            vendor_id,
            product_id: 0,
        }
    }

    pub fn is_vendor_only(&self) -> bool {
        self.product_id == 0
    }

    /// Parses the canonical `"{vendor_id}.{product_id}"` form.
    ///
    /// Exactly two base-10 integers joined by a single dot; anything else is
    /// rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (vendor, product) = text.split_once('.')?;
        if product.contains('.') {
            return None;
        }
        let vendor_id = vendor.parse::<VendorId>().ok()?;
        let product_id = product.parse::<ProductId>().ok()?;
        Some(Self {
            vendor_id,
            product_id,
        })
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.vendor_id, self.product_id)
    }
}

/// One marketplace listing as the session accumulates it.
///
/// Immutable once received; prices are display strings exactly as the server
/// sends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
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

/// A storefront profile, as returned alongside vendor-matching results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub username: String,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub locality: Option<String>,
    pub categories: Vec<VendorCategory>,
}

/// A category scoped to one vendor's storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCategory {
    pub id: CategoryId,
    pub name: String,
}

/// One decoded result page, already mapped to domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub products: Vec<Product>,
    pub vendors: Vec<Vendor>,
    /// Server-reported total across all pages; authoritative.
    pub total: u32,
}
