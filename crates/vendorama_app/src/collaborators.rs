use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use vendorama_core::{CategoryId, LocationId, Product, ProductKey, VendorId};

/// Read side of the favorites persistence collaborator.
///
/// The session core never writes favorites; it only needs to know which
/// composite keys are favorited so rows can render their heart state. A
/// vendor-only favorite uses the `product_id = 0` sentinel key.
pub trait FavoriteStore: Send + Sync {
    fn is_favorite(&self, key: ProductKey) -> bool;
    fn favorite_keys(&self) -> HashSet<ProductKey>;
}

/// Populate hook for the shared product cache.
///
/// The detail screen reads products from this cache by composite key; the
/// session feeds it every newly admitted row so navigation never refetches.
pub trait ProductCache: Send + Sync {
    fn populate(&self, products: &[Product]);
}

/// Read-through resolution of category/location/vendor display names.
///
/// Backed elsewhere by the auxiliary lookup endpoints; lazily populated and
/// keyed by id. The core only reads.
pub trait NameDirectory: Send + Sync {
    fn category_name(&self, id: CategoryId) -> Option<String>;
    fn location_name(&self, id: LocationId) -> Option<String>;
    fn vendor_name(&self, id: VendorId) -> Option<String>;
}

/// In-memory favorites, for tests and previews.
#[derive(Default)]
pub struct MemoryFavorites {
    keys: Mutex<HashSet<ProductKey>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, key: ProductKey) {
        self.keys.lock().unwrap().insert(key);
    }

    pub fn remove(&self, key: ProductKey) {
        self.keys.lock().unwrap().remove(&key);
    }
}

impl FavoriteStore for MemoryFavorites {
    fn is_favorite(&self, key: ProductKey) -> bool {
        self.keys.lock().unwrap().contains(&key)
    }

    fn favorite_keys(&self) -> HashSet<ProductKey> {
        self.keys.lock().unwrap().clone()
    }
}

/// In-memory product cache, for tests and previews.
#[derive(Default)]
pub struct MemoryProductCache {
    products: Mutex<HashMap<ProductKey, Product>>,
}

impl MemoryProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ProductKey) -> Option<Product> {
        self.products.lock().unwrap().get(&key).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.lock().unwrap().is_empty()
    }
}

impl ProductCache for MemoryProductCache {
    fn populate(&self, products: &[Product]) {
        let mut cached = self.products.lock().unwrap();
        for product in products {
            cached.insert(product.key, product.clone());
        }
    }
}

/// In-memory name directory, for tests and previews.
#[derive(Default)]
pub struct MemoryNames {
    categories: Mutex<HashMap<CategoryId, String>>,
    locations: Mutex<HashMap<LocationId, String>>,
    vendors: Mutex<HashMap<VendorId, String>>,
}

impl MemoryNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&self, id: CategoryId, name: impl Into<String>) {
        self.categories.lock().unwrap().insert(id, name.into());
    }

    pub fn set_location(&self, id: LocationId, name: impl Into<String>) {
        self.locations.lock().unwrap().insert(id, name.into());
    }

    pub fn set_vendor(&self, id: VendorId, name: impl Into<String>) {
        self.vendors.lock().unwrap().insert(id, name.into());
    }
}

impl NameDirectory for MemoryNames {
    fn category_name(&self, id: CategoryId) -> Option<String> {
        self.categories.lock().unwrap().get(&id).cloned()
    }

    fn location_name(&self, id: LocationId) -> Option<String> {
        self.locations.lock().unwrap().get(&id).cloned()
    }

    fn vendor_name(&self, id: VendorId) -> Option<String> {
        self.vendors.lock().unwrap().get(&id).cloned()
    }
}
