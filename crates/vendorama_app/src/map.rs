use vendorama_api::{FailureKind, FetchError, ProductRow, SearchPage, VendorRow};
use vendorama_core::{
    Page, Product, ProductKey, SearchFailure, SearchFailureKind, Vendor, VendorCategory,
};

/// Maps one decoded wire page to the core's domain page, building composite
/// keys from the validated row ids.
pub(crate) fn map_page(page: SearchPage) -> Page {
    Page {
        products: page.products.into_iter().map(map_product).collect(),
        vendors: page.vendors.into_iter().map(map_vendor).collect(),
        total: page.total,
    }
}

fn map_product(row: ProductRow) -> Product {
    Product {
        key: ProductKey::new(row.vendor_id, row.product_id),
        name: row.name,
        price: row.price,
        sale_price: row.sale_price,
        image: row.image,
        url: row.url,
        vendor_name: row.vendor_name,
        locality: row.locality,
        category: row.category,
    }
}

fn map_vendor(row: VendorRow) -> Vendor {
    Vendor {
        id: row.id,
        name: row.name,
        username: row.username,
        about: row.about,
        phone: row.phone,
        email: row.email,
        website: row.website,
        locality: row.locality,
        categories: row
            .categories
            .into_iter()
            .map(|category| VendorCategory {
                id: category.id,
                name: category.name,
            })
            .collect(),
    }
}

/// Folds the engine failure taxonomy into the session's. Timeouts and the
/// size cap are transport-level failures as far as the session cares.
pub(crate) fn map_error(error: FetchError) -> SearchFailure {
    let kind = match error.kind {
        FailureKind::Network | FailureKind::Timeout | FailureKind::TooLarge => {
            SearchFailureKind::Network
        }
        FailureKind::HttpStatus(code) => SearchFailureKind::HttpStatus(code),
        FailureKind::Decode => SearchFailureKind::Decode,
    };
    SearchFailure::new(kind, error.message)
}
