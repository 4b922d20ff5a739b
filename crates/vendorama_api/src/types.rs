use std::fmt;

/// One ordered request parameter pair, exactly as the query builder emits it.
pub type ParamPair = (&'static str, String);

/// Correlates a fetch command with the session generation and page that
/// requested it. The binding layer round-trips it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTag {
    pub epoch: u64,
    pub page: u32,
}

/// A decoded result page as it crosses the engine boundary.
///
/// Rows carry resolved integer ids; rows whose ids failed to resolve were
/// already dropped by the decode step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub products: Vec<ProductRow>,
    pub vendors: Vec<VendorRow>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

/// One product row off the wire, ids already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub vendor_id: u64,
    pub product_id: u64,
    pub name: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub image: String,
    pub url: String,
    pub vendor_name: String,
    pub locality: String,
    pub category: Option<u64>,
}

/// One vendor row off the wire, id already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRow {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub locality: Option<String>,
    pub categories: Vec<VendorCategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCategoryRow {
    pub id: u64,
    pub name: String,
}

/// A failed page fetch. Crosses the boundary as a value; the session folds it
/// into its own failure type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    TooLarge,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge => write!(f, "response too large"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
