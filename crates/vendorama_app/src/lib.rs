//! Vendorama app: the binding layer between the session core, the api
//! engine and the embedding UI.
mod collaborators;
mod controller;
mod map;

pub use collaborators::{
    FavoriteStore, MemoryFavorites, MemoryNames, MemoryProductCache, NameDirectory, ProductCache,
};
pub use controller::SearchController;
