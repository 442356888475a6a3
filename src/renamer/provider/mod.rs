mod http;
mod tmdb;
mod traits;

pub use http::HttpClient;
pub use tmdb::TmdbCatalog;
pub use traits::CatalogClient;
