pub mod file_loader;
pub mod http_loader;
pub mod static_loader;
pub mod traits;

pub use file_loader::FileMoviesLoader;
pub use http_loader::{HttpImageLoader, HttpMoviesLoader};
pub use static_loader::{NoopImageLoader, StaticMoviesLoader};
pub use traits::{ImageLoader, MoviesLoader};
