pub mod api;
pub mod api_docs;
pub mod domain;
pub mod google_books;
pub mod infrastructure;
pub mod intent;
pub mod services;
pub mod transcript;

pub use infrastructure::config;
pub use infrastructure::server;
