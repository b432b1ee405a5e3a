//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::TOKEN_ENV;
