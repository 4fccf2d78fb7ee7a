//! Configuration module

mod site;

pub use site::InfoConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
pub use site::SourceConfig;
pub use site::TwitterConfig;
