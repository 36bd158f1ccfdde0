pub mod config;
pub use self::config::AppConfig;
