#![cfg_attr(not(test), no_std)]

//! Connection settings for the station firmware: Wi-Fi credentials, the
//! weather API key and the MQTT broker address. Values come from `cfg.toml`
//! at build time, are validated once at startup by [`load`], and stay
//! read-only for the lifetime of the process.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod store;

pub use credentials::{MqttEndpoint, WifiCredential};
pub use store::{get, load, ConfigStore, ConnectionConfig, Error, Field};
