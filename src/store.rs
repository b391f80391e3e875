use core::fmt;

use embassy_sync::once_lock::OnceLock;
use log::info;

use crate::config::{self, RawConfig};
use crate::constants::SSID_MAX_LEN;
use crate::credentials::{MqttEndpoint, WifiCredential};

/// Required provisioning fields, named in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    MqttUrl,
    MqttPort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required field was empty or invalid when `load` ran.
    MissingCredential(Field),
    /// `get` was called before a successful `load`.
    NotInitialized,
}

/// Finalized connection settings. Only constructed from raw values that
/// passed validation, so readers never observe a partially provisioned state.
pub struct ConnectionConfig {
    wifi_ssid: &'static str,
    wifi_password: &'static str,
    weather_api_key: &'static str,
    mqtt_url: &'static str,
    mqtt_port: u16,
    mqtt_username: &'static str,
    mqtt_password: &'static str,
}

impl ConnectionConfig {
    fn from_raw(raw: &RawConfig) -> Result<Self, Error> {
        if raw.wifi_ssid.is_empty() || raw.wifi_ssid.len() > SSID_MAX_LEN {
            return Err(Error::MissingCredential(Field::WifiSsid));
        }
        if raw.mqtt_url.is_empty() {
            return Err(Error::MissingCredential(Field::MqttUrl));
        }
        if raw.mqtt_port == 0 {
            return Err(Error::MissingCredential(Field::MqttPort));
        }

        Ok(Self {
            wifi_ssid: raw.wifi_ssid,
            wifi_password: raw.wifi_password,
            weather_api_key: raw.weather_api_key,
            mqtt_url: raw.mqtt_url,
            mqtt_port: raw.mqtt_port,
            mqtt_username: raw.mqtt_username,
            mqtt_password: raw.mqtt_password,
        })
    }

    /// Credentials for the Wi-Fi join logic.
    pub fn wifi(&self) -> WifiCredential {
        WifiCredential {
            ssid: self.wifi_ssid,
            password: self.wifi_password,
        }
    }

    /// Broker settings for the MQTT client.
    pub fn mqtt(&self) -> MqttEndpoint {
        MqttEndpoint {
            url: self.mqtt_url,
            port: self.mqtt_port,
            username: self.mqtt_username,
            password: self.mqtt_password,
        }
    }

    /// API key for the weather service client.
    pub fn weather_api_key(&self) -> &'static str {
        self.weather_api_key
    }
}

// passwords and the API key must not reach the logs
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &"<redacted>")
            .field("weather_api_key", &"<redacted>")
            .field("mqtt_url", &self.mqtt_url)
            .field("mqtt_port", &self.mqtt_port)
            .field("mqtt_username", &self.mqtt_username)
            .field("mqtt_password", &"<redacted>")
            .finish()
    }
}

/// Holder of the finalized configuration. Loaded once before the network
/// tasks start, read-only from any task afterwards.
pub struct ConfigStore {
    cell: OnceLock<ConnectionConfig>,
}

impl ConfigStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Validates `raw` and finalizes the store. The first successful call
    /// wins; later calls return the already finalized configuration.
    pub fn load(&self, raw: &RawConfig) -> Result<&ConnectionConfig, Error> {
        if let Some(config) = self.cell.try_get() {
            return Ok(config);
        }

        let config = ConnectionConfig::from_raw(raw)?;
        info!(
            "Configuration finalized: SSID {:?}, MQTT broker {}:{}",
            config.wifi_ssid, config.mqtt_url, config.mqtt_port
        );

        let _ = self.cell.init(config);
        self.cell.try_get().ok_or(Error::NotInitialized)
    }

    /// Returns the finalized configuration.
    pub fn get(&self) -> Result<&ConnectionConfig, Error> {
        self.cell.try_get().ok_or(Error::NotInitialized)
    }
}

static STORE: ConfigStore = ConfigStore::new();

/// Validates the build-time provisioning values and finalizes the
/// process-wide store.
pub fn load() -> Result<&'static ConnectionConfig, Error> {
    STORE.load(&config::PROVISIONED)
}

/// Read-only access to the process-wide configuration.
pub fn get() -> Result<&'static ConnectionConfig, Error> {
    STORE.get()
}
