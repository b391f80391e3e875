/// Raw provisioning values as embedded at build time, before validation.
/// `store::load` turns these into a finalized [`ConnectionConfig`].
///
/// [`ConnectionConfig`]: crate::store::ConnectionConfig
pub struct RawConfig {
    // MQTT password for authentication (may be empty)
    pub mqtt_password: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS); 0 means not provisioned
    pub mqtt_port: u16,

    // MQTT broker hostname or IP address
    pub mqtt_url: &'static str,

    // MQTT username for authentication (may be empty)
    pub mqtt_username: &'static str,

    // API key for the weather service
    pub weather_api_key: &'static str,

    // Wi-Fi password (empty for an open network)
    pub wifi_password: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,
}

// provisioning values are generated at compile time from cfg.toml
include!(concat!(env!("OUT_DIR"), "/provisioned.rs"));
