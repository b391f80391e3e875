/// Credentials handed to the Wi-Fi join logic.
#[derive(Clone, Copy)]
pub struct WifiCredential {
    pub(crate) ssid: &'static str,
    pub(crate) password: &'static str,
}

impl WifiCredential {
    pub fn ssid(&self) -> &'static str {
        self.ssid
    }

    pub fn password(&self) -> &'static str {
        self.password
    }
}

/// Broker settings handed to the MQTT client.
#[derive(Clone, Copy)]
pub struct MqttEndpoint {
    pub(crate) url: &'static str,
    pub(crate) port: u16,
    pub(crate) username: &'static str,
    pub(crate) password: &'static str,
}

impl MqttEndpoint {
    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Empty when the broker allows anonymous access.
    pub fn username(&self) -> &'static str {
        self.username
    }

    pub fn password(&self) -> &'static str {
        self.password
    }
}
