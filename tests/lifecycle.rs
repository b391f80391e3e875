use station_config::config::RawConfig;
use station_config::{ConfigStore, Error, Field};

fn provisioned() -> RawConfig {
    RawConfig {
        wifi_ssid: "Home",
        wifi_password: "secret",
        weather_api_key: "token",
        mqtt_url: "broker.local",
        mqtt_port: 1883,
        mqtt_username: "",
        mqtt_password: "",
    }
}

// The process-wide store: nothing in this binary loads it, so get() must
// report the unloaded state.
#[test]
fn test_global_get_before_load_fails() {
    assert_eq!(station_config::get().err(), Some(Error::NotInitialized));
}

#[test]
fn test_unloaded_to_loaded_lifecycle() {
    let store = ConfigStore::new();
    assert_eq!(store.get().err(), Some(Error::NotInitialized));

    let config = store.load(&provisioned()).expect("valid provisioning must load");

    let wifi = config.wifi();
    assert_eq!(wifi.ssid(), "Home");
    assert_eq!(wifi.password(), "secret");

    let mqtt = config.mqtt();
    assert_eq!(mqtt.url(), "broker.local");
    assert_eq!(mqtt.port(), 1883);
    assert_eq!(mqtt.username(), "");
    assert_eq!(mqtt.password(), "");

    assert_eq!(config.weather_api_key(), "token");

    // the transition is one-directional; a later load keeps the first values
    let other = RawConfig {
        wifi_ssid: "Elsewhere",
        ..provisioned()
    };
    let config = store.load(&other).expect("later loads return the finalized config");
    assert_eq!(config.wifi().ssid(), "Home");
}

#[test]
fn test_placeholder_provisioning_is_rejected() {
    let store = ConfigStore::new();
    let empty = RawConfig {
        wifi_ssid: "",
        wifi_password: "",
        weather_api_key: "",
        mqtt_url: "",
        mqtt_port: 0,
        mqtt_username: "",
        mqtt_password: "",
    };
    assert_eq!(
        store.load(&empty).err(),
        Some(Error::MissingCredential(Field::WifiSsid))
    );
}
