use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
struct Provisioning {
    wifi_ssid: String,
    wifi_password: String,
    weather_api_key: String,
    mqtt_url: String,
    mqtt_port: u16,
    mqtt_username: String,
    mqtt_password: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: Provisioning = toml::from_str(&toml_str)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("provisioned.rs");
    let code = format!(
        r#"
        pub const PROVISIONED: RawConfig = RawConfig {{
            wifi_ssid: {ssid:?},
            wifi_password: {pass:?},
            weather_api_key: {key:?},
            mqtt_url: {mu:?},
            mqtt_port: {mp},
            mqtt_username: {mun:?},
            mqtt_password: {mpw:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        pass = raw.wifi_password,
        key = raw.weather_api_key,
        mu = raw.mqtt_url,
        mp = raw.mqtt_port,
        mun = raw.mqtt_username,
        mpw = raw.mqtt_password,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
