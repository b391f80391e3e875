/// Maximum SSID length in bytes allowed by IEEE 802.11
pub const SSID_MAX_LEN: usize = 32;
