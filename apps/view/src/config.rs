/// Region shown when the page URL carries no usable `region` parameter.
pub const DEFAULT_REGION: &str = "CQ_14";

/// Callsign lookup prefix; the encoded callsign is appended.
pub const QRZ_URL: &str = "https://qrz.com/db/";

/// API base used by the headless renderer when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable consulted for the headless renderer's API base.
pub const API_BASE_ENV: &str = "REGION_VIEW_API";

/// Rendering options shared by the browser shell and the headless renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub qrz_url: String,
    pub default_region: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            qrz_url: QRZ_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}
