use std::env;

pub const DEFAULT_BUSINESS_NAME: &str = "Nexus Master Lab";
pub const DEFAULT_CITY: &str = "Savannah, GA";
pub const DEFAULT_THEME_COLOR: &str = "#38bdf8";

/// Portal branding, resolved once at startup.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub business_name: String,
    pub city: String,
    pub theme_color: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve from a lookup function: the process environment in
    /// production, a closure in tests. A theme color that is not a hex
    /// color falls back to the default.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let theme_color = match get("NEXUS_THEME_COLOR") {
            Some(color) if is_hex_color(&color) => color,
            Some(color) => {
                log::warn!("ignoring NEXUS_THEME_COLOR '{}': not a hex color", color);
                DEFAULT_THEME_COLOR.to_string()
            }
            None => DEFAULT_THEME_COLOR.to_string(),
        };
        Self {
            business_name: get("NEXUS_BUSINESS_NAME")
                .unwrap_or_else(|| DEFAULT_BUSINESS_NAME.to_string()),
            city: get("NEXUS_CITY").unwrap_or_else(|| DEFAULT_CITY.to_string()),
            theme_color,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
