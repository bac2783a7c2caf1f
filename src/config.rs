use log::Level;

/// Distance below the top of the viewport used to decide which section is "current".
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// Hero content shift at full page scroll, in percent of its own height.
pub const PARALLAX_MAX_PERCENT: f64 = 50.0;

/// How long the contact acknowledgment stays on screen.
pub const NOTICE_DURATION_MS: u32 = 4000;

pub const PROFILE_IMAGE: &str = "images/sori.jpeg";

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/public/"  // trunk serve mounts dist/ at the root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "public/"  // relative, so the build also works under a sub-path
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn profile_image_src() -> String {
    format!("{}{}", get_asset_base(), PROFILE_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_image_is_relative_to_asset_base() {
        let src = profile_image_src();
        assert!(src.starts_with(get_asset_base()));
        assert!(src.ends_with("images/sori.jpeg"));
    }
}
