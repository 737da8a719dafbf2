//! Media-query read deciding which navigation layout to mount.

/// Breakpoint below which the chart selector renders as a dropdown.
pub const SMALL_SCREEN_QUERY: &str = "screen and (max-width: 639px)";

#[cfg(target_arch = "wasm32")]
pub fn is_small_screen() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(SMALL_SCREEN_QUERY).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Outside the browser there is no viewport to query; default to the
/// inline large-screen layout.
#[cfg(not(target_arch = "wasm32"))]
pub fn is_small_screen() -> bool {
    false
}
