#![cfg(test)]
//! Ensures the stylesheets the app links at runtime stay present & non-trivial.
//!
//! The asset pipeline only fails at *runtime* if a stylesheet goes missing or
//! is accidentally truncated; this fails the build early instead. If you
//! rename or relocate a stylesheet, update both this test and the matching
//! `asset!` constant.

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const NAV_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/project_nav.css"
));
const CHARTS_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/charts.css"
));

#[test]
fn stylesheets_exist_and_are_not_empty() {
    for (name, css) in [
        ("main.css", MAIN_CSS),
        ("project_nav.css", NAV_CSS),
        ("charts.css", CHARTS_CSS),
    ] {
        assert!(
            !css.trim().is_empty(),
            "{name} appears to be empty. If this is intentional, remove the test."
        );
    }
}

#[test]
fn theme_contains_expected_tokens() {
    let required = ["--color-bg", ".page-container", "body {", ".page-footer"];
    for token in required {
        assert!(
            MAIN_CSS.contains(token),
            "Expected token `{token}` missing from main.css"
        );
    }
}

#[test]
fn chart_chrome_selectors_survive() {
    let required = [
        ".chart-tooltip",
        ".axis",
        ".legend",
        ".cell:hover",
        ".county:hover",
        ".treemap-switcher",
    ];
    for token in required {
        assert!(
            CHARTS_CSS.contains(token),
            "Expected selector `{token}` missing from charts.css"
        );
    }
}

#[test]
fn nav_styles_cover_both_layouts() {
    for token in [".project-nav--inline", ".project-nav__list--dropdown"] {
        assert!(
            NAV_CSS.contains(token),
            "Expected selector `{token}` missing from project_nav.css"
        );
    }
}
