//! Floating tooltip shared by every chart.
//!
//! Marks write [`TooltipState`] from their hover handlers; the overlay
//! positions itself at the pointer, shifted left by half its own width and
//! up by its full height plus a small gap so it hovers above the cursor.
//! The box is measured after it renders; until the first measurement an
//! estimate from the content keeps the offset close.

use std::rc::Rc;

use dioxus::prelude::*;

const POINTER_GAP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub page_x: f64,
    pub page_y: f64,
    pub lines: Vec<String>,
}

impl TooltipState {
    pub fn show_at(&mut self, page_x: f64, page_y: f64, lines: Vec<String>) {
        self.visible = true;
        self.page_x = page_x;
        self.page_y = page_y;
        self.lines = lines;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[component]
pub fn Tooltip(state: Signal<TooltipState>) -> Element {
    let mut anchor = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut measured = use_signal(|| Option::<(f64, f64)>::None);

    // Re-measure whenever the content changes; a hidden box reports zero
    // size, which the guard below discards.
    use_effect(move || {
        let _lines = state.read().lines.clone();
        if let Some(element) = anchor() {
            spawn(async move {
                if let Ok(rect) = element.get_client_rect().await {
                    if rect.size.width > 0.0 && rect.size.height > 0.0 {
                        measured.set(Some((rect.size.width, rect.size.height)));
                    }
                }
            });
        }
    });

    let snapshot = state();
    let (width, height) = measured().unwrap_or_else(|| estimated_size(&snapshot.lines));

    let style = if snapshot.visible {
        format!(
            "display: block; left: {:.0}px; top: {:.0}px;",
            snapshot.page_x - width / 2.0,
            snapshot.page_y - height - POINTER_GAP,
        )
    } else {
        "display: none;".to_string()
    };

    rsx! {
        div {
            class: "chart-tooltip",
            style: "{style}",
            onmounted: move |event| anchor.set(Some(event.data())),
            for (index, line) in snapshot.lines.iter().enumerate() {
                if index > 0 {
                    hr { key: "rule-{index}" }
                }
                small { key: "line-{index}", "{line}" }
            }
        }
    }
}

/// Rough box size from the content, used before the first DOM measurement.
fn estimated_size(lines: &[String]) -> (f64, f64) {
    let widest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = (widest as f64 * 6.5).clamp(60.0, 200.0);
    let height = lines.len().max(1) as f64 * 16.0 + 10.0;
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide_round_trips() {
        let mut state = TooltipState::default();
        assert!(!state.visible);

        state.show_at(120.0, 80.0, vec!["1980 Q2".into(), "$2.7 Billion".into()]);
        assert!(state.visible);
        assert_eq!(state.lines.len(), 2);

        state.hide();
        assert!(!state.visible);
        // Content is retained so a quick re-entry shows the same box.
        assert_eq!(state.lines.len(), 2);
    }

    #[test]
    fn estimate_grows_with_content_but_stays_clamped() {
        let (narrow, _) = estimated_size(&["ab".into()]);
        assert_eq!(narrow, 60.0);

        let (wide, tall) = estimated_size(&[
            "a very long tooltip line that would overflow the box".into(),
            "second".into(),
            "third".into(),
        ]);
        assert_eq!(wide, 200.0);
        assert!(tall > 50.0);
    }
}
