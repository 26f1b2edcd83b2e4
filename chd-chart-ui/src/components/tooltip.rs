//! Floating tooltip that follows the pointer.

use crate::state::{AppState, Tooltip};
use dioxus::prelude::*;

/// Renders `AppState::tooltip` at its page position; hidden when `None`.
#[component]
pub fn TooltipBox() -> Element {
    let state = use_context::<AppState>();
    let Some(Tooltip {
        left,
        top,
        title,
        rows,
    }) = (state.tooltip)()
    else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "tooltip",
            style: "position: absolute; left: {left}px; top: {top}px; pointer-events: none; background: rgba(255, 255, 255, 0.95); border: 1px solid #999; border-radius: 4px; padding: 6px 8px; font-size: 12px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);",
            if let Some(title) = title {
                strong { "{title}" }
                br {}
            }
            for (i, (label, value)) in rows.into_iter().enumerate() {
                if i > 0 {
                    br {}
                }
                "{label}: {value}"
            }
        }
    }
}
