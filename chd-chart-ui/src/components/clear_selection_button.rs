//! Button that empties both selection sets.

use crate::state::AppState;
use dioxus::prelude::*;

/// Clears clicked and brushed counties and removes the brush rectangle.
/// Disabled while nothing is selected.
#[component]
pub fn ClearSelectionButton() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.selection.read().len();

    rsx! {
        button {
            id: "clearSelection",
            style: "margin: 8px 0; padding: 4px 12px;",
            disabled: selected == 0,
            onclick: move |_| {
                state.selection.write().clear();
                state.brush.set(None);
                log::info!("[CHD] selection cleared");
            },
            if selected == 0 {
                "Clear selection"
            } else {
                "Clear selection ({selected})"
            }
        }
    }
}
