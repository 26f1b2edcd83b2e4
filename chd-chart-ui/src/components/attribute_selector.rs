//! Dropdown for the attribute shown on the map, the histogram and the
//! scatterplot X axis.

use crate::state::AppState;
use chd_core::Attribute;
use dioxus::prelude::*;

/// Attribute dropdown.
/// Changing the attribute drops the scatterplot brush, since its rectangle
/// no longer covers the same counties once the X axis changes.
#[component]
pub fn AttributeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.attribute)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Attribute>() {
        Ok(attribute) => {
            log::info!("[CHD] attribute changed to {}", attribute.column());
            state.attribute.set(attribute);
            state.reset_brush();
        }
        Err(e) => log::warn!("[CHD] {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 16px 8px 0;",
            label {
                r#for: "attributeSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Attribute: "
            }
            select {
                id: "attributeSelect",
                onchange: on_change,
                for attribute in Attribute::ALL {
                    option {
                        value: "{attribute.column()}",
                        selected: attribute == selected,
                        "{attribute.display_name()}"
                    }
                }
            }
        }
    }
}
