//! Dropdown for the scatterplot Y axis.

use crate::state::AppState;
use chd_core::Attribute;
use dioxus::prelude::*;

#[component]
pub fn YAxisSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.y_attribute)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Attribute>() {
        Ok(attribute) => {
            state.y_attribute.set(attribute);
            state.reset_brush();
        }
        Err(e) => log::warn!("[CHD] {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 16px 8px 0;",
            label {
                r#for: "yAxisSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Scatterplot Y: "
            }
            select {
                id: "yAxisSelect",
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
