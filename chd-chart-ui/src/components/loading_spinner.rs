use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading county data...".to_string())]
    pub message: String,
}

/// Placeholder shown while the topology and CSV are fetched.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            role: "status",
            style: "padding: 40px; text-align: center; color: #666; font-style: italic;",
            "{props.message}"
        }
    }
}
