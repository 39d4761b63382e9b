use dioxus::prelude::*;

use super::ScreenLayout;
use crate::presentation::views::reference::ReferenceView;

#[component]
pub fn ReferenceRoute() -> Element {
    rsx! {
        ScreenLayout {
            page_title: "Справочник",
            ReferenceView {}
        }
    }
}
