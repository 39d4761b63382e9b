//! ScreenLayout - shared wrapper for every route
//!
//! Sets the page title on mount and gives the screen a scrollable body
//! on the dark background.

use dioxus::prelude::*;

use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct ScreenLayoutProps {
    /// Page title shown in the browser tab / window
    pub page_title: &'static str,
    pub children: Element,
}

#[component]
pub fn ScreenLayout(props: ScreenLayoutProps) -> Element {
    let platform = use_platform();

    let title = props.page_title;
    use_effect(move || {
        platform.set_page_title(title);
    });

    rsx! {
        div {
            class: "screen-layout h-full flex flex-col bg-dark-bg",
            main {
                class: "flex-1 overflow-y-auto relative",
                {props.children}
            }
        }
    }
}
