use dioxus::prelude::*;

use crate::presentation::state::{use_toast, ToastKind};

/// Renders the current toast, if any. Mounted once by the app root.
#[component]
pub fn ToastView() -> Element {
    let toast = use_toast();
    let Some(current) = toast.current() else {
        return rsx! {};
    };

    let class = match current.kind {
        ToastKind::Success => "fixed bottom-4 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-lg shadow-lg text-white bg-green-700",
        ToastKind::Error => "fixed bottom-4 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-lg shadow-lg text-white bg-red-700",
    };

    rsx! {
        div {
            class,
            onclick: move |_| toast.dismiss(),
            "{current.message}"
        }
    }
}
