use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillTone {
    Ok,
    Warn,
    Muted,
}

impl PillTone {
    fn class(self) -> &'static str {
        match self {
            Self::Ok => "px-2 py-1 rounded-full text-xs bg-green-900 text-green-300",
            Self::Warn => "px-2 py-1 rounded-full text-xs bg-amber-900 text-amber-300",
            Self::Muted => "px-2 py-1 rounded-full text-xs bg-gray-800 text-gray-400",
        }
    }
}

#[component]
pub fn Pill(#[props(into)] label: String, tone: PillTone) -> Element {
    rsx! {
        span { class: tone.class(), "{label}" }
    }
}

/// Clickable list row: title, secondary line and optional trailing content
#[component]
pub fn ListRow(
    #[props(into)] title: String,
    #[props(into)] meta: String,
    #[props(default)] highlighted: bool,
    #[props(default)] onclick: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let class = if highlighted {
        "flex items-center justify-between gap-3 p-3 rounded-lg bg-purple-900/30 border border-purple-600 cursor-pointer"
    } else {
        "flex items-center justify-between gap-3 p-3 rounded-lg bg-dark-surface border border-gray-700 cursor-pointer"
    };

    rsx! {
        div {
            class,
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            div {
                class: "flex flex-col min-w-0",
                div { class: "text-white truncate", "{title}" }
                div { class: "text-gray-400 text-sm", "{meta}" }
            }
            {children}
        }
    }
}
