//! Reference browser: catalogue tabs, autocomplete and detail modal

use dioxus::prelude::*;
use skirmish_domain::ReferenceId;
use skirmish_protocol::ReferenceKind;

use crate::application::services::{ReferenceCatalog, ReferenceDetail};
use crate::presentation::components::{EmptyState, Modal, TextInput};
use crate::presentation::messages;
use crate::presentation::services::use_reference_service;
use crate::presentation::state::use_toast;
use crate::presentation::view_models::reference_browser::{
    catalog_cards, detail_sections, kind_icon, suggestion_groups, tab_label,
};
use crate::presentation::view_models::{LoadState, ReferenceBrowser, SEARCH_DEBOUNCE_MS};
use crate::routes::Route;
use crate::use_platform;

/// Entry picked from a card or a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
struct DetailTarget {
    kind: ReferenceKind,
    id: ReferenceId,
    title: String,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenDetail {
    target: DetailTarget,
    state: LoadState<ReferenceDetail>,
}

#[component]
pub fn ReferenceView() -> Element {
    let service = use_reference_service();
    let toast = use_toast();
    let platform = use_platform();
    let navigator = use_navigator();

    let mut browser = use_signal(ReferenceBrowser::new);
    // Only tab switches refetch the catalogue, not query edits
    let tab = use_memo(move || browser.read().tab);
    let mut catalog = use_signal(LoadState::<ReferenceCatalog>::default);
    let mut detail = use_signal(|| None::<OpenDetail>);

    {
        let service = service.clone();
        use_effect(move || {
            let kind = tab();
            let service = service.clone();
            catalog.set(LoadState::Loading);
            spawn(async move {
                let result = service.search(kind).await;
                // A newer tab may have been picked while this one was loading
                if browser.peek().tab != kind {
                    return;
                }
                match result {
                    Ok(list) => catalog.set(LoadState::Loaded(list)),
                    Err(e) => {
                        tracing::error!(error = %e, kind = kind.path_segment(), "Failed to load catalogue");
                        catalog.set(LoadState::Failed);
                    }
                }
            });
        });
    }

    let open_detail = {
        let service = service.clone();
        use_callback(move |target: DetailTarget| {
            browser.write().hide_suggestions();
            detail.set(Some(OpenDetail {
                target: target.clone(),
                state: LoadState::Loading,
            }));
            let service = service.clone();
            spawn(async move {
                let result = service.detail(target.kind, target.id).await;
                let mut slot = detail.write();
                let Some(open) = slot.as_mut().filter(|open| open.target == target) else {
                    return;
                };
                open.state = match result {
                    Ok(record) => LoadState::Loaded(record),
                    Err(e) => {
                        tracing::error!(error = %e, id = %target.id, "Failed to load reference detail");
                        LoadState::Failed
                    }
                };
            });
        })
    };

    let on_query = move |value: String| {
        let Some((ticket, query)) = browser.write().set_query(&value) else {
            return;
        };
        let service = service.clone();
        let platform = platform.clone();
        let toast = toast.clone();
        spawn(async move {
            platform.sleep_ms(SEARCH_DEBOUNCE_MS).await;
            if !browser.peek().is_current(ticket) {
                return;
            }
            match service.suggestions(&query).await {
                Ok(data) => {
                    browser.write().accept_suggestions(ticket, data);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Suggestion lookup failed");
                    if browser.peek().is_current(ticket) {
                        toast.error(messages::REFERENCE_SEARCH_FAILED);
                    }
                }
            }
        });
    };

    let current = browser.read().clone();
    let active_tab = current.tab;
    let cards = LoadState::map(&*catalog.read(), catalog_cards);
    let open = detail.read().clone();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 max-w-2xl mx-auto",

            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |_| {
                        navigator.push(Route::CampaignsRoute {});
                    },
                    "← Назад"
                }
                h1 { class: "text-white text-xl font-semibold m-0", "Справочник" }
            }

            div {
                class: "relative flex flex-col",
                TextInput {
                    value: current.query.clone(),
                    placeholder: "Поиск заклинаний, предметов, существ",
                    oninput: on_query,
                }
                if let Some(suggestions) = current.suggestions.as_ref() {
                    div {
                        class: "absolute top-full left-0 right-0 z-50 mt-1 bg-dark-surface border border-gray-700 rounded-lg shadow-lg max-h-[60vh] overflow-y-auto",
                        for group in suggestion_groups(suggestions) {
                            div {
                                key: "{group.kind.path_segment()}",
                                class: "p-2",
                                div {
                                    class: "text-gray-400 text-xs uppercase mb-1",
                                    "{tab_label(group.kind)}"
                                }
                                for item in group.items {
                                    div {
                                        key: "{item.id}",
                                        class: "flex items-center justify-between gap-2 p-2 rounded cursor-pointer hover:bg-gray-800",
                                        onclick: {
                                            let target = DetailTarget {
                                                kind: item.kind,
                                                id: item.id,
                                                title: item.name.clone(),
                                            };
                                            move |_| open_detail.call(target.clone())
                                        },
                                        span { class: "text-white", "{kind_icon(item.kind)} {item.name}" }
                                        if let Some(meta) = item.meta.as_ref() {
                                            span { class: "text-gray-400 text-xs", "{meta}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "flex gap-2",
                for kind in ReferenceKind::ALL {
                    button {
                        key: "{kind.path_segment()}",
                        class: if kind == active_tab {
                            "px-3 py-1 rounded bg-purple-600 text-white text-sm"
                        } else {
                            "px-3 py-1 rounded bg-gray-800 text-gray-300 text-sm"
                        },
                        onclick: move |_| {
                            browser.write().select_tab(kind);
                        },
                        "{kind_icon(kind)} {tab_label(kind)}"
                    }
                }
            }

            match cards {
                LoadState::Loading => rsx! {
                    div { class: "text-gray-400", "Загрузка..." }
                },
                LoadState::Failed => rsx! {
                    EmptyState { title: messages::REFERENCE_LOAD_FAILED, subtitle: "" }
                },
                LoadState::Loaded(list) if list.is_empty() => rsx! {
                    EmptyState { title: messages::REFERENCE_EMPTY, subtitle: "" }
                },
                LoadState::Loaded(list) => rsx! {
                    div {
                        class: "flex flex-col gap-2",
                        for card in list {
                            div {
                                key: "{card.id}",
                                class: "flex flex-col gap-1 p-3 rounded-lg bg-dark-surface border border-gray-700 cursor-pointer",
                                onclick: {
                                    let target = DetailTarget {
                                        kind: card.kind,
                                        id: card.id,
                                        title: card.title.clone(),
                                    };
                                    move |_| open_detail.call(target.clone())
                                },
                                div { class: "text-white font-semibold", "{card.title}" }
                                div {
                                    class: "flex flex-wrap gap-1",
                                    for badge in card.badges.iter() {
                                        span {
                                            class: "px-2 py-0.5 rounded bg-gray-800 text-gray-300 text-xs",
                                            "{badge}"
                                        }
                                    }
                                }
                                if let Some(description) = card.description.as_ref() {
                                    div { class: "text-gray-400 text-sm line-clamp-3", "{description}" }
                                }
                            }
                        }
                    }
                },
            }

            if let Some(open) = open {
                Modal {
                    title: open.target.title.clone(),
                    onclose: move |_| detail.set(None),
                    match open.state {
                        LoadState::Loading => rsx! {
                            div { class: "text-gray-400", "Загрузка..." }
                        },
                        LoadState::Failed => rsx! {
                            div { class: "text-gray-400", "{messages::REFERENCE_DETAIL_FAILED}" }
                        },
                        LoadState::Loaded(record) => rsx! {
                            for section in detail_sections(&record) {
                                div {
                                    key: "{section.title}",
                                    class: "mb-3",
                                    div { class: "text-purple-300 text-sm mb-1", "{section.title}" }
                                    for line in section.lines {
                                        div { class: "text-white whitespace-pre-line", "{line}" }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
