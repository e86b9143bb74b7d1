mod flashcard;
mod sentences;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_kanji_card;
use flashcard::Flashcard;

#[component]
pub fn DetailView(index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let card = map_kanji_card(&ctx.dataset(), index);

    let back = rsx! {
        button {
            id: "detail-back",
            class: "btn btn-secondary",
            r#type: "button",
            onclick: move |_| {
                navigator.push(Route::Home {});
            },
            "Back"
        }
    };

    let Some(card) = card else {
        return rsx! {
            div { class: "page detail-page",
                {back}
                p { class: "view-error", "{ViewError::KanjiNotFound.message()}" }
            }
        };
    };
    let prev_index = card.prev_index;
    let next_index = card.next_index;

    rsx! {
        div { class: "page detail-page",
            div { class: "detail-toolbar",
                {back}
                span { class: "detail-position", "{card.position_label}" }
            }
            // Keyed so flip and reveal state reset when moving to another kanji.
            Flashcard { key: "{card.index}", card: card.clone() }
            div { class: "detail-nav",
                button {
                    id: "detail-prev",
                    class: "btn-nav",
                    r#type: "button",
                    aria_label: "Previous kanji",
                    onclick: move |_| {
                        navigator.push(Route::Detail { index: prev_index });
                    },
                    "‹"
                }
                span { class: "detail-hint", "Tap the card to flip" }
                button {
                    id: "detail-next",
                    class: "btn-nav",
                    r#type: "button",
                    aria_label: "Next kanji",
                    onclick: move |_| {
                        navigator.push(Route::Detail { index: next_index });
                    },
                    "›"
                }
            }
        }
    }
}
