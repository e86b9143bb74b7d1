use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, HideVocab};
use crate::routes::Route;
use crate::vm::map_grid;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let hide_vocab = use_context::<HideVocab>();
    let navigator = use_navigator();
    let tiles = map_grid(&ctx.dataset());

    rsx! {
        div { class: "page home-page",
            header { class: "view-header home-header",
                h1 { class: "view-title", "N5 漢字" }
                p { class: "view-subtitle", "Kanji Flashcards" }
            }
            div { class: "home-actions",
                button {
                    id: "home-practice",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Practice {});
                    },
                    "Practice Mode"
                }
                label { class: "toggle",
                    span { class: "toggle-text", "Hide Japanese" }
                    input {
                        id: "global-toggle-vocab",
                        r#type: "checkbox",
                        checked: hide_vocab.get(),
                        onchange: move |_| hide_vocab.toggle(),
                    }
                }
            }
            div { class: "kanji-grid",
                for tile in tiles {
                    Link {
                        key: "{tile.index}",
                        class: "kanji-tile",
                        to: Route::Detail { index: tile.index },
                        "{tile.character}"
                    }
                }
            }
        }
    }
}
