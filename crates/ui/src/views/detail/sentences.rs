use dioxus::prelude::*;
use kanji_core::model::ExampleSentence;
use services::shuffle_sentences;

use crate::context::AppContext;
use crate::speech::speak;
use crate::views::{ViewError, ViewState};
use crate::vm::{fetch_sentences, map_sentences};

#[component]
pub(super) fn AiSentencesPanel(kanji: String) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.sentences();
    let mut state = use_signal(|| ViewState::<Vec<ExampleSentence>>::Idle);

    let generate = use_callback(move |()| {
        let service = service.clone();
        let kanji = kanji.clone();
        spawn(async move {
            state.set(ViewState::Loading);
            match fetch_sentences(&service, &kanji).await {
                Ok(sentences) if sentences.is_empty() => {
                    state.set(ViewState::Error(ViewError::SentencesFailed));
                }
                Ok(sentences) => state.set(ViewState::Ready(sentences)),
                Err(err) => state.set(ViewState::Error(err)),
            }
        });
    });

    let body = match state() {
        ViewState::Idle => rsx! {
            button {
                id: "sentences-generate",
                class: "btn btn-primary btn-block",
                r#type: "button",
                onclick: move |evt| {
                    evt.stop_propagation();
                    generate.call(());
                },
                "Generate Sentences"
            }
        },
        ViewState::Loading => rsx! {
            div {
                class: "spinner-wrap",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "spinner" }
            }
        },
        ViewState::Error(err) => rsx! {
            div {
                class: "sentences-error",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "sentences-error-title", "Error:" }
                p { "{err.message()}" }
                if err != ViewError::SentencesDisabled {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| generate.call(()),
                        "Retry"
                    }
                }
            }
        },
        ViewState::Ready(sentences) => {
            let rows = map_sentences(&sentences).into_iter().enumerate().map(|(i, item)| {
                let speech_text = item.speech_text.clone();
                rsx! {
                    div {
                        key: "{i}",
                        class: "sentence",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "sentence-text",
                            p { class: "sentence-furigana", dangerous_inner_html: "{item.furigana_html}" }
                            p { class: "sentence-translation", "{item.translation}" }
                        }
                        button {
                            class: "speak-btn",
                            r#type: "button",
                            aria_label: "Speak sentence",
                            onclick: move |_| speak(&speech_text),
                            "🔊"
                        }
                    }
                }
            });
            rsx! {
                button {
                    id: "sentences-shuffle",
                    class: "btn btn-secondary btn-block",
                    r#type: "button",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        if let ViewState::Ready(list) = &mut *state.write() {
                            shuffle_sentences(list, &mut rand::rng());
                        }
                    },
                    "Shuffle Examples"
                }
                {rows}
            }
        }
    };

    rsx! {
        div { class: "ai-sentences",
            h3 { class: "section-title", "AI Example Sentences" }
            {body}
        }
    }
}
