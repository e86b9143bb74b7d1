use std::collections::HashSet;

use dioxus::prelude::*;

use super::sentences::AiSentencesPanel;
use crate::context::HideVocab;
use crate::speech::speak;
use crate::vm::{KanjiCardVm, VocabItemVm};

#[component]
pub(super) fn Flashcard(card: KanjiCardVm) -> Element {
    let hide_vocab = use_context::<HideVocab>();
    let mut flipped = use_signal(|| false);
    let mut revealed = use_signal(HashSet::<usize>::new);
    let hidden = hide_vocab.get();

    rsx! {
        div {
            id: "flashcard",
            class: if flipped() { "flip-card flipped" } else { "flip-card" },
            onclick: move |_| flipped.toggle(),
            if flipped() {
                div { class: "flip-card-back",
                    div { class: "readings",
                        p { span { class: "reading-label", "Kun:" } " {card.kunyomi}" }
                        p { span { class: "reading-label", "On:" } " {card.onyomi}" }
                    }
                    div { class: "vocab",
                        h3 { class: "section-title", "Vocabulary" }
                        for (i, item) in card.vocab.iter().cloned().enumerate() {
                            VocabItem {
                                key: "{i}",
                                item,
                                hidden: hidden && !revealed.read().contains(&i),
                                on_reveal: move |()| {
                                    revealed.write().insert(i);
                                },
                            }
                        }
                    }
                    AiSentencesPanel { kanji: card.character.clone() }
                }
            } else {
                div { class: "flip-card-front",
                    p { class: "kanji-large", "{card.character}" }
                }
            }
        }
    }
}

#[component]
fn VocabItem(item: VocabItemVm, hidden: bool, on_reveal: EventHandler<()>) -> Element {
    let speech_text = item.speech_text.clone();

    rsx! {
        div { class: "vocab-item",
            div { class: "vocab-text",
                if hidden {
                    button {
                        class: "vocab-reveal",
                        r#type: "button",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_reveal.call(());
                        },
                        "Tap to reveal"
                    }
                } else {
                    p { class: "japanese-term", "{item.term}" }
                }
                p { class: "vocab-gloss", "{item.gloss}" }
                if let Some(note) = item.note.as_ref() {
                    p { class: "vocab-note", "{note}" }
                }
            }
            button {
                class: "speak-btn",
                r#type: "button",
                aria_label: "Speak",
                onclick: move |evt| {
                    evt.stop_propagation();
                    speak(&speech_text);
                },
                "🔊"
            }
        }
    }
}
