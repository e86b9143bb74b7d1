use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use kanji_core::model::{Difficulty, PracticeSettingsDraft};
use services::QuizSession;
use tracing::info;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{map_quiz, start_quiz};

/// Pause between answering and the next question.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();
    let draft = use_signal(|| practice.settings_draft());
    let quiz = use_signal(|| None::<QuizSession>);
    let error = use_signal(|| None::<ViewError>);

    let on_start = use_callback(move |()| {
        let mut quiz = quiz;
        let mut error = error;
        let settings = draft.read().to_settings();
        match start_quiz(&practice, &settings) {
            Ok(session) => {
                error.set(None);
                quiz.set(Some(session));
            }
            Err(err) => error.set(Some(err)),
        }
    });

    if quiz.read().is_some() {
        rsx! { QuizPanel { quiz } }
    } else {
        rsx! { SettingsForm { draft, error, on_start } }
    }
}

#[component]
fn SettingsForm(
    draft: Signal<PracticeSettingsDraft>,
    error: Signal<Option<ViewError>>,
    on_start: Callback<()>,
) -> Element {
    let navigator = use_navigator();
    let mut draft = draft;
    let current = *draft.read();
    let count = current.kanji_count();
    let first = current.first();
    let last = current.last();

    rsx! {
        div { class: "page practice-settings",
            h2 { class: "view-title", "Practice Settings" }
            section { class: "settings-group",
                label { class: "settings-label", "Difficulty" }
                div { class: "difficulty-buttons",
                    for level in Difficulty::ALL {
                        button {
                            key: "{level}",
                            class: if current.difficulty() == level { "btn difficulty active" } else { "btn difficulty" },
                            r#type: "button",
                            onclick: move |_| draft.write().set_difficulty(level),
                            "{level.title()}"
                        }
                    }
                }
            }
            section { class: "settings-group",
                label { class: "settings-label", "Kanji Range" }
                div { id: "range-label", class: "range-label", "{first} - {last}" }
                div { class: "range-row",
                    span { "1" }
                    input {
                        id: "range-first",
                        r#type: "range",
                        min: "1",
                        max: "{count}",
                        value: "{first}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<usize>() {
                                draft.write().set_first(value);
                            }
                        },
                    }
                }
                div { class: "range-row",
                    span { "1" }
                    input {
                        id: "range-last",
                        r#type: "range",
                        min: "1",
                        max: "{count}",
                        value: "{last}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<usize>() {
                                draft.write().set_last(value);
                            }
                        },
                    }
                    span { "{count}" }
                }
            }
            if let Some(err) = error() {
                p { id: "practice-error", class: "view-error", "{err.message()}" }
            }
            div { class: "settings-actions",
                button {
                    id: "practice-quit",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Quit"
                }
                button {
                    id: "practice-start",
                    class: "btn btn-success",
                    r#type: "button",
                    onclick: move |_| on_start.call(()),
                    "Start Practice"
                }
            }
        }
    }
}

#[component]
pub(super) fn QuizPanel(quiz: Signal<Option<QuizSession>>) -> Element {
    let navigator = use_navigator();

    let on_answer = use_callback(move |choice: String| {
        let mut quiz = quiz;
        let outcome = quiz
            .write()
            .as_mut()
            .and_then(|session| session.answer(&choice));
        if outcome.is_none() {
            return;
        }
        spawn(async move {
            tokio::time::sleep(ADVANCE_DELAY).await;
            if let Some(session) = quiz.write().as_mut() {
                session.advance();
            }
        });
    });

    let on_quit = move |_: MouseEvent| {
        let mut quiz = quiz;
        if let Some(mut session) = quiz.write().take() {
            let progress = session.quit();
            info!(
                score = progress.score,
                answered = progress.total_answered,
                "practice quiz ended"
            );
        }
        navigator.push(Route::Home {});
    };

    let Some(vm) = quiz.read().as_ref().and_then(map_quiz) else {
        return rsx! {
            div { class: "page", p { "Loading Questions..." } }
        };
    };

    let options = vm.options.into_iter().enumerate().map(|(i, option)| {
        let label = option.label.clone();
        let class = match (vm.answered, option.highlight) {
            (true, true) => "quiz-option correct",
            (true, false) => "quiz-option disabled",
            (false, _) => "quiz-option",
        };
        rsx! {
            button {
                key: "{i}",
                class,
                r#type: "button",
                disabled: vm.answered,
                onclick: move |_| on_answer.call(label.clone()),
                "{option.label}"
            }
        }
    });
    let feedback_class = if vm.feedback_correct {
        "quiz-feedback correct"
    } else {
        "quiz-feedback incorrect"
    };

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-header",
                button {
                    id: "quiz-quit",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: on_quit,
                    "Quit"
                }
                div { id: "quiz-score", class: "quiz-score", "Score: {vm.score_label}" }
            }
            div { class: "quiz-card",
                p { class: "quiz-display", "{vm.display_text}" }
                p { class: "quiz-prompt", "{vm.prompt_text}" }
                div { class: "quiz-options", {options} }
            }
            div { class: feedback_class,
                if let Some(feedback) = vm.feedback.as_ref() {
                    "{feedback}"
                }
            }
        }
    }
}
