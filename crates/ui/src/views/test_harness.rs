use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use kanji_core::model::{KanjiDataset, KanjiEntry, Question, QuestionKind, VocabExample};
use services::{AppServices, PracticeService, QuizSession, SentenceService};

use crate::context::{HideVocab, UiApp, build_app_context};
use crate::views::practice::QuizPanel;
use crate::views::{DetailView, HomeView, PracticeView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn dataset(&self) -> Arc<KanjiDataset> {
        self.services.dataset()
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn sentences(&self) -> Arc<SentenceService> {
        self.services.sentences()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Detail(usize),
    Practice,
    /// Quiz panel over a single fixed question, optionally already answered.
    Quiz(Option<&'static str>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| HideVocab(Signal::new(false)));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Detail(index) => rsx! { DetailView { index } },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Quiz(answer) => rsx! { QuizFixture { answer } },
    }
}

#[component]
fn QuizFixture(answer: Option<&'static str>) -> Element {
    let quiz = use_signal(|| {
        let options = ["ニチ", "ゲツ", "カ", "スイ"].map(String::from).to_vec();
        let question = Question::new(QuestionKind::OnReading, "日", "ニチ", options).ok()?;
        let mut session = QuizSession::start(vec![question]).ok()?;
        if let Some(choice) = answer {
            session.answer(choice);
        }
        Some(session)
    });
    rsx! { QuizPanel { quiz } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_dataset() -> Arc<KanjiDataset> {
    let rows = [
        ("日", "ひ, か", "ニチ", "日曜日(にちようび)", "Sunday"),
        ("月", "つき", "ゲツ", "月曜日(げつようび)", "Monday"),
        ("火", "ひ", "カ", "火曜日(かようび)", "Tuesday"),
        ("水", "みず", "スイ", "水曜日(すいようび)", "Wednesday"),
        ("木", "き", "モク", "木曜日(もくようび)", "Thursday"),
    ];
    let entries = rows
        .into_iter()
        .map(|(kanji, kun, on, term, gloss)| {
            KanjiEntry::new(
                kanji,
                Some(kun),
                Some(on),
                vec![
                    VocabExample::new(kanji, format!("{gloss} kanji"), ""),
                    VocabExample::new(term, gloss, "noun"),
                ],
            )
        })
        .collect();
    Arc::new(KanjiDataset::new(entries).expect("sample dataset"))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::new(sample_dataset(), SentenceService::new(None));
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
        },
    );
    ViewHarness { dom }
}
