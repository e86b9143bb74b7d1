use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{DetailView, HomeView, PracticeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/kanji/:index", DetailView)] Detail { index: usize },
        #[route("/practice", PracticeView)] Practice {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
