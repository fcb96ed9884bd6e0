use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::LimitFormView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LimitFormView)] LimitForm {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Timebox" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
