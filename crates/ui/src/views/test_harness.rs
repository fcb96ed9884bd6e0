use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use timebox_core::model::EndField;

use crate::context::{UiApp, build_app_context};
use crate::views::LimitFormView;

use super::limit_form::LimitFormTestHandles;

struct TestApp {
    limit_checked_on_launch: bool,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        "Timebox".to_string()
    }

    fn limit_checked_on_launch(&self) -> bool {
        self.limit_checked_on_launch
    }
}

#[derive(Props, Clone)]
struct FormHarnessProps {
    app: Arc<TestApp>,
    handles: LimitFormTestHandles,
}

impl PartialEq for FormHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for FormHarnessProps {}

#[component]
fn FormRouterHarness(props: FormHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
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
    rsx! { LimitFormView {} }
}

pub struct FormHarness {
    pub dom: VirtualDom,
    handles: LimitFormTestHandles,
}

impl FormHarness {
    pub fn toggle(&self) -> Callback<bool> {
        self.handles.toggle()
    }

    pub fn select(&self) -> Callback<(EndField, String)> {
        self.handles.select()
    }

    pub fn drive(&mut self) {
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

pub fn setup_form_harness(limit_checked_on_launch: bool) -> FormHarness {
    let app = Arc::new(TestApp {
        limit_checked_on_launch,
    });
    let handles = LimitFormTestHandles::default();
    let mut dom = VirtualDom::new_with_props(
        FormRouterHarness,
        FormHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    FormHarness { dom, handles }
}
