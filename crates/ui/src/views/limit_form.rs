#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use timebox_core::model::{EndField, EndTimeSelection, TimeLimitFieldset};

use crate::context::AppContext;
use crate::vm::{SelectVm, format_end_time, map_limit_fieldset};

#[component]
pub fn LimitFormView() -> Element {
    let ctx = use_context::<AppContext>();
    let checked_on_launch = ctx.limit_checked_on_launch();

    let mut limited = use_signal(|| checked_on_launch);
    let mut fieldset = use_signal(move || {
        let mut fieldset = TimeLimitFieldset::new();
        fieldset.sync(checked_on_launch);
        fieldset
    });
    let mut selection = use_signal(EndTimeSelection::default);

    let on_toggle = use_callback(move |checked: bool| {
        limited.set(checked);
        let mut next = fieldset();
        next.sync(checked);
        fieldset.set(next);
        if !checked {
            selection.set(EndTimeSelection::default());
        }
    });

    let on_select = use_callback(move |(field, value): (EndField, String)| {
        let mut next = selection();
        next.set(field, value);
        selection.set(next);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LimitFormTestHandles>() {
                handles.register(on_toggle, on_select);
            }
        }
    }

    let vm = map_limit_fieldset(&fieldset());
    let readout = if limited() {
        match selection().end_timestamp() {
            Ok(at) => Some((format!("Ends at {}", format_end_time(at)), false)),
            Err(err) => Some((err.to_string(), true)),
        }
    } else {
        None
    };

    rsx! {
        div { class: "page limit-page",
            h2 { "{ctx.app_name()}" }
            div { class: "limit-toggle-row",
                label { class: "limit-toggle",
                    input {
                        r#type: "checkbox",
                        name: "end",
                        checked: limited(),
                        onchange: move |evt| on_toggle.call(evt.checked()),
                    }
                    span { "Time limited" }
                }
            }
            // The container carries the checkbox's name as its id.
            div { class: "limit-fields", id: "end",
                if let Some(label) = vm.label {
                    span { class: "limit-label", "{label}" }
                }
                for select_vm in vm.selects {
                    EndSelect { field: select_vm, on_change: on_select }
                }
            }
            if let Some((message, is_error)) = readout {
                p {
                    class: if is_error { "limit-readout limit-readout--error" } else { "limit-readout" },
                    "{message}"
                }
            }
        }
    }
}

#[component]
fn EndSelect(field: SelectVm, on_change: Callback<(EndField, String)>) -> Element {
    let name = field.name.clone();
    rsx! {
        select {
            class: "limit-select",
            name: "{field.name}",
            onchange: move |evt| {
                if let Some(end_field) = EndField::from_name(&name) {
                    on_change.call((end_field, evt.value()));
                }
            },
            for opt in field.options {
                option { value: "{opt.value}", "{opt.label}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LimitFormTestHandles {
    toggle: Rc<RefCell<Option<Callback<bool>>>>,
    select: Rc<RefCell<Option<Callback<(EndField, String)>>>>,
}

#[cfg(test)]
impl LimitFormTestHandles {
    pub(crate) fn register(
        &self,
        toggle: Callback<bool>,
        select: Callback<(EndField, String)>,
    ) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.select.borrow_mut() = Some(select);
    }

    pub(crate) fn toggle(&self) -> Callback<bool> {
        self.toggle.borrow().clone().expect("toggle registered")
    }

    pub(crate) fn select(&self) -> Callback<(EndField, String)> {
        self.select.borrow().clone().expect("select registered")
    }
}
