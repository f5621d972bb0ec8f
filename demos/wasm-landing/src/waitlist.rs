// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::dom;
use crate::local_storage::LocalStore;
use chrono::Utc;
use pawpoint::{
    LandingConfig, Note, SubmitButton, SubmitOutcome, Timer, WaitlistFields, WaitlistForm,
    WasmTimer,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

/// DOM handles of the waitlist form.
#[derive(Clone)]
struct FormView {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    note: Option<HtmlElement>,
}

impl FormView {
    fn read(&self) -> WaitlistFields {
        WaitlistFields {
            email: self.control("email"),
            shop: self.control("shop"),
            team: self.control("team"),
            current: self.control("current"),
        }
    }

    fn write(&self, fields: &WaitlistFields) {
        self.set_control("email", &fields.email);
        self.set_control("shop", &fields.shop);
        self.set_control("team", &fields.team);
        self.set_control("current", &fields.current);
    }

    fn control(&self, name: &str) -> String {
        let Ok(Some(element)) = self.form.query_selector(&format!("[name=\"{name}\"]")) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_control(&self, name: &str, value: &str) {
        let Ok(Some(element)) = self.form.query_selector(&format!("[name=\"{name}\"]")) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn show_button(&self, button: SubmitButton) {
        if let Some(element) = &self.button {
            element.set_text_content(Some(button.label));
            element.set_disabled(button.disabled);
        }
    }

    fn show_note(&self, note: &Note) {
        let Some(element) = &self.note else {
            return;
        };
        element.set_text_content(Some(&note.message));
        let color = if note.is_error() {
            "var(--danger)"
        } else {
            "var(--text-muted)"
        };
        let _ = element.style().set_property("color", color);
    }
}

pub fn init(document: &Document, config: &LandingConfig) -> Result<(), JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, "wl-form") else {
        return Ok(());
    };
    let Some(store) = LocalStore::open() else {
        web_sys::console::warn_1(&"localStorage unavailable, waitlist disabled".into());
        return Ok(());
    };

    let view = FormView {
        button: form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok()),
        note: dom::by_id::<HtmlElement>(document, "wl-note"),
        form,
    };

    let state = Rc::new(RefCell::new(WaitlistForm::new(store, config.waitlist.clone())));
    if state.borrow_mut().restore() {
        view.write(state.borrow().fields());
    }

    let form = view.form.clone();
    {
        let state = Rc::clone(&state);
        let view = view.clone();
        dom::listen(&form, "input", move |_| {
            state.borrow_mut().on_input(view.read(), Utc::now());
        })?;
    }

    let user_agent = dom::window()?.navigator().user_agent().unwrap_or_default();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let outcome = state.borrow_mut().submit(&user_agent, Utc::now());
        match outcome {
            SubmitOutcome::Rejected(note) => view.show_note(&note),
            SubmitOutcome::Failed(note) => {
                view.show_note(&note);
                view.show_button(state.borrow().button());
            }
            SubmitOutcome::Joined {
                note, reset_after, ..
            } => {
                view.form.reset();
                view.show_note(&note);
                view.show_button(state.borrow().button());

                let state = Rc::clone(&state);
                let view = view.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    WasmTimer.sleep_future(reset_after).await;
                    state.borrow_mut().reset_button();
                    view.show_button(state.borrow().button());
                });
            }
        }
    })
}
