// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Navigation, anchor scrolling, footer and pricing glue.

use crate::dom;
use pawpoint::{
    anchor_target, footer_year, BillingMode, MobileNav, PricingToggle, SCROLL_BEHAVIOR,
    SCROLL_BLOCK,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub fn init_mobile_nav(document: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(nav)) = (
        dom::select::<Element>(document, ".mobile-menu-toggle")?,
        dom::select::<Element>(document, ".mobile-nav")?,
    ) else {
        return Ok(());
    };

    let state = Rc::new(RefCell::new(MobileNav::new()));
    let render = {
        let toggle = toggle.clone();
        let nav = nav.clone();
        move |state: &MobileNav| {
            let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
            let _ = nav.set_attribute("aria-hidden", state.aria_hidden());
        }
    };
    let render = Rc::new(render);

    {
        let state = Rc::clone(&state);
        let render = Rc::clone(&render);
        dom::listen(&toggle, "click", move |_| {
            let mut state = state.borrow_mut();
            state.toggle();
            render(&state);
        })?;
    }

    {
        let state = Rc::clone(&state);
        let render = Rc::clone(&render);
        dom::listen(&nav, "click", move |event: Event| {
            let on_link = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|element| element.tag_name() == "A");
            let mut state = state.borrow_mut();
            state.nav_clicked(on_link);
            render(&state);
        })?;
    }

    dom::listen(document, "click", move |event: Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        let inside_toggle = toggle.contains(target.as_ref());
        let inside_nav = nav.contains(target.as_ref());
        let mut state = state.borrow_mut();
        state.document_clicked(inside_toggle, inside_nav);
        render(&state);
    })
}

pub fn init_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    let options = ScrollIntoViewOptions::new();
    if let Some(behavior) = ScrollBehavior::from_js_value(&JsValue::from_str(SCROLL_BEHAVIOR)) {
        options.set_behavior(behavior);
    }
    if let Some(block) = ScrollLogicalPosition::from_js_value(&JsValue::from_str(SCROLL_BLOCK)) {
        options.set_block(block);
    }

    let page = document.clone();
    dom::listen(document, "click", move |event: Event| {
        let Some(link) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };
        if let Ok(Some(section)) = page.query_selector(selector) {
            event.prevent_default();
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}

pub fn stamp_footer_year(document: &Document) {
    if let Some(year) = document.get_element_by_id("year") {
        let stamp = footer_year(&chrono::Local::now()).to_string();
        year.set_text_content(Some(&stamp));
    }
}

pub fn init_pricing_toggle(document: &Document) -> Result<(), JsValue> {
    let (Some(amount), Some(period), Some(sub)) = (
        dom::by_id::<HtmlElement>(document, "price-amount"),
        dom::by_id::<HtmlElement>(document, "price-period"),
        dom::by_id::<HtmlElement>(document, "price-sub"),
    ) else {
        return Ok(());
    };

    let list = document.query_selector_all(".toggle-btn")?;
    let buttons: Rc<Vec<Element>> = Rc::new(
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
    );
    if buttons.is_empty() {
        return Ok(());
    }

    let state = Rc::new(RefCell::new(PricingToggle::new()));
    for button in buttons.iter() {
        let mode = billing_mode_of(button);
        let state = Rc::clone(&state);
        let buttons = Rc::clone(&buttons);
        let (amount, period, sub) = (amount.clone(), period.clone(), sub.clone());
        dom::listen(button, "click", move |_| {
            let mut state = state.borrow_mut();
            let display = state.select(mode);
            for other in buttons.iter() {
                let other_mode = billing_mode_of(other);
                let _ = other
                    .class_list()
                    .toggle_with_force("active", state.is_active(other_mode));
                let _ = other.set_attribute("aria-selected", state.aria_selected(other_mode));
            }
            amount.set_text_content(Some(display.amount));
            period.set_text_content(Some(display.period));
            sub.set_inner_html(display.sub_html);
        })?;
    }
    Ok(())
}

fn billing_mode_of(button: &Element) -> BillingMode {
    BillingMode::from_attribute(&button.get_attribute("data-billing").unwrap_or_default())
}
