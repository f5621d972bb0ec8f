// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::dom;
use pawpoint::{DisplaySurface, PointerEvent, PointerListener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const CARD_ID: &str = "booking-notifier";
const PRIMARY_ID: &str = "booking-primary";
const TIME_ID: &str = "booking-time";

const EXITING: &str = "exiting";
const ENTERING: &str = "entering";

/// The "recent booking" card, driven through CSS transition classes.
pub struct BookingCard {
    card: HtmlElement,
    primary: HtmlElement,
    time: HtmlElement,
    listener: Rc<RefCell<Option<PointerListener>>>,
    // Dropping these would detach the mouse handlers.
    _pointer_closures: [Closure<dyn FnMut()>; 2],
}

impl BookingCard {
    /// Bind to the card markup. `Ok(None)` when the page has no card.
    pub fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let (Some(card), Some(primary), Some(time)) = (
            dom::by_id::<HtmlElement>(document, CARD_ID),
            dom::by_id::<HtmlElement>(document, PRIMARY_ID),
            dom::by_id::<HtmlElement>(document, TIME_ID),
        ) else {
            return Ok(None);
        };

        let listener: Rc<RefCell<Option<PointerListener>>> = Rc::new(RefCell::new(None));
        let enter = Self::pointer_closure(&listener, PointerEvent::Enter);
        let leave = Self::pointer_closure(&listener, PointerEvent::Leave);
        card.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
        card.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;

        Ok(Some(Self {
            card,
            primary,
            time,
            listener,
            _pointer_closures: [enter, leave],
        }))
    }

    fn pointer_closure(
        listener: &Rc<RefCell<Option<PointerListener>>>,
        event: PointerEvent,
    ) -> Closure<dyn FnMut()> {
        let listener = Rc::clone(listener);
        Closure::wrap(Box::new(move || {
            if let Some(callback) = listener.borrow_mut().as_mut() {
                callback(event);
            }
        }) as Box<dyn FnMut()>)
    }
}

impl DisplaySurface for BookingCard {
    fn apply_exiting(&mut self) {
        let _ = self.card.class_list().add_1(EXITING);
    }

    fn apply_entering(&mut self) {
        let _ = self.card.class_list().add_1(ENTERING);
    }

    fn clear_transition(&mut self) {
        let _ = self.card.class_list().remove_2(EXITING, ENTERING);
    }

    fn set_content(&mut self, primary: &str, time: &str) {
        self.primary.set_text_content(Some(primary));
        self.time.set_text_content(Some(time));
    }

    fn subscribe_pointer(&mut self, listener: PointerListener) {
        *self.listener.borrow_mut() = Some(listener);
    }
}
