// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint::{LandingConfig, NotifierDriver, WasmTimer};
use wasm_bindgen::prelude::*;

mod booking_card;
mod dom;
mod local_storage;
mod page;
mod waitlist;

use booking_card::BookingCard;

/// Entry point called from JavaScript
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = LandingConfig::from_toml_str(include_str!("../config.toml"))
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    let document = dom::document()?;

    page::init_mobile_nav(&document)?;
    page::init_anchor_scroll(&document)?;
    page::stamp_footer_year(&document);
    page::init_pricing_toggle(&document)?;
    waitlist::init(&document, &config)?;

    let card = BookingCard::find(&document)?;
    let seed = js_sys::Date::now() as u64;
    if let Some(notifier) = pawpoint::booking_notifier(&config, card, seed) {
        wasm_bindgen_futures::spawn_local(async move {
            NotifierDriver::new(notifier, WasmTimer).run().await;
        });
    }

    web_sys::console::log_1(&"Pawpoint landing page ready".into());
    Ok(())
}
