// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Utc;
use pawpoint::prelude::*;
use pawpoint::{Industry, MemoryStore, SubmitOutcome};
use pawpoint_test_utils::RecordingSurface;
use std::time::Duration;

#[test]
fn test_booking_notifier_uses_configured_industry() -> anyhow::Result<()> {
    // Arrange
    let config = LandingConfig::from_toml_str("industry = \"restaurants\"")?;
    let surface = RecordingSurface::new();

    // Act
    let notifier = booking_notifier(&config, Some(surface.clone()), 42).unwrap();

    // Assert
    assert_eq!(notifier.records(), Industry::Restaurants.records().as_slice());
    assert_eq!(surface.content(), Some(Industry::Restaurants.records()[0].clone()));
    Ok(())
}

#[test]
fn test_booking_notifier_is_inert_without_surface() {
    let config = LandingConfig::default();

    let notifier = booking_notifier::<RecordingSurface>(&config, None, 42);

    assert!(notifier.is_none());
}

#[test]
fn test_unknown_industry_flag_shows_pet_groomer_bookings() -> anyhow::Result<()> {
    let config = LandingConfig::from_toml_str("industry = \"unknown\"")?;
    let surface = RecordingSurface::new();

    let mut notifier = booking_notifier(&config, Some(surface.clone()), 42).unwrap();
    notifier.run_for(Duration::from_millis(4000));

    let expected = Industry::PetGroomer.records();
    assert_eq!(notifier.current_index(), 1);
    assert_eq!(surface.content(), Some(expected[1].clone()));
    Ok(())
}

#[test]
fn test_page_widgets_share_configuration() -> anyhow::Result<()> {
    let config = LandingConfig::from_toml_str(
        r#"
        [waitlist]
        reset_delay_ms = 900
        "#,
    )?;
    let mut form = WaitlistForm::new(MemoryStore::new(), config.waitlist.clone());
    let mut nav = MobileNav::new();
    let mut pricing = PricingToggle::new();

    nav.toggle();
    let display = pricing.select(BillingMode::Yearly);
    form.restore();

    assert!(nav.is_expanded());
    assert_eq!(display.amount, "$300");
    assert!(matches!(form.submit("ua", Utc::now()), SubmitOutcome::Rejected(_)));
    Ok(())
}
