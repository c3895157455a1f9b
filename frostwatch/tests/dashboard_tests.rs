// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use frostwatch::widgets::Surface;
use frostwatch::{Dashboard, DashboardConfig, FrostwatchError, SchedulerState};
use tokio_util::sync::CancellationToken;

fn config(history_capacity: usize) -> DashboardConfig {
    DashboardConfig {
        history_capacity,
        ..DashboardConfig::default()
    }
}

#[test]
fn test_first_tick_draws_every_widget() -> anyhow::Result<()> {
    // Arrange
    let (surface, buffer) = Surface::in_memory();
    let mut dashboard = Dashboard::build(&config(5), surface)?;

    // Act
    let report = dashboard.scheduler_mut().tick()?;

    // Assert
    let drawn = buffer.contents();
    assert_eq!(report.rendered, 4);
    for title in [
        "== Current Temperature ==",
        "== Current Date and Time ==",
        "== Current Data ==",
        "== Current Chart ==",
    ] {
        assert_eq!(drawn.matches(title).count(), 1, "{title}");
    }
    assert!(drawn.contains("trend: needs at least 2 readings"));
    Ok(())
}

#[test]
fn test_second_tick_redraws_data_driven_widgets() -> anyhow::Result<()> {
    // Arrange
    let (surface, buffer) = Surface::in_memory();
    let mut dashboard = Dashboard::build(&config(5), surface)?;
    dashboard.scheduler_mut().tick()?;
    buffer.clear();

    // Act
    let report = dashboard.scheduler_mut().tick()?;

    // Assert
    let drawn = buffer.contents();
    assert!(drawn.contains("== Current Data =="));
    assert!(drawn.contains("== Current Chart =="));
    assert!(drawn.contains("trend: y = "));
    assert_eq!(drawn.matches("== ").count(), report.rendered);
    Ok(())
}

#[test]
fn test_readings_stay_within_configured_range() -> anyhow::Result<()> {
    let (surface, _buffer) = Surface::in_memory();
    let mut dashboard = Dashboard::build(&config(3), surface)?;

    for _ in 0..20 {
        dashboard.scheduler_mut().tick()?;
        let latest = dashboard.scheduler().latest().expect("a reading after a tick");
        assert!((-18.0..=-16.0).contains(&latest.value()), "{latest}");
    }
    assert_eq!(dashboard.scheduler().table().len(), 3);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_start() {
    let (surface, buffer) = Surface::in_memory();

    let result = Dashboard::build(&config(0), surface);

    assert!(matches!(result, Err(FrostwatchError::Config { .. })));
    assert!(buffer.contents().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_run_refreshes_until_cancelled() -> anyhow::Result<()> {
    // Arrange
    let (surface, buffer) = Surface::in_memory();
    let mut dashboard = Dashboard::build(&config(2), surface)?;
    let shutdown = CancellationToken::new();
    let stopper = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(3500)).await;
        stopper.cancel();
    });

    // Act
    let summary = dashboard.run(&shutdown).await;

    // Assert
    assert_eq!(summary.ticks, 3);
    assert_eq!(summary.failed_ticks, 0);
    assert_eq!(dashboard.scheduler().state(), SchedulerState::Stopped);
    assert_eq!(dashboard.scheduler().table().len(), 2);
    assert_eq!(buffer.contents().matches("== Current Chart ==").count(), 3);
    assert_eq!(buffer.contents().matches("== Current Data ==").count(), 3);
    Ok(())
}

#[test]
fn test_title_comes_from_config() -> anyhow::Result<()> {
    let (surface, _buffer) = Surface::in_memory();
    let config = DashboardConfig {
        title: "Dome Fuji".to_owned(),
        ..DashboardConfig::default()
    };

    let dashboard = Dashboard::build(&config, surface)?;

    assert_eq!(dashboard.title(), "Dome Fuji");
    assert_eq!(
        dashboard.banner(),
        "##### Dome Fuji #####\nA demonstration of real-time temperature readings in Antarctica.\n"
    );
    Ok(())
}
