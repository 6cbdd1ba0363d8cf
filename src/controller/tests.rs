use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::clock::Clock;
use crate::surface::{PlaybackSurface, PresentationShell};
use crate::utils::format_remaining;

use super::IntervalController;

/// Recorded effects of controller commands on the kiosk
#[derive(Debug, Default)]
struct StageLog {
    playing: bool,
    overlay_visible: bool,
    player_screen: bool,
    play_calls: u32,
    pause_calls: u32,
    rendered: Vec<String>,
}

/// Fake playback surface and presentation shell sharing one log
#[derive(Debug, Clone, Default)]
struct FakeStage(Arc<Mutex<StageLog>>);

impl FakeStage {
    fn log(&self) -> std::sync::MutexGuard<'_, StageLog> {
        self.0.lock().unwrap()
    }
}

impl PlaybackSurface for FakeStage {
    fn play(&mut self) {
        let mut log = self.log();
        log.playing = true;
        log.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut log = self.log();
        log.playing = false;
        log.pause_calls += 1;
    }

    fn is_paused(&self) -> bool {
        !self.log().playing
    }
}

impl PresentationShell for FakeStage {
    fn show_intro_screen(&mut self) {
        self.log().player_screen = false;
    }

    fn show_player_screen(&mut self) {
        self.log().player_screen = true;
    }

    fn show_overlay(&mut self) {
        self.log().overlay_visible = true;
    }

    fn hide_overlay(&mut self) {
        self.log().overlay_visible = false;
    }

    fn is_overlay_visible(&self) -> bool {
        self.log().overlay_visible
    }

    fn render_countdown(&mut self, remaining_seconds: u64) {
        let display = format_remaining(remaining_seconds);
        self.log().rendered.push(display);
    }
}

/// Hand-advanced clock for deterministic countdown tests
#[derive(Debug, Clone)]
struct TestClock(Arc<Mutex<DateTime<Utc>>>);

impl TestClock {
    fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap();
        Self(Arc::new(Mutex::new(start)))
    }

    fn advance_secs(&self, seconds: i64) {
        let mut now = self.0.lock().unwrap();
        *now += Duration::seconds(seconds);
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn harness(
    threshold: u64,
    duration: u64,
) -> (
    IntervalController<FakeStage, FakeStage, TestClock>,
    FakeStage,
    TestClock,
) {
    let stage = FakeStage::default();
    let clock = TestClock::new();
    let controller =
        IntervalController::new(threshold, duration, stage.clone(), stage.clone(), clock.clone());

    // Screening under way: player screen up, playback running
    {
        let mut log = stage.log();
        log.player_screen = true;
        log.playing = true;
    }

    (controller, stage, clock)
}

#[test]
fn positions_below_threshold_never_trigger() {
    let (mut controller, stage, _clock) = harness(30, 60);

    for position in [0.0, 1.0, 15.5, 29.0, 29.9] {
        controller.on_position_update(position);
    }

    assert!(!controller.interval_started());
    assert!(!controller.countdown_active());
    let log = stage.log();
    assert!(log.player_screen);
    assert!(!log.overlay_visible);
    assert_eq!(log.pause_calls, 0);
    assert!(log.rendered.is_empty());
}

#[test]
fn threshold_crossing_pauses_and_shows_overlay() {
    let (mut controller, stage, _clock) = harness(30, 60);

    controller.on_position_update(30.0);

    assert!(controller.interval_started());
    assert!(controller.countdown_active());
    let log = stage.log();
    assert!(log.overlay_visible);
    assert!(!log.playing);
    assert_eq!(log.pause_calls, 1);
}

#[test]
fn automatic_trigger_is_latched() {
    let (mut controller, stage, clock) = harness(30, 60);

    controller.on_position_update(30.0);

    // Intermission runs out
    clock.advance_secs(60);
    controller.on_countdown_tick();
    assert!(!stage.log().overlay_visible);

    // Every later position at or past the threshold is ignored
    for position in [30.0, 31.0, 100.0, 4000.0] {
        controller.on_position_update(position);
    }

    assert!(controller.interval_started());
    assert!(!controller.countdown_active());
    let log = stage.log();
    assert!(!log.overlay_visible);
    assert_eq!(log.pause_calls, 1);
}

#[test]
fn first_render_shows_the_full_duration() {
    let (mut controller, stage, _clock) = harness(30, 60);

    controller.on_position_update(31.2);

    let log = stage.log();
    assert_eq!(log.rendered.first().map(String::as_str), Some("1:00"));
    assert_eq!(log.rendered.first().cloned(), Some(format_remaining(60)));
}

#[test]
fn countdown_ends_on_elapsed_time_not_tick_count() {
    let (mut controller, stage, clock) = harness(30, 60);

    controller.on_position_update(30.0);

    // A single late tick after the whole duration has elapsed is enough
    clock.advance_secs(60);
    controller.on_countdown_tick();

    assert!(!controller.countdown_active());
    let log = stage.log();
    assert!(!log.overlay_visible);
    assert!(log.playing);
    assert_eq!(log.play_calls, 1);
}

#[test]
fn countdown_self_corrects_after_missed_ticks() {
    let (mut controller, stage, clock) = harness(30, 60);

    controller.on_position_update(30.0);

    clock.advance_secs(7);
    controller.on_countdown_tick();
    assert_eq!(stage.log().rendered.last().map(String::as_str), Some("0:53"));

    // The kiosk stalls for half a minute; the next tick lands on the
    // recomputed value instead of drifting
    clock.advance_secs(30);
    controller.on_countdown_tick();
    assert_eq!(stage.log().rendered.last().map(String::as_str), Some("0:23"));

    clock.advance_secs(23);
    controller.on_countdown_tick();
    assert!(!controller.countdown_active());
    assert!(stage.log().playing);
}

#[test]
fn manual_toggle_keeps_a_single_countdown() {
    let (mut controller, stage, _clock) = harness(30, 60);

    for _ in 0..3 {
        controller.toggle_interval();
        assert!(controller.countdown_active());
        assert!(stage.log().overlay_visible);

        controller.toggle_interval();
        assert!(!controller.countdown_active());
        assert!(!stage.log().overlay_visible);
    }
}

#[test]
fn manual_toggle_rearms_after_the_latch() {
    let (mut controller, stage, clock) = harness(30, 60);

    // Automatic intermission fires and runs out
    controller.on_position_update(30.0);
    clock.advance_secs(60);
    controller.on_countdown_tick();
    assert!(!controller.countdown_active());

    // The manual path is not latched: it re-arms a fresh countdown
    controller.toggle_interval();
    assert!(controller.countdown_active());
    let log = stage.log();
    assert!(log.overlay_visible);
    assert_eq!(log.rendered.last().map(String::as_str), Some("1:00"));
    drop(log);

    controller.toggle_interval();
    assert!(!controller.countdown_active());
    assert!(stage.log().playing);
}

#[test]
fn manual_hide_keeps_the_latch() {
    let (mut controller, stage, _clock) = harness(30, 60);

    controller.on_position_update(30.0);
    controller.toggle_interval();

    assert!(controller.interval_started());
    assert!(!stage.log().overlay_visible);

    // The automatic path stays suppressed after a manual hide
    controller.on_position_update(40.0);
    assert!(!stage.log().overlay_visible);
    assert_eq!(stage.log().pause_calls, 1);
}

#[test]
fn tick_without_countdown_is_a_no_op() {
    let (mut controller, stage, clock) = harness(30, 60);

    clock.advance_secs(5);
    controller.on_countdown_tick();

    let log = stage.log();
    assert!(log.rendered.is_empty());
    assert_eq!(log.play_calls, 0);
    assert_eq!(log.pause_calls, 0);
}

#[test]
fn full_intermission_scenario() {
    let (mut controller, stage, clock) = harness(30, 60);

    // Approach the threshold
    controller.on_position_update(29.5);
    assert!(!stage.log().overlay_visible);

    // Cross it: overlay up, playback paused, full duration rendered
    controller.on_position_update(30.0);
    {
        let log = stage.log();
        assert!(log.overlay_visible);
        assert!(!log.playing);
        assert_eq!(log.rendered.last().map(String::as_str), Some("1:00"));
    }

    // 59 seconds in, one second left on the clock
    clock.advance_secs(59);
    controller.on_countdown_tick();
    assert_eq!(stage.log().rendered.last().map(String::as_str), Some("0:01"));

    // One more second: overlay down, playback resumes, latch intact
    clock.advance_secs(1);
    controller.on_countdown_tick();
    {
        let log = stage.log();
        assert!(!log.overlay_visible);
        assert!(log.playing);
        assert_eq!(log.pause_calls, 1);
    }
    assert!(controller.interval_started());

    controller.on_position_update(30.5);
    controller.on_position_update(45.0);
    assert_eq!(stage.log().pause_calls, 1);
}
