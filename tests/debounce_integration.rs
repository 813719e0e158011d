mod common;

use common::at;
use embassy_time::Duration;
use midi_panel::{DEBOUNCE_WINDOW, DebounceState, Debouncer};

#[test]
fn short_glitch_never_commits() {
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    // Flip at t=0, flip back at t=20ms, then poll every 10ms for a while
    assert_eq!(debouncer.update(true, at(0)), None);
    assert_eq!(debouncer.update(true, at(10)), None);
    for t in (20..=500).step_by(10) {
        assert_eq!(debouncer.update(false, at(t)), None, "committed at {}ms", t);
    }

    assert!(!debouncer.debounced());
    assert_eq!(debouncer.state(), DebounceState::StableLow);
}

#[test]
fn stable_input_commits_at_window() {
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    let mut fired_at = None;
    for t in (0..=60).step_by(10) {
        if let Some(level) = debouncer.update(true, at(t)) {
            assert!(level);
            assert!(fired_at.is_none(), "fired twice");
            fired_at = Some(t);
        }
    }

    assert_eq!(fired_at, Some(50));
    assert_eq!(debouncer.state(), DebounceState::StableHigh);
}

#[test]
fn one_change_per_transition() {
    let mut debouncer = Debouncer::new(Duration::from_millis(30));

    let mut commits = Vec::new();
    // high for 100ms, low for 100ms, high again for 100ms
    for t in (0..300).step_by(5) {
        let level = (t / 100) % 2 == 0;
        if let Some(value) = debouncer.update(level, at(1_000 + t)) {
            commits.push((t, value));
        }
    }

    assert_eq!(commits, vec![(30, true), (130, false), (230, true)]);
}

#[test]
fn chatter_delays_commit_until_quiet() {
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    // Contact chatter for the first 40ms, then held high
    let readings = [true, false, true, true, false, true];
    for (i, &reading) in readings.iter().enumerate() {
        assert_eq!(debouncer.update(reading, at(i as u64 * 8)), None);
    }
    // Last change was at 40ms
    assert_eq!(debouncer.update(true, at(89)), None);
    assert_eq!(debouncer.state(), DebounceState::Pending);
    assert_eq!(debouncer.update(true, at(90)), Some(true));
}

#[test]
fn pending_that_reverts_is_stable_again() {
    let mut debouncer = Debouncer::with_level(DEBOUNCE_WINDOW, true);

    debouncer.update(false, at(100));
    assert_eq!(debouncer.state(), DebounceState::Pending);

    debouncer.update(true, at(120));
    assert_eq!(debouncer.state(), DebounceState::StableHigh);
    assert_eq!(debouncer.update(true, at(400)), None);
}
