use super::*;
use crate::consts::{TYPING_START_DELAY_MS, TYPING_STEP_MS};
use crate::test_clock::VirtualClock;

#[test]
fn types_one_char_per_frame() {
    let mut tw = Typewriter::new("Hi!");
    assert_eq!(tw.next_frame().as_deref(), Some("H"));
    assert_eq!(tw.next_frame().as_deref(), Some("Hi"));
    assert_eq!(tw.next_frame().as_deref(), Some("Hi!"));
    assert!(tw.is_done());
    assert_eq!(tw.next_frame(), None);
    assert_eq!(tw.next_frame(), None);
}

#[test]
fn multibyte_text_is_split_on_chars() {
    let mut tw = Typewriter::new("héllo");
    assert_eq!(tw.next_frame().as_deref(), Some("h"));
    assert_eq!(tw.next_frame().as_deref(), Some("hé"));
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.next_frame(), None);
}

// =============================================================
// Schedule
// =============================================================

/// Runs a typewriter the way the heading controller does: one start timer
/// that shows the first frame, then a repeating step until the text is done.
fn run(text: &str, schedule: TypingSchedule) -> Vec<(u64, String)> {
    let mut tw = Typewriter::new(text);
    let mut clock = VirtualClock::default();
    clock.schedule(schedule.start_delay_ms, ());
    let mut frames = Vec::new();
    while let Some((at, ())) = clock.next_due(10_000) {
        let Some(shown) = tw.next_frame() else {
            break;
        };
        frames.push((at, shown));
        clock.schedule(schedule.step_ms, ());
    }
    frames
}

#[test]
fn default_schedule_uses_page_timings() {
    let schedule = TypingSchedule::default();
    assert_eq!(schedule.start_delay_ms, TYPING_START_DELAY_MS);
    assert_eq!(schedule.step_ms, TYPING_STEP_MS);
}

#[test]
fn first_character_appears_when_start_delay_elapses() {
    let frames = run("abcd", TypingSchedule::default());
    assert_eq!(frames.first(), Some(&(500, "a".to_owned())));
}

#[test]
fn schedule_finishes_after_delay_plus_steps() {
    let frames = run("abcd", TypingSchedule::default());
    assert_eq!(frames.len(), 4);
    assert_eq!(frames.last().cloned(), Some((650, "abcd".to_owned())));
}

#[test]
fn frames_land_on_their_due_times() {
    let schedule = TypingSchedule { start_delay_ms: 200, step_ms: 30 };
    let frames = run("hello", schedule);
    for (index, (at, _)) in frames.iter().enumerate() {
        assert_eq!(*at, schedule.frame_due_ms(index));
    }
    assert_eq!(schedule.frame_due_ms(0), 200);
    assert_eq!(schedule.frame_due_ms(4), 320);
}
