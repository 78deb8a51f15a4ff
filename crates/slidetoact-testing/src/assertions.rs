//! Assertion helpers for slider tests.

use slidetoact::SlideEvent;
use slidetoact_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert the exact notification sequence, ignoring the threshold payload
/// of `CompleteAnimationStarted`.
pub fn assert_events(actual: &[SlideEvent], expected: &[SlideEvent], msg: &str) {
    let normalize = |events: &[SlideEvent]| -> Vec<SlideEvent> {
        events
            .iter()
            .map(|event| match event {
                SlideEvent::CompleteAnimationStarted { .. } => {
                    SlideEvent::CompleteAnimationStarted { threshold: 0.0 }
                }
                other => *other,
            })
            .collect()
    };
    assert_eq!(normalize(actual), normalize(expected), "{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_accepts_values_within_tolerance() {
        assert_approx_eq(1.0, 1.04, 0.05, "close enough");
    }

    #[test]
    #[should_panic(expected = "too far")]
    fn approx_rejects_values_outside_tolerance() {
        assert_approx_eq(1.0, 1.2, 0.05, "too far");
    }

    #[test]
    fn events_ignore_the_threshold_payload() {
        assert_events(
            &[SlideEvent::CompleteAnimationStarted { threshold: 0.85 }],
            &[SlideEvent::CompleteAnimationStarted { threshold: 0.0 }],
            "payload",
        );
    }
}
