//! Interaction model for the calculator's range sliders.
//!
//! Everything here is free of DOM access so the view layer only has to
//! measure the track and forward events. The slider is controlled: the
//! current value always comes from the owner and every method returns the
//! value that should be reported through `on_change`.

use crate::{defaults, SliderError};

/// Validated `[min, max]` range with its step increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: defaults::SLIDER_MIN,
            max: defaults::SLIDER_MAX,
            step: defaults::SLIDER_STEP,
        }
    }
}

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SliderError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(SliderError::NonFinite);
        }
        if min >= max {
            return Err(SliderError::InvalidBounds { min, max });
        }
        if step <= 0.0 {
            return Err(SliderError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Position of `value` on the track, 0 at `min` and 100 at `max`.
    ///
    /// Fill width, thumb offset and the proxy input all read this.
    pub fn percentage(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * 100.0
    }

    /// Inverse of [`percentage`](Self::percentage), without quantization.
    pub fn value_at(&self, percentage: f64) -> f64 {
        self.min + percentage / 100.0 * (self.max - self.min)
    }

    /// Round to the nearest step (counted from `min`) and clamp into range.
    pub fn quantize(&self, raw: f64) -> f64 {
        let steps = ((raw - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Keys the slider responds to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    StepUp,
    StepDown,
    PageUp,
    PageDown,
    Home,
    End,
}

impl SliderKey {
    /// Map a `KeyboardEvent.key` value. Unhandled keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowUp" => Some(SliderKey::StepUp),
            "ArrowLeft" | "ArrowDown" => Some(SliderKey::StepDown),
            "PageUp" => Some(SliderKey::PageUp),
            "PageDown" => Some(SliderKey::PageDown),
            "Home" => Some(SliderKey::Home),
            "End" => Some(SliderKey::End),
            _ => None,
        }
    }
}

/// Horizontal extent of the track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

/// Range plus the preferred values a released thumb gravitates to.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    range: SliderRange,
    snap_points: Vec<f64>,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderRange::default(), Vec::new())
    }
}

impl Slider {
    pub fn new(range: SliderRange, snap_points: Vec<f64>) -> Self {
        Self { range, snap_points }
    }

    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    pub fn snap_points(&self) -> &[f64] {
        &self.snap_points
    }

    pub fn percentage(&self, value: f64) -> f64 {
        self.range.percentage(value)
    }

    /// Return the first snap point (in declaration order) closer than one
    /// step to `value`, or `value` itself when none is.
    ///
    /// First match wins even if a later point is closer.
    pub fn snap_to_point(&self, value: f64) -> f64 {
        self.snap_points
            .iter()
            .copied()
            .find(|point| (value - point).abs() < self.range.step)
            .unwrap_or(value)
    }

    /// Value after a key press. Moves are clamped, then quantized.
    pub fn key_value(&self, value: f64, key: SliderKey) -> f64 {
        let SliderRange { min, max, step } = self.range;
        let page = step * defaults::PAGE_STEP_MULTIPLIER;
        let target = match key {
            SliderKey::StepUp => (value + step).min(max),
            SliderKey::StepDown => (value - step).max(min),
            SliderKey::PageUp => (value + page).min(max),
            SliderKey::PageDown => (value - page).max(min),
            SliderKey::Home => min,
            SliderKey::End => max,
        };
        self.range.quantize(target)
    }

    /// Value under the pointer while dragging. Snap points are ignored.
    ///
    /// Returns `None` when the track has not been measured yet.
    pub fn drag_value(&self, client_x: f64, track: Option<TrackRect>) -> Option<f64> {
        let track = track.filter(|t| t.width > 0.0 && t.width.is_finite())?;
        let percentage = ((client_x - track.left) / track.width * 100.0).clamp(0.0, 100.0);
        Some(self.range.quantize(self.range.value_at(percentage)))
    }

    /// Snapped value to report when a drag ends, if it differs.
    pub fn release_value(&self, value: f64) -> Option<f64> {
        if self.snap_points.is_empty() {
            return None;
        }
        let snapped = self.snap_to_point(value);
        (snapped != value).then_some(snapped)
    }

    /// Value for a change on the hidden 0..=100 range input.
    pub fn proxy_value(&self, hundred_scale: f64, dragging: bool) -> f64 {
        let quantized = self.range.quantize(self.range.value_at(hundred_scale));
        if dragging {
            quantized
        } else {
            self.snap_to_point(quantized)
        }
    }
}

/// One pointer or touch drag, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    latest: f64,
    released: bool,
}

impl DragSession {
    pub fn begin(value: f64) -> Self {
        Self {
            latest: value,
            released: false,
        }
    }

    /// Last value reported during this drag.
    pub fn latest(&self) -> f64 {
        self.latest
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Follow the pointer; yields the value to emit for this move event.
    pub fn track(
        &mut self,
        slider: &Slider,
        client_x: f64,
        track: Option<TrackRect>,
    ) -> Option<f64> {
        if self.released {
            return None;
        }
        let value = slider.drag_value(client_x, track)?;
        self.latest = value;
        Some(value)
    }

    /// End the drag. Only the first call can produce a snapped value.
    pub fn release(&mut self, slider: &Slider) -> Option<f64> {
        if self.released {
            return None;
        }
        self.released = true;
        let snapped = slider.release_value(self.latest)?;
        self.latest = snapped;
        Some(snapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const TRACK: Option<TrackRect> = Some(TrackRect {
        left: 100.0,
        width: 500.0,
    });

    // Snap point off the step grid so released drags can land near it.
    fn fine_slider() -> Slider {
        Slider::new(SliderRange::new(0.0, 100.0, 10.0).unwrap(), vec![47.0])
    }

    const FINE_TRACK: Option<TrackRect> = Some(TrackRect {
        left: 0.0,
        width: 100.0,
    });

    fn calculator_slider() -> Slider {
        Slider::new(
            SliderRange::default(),
            vec![125_000.0, 250_000.0, 375_000.0],
        )
    }

    #[test]
    fn default_range() {
        let range = SliderRange::default();

        assert_eq!(0.0, range.min());
        assert_eq!(500_000.0, range.max());
        assert_eq!(5_000.0, range.step());
    }

    #[test_case(10.0, 5.0, 1.0, SliderError::InvalidBounds { min: 10.0, max: 5.0 } ; "min above max")]
    #[test_case(5.0, 5.0, 1.0, SliderError::InvalidBounds { min: 5.0, max: 5.0 } ; "empty range")]
    #[test_case(0.0, 10.0, 0.0, SliderError::InvalidStep(0.0) ; "zero step")]
    #[test_case(0.0, 10.0, -1.0, SliderError::InvalidStep(-1.0) ; "negative step")]
    #[test_case(0.0, f64::INFINITY, 1.0, SliderError::NonFinite ; "infinite max")]
    #[test_case(f64::NAN, 10.0, 1.0, SliderError::NonFinite ; "nan min")]
    fn invalid_range(min: f64, max: f64, step: f64, expected: SliderError) {
        assert_eq!(Err(expected), SliderRange::new(min, max, step));
    }

    #[test_case(0.0, 0.0)]
    #[test_case(125_000.0, 25.0)]
    #[test_case(200_000.0, 40.0)]
    #[test_case(500_000.0, 100.0)]
    fn percentage(value: f64, expected: f64) {
        assert_eq!(expected, SliderRange::default().percentage(value));
    }

    #[test]
    fn percentage_with_offset_range() {
        let range = SliderRange::new(100.0, 300.0, 10.0).unwrap();

        assert_eq!(50.0, range.percentage(200.0));
        assert_eq!(200.0, range.value_at(50.0));
    }

    #[test]
    fn percentage_round_trips_through_quantization() {
        let range = SliderRange::default();
        for i in 0..=100 {
            let value = i as f64 * range.step();
            let back = range.quantize(range.value_at(range.percentage(value)));
            assert_eq!(value, back);
        }
    }

    #[test_case(0.0, 0.0)]
    #[test_case(2_499.0, 0.0)]
    #[test_case(2_500.0, 5_000.0 ; "half rounds up")]
    #[test_case(123_000.0, 125_000.0)]
    #[test_case(-7_000.0, 0.0 ; "clamped to min")]
    #[test_case(512_345.0, 500_000.0 ; "clamped to max")]
    fn quantize(raw: f64, expected: f64) {
        assert_eq!(expected, SliderRange::default().quantize(raw));
    }

    #[test]
    fn quantize_is_idempotent() {
        let range = SliderRange::new(3.0, 101.0, 7.0).unwrap();
        for raw in [-5.0, 3.0, 9.4, 10.6, 50.0, 96.9, 120.0] {
            let once = range.quantize(raw);
            assert_eq!(once, range.quantize(once));
        }
    }

    #[test]
    fn quantize_counts_steps_from_min() {
        let range = SliderRange::new(3.0, 101.0, 7.0).unwrap();

        assert_eq!(10.0, range.quantize(9.0));
        assert_eq!(94.0, range.quantize(96.0));
    }

    #[test_case(123_000.0, 125_000.0 ; "inside tolerance")]
    #[test_case(130_000.0, 130_000.0 ; "exactly one step away")]
    #[test_case(300_000.0, 300_000.0 ; "far from every point")]
    #[test_case(372_000.0, 375_000.0 ; "last point")]
    fn snap_to_point(value: f64, expected: f64) {
        assert_eq!(expected, calculator_slider().snap_to_point(value));
    }

    #[test]
    fn snap_prefers_first_declared_point() {
        // Given
        let slider = Slider::new(SliderRange::new(0.0, 100.0, 10.0).unwrap(), vec![40.0, 48.0]);

        // When
        let snapped = slider.snap_to_point(47.0);

        // Then
        assert_eq!(40.0, snapped);
    }

    #[test]
    fn snap_without_points_is_identity() {
        assert_eq!(123_000.0, Slider::default().snap_to_point(123_000.0));
    }

    #[test_case("ArrowRight", Some(SliderKey::StepUp))]
    #[test_case("ArrowUp", Some(SliderKey::StepUp))]
    #[test_case("ArrowLeft", Some(SliderKey::StepDown))]
    #[test_case("ArrowDown", Some(SliderKey::StepDown))]
    #[test_case("PageUp", Some(SliderKey::PageUp))]
    #[test_case("PageDown", Some(SliderKey::PageDown))]
    #[test_case("Home", Some(SliderKey::Home))]
    #[test_case("End", Some(SliderKey::End))]
    #[test_case("Enter", None)]
    #[test_case("a", None)]
    fn key_mapping(key: &str, expected: Option<SliderKey>) {
        assert_eq!(expected, SliderKey::from_key(key));
    }

    #[test_case(200_000.0, SliderKey::StepUp, 205_000.0)]
    #[test_case(200_000.0, SliderKey::StepDown, 195_000.0)]
    #[test_case(200_000.0, SliderKey::PageUp, 225_000.0)]
    #[test_case(200_000.0, SliderKey::PageDown, 175_000.0)]
    #[test_case(200_000.0, SliderKey::Home, 0.0)]
    #[test_case(200_000.0, SliderKey::End, 500_000.0)]
    #[test_case(0.0, SliderKey::StepDown, 0.0 ; "decrease at min")]
    #[test_case(0.0, SliderKey::PageDown, 0.0 ; "page down at min")]
    #[test_case(500_000.0, SliderKey::StepUp, 500_000.0 ; "increase at max")]
    #[test_case(490_000.0, SliderKey::PageUp, 500_000.0 ; "page up near max")]
    #[test_case(122_000.0, SliderKey::StepUp, 125_000.0 ; "off-grid value is quantized")]
    fn key_value(value: f64, key: SliderKey, expected: f64) {
        assert_eq!(expected, calculator_slider().key_value(value, key));
    }

    #[test]
    fn keyboard_does_not_snap() {
        let slider = calculator_slider();

        assert_eq!(
            120_000.0,
            slider.key_value(115_000.0, SliderKey::StepUp)
        );
    }

    #[test_case(100.0, 0.0 ; "left edge")]
    #[test_case(300.0, 200_000.0 ; "inside track")]
    #[test_case(600.0, 500_000.0 ; "right edge")]
    #[test_case(20.0, 0.0 ; "left of track")]
    #[test_case(900.0, 500_000.0 ; "right of track")]
    #[test_case(223.0, 125_000.0 ; "quantized to step")]
    fn drag_value(client_x: f64, expected: f64) {
        assert_eq!(Some(expected), calculator_slider().drag_value(client_x, TRACK));
    }

    #[test]
    fn drag_without_measurement_is_skipped() {
        let slider = calculator_slider();

        assert_eq!(None, slider.drag_value(300.0, None));
        assert_eq!(
            None,
            slider.drag_value(300.0, Some(TrackRect { left: 0.0, width: 0.0 }))
        );
    }

    #[test]
    fn drag_does_not_snap_mid_drag() {
        let slider = fine_slider();

        assert_eq!(Some(50.0), slider.drag_value(48.0, FINE_TRACK));
    }

    #[test]
    fn release_snaps_once() {
        // Given
        let slider = fine_slider();
        let mut session = DragSession::begin(20.0);

        // When
        let moved = session.track(&slider, 52.0, FINE_TRACK);
        let first = session.release(&slider);
        let second = session.release(&slider);

        // Then
        assert_eq!(Some(50.0), moved);
        assert_eq!(Some(47.0), first);
        assert_eq!(None, second);
        assert!(session.is_released());
        assert_eq!(47.0, session.latest());
    }

    #[test]
    fn release_uses_latest_position() {
        let slider = fine_slider();
        let mut session = DragSession::begin(50.0);
        session.track(&slider, 81.0, FINE_TRACK);
        session.track(&slider, 12.0, None);

        assert_eq!(80.0, session.latest());
        assert_eq!(None, session.release(&slider));
    }

    #[test]
    fn release_outside_tolerance_reports_nothing() {
        let slider = calculator_slider();
        let mut session = DragSession::begin(0.0);

        assert_eq!(Some(300_000.0), session.track(&slider, 400.0, TRACK));
        assert_eq!(None, session.release(&slider));
    }

    #[test]
    fn release_on_snap_point_reports_nothing() {
        let slider = calculator_slider();
        let mut session = DragSession::begin(250_000.0);

        assert_eq!(None, session.release(&slider));
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let slider = calculator_slider();
        let mut session = DragSession::begin(0.0);
        session.release(&slider);

        assert_eq!(None, session.track(&slider, 400.0, TRACK));
        assert_eq!(0.0, session.latest());
    }

    #[test]
    fn proxy_input_snaps_only_when_idle() {
        let slider = fine_slider();

        assert_eq!(47.0, slider.proxy_value(46.0, false));
        assert_eq!(50.0, slider.proxy_value(46.0, true));
        assert_eq!(80.0, slider.proxy_value(80.0, false));
    }

    #[test]
    fn proxy_input_rescales_hundred_scale() {
        let slider = calculator_slider();

        assert_eq!(125_000.0, slider.proxy_value(24.6, false));
        assert_eq!(200_000.0, slider.proxy_value(40.0, false));
        assert_eq!(500_000.0, slider.proxy_value(100.0, true));
    }
}
