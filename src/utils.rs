use roi_calculator::format_grouped;
use roi_calculator::slider::TrackRect;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::NodeRef;

/// Horizontal pointer position of a mouse or touch event, in client pixels.
pub fn pointer_client_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(mouse.client_x() as f64);
    }
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|first| first.client_x() as f64)
}

/// Measure the slider track. `None` until the node is mounted.
pub fn track_rect(track: &NodeRef) -> Option<TrackRect> {
    let rect = track.cast::<Element>()?.get_bounding_client_rect();
    Some(TrackRect {
        left: rect.left(),
        width: rect.width(),
    })
}

/// Inline style positioning an element at `percentage` along the track.
pub fn percent_style(property: &str, percentage: f64) -> String {
    format!("{}: {}%;", property, percentage)
}

/// Range end label such as `$500,000`.
pub fn range_label(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// Sign shown between a card title and its difference.
pub fn difference_sign(is_positive: bool) -> &'static str {
    if is_positive {
        "+"
    } else {
        "-"
    }
}

/// Join static and conditional class names.
pub fn active_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{} is-active", base)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_style_formats_css() {
        assert_eq!("width: 40%;", percent_style("width", 40.0));
        assert_eq!("left: 24.6%;", percent_style("left", 24.6));
    }

    #[test]
    fn range_labels() {
        assert_eq!("$0", range_label(0.0));
        assert_eq!("$500,000", range_label(500_000.0));
    }

    #[test]
    fn difference_signs() {
        assert_eq!("+", difference_sign(true));
        assert_eq!("-", difference_sign(false));
    }

    #[test]
    fn active_class_appends_modifier() {
        assert_eq!("range-thumb", active_class("range-thumb", false));
        assert_eq!("range-thumb is-active", active_class("range-thumb", true));
    }
}
