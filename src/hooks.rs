use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use roi_calculator::slider::{DragSession, Slider};
use web_sys::Event;
use yew::prelude::*;

use crate::utils::{pointer_client_x, track_rect};

/// Drag state and the callback that starts a drag.
#[derive(Clone)]
pub struct SliderDrag {
    /// True between thumb press and pointer/touch release.
    pub dragging: bool,
    /// Emit from the thumb's `mousedown` / `touchstart` handler.
    pub on_start: Callback<()>,
}

/// Owns the document-level move/release listeners of one slider.
///
/// Listeners live in a `Vec<EventListener>`; dropping the handles detaches
/// them. They are dropped in an effect once `dragging` turns false (never
/// from inside their own callback), and when the slider unmounts.
#[hook]
pub fn use_slider_drag(
    slider: Rc<Slider>,
    value: f64,
    track: NodeRef,
    on_change: Callback<f64>,
) -> SliderDrag {
    let dragging = use_state(|| false);
    let session = use_mut_ref(|| None::<DragSession>);
    let listeners: Rc<RefCell<Vec<EventListener>>> = use_mut_ref(Vec::new);

    // Detach once the release has been rendered.
    {
        let listeners = listeners.clone();
        use_effect_with(*dragging, move |dragging| {
            if !*dragging {
                listeners.borrow_mut().clear();
            }
            || ()
        });
    }

    // Detach on unmount, even mid-drag.
    {
        let listeners = listeners.clone();
        use_effect_with((), move |_| {
            move || {
                listeners.borrow_mut().clear();
            }
        });
    }

    let on_start = {
        let dragging = dragging.clone();
        Callback::from(move |_: ()| {
            *session.borrow_mut() = Some(DragSession::begin(value));
            dragging.set(true);
            debug!("slider drag started at {}", value);

            let document = gloo_utils::document();

            let on_move = {
                let session = session.clone();
                let slider = slider.clone();
                let track = track.clone();
                let on_change = on_change.clone();
                move |event: &Event| {
                    let Some(client_x) = pointer_client_x(event) else {
                        return;
                    };
                    let next = session
                        .borrow_mut()
                        .as_mut()
                        .and_then(|s| s.track(&slider, client_x, track_rect(&track)));
                    if let Some(next) = next {
                        on_change.emit(next);
                    }
                }
            };

            let on_release = {
                let session = session.clone();
                let slider = slider.clone();
                let on_change = on_change.clone();
                let dragging = dragging.clone();
                move |_: &Event| {
                    let snapped = session.borrow_mut().as_mut().and_then(|s| {
                        if s.is_released() {
                            return None;
                        }
                        let snapped = s.release(&slider);
                        debug!("slider drag released at {}", s.latest());
                        snapped
                    });
                    dragging.set(false);
                    if let Some(snapped) = snapped {
                        on_change.emit(snapped);
                    }
                }
            };
            let on_move = Rc::new(on_move);
            let on_release = Rc::new(on_release);

            let mut handles = Vec::with_capacity(4);
            for event_type in ["mousemove", "touchmove"] {
                let on_move = on_move.clone();
                handles.push(EventListener::new(&document, event_type, move |e| on_move(e)));
            }
            for event_type in ["mouseup", "touchend"] {
                let on_release = on_release.clone();
                handles.push(EventListener::new(&document, event_type, move |e| {
                    on_release(e)
                }));
            }
            // Replacing drops any handles left over from a previous drag.
            *listeners.borrow_mut() = handles;
        })
    };

    SliderDrag {
        dragging: *dragging,
        on_start,
    }
}
