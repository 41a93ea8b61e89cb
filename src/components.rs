//! Yew view components for the ROI calculator.
//!
//! `RangeSlider` is the only component with local state (drag and focus
//! flags); the cards and banners render the props they are given.

use crate::config::IMPROVED_BAR_ICON_URL;
use crate::hooks::use_slider_drag;
use crate::utils::{active_class, difference_sign, percent_style, range_label};
use log::warn;
use roi_calculator::slider::{Slider, SliderKey, SliderRange};
use roi_calculator::{defaults, format_currency, format_grouped, format_roas};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Controlled range slider with drag, keyboard and proxy-input handling.
#[derive(Properties, PartialEq)]
pub struct RangeSliderProps {
    pub value: f64,
    pub on_change: Callback<f64>,
    #[prop_or(defaults::SLIDER_MIN)]
    pub min: f64,
    #[prop_or(defaults::SLIDER_MAX)]
    pub max: f64,
    #[prop_or(defaults::SLIDER_STEP)]
    pub step: f64,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(Callback::from(format_grouped))]
    pub format_value: Callback<f64, String>,
    #[prop_or_default]
    pub snap_points: Rc<Vec<f64>>,
}

#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    let slider = use_memo(
        (props.min, props.max, props.step, props.snap_points.clone()),
        |(min, max, step, snap_points)| {
            let range = SliderRange::new(*min, *max, *step).unwrap_or_else(|e| {
                warn!("{}; using the default slider range", e);
                SliderRange::default()
            });
            Slider::new(range, snap_points.to_vec())
        },
    );
    let focused = use_state(|| false);
    let track = use_node_ref();
    let drag = use_slider_drag(
        slider.clone(),
        props.value,
        track.clone(),
        props.on_change.clone(),
    );

    let value = props.value;
    let range = *slider.range();
    let percentage = slider.percentage(value);
    let value_text = props.format_value.emit(value);
    let active = drag.dragging || *focused;

    let onmousedown = {
        let on_start = drag.on_start.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_start.emit(());
        })
    };
    let ontouchstart = {
        let on_start = drag.on_start.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_start.emit(());
        })
    };
    let onkeydown = {
        let slider = slider.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(key) = SliderKey::from_key(&e.key()) else {
                return;
            };
            e.prevent_default();
            on_change.emit(slider.key_value(value, key));
        })
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    let oninput = {
        let slider = slider.clone();
        let on_change = props.on_change.clone();
        let dragging = drag.dragging;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(hundred_scale) = input.value().parse::<f64>() {
                on_change.emit(slider.proxy_value(hundred_scale, dragging));
            }
        })
    };

    html! {
        <div class="range-block" data-multiplier={range.step().to_string()}>
            <div class="range-numbers">
                <div class="numbers-range">{ range_label(range.min()) }</div>
                <div class="numbers-range">{ range_label(range.max()) }</div>
            </div>
            <div class="range-content" ref={track}>
                <div class={active_class("range-slider-line", active)}
                     style={percent_style("width", percentage)}></div>
                <div class="range-slider"></div>
                <div class={active_class("range-thumb", active)}
                    style={percent_style("left", percentage)}
                    tabindex="0"
                    role="slider"
                    aria-valuemin={range.min().to_string()}
                    aria-valuemax={range.max().to_string()}
                    aria-valuenow={value.to_string()}
                    aria-valuetext={value_text.clone()}
                    {onmousedown}
                    {ontouchstart}
                    {onkeydown}
                    {onfocus}
                    {onblur}
                >
                    <div class={active_class("range-value", active)}>
                        <span class="dollar">{ "$" }</span>
                        <span class="range-value-number">{ value_text.clone() }</span>
                    </div>
                </div>
                <input type="range"
                    class="calculator-range"
                    min="0"
                    max="100"
                    step="1"
                    value={percentage.to_string()}
                    aria-label={props.label.clone().unwrap_or_else(|| AttrValue::from("Slider"))}
                    aria-valuemin={range.min().to_string()}
                    aria-valuemax={range.max().to_string()}
                    aria-valuenow={value.to_string()}
                    aria-valuetext={value_text}
                    {oninput}
                />
            </div>
        </div>
    }
}

/// Comparison card with a "current" and an "improved" bar.
#[derive(Properties, PartialEq)]
pub struct MetricsCardProps {
    pub title: AttrValue,
    pub difference: AttrValue,
    pub is_positive: bool,
    pub current_label: AttrValue,
    pub current_value: AttrValue,
    pub current_width: AttrValue,
    pub improved_value: AttrValue,
    pub improved_width: AttrValue,
}

#[function_component(MetricsCard)]
pub fn metrics_card(props: &MetricsCardProps) -> Html {
    html! {
        <div class="metrics-card">
            <div class="metrics-card-backdrop"></div>
            <div class="metrics-card-body">
                <div class="metrics-card-title">
                    { props.title.clone() }
                    <span class="metrics-card-sign">{ difference_sign(props.is_positive) }</span>
                    { props.difference.clone() }
                </div>
                <div class="metrics-row">
                    <div class="bar bar-current" style={format!("width: {};", props.current_width)}>
                        <span class="bar-label">{ props.current_label.clone() }</span>
                    </div>
                    <div class="bar-value">{ props.current_value.clone() }</div>
                </div>
                <div class="metrics-row">
                    <div class="bar bar-improved" style={format!("width: {};", props.improved_width)}>
                        <img src={IMPROVED_BAR_ICON_URL} alt="" class="bar-icon" />
                    </div>
                    <div class="bar-value">{ props.improved_value.clone() }</div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoasDisplayProps {
    pub current_roas: f64,
}

#[function_component(RoasDisplay)]
pub fn roas_display(props: &RoasDisplayProps) -> Html {
    html! {
        <div class="roas-display">
            <div class="roas-divider"></div>
            <div class="roas-row">
                <div class="roas-label">{ "Current Monthly ROAS" }</div>
                <div class="roas-badge">{ format_roas(props.current_roas) }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthlySavingsProps {
    pub total_savings: f64,
}

#[function_component(MonthlySavings)]
pub fn monthly_savings(props: &MonthlySavingsProps) -> Html {
    html! {
        <div class="monthly-savings">
            <h5>{ "Monthly Savings" }</h5>
            <div class="monthly-savings-amount">{ format_currency(props.total_savings) }</div>
        </div>
    }
}

/// Image that swaps to `fallback` if it fails to load.
#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub fallback: Html,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    if *failed {
        return props.fallback.clone();
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!("Failed to load image {}, showing fallback", src);
            failed.set(true);
        })
    };

    html! {
        <img src={props.src.clone()}
             alt={props.alt.clone()}
             class={props.class.clone()}
             {onerror} />
    }
}
