//! Main module for the ROI calculator application using Yew.
//! Holds the two slider values and wires them into the view components.

use log::{debug, info};
use roi_calculator::{format_currency, format_roas, CalculatorAction, CalculatorState};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{FallbackImage, MetricsCard, MonthlySavings, RangeSlider, RoasDisplay};
use config::*;

/// Calculator container: single owner of ad spend and revenue.
///
/// Derived figures are recomputed from the current state on every render, so
/// the cards can never show a stale value.
#[function_component(Calculator)]
fn calculator() -> Html {
    let state = use_reducer(|| CalculatorState::new(DEFAULT_AD_SPEND, DEFAULT_REVENUE));
    let snap_points = use_memo((), |_| SNAP_POINTS.to_vec());
    let metrics = state.metrics();

    let on_ad_spend = {
        let state = state.dispatcher();
        Callback::from(move |value: f64| {
            debug!("ad spend -> {}", value);
            state.dispatch(CalculatorAction::SetAdSpend(value));
        })
    };
    let on_revenue = {
        let state = state.dispatcher();
        Callback::from(move |value: f64| {
            debug!("revenue -> {}", value);
            state.dispatch(CalculatorAction::SetRevenue(value));
        })
    };

    html! {
        <div class="calculator">
            <div class="calculator-inputs">
                <h3>{ "Your Ad Spend now" }</h3>

                <div class="calculator-field">
                    <div class="field-title">{ "Current Monthly Ad Spend" }</div>
                    <RangeSlider
                        value={state.ad_spend}
                        on_change={on_ad_spend}
                        label={AD_SPEND_SLIDER_LABEL}
                        snap_points={snap_points.clone()}
                    />
                </div>

                <div class="calculator-field">
                    <div class="field-title">{ "Current Monthly Revenue" }</div>
                    <RangeSlider
                        value={state.revenue}
                        on_change={on_revenue}
                        label={REVENUE_SLIDER_LABEL}
                        snap_points={snap_points}
                    />
                </div>

                <RoasDisplay current_roas={metrics.current_roas} />
            </div>

            <div class="calculator-illustration">
                <FallbackImage
                    src={ILLUSTRATION_URL}
                    alt="ROAS Calculator visualization"
                    class={classes!("illustration")}
                    fallback={html! { <div class="illustration-fallback"></div> }}
                />
            </div>

            <div class="calculator-results">
                <div class="brand-heading">
                    <span class="brand-with">{ "With" }</span>
                    <FallbackImage
                        src={LOGO_URL}
                        alt={BRAND_NAME}
                        class={classes!("brand-logo")}
                        fallback={html! { <span class="brand-name">{ BRAND_NAME }</span> }}
                    />
                </div>

                <div class="metrics-grid">
                    <MetricsCard
                        title="Ad Spend"
                        difference={format_currency(metrics.ad_spend_savings)}
                        is_positive={false}
                        current_label="Your current Ad Spend"
                        current_value={format_currency(state.ad_spend)}
                        current_width={AD_SPEND_BARS.current}
                        improved_value={format_currency(metrics.improved_ad_spend)}
                        improved_width={AD_SPEND_BARS.improved}
                    />
                    <MetricsCard
                        title="Revenue"
                        difference={format_currency(metrics.revenue_gain)}
                        is_positive={true}
                        current_label="Your current Revenue"
                        current_value={format_currency(state.revenue)}
                        current_width={REVENUE_BARS.current}
                        improved_value={format_currency(metrics.improved_revenue)}
                        improved_width={REVENUE_BARS.improved}
                    />
                    <MetricsCard
                        title="ROAS"
                        difference={format_roas(metrics.roas_difference())}
                        is_positive={true}
                        current_label="Your current ROAS"
                        current_value={format_roas(metrics.current_roas)}
                        current_width={ROAS_BARS.current}
                        improved_value={format_roas(metrics.improved_roas)}
                        improved_width={ROAS_BARS.improved}
                    />
                </div>

                <MonthlySavings total_savings={metrics.total_savings} />
            </div>
        </div>
    }
}

/// Page shell around the calculator.
#[function_component]
pub fn App() -> Html {
    html! {
        <main class="page">
            <div class="page-intro">
                <h1>{ format!("{} ROI Calculator", BRAND_NAME) }</h1>
                <p>
                    { format!("See how {} can help reduce your ad spend while increasing your \
                       revenue. Adjust the sliders to calculate your monthly savings.", BRAND_NAME) }
                </p>
            </div>
            <div class="page-calculator">
                <Calculator />
            </div>
        </main>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    info!("Starting {} ROI calculator", BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
