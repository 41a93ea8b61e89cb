use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Business factors and slider defaults
pub mod defaults {
    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 500_000.0;
    pub const SLIDER_STEP: f64 = 5_000.0;
    /// PageUp/PageDown move this many steps at once.
    pub const PAGE_STEP_MULTIPLIER: f64 = 5.0;

    pub const AD_SPEND_FACTOR: f64 = 0.83;
    pub const REVENUE_FACTOR: f64 = 1.2925;
    pub const ROAS_FACTOR: f64 = 1.17;
    /// Share of the revenue gain counted towards total savings.
    pub const REVENUE_GAIN_WEIGHT: f64 = 0.64;
}

// Error type for slider range construction
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// `min` must be strictly below `max`
    InvalidBounds { min: f64, max: f64 },
    InvalidStep(f64),
    NonFinite,
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::InvalidBounds { min, max } => write!(
                f,
                "Slider minimum {} must be lower than maximum {}",
                min, max
            ),
            SliderError::InvalidStep(step) => {
                write!(f, "Slider step must be positive, got {}", step)
            }
            SliderError::NonFinite => write!(f, "Slider bounds and step must be finite numbers"),
        }
    }
}

impl std::error::Error for SliderError {}

/// The two values the user controls. Everything else on screen is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub ad_spend: f64,
    pub revenue: f64,
}

impl CalculatorState {
    pub fn new(ad_spend: f64, revenue: f64) -> Self {
        Self { ad_spend, revenue }
    }

    pub fn metrics(&self) -> DerivedMetrics {
        derive_metrics(self.ad_spend, self.revenue)
    }

    /// Replace one of the two values, keeping the other.
    pub fn apply(self, action: CalculatorAction) -> Self {
        match action {
            CalculatorAction::SetAdSpend(ad_spend) => Self { ad_spend, ..self },
            CalculatorAction::SetRevenue(revenue) => Self { revenue, ..self },
        }
    }
}

/// Slider change reported to the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorAction {
    SetAdSpend(f64),
    SetRevenue(f64),
}

impl yew::Reducible for CalculatorState {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Figures shown in the comparison cards and the savings banner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub improved_ad_spend: f64,
    pub improved_revenue: f64,
    pub current_roas: f64,
    pub improved_roas: f64,
    pub ad_spend_savings: f64,
    pub revenue_gain: f64,
    pub total_savings: f64,
}

impl DerivedMetrics {
    /// ROAS uplift shown in the header of the ROAS card.
    pub fn roas_difference(&self) -> f64 {
        self.improved_roas - self.current_roas
    }
}

/// Round to two decimal places, half away from zero.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn improved_ad_spend(ad_spend: f64) -> f64 {
    ad_spend * defaults::AD_SPEND_FACTOR
}

pub fn improved_revenue(revenue: f64) -> f64 {
    revenue * defaults::REVENUE_FACTOR
}

/// Revenue over ad spend, two decimals. Zero spend yields 0 instead of NaN/inf.
pub fn current_roas(ad_spend: f64, revenue: f64) -> f64 {
    if ad_spend == 0.0 {
        return 0.0;
    }
    round2(revenue / ad_spend)
}

pub fn improved_roas(current_roas: f64) -> f64 {
    if current_roas == 0.0 {
        return 0.0;
    }
    round2(current_roas * defaults::ROAS_FACTOR)
}

pub fn ad_spend_savings(ad_spend: f64, improved_ad_spend: f64) -> f64 {
    ad_spend - improved_ad_spend
}

pub fn revenue_gain(revenue: f64, improved_revenue: f64) -> f64 {
    improved_revenue - revenue
}

pub fn total_savings(ad_spend_savings: f64, revenue_gain: f64) -> f64 {
    ad_spend_savings + revenue_gain * defaults::REVENUE_GAIN_WEIGHT
}

/// Compute every derived figure from the two slider values.
pub fn derive_metrics(ad_spend: f64, revenue: f64) -> DerivedMetrics {
    let improved_ad_spend = improved_ad_spend(ad_spend);
    let improved_revenue = improved_revenue(revenue);
    let current_roas = current_roas(ad_spend, revenue);
    let improved_roas = improved_roas(current_roas);
    let ad_spend_savings = ad_spend_savings(ad_spend, improved_ad_spend);
    let revenue_gain = revenue_gain(revenue, improved_revenue);
    let total_savings = total_savings(ad_spend_savings, revenue_gain);

    DerivedMetrics {
        improved_ad_spend,
        improved_revenue,
        current_roas,
        improved_roas,
        ad_spend_savings,
        revenue_gain,
        total_savings,
    }
}

/// Insert `,` every three digits, counting from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US dollars with thousands separators and no cents, e.g. `$75,184`.
pub fn format_currency(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    if value < 0.0 && dollars > 0 {
        format!("-${}", group_thousands(dollars))
    } else {
        format!("${}", group_thousands(dollars))
    }
}

/// Ratio with exactly two decimals, e.g. `1.10`.
pub fn format_roas(value: f64) -> String {
    format!("{:.2}", value)
}

/// Plain grouped number (`200,000`), up to three fraction digits.
///
/// This is the default value formatter for sliders and the source of the
/// `aria-valuetext` announced to assistive technology.
pub fn format_grouped(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round() as u64;
    if scaled == 0 {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = group_thousands(scaled / 1000);
    let fraction = scaled % 1000;
    if fraction == 0 {
        format!("{}{}", sign, whole)
    } else {
        let fraction = format!("{:03}", fraction);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }
}

/// Host-page entry point returning the same figures the widget displays.
///
/// # Arguments
/// * `ad_spend` - Monthly ad spend in dollars
/// * `revenue` - Monthly revenue in dollars
///
/// # Returns
/// A plain JS object with camelCase keys, or `null` if serialization fails
#[wasm_bindgen(js_name = computeMetrics)]
pub fn compute_metrics(ad_spend: f64, revenue: f64) -> JsValue {
    let metrics = derive_metrics(ad_spend, revenue);
    debug!(
        "computeMetrics({}, {}) -> total savings {}",
        ad_spend, revenue, metrics.total_savings
    );
    serde_wasm_bindgen::to_value(&metrics).unwrap_or(JsValue::NULL)
}

pub mod slider;
