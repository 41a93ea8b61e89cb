//! Application-level configuration constants.

// Initial slider values
pub const DEFAULT_AD_SPEND: f64 = 200_000.0;
pub const DEFAULT_REVENUE: f64 = 220_000.0;

// Slider behaviour
pub const SNAP_POINTS: [f64; 3] = [125_000.0, 250_000.0, 375_000.0];
pub const AD_SPEND_SLIDER_LABEL: &str = "Ad Spend Slider";
pub const REVENUE_SLIDER_LABEL: &str = "Revenue Slider";

/// Widths of the "current" and "improved" comparison bars.
///
/// Fixed presentation values, not derived from the figures on the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarWidths {
    pub current: &'static str,
    pub improved: &'static str,
}

pub const AD_SPEND_BARS: BarWidths = BarWidths {
    current: "70%",
    improved: "55%",
};
pub const REVENUE_BARS: BarWidths = BarWidths {
    current: "55%",
    improved: "75%",
};
pub const ROAS_BARS: BarWidths = BarWidths {
    current: "50%",
    improved: "75%",
};

// Branding and externally hosted assets
pub const BRAND_NAME: &str = "OneTrack";
pub const ILLUSTRATION_URL: &str = "https://cdn.prod.website-files.com/6596ccfbb3d9754c38fb8e60/6596da5dc1170c5d925c93d2_Group%209969.webp";
pub const LOGO_URL: &str = "https://cdn.prod.website-files.com/6596ccfbb3d9754c38fb8e60/6596da5dc1170c5d925c93d1_brandmark%20logo.svg";
pub const IMPROVED_BAR_ICON_URL: &str = "https://cdn.prod.website-files.com/6596ccfbb3d9754c38fb8e60/6596da5dc1170c5d925c93d0_Group%209967.svg";
