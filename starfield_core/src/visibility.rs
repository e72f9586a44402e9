use crate::Params;

/// Fade class applied to the canvas element for CSS transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeClass {
    FadeIn,
    FadeOut,
}

impl FadeClass {
    /// Class decision for a clamped visibility percentage (strict >)
    pub fn from_percent(percent: f32, threshold: f32) -> Self {
        if percent > threshold {
            FadeClass::FadeIn
        } else {
            FadeClass::FadeOut
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            FadeClass::FadeIn => "fade-in",
            FadeClass::FadeOut => "fade-out",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            FadeClass::FadeIn => FadeClass::FadeOut,
            FadeClass::FadeOut => FadeClass::FadeIn,
        }
    }
}

/// Percentage of the reference element visible in the viewport, rounded to
/// two decimals and clamped to [0, 50].
///
/// The ceiling sits at 50 even when the element is fully on-screen. That
/// asymmetry stages the fade threshold at roughly "element half-visible"
/// and is kept as-is.
pub fn visible_percent(
    rect_top: f32,
    rect_bottom: f32,
    window_height: f32,
    element_height: f32,
) -> f32 {
    let visible_height = rect_bottom.min(window_height) - rect_top.max(0.0);
    let raw = visible_height / element_height * 100.0;
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.clamp(0.0, Params::VISIBILITY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_percent_saturates_at_fifty() {
        // 80% of a 1000px element visible in a tall window
        let percent = visible_percent(0.0, 800.0, 900.0, 1000.0);
        assert_eq!(percent, 50.0, "Clamp ceiling is 50, not the raw 80");
    }

    #[test]
    fn test_visible_percent_below_cap_unchanged() {
        // 100px of a 1000px element visible
        let percent = visible_percent(800.0, 1800.0, 900.0, 1000.0);
        assert_eq!(percent, 10.0);
    }

    #[test]
    fn test_visible_percent_fully_offscreen() {
        let percent = visible_percent(1000.0, 2000.0, 900.0, 1000.0);
        assert_eq!(percent, 0.0, "Negative visible height clamps to zero");
    }

    #[test]
    fn test_visible_percent_rounds_to_two_decimals() {
        // 123.456px of a 1000px element -> 12.3456% -> 12.35%
        let percent = visible_percent(0.0, 123.456, 900.0, 1000.0);
        assert!((percent - 12.35).abs() < 1e-4, "Got {}", percent);
    }

    #[test]
    fn test_fade_class_thresholds() {
        let threshold = Params::FADE_THRESHOLD;
        assert_eq!(
            FadeClass::from_percent(50.0, threshold),
            FadeClass::FadeIn
        );
        assert_eq!(
            FadeClass::from_percent(10.0, threshold),
            FadeClass::FadeOut
        );
        assert_eq!(
            FadeClass::from_percent(25.0, threshold),
            FadeClass::FadeOut,
            "Threshold itself is not exceeded (strict >)"
        );
    }

    #[test]
    fn test_fade_class_names() {
        assert_eq!(FadeClass::FadeIn.class_name(), "fade-in");
        assert_eq!(FadeClass::FadeOut.class_name(), "fade-out");
        assert_eq!(FadeClass::FadeIn.opposite().class_name(), "fade-out");
    }
}
