use crate::Params;

/// Classify a constrained (mobile/touch) context from device characteristics.
///
/// The rest of the engine treats the result as an opaque toggle: reduced
/// star count, no cursor tracking, no vignette.
pub fn is_constrained(user_agent: &str, css_width: f32) -> bool {
    let ua = user_agent.to_ascii_lowercase();

    if ua.contains("android") {
        return true;
    }
    if ua.contains("ipad") || ua.contains("iphone") || ua.contains("ipod") {
        return true;
    }
    if ua.contains("mobile") {
        return true;
    }

    // Small screen counts as constrained regardless of user agent
    css_width < Params::CONSTRAINED_MAX_WIDTH
}
