// Utility helpers shared across views

/// Splits a millisecond remainder into whole days/hours/minutes/seconds.
/// None once the moment has passed.
pub fn countdown_parts(ms_left: f64) -> Option<(u64, u64, u64, u64)> {
    if ms_left <= 0.0 {
        return None;
    }
    let total_secs = (ms_left / 1000.0).floor() as u64;
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    Some((days, hours, minutes, seconds))
}

pub fn format_countdown(ms_left: f64) -> Option<String> {
    countdown_parts(ms_left).map(|(d, h, m, s)| format!("{}d {}h {}m {}s", d, h, m, s))
}

pub fn clog(msg: &str) {
    // Debug logging disabled to reduce console spam
    let _ = msg; // keep param to avoid warnings
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_deadline_yields_none() {
        assert_eq!(countdown_parts(0.0), None);
        assert_eq!(countdown_parts(-5_000.0), None);
    }

    #[test]
    fn remainders_decompose_into_parts() {
        assert_eq!(countdown_parts(1_000.0), Some((0, 0, 0, 1)));
        assert_eq!(countdown_parts(3_599_999.0), Some((0, 0, 59, 59)));
        // 1 day, 1 hour, 1 minute, 1 second
        assert_eq!(countdown_parts(90_061_000.0), Some((1, 1, 1, 1)));
    }

    #[test]
    fn formatting_matches_the_banner_shape() {
        assert_eq!(
            format_countdown(90_061_000.0).as_deref(),
            Some("1d 1h 1m 1s")
        );
        assert_eq!(format_countdown(-1.0), None);
    }
}
