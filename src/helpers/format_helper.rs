pub struct FormatHelper;

impl FormatHelper {
    /// Formats a percentage so whole numbers keep one decimal (`80.0`) and
    /// everything else prints at its shortest exact width (`45.12`).
    pub fn percentage(value: f64) -> String {
        if value.is_finite() && value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            format!("{value}")
        }
    }

    pub fn rule(width: usize) -> String {
        "=".repeat(width)
    }
}
