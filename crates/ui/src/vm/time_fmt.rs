use chrono::{DateTime, Utc};

use classroom_core::time::format_display;

#[must_use]
pub fn format_expiry(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "No expiry".to_string(), |at| format!("Expires {}", format_display(at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_core::time::fixed_now;

    #[test]
    fn missing_expiry_has_placeholder() {
        assert_eq!(format_expiry(None), "No expiry");
    }

    #[test]
    fn present_expiry_is_prefixed() {
        let label = format_expiry(Some(fixed_now()));
        assert!(label.starts_with("Expires 2023-11-1"), "{label}");
    }
}
