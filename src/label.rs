use chrono::{Datelike, NaiveDate};

use crate::MONTH_NAMES;

/// French name of a 1-indexed month, empty outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or_default()
}

/// Renders a period as the running span of the month it closes.
///
/// The label always opens on `anchor`, the first worked day of the month,
/// so successive periods read `Du 1 au 8 Mars`, `Du 1 au 15 Mars`, and so on.
pub fn format_period_label(end: NaiveDate, anchor: NaiveDate) -> String {
    format!("Du {} au {} {}", anchor.day(), end.day(), month_name(anchor.month()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Janvier");
        assert_eq!(month_name(8), "Août");
        assert_eq!(month_name(12), "Décembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_label_uses_anchor_start() {
        let anchor = date(2025, 6, 2);
        assert_eq!(format_period_label(date(2025, 6, 7), anchor), "Du 2 au 7 Juin");
        assert_eq!(format_period_label(date(2025, 6, 30), anchor), "Du 2 au 30 Juin");
    }

    #[test]
    fn test_consecutive_labels_share_prefix() {
        let anchor = date(2025, 3, 1);
        let second = format_period_label(date(2025, 3, 15), anchor);
        let third = format_period_label(date(2025, 3, 22), anchor);
        assert!(second.starts_with("Du 1 au "));
        assert!(third.starts_with("Du 1 au "));
        assert_ne!(second, third);
    }

    #[test]
    fn test_label_month_follows_anchor() {
        // The month name comes from the anchor, not the end date
        let label = format_period_label(date(2025, 3, 8), date(2025, 2, 1));
        assert_eq!(label, "Du 1 au 8 Février");
    }
}
