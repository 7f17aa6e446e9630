/// Compact rendition of an unread counter, metric-scaled so the badge
/// stays narrow for absurd backlogs.
pub fn format_count(count: u32) -> String {
    use numfmt::*;
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(0));
    formatter.fmt(count as f64).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_stay_verbatim() {
        assert_eq!(format_count(3), "3");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
    }
}
