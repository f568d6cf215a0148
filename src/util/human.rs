const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a raw byte count into a human-readable string: "1.5 KB", "12 GB".
///
/// Binary units (powers of 1024), largest unit with a scaled value >= 1.
/// Zero renders as a bare "0". The table stops at TB: petabyte-scale inputs
/// stay in the TB bucket ("1,024 TB"), which is a known limitation.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0".to_string();
    }
    // floor(log1024(bytes)) via the bit length, clamped to the unit table
    let exp = (((63 - bytes.leading_zeros()) / 10) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{} {}", fmt_scaled(scaled), UNITS[exp])
}

/// Format a percentage: "84%"
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// At most two fractional digits, trailing zeros trimmed, thousands
/// separators on the integer part.
fn fmt_scaled(v: f64) -> String {
    let fixed = format!("{:.2}", v);
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(fixed),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_bare() {
        assert_eq!(format_size(0), "0");
    }

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(1_073_741_824), "1 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1 TB");
    }

    #[test]
    fn fractional_digits_trimmed() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_359_296), "2.25 MB");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1,023 B");
    }

    #[test]
    fn past_tb_clamps_to_tb() {
        assert_eq!(format_size(1024u64.pow(5)), "1,024 TB");
    }

    #[test]
    fn pct_rounds_to_whole() {
        assert_eq!(fmt_pct(84.5), "84%");
        assert_eq!(fmt_pct(0.0), "0%");
    }
}
