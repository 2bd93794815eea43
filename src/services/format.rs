//! Display formatting for the KPI header (en-US style).

/// Render an integer with `,` thousands separators: `12000` → `"12,000"`.
pub fn format_integer(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render minor currency units as dollars, compacting to thousands at `$1,000`
/// and above: `123450` → `"$1.2k"`, `45600` → `"$456"`.
pub fn format_currency_compact(minor_units: i64) -> String {
    let dollars = minor_units as f64 / 100.0;
    if dollars >= 1000.0 {
        format!("${:.1}k", round_tenths(dollars / 1000.0))
    } else {
        format!("${}", format_integer(dollars.round() as i64))
    }
}

/// Render a percentage with one decimal place: `7.8` → `"7.8%"`.
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", round_tenths(pct))
}

/// Round half away from zero to one decimal; `{:.1}` alone rounds ties to even.
fn round_tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
