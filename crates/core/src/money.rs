//! Money helpers.
//!
//! Amounts are carried as `i64` in the smallest currency unit (cents).
//! Formatting to a two-decimal string happens only at presentation edges
//! (exports, error messages shown to users).

/// Render an amount in cents as a two-decimal string, e.g. `1250` -> `"12.50"`.
///
/// Negative amounts keep the sign in front of the whole value.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
