//! Display formatting for price breakdowns.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PriceBreakdown;

/// Formats an amount as whole currency units with `.` thousands separators.
///
/// This is the only place amounts get rounded (half away from zero).
///
/// # Examples
///
/// ```
/// use cinema_pricing::presentation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(162000)), "162.000");
/// assert_eq!(format_currency(Decimal::from(999)), "999");
/// assert_eq!(format_currency(Decimal::new(150005, 1)), "15.001");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Uppercases the first character of a ticket type key for display.
///
/// ```
/// use cinema_pricing::presentation::capitalize_label;
///
/// assert_eq!(capitalize_label("dewasa"), "Dewasa");
/// assert_eq!(capitalize_label(""), "");
/// ```
pub fn capitalize_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One labelled row of the result block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// Row label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
    /// Whether the row is the emphasised total.
    pub emphasis: bool,
}

impl DisplayLine {
    fn plain(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            emphasis: false,
        }
    }
}

fn rupiah(amount: Decimal) -> String {
    format!("Rp {}", format_currency(amount))
}

/// Builds the rows shown for a priced order, labelled in Indonesian.
///
/// Weekend surcharge and discount rows only appear when non-zero.
pub fn display_lines(breakdown: &PriceBreakdown) -> Vec<DisplayLine> {
    let mut lines = vec![
        DisplayLine::plain("Jenis Tiket", capitalize_label(&breakdown.ticket_type)),
        DisplayLine::plain("Jumlah Tiket", breakdown.quantity.to_string()),
        DisplayLine::plain("Harga Dasar", rupiah(breakdown.unit_price)),
        DisplayLine::plain("Total Harga Dasar", rupiah(breakdown.subtotal)),
    ];

    if breakdown.weekend_surcharge > Decimal::ZERO {
        lines.push(DisplayLine::plain(
            "Biaya Weekend",
            rupiah(breakdown.weekend_surcharge),
        ));
    }
    if breakdown.discount > Decimal::ZERO {
        lines.push(DisplayLine::plain("Diskon", rupiah(breakdown.discount)));
    }

    lines.push(DisplayLine {
        label: "Total Akhir",
        value: rupiah(breakdown.final_total),
        emphasis: true,
    });
    lines
}
