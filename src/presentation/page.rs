//! HTML order page.
//!
//! Renders the order form and, after a submission, either the price
//! breakdown or a generic error block.

use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::models::{Day, PriceBreakdown};

use super::format::{capitalize_label, display_lines, format_currency};

/// What to show below the form.
#[derive(Debug, Clone, Copy)]
pub enum PageOutcome<'a> {
    /// Fresh form, nothing submitted yet.
    Blank,
    /// A priced order.
    Priced(&'a PriceBreakdown),
    /// The submission failed validation.
    Rejected,
}

impl<'a> From<&'a Result<PriceBreakdown, ValidationError>> for PageOutcome<'a> {
    fn from(result: &'a Result<PriceBreakdown, ValidationError>) -> Self {
        match result {
            Ok(breakdown) => PageOutcome::Priced(breakdown),
            Err(ValidationError) => PageOutcome::Rejected,
        }
    }
}

/// Escapes text for safe inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the full order page.
///
/// `selected_day` preselects a day in the form. When `None` no option is
/// marked, so the browser shows the first day (Senin).
///
/// # Example
///
/// ```
/// use cinema_pricing::calculation::PricingEngine;
/// use cinema_pricing::models::Day;
/// use cinema_pricing::presentation::{render_order_page, PageOutcome};
///
/// let engine = PricingEngine::default();
/// let breakdown = engine.price_order("dewasa", 3, "sabtu").unwrap();
/// let html = render_order_page(engine.config(), PageOutcome::Priced(&breakdown), Some(Day::Sabtu));
/// assert!(html.contains("Rp 162.000"));
/// ```
pub fn render_order_page(
    config: &PricingConfig,
    outcome: PageOutcome<'_>,
    selected_day: Option<Day>,
) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Pemesanan Tiket Bioskop</title>\n\
         </head>\n<body>\n<div class=\"container\">\n\
         <h1 class=\"form-title\">Tiket Bioskop</h1>\n\
         <form method=\"POST\" action=\"/\">\n",
    );

    html.push_str(
        "<div class=\"form-group\">\n<label class=\"form-label\" for=\"ticket_type\">Jenis Tiket:</label>\n\
         <select id=\"ticket_type\" name=\"ticket_type\" class=\"form-input\" required>\n",
    );
    for (ticket_type, price) in config.ticket_prices() {
        html.push_str(&format!(
            "<option value=\"{}\">{} - Rp {}</option>\n",
            escape_html(ticket_type),
            escape_html(&capitalize_label(ticket_type)),
            format_currency(*price)
        ));
    }
    html.push_str("</select>\n</div>\n");

    html.push_str(
        "<div class=\"form-group\">\n<label class=\"form-label\" for=\"quantity\">Jumlah Tiket:</label>\n\
         <input type=\"number\" id=\"quantity\" name=\"quantity\" class=\"form-input\" min=\"1\" required>\n\
         </div>\n",
    );

    html.push_str(
        "<div class=\"form-group\">\n<label class=\"form-label\" for=\"day\">Hari Pemesanan:</label>\n\
         <select id=\"day\" name=\"day\" class=\"form-input\" required>\n",
    );
    for day in Day::ALL {
        let selected = if Some(day) == selected_day { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            day,
            selected,
            capitalize_label(day.as_str())
        ));
    }
    html.push_str("</select>\n</div>\n");

    html.push_str("<button type=\"submit\" class=\"order-button\">Hitung Total Harga</button>\n</form>\n");

    match outcome {
        PageOutcome::Blank => {}
        PageOutcome::Priced(breakdown) => {
            html.push_str("<div class=\"result\">\n<h3>Detail Pemesanan:</h3>\n<div class=\"price-detail\">\n");
            for line in display_lines(breakdown) {
                let value = escape_html(&line.value);
                if line.emphasis {
                    html.push_str(&format!("<p><strong>{}: {}</strong></p>\n", line.label, value));
                } else {
                    html.push_str(&format!("<p>{}: {}</p>\n", line.label, value));
                }
            }
            html.push_str("</div>\n</div>\n");
        }
        PageOutcome::Rejected => {
            html.push_str(
                "<div class=\"result error\">\n<p>Pesanan tidak dapat dihitung. \
                 Periksa jenis tiket, jumlah tiket dan hari pemesanan.</p>\n</div>\n",
            );
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}
