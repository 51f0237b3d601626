//! Presentation of priced orders.
//!
//! Formats currency amounts for display and renders the HTML order page.
//! Pricing rules never live here.

mod format;
mod page;

pub use format::{DisplayLine, capitalize_label, display_lines, format_currency};
pub use page::{PageOutcome, escape_html, render_order_page};
