use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured label color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Insert `,` between every group of three digits of an unsigned digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a number with thousands separators and a fixed number of decimals.
/// `format_number(1234567.891, 2)` gives `1,234,567.89`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    // Avoid "-0.00" when rounding swallows a tiny negative value
    let is_negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if is_negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a price in dollars with locale separators: `$12,345.68`.
pub fn format_price(price: f64) -> String {
    match format_number(price, 2) {
        n if n.starts_with('-') => format!("-${}", &n[1..]),
        n if price.is_finite() => format!("${}", n),
        n => n,
    }
}

/// Whole-dollar variant for axis labels: `$12,346`.
pub fn format_price_whole(price: f64) -> String {
    match format_number(price, 0) {
        n if n.starts_with('-') => format!("-${}", &n[1..]),
        n if price.is_finite() => format!("${}", n),
        n => n,
    }
}

/// Mileage with separators: `50,000 mi`.
pub fn format_miles(miles: f64) -> String {
    format!("{} mi", format_number(miles, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-98765.4, 1), "-98,765.4");
    }

    #[test]
    fn prices_use_dollar_sign_and_two_decimals() {
        assert_eq!(format_price(12345.678), "$12,345.68");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(-1500.0), "-$1,500.00");
        assert_eq!(format_price(-0.001), "$0.00");
    }

    #[test]
    fn non_finite_values_render_placeholder() {
        assert_eq!(format_price(f64::NAN), "—");
        assert_eq!(format_number(f64::INFINITY, 2), "—");
    }

    #[test]
    fn whole_prices_and_miles() {
        assert_eq!(format_price_whole(20999.6), "$21,000");
        assert_eq!(format_miles(50000.0), "50,000 mi");
    }
}
