//! Display helpers for catalog data.

use super::GraphQlClient;

impl GraphQlClient {
    /// Absolute URL for a product image path.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}/uploads/{}", self.base_url(), path.trim_start_matches('/'))
        }
    }
}

/// Colombian-peso formatting: `$ 1.234.567`, with a decimal comma only when
/// there are cents.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}$ {grouped}"),
        f if f % 10 == 0 => format!("{sign}$ {grouped},{}", f / 10),
        f => format!("{sign}$ {grouped},{f:02}"),
    }
}

/// Rounded percentage saved going from `original` to `current`.
pub fn discount_percent(original: f64, current: f64) -> i64 {
    if original <= 0.0 {
        return 0;
    }
    (((original - current) / original) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_group_thousands_with_dots() {
        assert_eq!(format_price(0.0), "$ 0");
        assert_eq!(format_price(999.0), "$ 999");
        assert_eq!(format_price(1000.0), "$ 1.000");
        assert_eq!(format_price(1234567.0), "$ 1.234.567");
    }

    #[test]
    fn cents_use_decimal_comma() {
        assert_eq!(format_price(1234.5), "$ 1.234,5");
        assert_eq!(format_price(1000.25), "$ 1.000,25");
        assert_eq!(format_price(-15000.0), "-$ 15.000");
    }

    #[test]
    fn discount_is_rounded_percentage() {
        assert_eq!(discount_percent(150000.0, 120000.0), 20);
        assert_eq!(discount_percent(3.0, 2.0), 33);
        assert_eq!(discount_percent(0.0, 10.0), 0);
    }

    #[test]
    fn image_urls() {
        let client = GraphQlClient::new("http://localhost:4000");
        assert_eq!(
            client.image_url("lamp.jpg"),
            "http://localhost:4000/uploads/lamp.jpg"
        );
        assert_eq!(
            client.image_url("https://cdn.example.com/lamp.jpg"),
            "https://cdn.example.com/lamp.jpg"
        );
    }
}
