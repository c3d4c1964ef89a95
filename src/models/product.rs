use serde::{Deserialize, Serialize};

/// A catalog entry. The `id` is assigned by the store and never supplied by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Formats a price for display, rounded to exactly two decimal places with a
/// currency prefix.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_two_decimals() {
        assert_eq!(format_price(999.99), "$999.99");
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(29.9), "$29.90");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let product = Product {
            id: 1,
            name: "Laptop".into(),
            price: 999.99,
            description: "High-performance laptop".into(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Laptop",
                "price": 999.99,
                "description": "High-performance laptop",
            })
        );
    }
}
