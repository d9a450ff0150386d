//! Case conversion for form input: request keys camelCase -> snake_case.

use std::collections::HashMap;

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "customerId" -> "customer_id". Already-snake keys pass through.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize all field names of a submitted form to snake_case, so both the
/// HTML forms (`customer_id`) and camelCase clients (`customerId`) validate
/// against the same keys.
pub fn form_keys_to_snake_case(fields: &HashMap<String, String>) -> HashMap<String, String> {
    fields
        .iter()
        .map(|(k, v)| (to_snake_case(k), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_snake() {
        assert_eq!(to_snake_case("customerId"), "customer_id");
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("amount"), "amount");
        assert_eq!(to_snake_case("customer_id"), "customer_id");
    }

    #[test]
    fn normalizes_all_keys() {
        let mut fields = HashMap::new();
        fields.insert("customerId".to_string(), "c1".to_string());
        fields.insert("amount".to_string(), "10".to_string());
        let out = form_keys_to_snake_case(&fields);
        assert_eq!(out.get("customer_id").map(String::as_str), Some("c1"));
        assert_eq!(out.get("amount").map(String::as_str), Some("10"));
    }
}
