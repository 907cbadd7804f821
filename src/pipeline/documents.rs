//! Renders client and property records into the labeled text blocks the
//! prompt consumes.
//!
//! Pure and deterministic — identical records produce byte-identical text,
//! which prompt-equality tests rely on.

use crate::pipeline::types::{ClientRecord, PropertyRecord};

/// Render a client record as a fixed-order, labeled text block.
pub fn format_client(client: &ClientRecord) -> String {
    format!(
        "Client: {}\n\
         Email: {}\n\
         Buying Stage: {}\n\
         Budget Range: {}\n\
         Communication Style: {}\n\
         Preferences: {}\n\
         Lifestyle Notes: {}",
        client.name,
        client.email,
        client.buying_stage,
        client.budget_range,
        client.communication_style,
        client.preferences.join(", "),
        client.lifestyle_notes,
    )
}

/// Render a property record as a fixed-order, labeled text block.
pub fn format_property(property: &PropertyRecord) -> String {
    format!(
        "Property: {}\n\
         Location: {}, {}\n\
         Price: {}\n\
         Type: {}\n\
         Bedrooms: {}\n\
         Bathrooms: {}\n\
         Square Feet: {}\n\
         Highlights: {}\n\
         Neighborhood: {}",
        property.address,
        property.city,
        property.state,
        format_usd(property.price),
        property.property_type,
        property.beds,
        format_baths(property.baths),
        group_thousands(property.sqft),
        property.highlights.join(", "),
        property.neighborhood_description,
    )
}

/// US-style currency with no cents, e.g. `$525,000`.
fn format_usd(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Insert comma separators every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Bath counts print as integers when whole, e.g. `2` and `2.5`.
fn format_baths(baths: f32) -> String {
    if baths.fract() == 0.0 {
        format!("{}", baths as u32)
    } else {
        format!("{baths}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::fixtures::{sample_client, sample_property};

    #[test]
    fn client_block_has_fixed_label_order() {
        let block = format_client(&sample_client());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "Client: Sarah Mitchell");
        assert_eq!(lines[1], "Email: sarah.mitchell@example.com");
        assert_eq!(lines[2], "Buying Stage: active");
        assert_eq!(lines[4], "Communication Style: enthusiastic");
        assert_eq!(lines[5], "Preferences: open floor plan");
    }

    #[test]
    fn property_block_formats_price_and_sqft() {
        let block = format_property(&sample_property());
        assert!(block.contains("Price: $525,000"));
        assert!(block.contains("Square Feet: 2,150"));
        assert!(block.contains("Bathrooms: 2.5"));
        assert!(block.contains("Type: single-family home"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let client = sample_client();
        assert_eq!(format_client(&client), format_client(&client));

        let property = sample_property();
        assert_eq!(format_property(&property), format_property(&property));
    }

    #[test]
    fn thousands_grouping_edge_cases() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_250_000), "1,250,000");
    }

    #[test]
    fn whole_bath_counts_print_as_integers() {
        assert_eq!(format_baths(2.0), "2");
        assert_eq!(format_baths(2.5), "2.5");
    }
}
