//! Display formatting for trait table cells

/// Placeholder for values the source did not report
pub const EMPTY_CELL: &str = "-";

/// Formats a number with `,` thousands separators and a fixed number of decimals
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    // Separator every 3 digits counting from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price in ETH: two decimals from 1 ETH up, four below, trailing zeros dropped
pub fn format_eth(value: f64) -> String {
    if value > 0.0 && value < 0.0001 {
        return "<0.0001 ETH".to_string();
    }
    let decimals = if value.abs() >= 1.0 { 2 } else { 4 };
    let formatted = format_number_with_decimals(value, decimals);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    format!("{} ETH", trimmed)
}

/// Integer count with thousands separators
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Share of the collection as a percentage, e.g. `0.015` -> `1.5%`
pub fn format_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    let decimals = if percent < 1.0 { 2 } else { 1 };
    let formatted = format!("{:.*}", decimals, percent);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Human readable trait type: `background_color` -> `Background Color`
pub fn format_trait_type(trait_type: &str) -> String {
    trait_type
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(12.5), "12.5 ETH");
        assert_eq!(format_eth(1500.0), "1,500 ETH");
        assert_eq!(format_eth(0.0425), "0.0425 ETH");
        assert_eq!(format_eth(0.00001), "<0.0001 ETH");
        assert_eq!(format_eth(0.0), "0 ETH");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(10000), "10,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.015), "1.5%");
        assert_eq!(format_percent(0.2), "20%");
        assert_eq!(format_percent(0.0012), "0.12%");
    }

    #[test]
    fn test_format_trait_type() {
        assert_eq!(format_trait_type("background_color"), "Background Color");
        assert_eq!(format_trait_type("Eyes"), "Eyes");
        assert_eq!(format_trait_type("mouth-type"), "Mouth Type");
        assert_eq!(format_trait_type(""), "");
    }
}
