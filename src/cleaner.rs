// Cleaning of noisy scraped text fields into typed values.
// Every function returns None on a parse miss; nothing in here ever errors.
use crate::model::Dimensions;

/// Strips everything except digits and decimal points from a price string.
/// "$1,234.56" -> 1234.56. More than one decimal point fails the final parse.
pub fn clean_price(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Extracts the first numeric token ("4.5 out of 5 stars" -> 4.5) and accepts
/// it only if it lies inside the 0-5 rating scale.
pub fn clean_rating(text: &str) -> Option<f64> {
    let token = first_number_token(text)?;
    let rating = token.parse::<f64>().ok()?;
    if (0.0..=5.0).contains(&rating) {
        Some(rating)
    } else {
        None
    }
}

/// Drops thousands separators and any other non-digit characters.
pub fn clean_review_count(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Pulls the first digit run out of a sales rank string such as
/// "#2,345 in Kitchen & Dining", commas stripped.
pub fn clean_sales_rank(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit() || c == ',')?;
    let run: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    if run.is_empty() {
        return None;
    }
    run.parse::<u64>().ok()
}

const DIMENSION_UNITS: [&str; 4] = ["inches", "in", "cm", "mm"];

/// Extracts product dimensions from free text like "10 x 5.5 inches x 3 in".
///
/// Numeric tokens are collected left to right and the first three are mapped
/// positionally to length/width/height; the unit comes from the first unit
/// token found anywhere in the string. The mapping is positional, not
/// semantic: "3 in x 10 in x 5 in" yields length=3 even if the seller listed
/// height first. Fewer than three numbers, or no unit token, yields None.
pub fn extract_dimensions(text: &str) -> Option<Dimensions> {
    let lower = text.to_lowercase();
    let mut numbers: Vec<f64> = Vec::new();
    let mut unit: Option<&str> = None;

    let mut chars = lower.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut token = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    token.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            // A malformed number like "1.2.3" invalidates the whole field.
            numbers.push(token.parse::<f64>().ok()?);
        } else if c.is_ascii_alphabetic() {
            let mut word = String::new();
            while let Some(&a) = chars.peek() {
                if a.is_ascii_alphabetic() {
                    word.push(a);
                    chars.next();
                } else {
                    break;
                }
            }
            if unit.is_none() {
                unit = DIMENSION_UNITS.iter().find(|u| word.starts_with(**u)).copied();
            }
        } else {
            chars.next();
        }
    }

    let unit = unit?;
    if numbers.len() < 3 {
        return None;
    }
    Some(Dimensions {
        length: numbers[0],
        width: numbers[1],
        height: numbers[2],
        unit: unit.to_string(),
    })
}

/// First token matching digits, an optional dot, and optional trailing digits.
fn first_number_token(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let mut token = String::new();
    let mut chars = text[start..].chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            token.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if chars.peek() == Some(&'.') {
        token.push('.');
        chars.next();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                token.push(c);
                chars.next();
            } else {
                break;
            }
        }
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency_and_separators() {
        assert_eq!(clean_price("$1,234.56"), Some(1234.56));
        assert_eq!(clean_price("19.99 €"), Some(19.99));
    }

    #[test]
    fn price_misses_return_none() {
        assert_eq!(clean_price(""), None);
        assert_eq!(clean_price("   "), None);
        assert_eq!(clean_price("free shipping"), None);
        // two decimal points cannot parse
        assert_eq!(clean_price("1.2.3"), None);
    }

    #[test]
    fn rating_takes_first_number_in_range() {
        assert_eq!(clean_rating("4.5 out of 5 stars"), Some(4.5));
        assert_eq!(clean_rating("Rated 3 stars"), Some(3.0));
        assert_eq!(clean_rating("5"), Some(5.0));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        assert_eq!(clean_rating("7 out of 5"), None);
        assert_eq!(clean_rating("no rating yet"), None);
    }

    #[test]
    fn review_count_ignores_thousands_separators() {
        assert_eq!(clean_review_count("1,234 ratings"), Some(1234));
        assert_eq!(clean_review_count("12"), Some(12));
        assert_eq!(clean_review_count("none"), None);
    }

    #[test]
    fn sales_rank_reads_hash_prefixed_run() {
        assert_eq!(clean_sales_rank("#2,345 in Kitchen & Dining"), Some(2345));
        assert_eq!(clean_sales_rank("Best Sellers Rank: #12"), Some(12));
        assert_eq!(clean_sales_rank("unranked"), None);
    }

    #[test]
    fn dimensions_map_positionally_with_first_unit() {
        let dims = extract_dimensions("10 x 5.5 inches x 3 in").unwrap();
        assert_eq!(dims.length, 10.0);
        assert_eq!(dims.width, 5.5);
        assert_eq!(dims.height, 3.0);
        assert_eq!(dims.unit, "inches");
    }

    #[test]
    fn dimensions_require_three_numbers_and_a_unit() {
        assert_eq!(extract_dimensions("10 inches"), None);
        assert_eq!(extract_dimensions("10 x 5 x 3"), None);
        assert_eq!(extract_dimensions(""), None);
    }

    #[test]
    fn dimensions_accept_metric_units_without_spacing() {
        let dims = extract_dimensions("20cm x 10cm x 5cm").unwrap();
        assert_eq!(dims.length, 20.0);
        assert_eq!(dims.unit, "cm");
    }
}
