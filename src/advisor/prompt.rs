// Prompt construction for the advisory request.
use crate::model::ProductAttributes;

const NO_FEATURES_PLACEHOLDER: &str = "No feature information available";

/// Builds the user prompt embedding the listing attributes. Deterministic:
/// the same attributes always produce the same prompt.
pub fn build_prompt(attrs: &ProductAttributes) -> String {
    let rating = attrs
        .rating
        .map_or_else(|| "N/A".to_string(), |r| format!("{r}"));
    let reviews = attrs.review_count.unwrap_or(0);
    let rank = attrs
        .sales_rank
        .map_or_else(|| "N/A".to_string(), |r| format!("#{r}"));
    let category = attrs
        .sales_rank_category
        .as_deref()
        .unwrap_or("its category");

    format!(
        "Analyze the following marketplace product listing:\n\
         \n\
         Title: {title}\n\
         Price: {price:.2} {currency}\n\
         Rating: {rating} ({reviews} reviews)\n\
         Sales rank: {rank} in {category}\n\
         \n\
         Product features:\n\
         {features}\n\
         \n\
         Provide a structured analysis including:\n\
         1. A short summary of the product's potential\n\
         2. Key market opportunities\n\
         3. Potential risks\n\
         4. Specific recommendations to improve its market position\n",
        title = attrs.title,
        price = attrs.price,
        currency = attrs.currency,
        features = format_features(&attrs.features),
    )
}

fn format_features(features: &[String]) -> String {
    if features.is_empty() {
        return NO_FEATURES_PLACEHOLDER.to_string();
    }
    features
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n")
}
