// Prompt text for the extraction and analysis calls.

use crate::domain::{AdvancedFilters, SearchCriteria};

pub const TRENDS_EXTRACTION: &str = "Extract price trends for up to 5 key localities in the city. Return only: name, price per sqft, percent increase, rental yield.";

pub fn listing_extraction(criteria: &SearchCriteria, filters: &AdvancedFilters) -> String {
    let mut prompt = format!(
        "Extract up to 5 {} {} in {} under {:?} crores. Return only essential details: name, location, price, key features. Format as a list.",
        criteria.category,
        criteria.property_type.prompt_noun(),
        criteria.city.trim(),
        criteria.max_price,
    );

    for constraint in filters.prompt_constraints() {
        prompt.push(' ');
        prompt.push_str(&constraint);
    }

    prompt
}

pub fn property_analysis(properties_json: &str, structured: bool) -> String {
    let mut prompt = format!(
        "Analyze these properties for a buyer:
Properties: {properties_json}
1. List 3-5 best matches with name, location, price, and 1-2 key features each.
2. Which is best value and why?
3. Top 2 recommendations for investment.
4. One negotiation tip for each.
Keep response short and structured.
Write each match on its own lines as `Name: ...`, `Location: ...`, `Price: ...`."
    );

    if structured {
        prompt.push_str(
            "
Reply with a JSON object with two keys: \"summary\", the analysis above as a markdown string, and \"properties\", an array of objects with string fields \"name\", \"location\" and \"price\" for every match you listed.",
        );
    }

    prompt
}

pub fn trends_analysis(city: &str, locations_json: &str, structured: bool) -> String {
    let mut prompt = format!(
        "Summarize price trends for these locations in {city}:
Locations: {locations_json}
1. List 3-5 locations with price per sqft and percent increase.
2. Which is best for investment and why?
3. One tip for investors.
Keep response short.
Write each location on its own lines as `Location: ...`, `Price per sqft: <number>`, `Percent increase: <number>%`, `Rental yield: <number>%`."
    );

    if structured {
        prompt.push_str(
            "
Reply with a JSON object with two keys: \"summary\", the analysis above as a markdown string, and \"locations\", an array of objects with a string field \"location\" and numeric fields \"price_per_sqft\", \"percent_increase\" and \"rental_yield\".",
        );
    }

    prompt
}
