use crate::agent::{listing_urls, prompts, trends_url, AgentError};
use crate::domain::{
    normalize_city, AdvancedFilters, LocationsResponse, PropertiesResponse, PropertyRow,
    SearchCriteria, TrendRow,
};
use crate::extraction::{ExtractRequest, Extractor};
use crate::parser::{parse_property_rows, parse_trend_rows};
use crate::summarize::{ReplyFormat, Summarizer};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Outcome of a property search: the text to show, plus whatever rows could
/// be recovered from it for tables and maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyReport {
    pub text: String,
    pub rows: Vec<PropertyRow>,
    /// Listings the extraction step returned.
    pub extracted: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendReport {
    pub text: String,
    pub rows: Vec<TrendRow>,
    pub extracted: usize,
}

/// A `{"summary": "...", "<rows>": [...]}` reply. Rows are kept as raw JSON
/// and read one at a time, so one malformed row does not sink the rest.
#[derive(Debug)]
struct StructuredReply {
    summary: String,
    rows: Vec<Value>,
}

/// Finds properties and locality trends by chaining the extraction service
/// and the summarization model.
///
/// Failures never escape: every public operation returns text, with errors
/// rendered as a message in place of results.
pub struct PropertyAgent {
    extractor: Box<dyn Extractor>,
    summarizer: Box<dyn Summarizer>,
    structured: bool,
}

impl PropertyAgent {
    pub fn new(extractor: Box<dyn Extractor>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            extractor,
            summarizer,
            structured: true,
        }
    }

    /// When off, summaries are requested as markdown prose and rows come
    /// only from the text parser.
    pub fn structured(mut self, on: bool) -> Self {
        self.structured = on;
        self
    }

    pub fn find_properties(&self, criteria: &SearchCriteria) -> String {
        self.search_properties(criteria, &AdvancedFilters::default())
            .text
    }

    pub fn get_location_trends(&self, city: &str) -> String {
        self.location_trends(city).text
    }

    pub fn search_properties(
        &self,
        criteria: &SearchCriteria,
        filters: &AdvancedFilters,
    ) -> PropertyReport {
        self.try_search_properties(criteria, filters)
            .unwrap_or_else(|e| {
                warn!(error = %e, city = %criteria.city, "Property search failed");
                PropertyReport {
                    text: e.user_message(),
                    ..Default::default()
                }
            })
    }

    pub fn location_trends(&self, city: &str) -> TrendReport {
        self.try_location_trends(city).unwrap_or_else(|e| {
            warn!(error = %e, %city, "Location trends failed");
            TrendReport {
                text: e.user_message(),
                ..Default::default()
            }
        })
    }

    fn try_search_properties(
        &self,
        criteria: &SearchCriteria,
        filters: &AdvancedFilters,
    ) -> Result<PropertyReport, AgentError> {
        let city = normalize_city(&criteria.city)?;

        let request = ExtractRequest::for_schema::<PropertiesResponse>(
            listing_urls(&city),
            prompts::listing_extraction(criteria, filters),
        );
        let raw = self.extractor.extract(&request)?;
        let properties = raw.items("properties");
        info!(%city, count = properties.len(), success = raw.success, "Extracted listings");

        let prompt = prompts::property_analysis(&json_list(&properties), self.structured);
        let reply = self.summarizer.complete(&prompt, self.reply_format())?;

        let (text, rows) = self.read_reply(reply, "properties", property_row, parse_property_rows);
        debug!(rows = rows.len(), "Recovered property rows");

        Ok(PropertyReport {
            text,
            rows,
            extracted: properties.len(),
        })
    }

    fn try_location_trends(&self, city: &str) -> Result<TrendReport, AgentError> {
        let normalized = normalize_city(city)?;

        let request = ExtractRequest::for_schema::<LocationsResponse>(
            vec![trends_url(&normalized)],
            prompts::TRENDS_EXTRACTION,
        );
        let raw = self.extractor.extract(&request)?;
        if !raw.success {
            return Err(AgentError::NoTrendData);
        }
        let locations = raw.items("locations");
        info!(city = %normalized, count = locations.len(), "Extracted locality trends");

        let prompt =
            prompts::trends_analysis(city.trim(), &json_list(&locations), self.structured);
        let reply = self.summarizer.complete(&prompt, self.reply_format())?;

        let (text, rows) = self.read_reply(reply, "locations", trend_row, parse_trend_rows);

        Ok(TrendReport {
            text,
            rows,
            extracted: locations.len(),
        })
    }

    fn reply_format(&self) -> ReplyFormat {
        if self.structured {
            ReplyFormat::JsonObject
        } else {
            ReplyFormat::Markdown
        }
    }

    /// Text and rows from a model reply. JSON rows win; when none survive,
    /// the text parser runs over the summary (or the whole reply if it was
    /// not the requested JSON).
    fn read_reply<R>(
        &self,
        reply: String,
        rows_key: &str,
        from_json: fn(&Value) -> Option<R>,
        from_text: fn(&str) -> Vec<R>,
    ) -> (String, Vec<R>) {
        let Some(decoded) = self.decode(&reply, rows_key) else {
            let rows = from_text(&reply);
            return (reply, rows);
        };

        let rows: Vec<R> = decoded.rows.iter().filter_map(from_json).collect();
        if rows.len() < decoded.rows.len() {
            debug!(
                kind = rows_key,
                kept = rows.len(),
                skipped = decoded.rows.len() - rows.len(),
                "Dropped unreadable rows"
            );
        }
        if rows.is_empty() {
            let rows = from_text(&decoded.summary);
            return (decoded.summary, rows);
        }
        (decoded.summary, rows)
    }

    /// `None` when structured replies are off or the model ignored the format.
    fn decode(&self, reply: &str, rows_key: &str) -> Option<StructuredReply> {
        if !self.structured {
            return None;
        }
        let value: Value = match serde_json::from_str(strip_code_fence(reply)) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "Summary is not the requested JSON, reading it as text");
                return None;
            }
        };
        let Some(summary) = value.get("summary").and_then(Value::as_str) else {
            debug!("Summary JSON has no summary text, reading it as text");
            return None;
        };

        Some(StructuredReply {
            summary: summary.to_string(),
            rows: value
                .get(rows_key)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

/// A name and location are required; an unpriced listing keeps an empty price.
fn property_row(value: &Value) -> Option<PropertyRow> {
    Some(PropertyRow::new(
        text_field(value, "name")?,
        text_field(value, "location")?,
        text_field(value, "price").unwrap_or_default(),
    ))
}

fn trend_row(value: &Value) -> Option<TrendRow> {
    Some(TrendRow {
        location: text_field(value, "location")?,
        price_per_sqft: number_field(value, "price_per_sqft")?,
        percent_increase: number_field(value, "percent_increase")?,
        rental_yield: number_field(value, "rental_yield")?,
    })
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers may arrive as JSON numbers or as text such as `"7,200"` or `"8.5%"`.
fn number_field(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_start_matches('₹')
            .trim_end_matches('%')
            .replace(',', "")
            .trim()
            .parse()
            .ok(),
        _ => None,
    }
}

fn json_list(items: &[Value]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

// Some models wrap JSON in a ```json fence even in JSON mode.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
