use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::env_var;
use crate::domain::service::{IngredientExtractor, RawIngredient};
use crate::error::extraction::ExtractionError;

/// Pick the extractor for this process: the remote extraction api when an api
/// key is configured, the rule based one otherwise.
pub fn extractor_from_env() -> Arc<dyn IngredientExtractor> {
    let env = env_var::get();
    match &env.pioneer_api_key {
        Some(key) => {
            tracing::info!("using remote extraction api at {}", env.extractor_api_url);
            Arc::new(GlinerApiExtractor::new(
                key,
                env.extractor_api_url.clone(),
                env.model.clone(),
                env.extractor_timeout,
            ))
        }
        None => {
            tracing::info!("no extraction api key set, using the rule based extractor");
            Arc::new(RuleBasedExtractor::new())
        }
    }
}

/// Client for a schema guided entity extraction endpoint.
pub struct GlinerApiExtractor {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl GlinerApiExtractor {
    pub fn new(api_key: &str, endpoint: Url, model: String, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .expect("Expect a valid api key header");
        auth.set_sensitive(true);
        headers.append(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .expect("Expect to create a http client");

        Self {
            client,
            endpoint,
            model,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    model: &'a str,
    text: &'a str,
    schema: serde_json::Value,
}

fn ingredient_schema() -> serde_json::Value {
    serde_json::json!({
        "ingredients": [
            "name::str::Ingredient name or food item",
            "quantity::str::Approximate quantity like 'half an avocado' or '2 slices'",
        ]
    })
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    ingredients: Vec<WireIngredient>,
}

#[derive(Debug, Deserialize)]
struct WireIngredient {
    #[serde(default)]
    name: Option<SpanText>,
    #[serde(default)]
    quantity: Option<SpanText>,
}

/// A field the endpoint may return either as a bare string or as a span
/// object carrying the matched text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpanText {
    Text(String),
    Span { text: String },
}

impl SpanText {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Span { text } => text,
        }
    }
}

impl From<WireIngredient> for RawIngredient {
    fn from(wire: WireIngredient) -> Self {
        Self {
            name: wire.name.map(SpanText::into_text),
            quantity: wire.quantity.map(SpanText::into_text),
        }
    }
}

#[async_trait]
impl IngredientExtractor for GlinerApiExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<RawIngredient>, ExtractionError> {
        let body = ExtractRequest {
            model: &self.model,
            text,
            schema: ingredient_schema(),
        };

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: ExtractResponse = res.json().await?;
        Ok(payload
            .ingredients
            .into_iter()
            .map(RawIngredient::from)
            .collect())
    }
}

/// Deterministic extractor scanning for quantity cues and the noun runs that
/// follow them. Stands in for the remote model when no api key is configured.
#[derive(Debug, Default)]
pub struct RuleBasedExtractor;

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IngredientExtractor for RuleBasedExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<RawIngredient>, ExtractionError> {
        Ok(rules::scan(text))
    }
}

mod rules {
    use crate::domain::service::RawIngredient;

    const ARTICLES: &[&str] = &["a", "an"];
    const FRACTIONS: &[&str] = &["half", "quarter"];
    const QUANTIFIERS: &[&str] = &["some", "few", "couple", "several"];
    const NUMBERS: &[&str] = &[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "dozen",
    ];
    const MEASURES: &[&str] = &[
        "slice", "slices", "piece", "pieces", "cup", "cups", "tablespoon", "tablespoons", "tbsp",
        "teaspoon", "teaspoons", "tsp", "clove", "cloves", "pinch", "dash", "bunch", "can", "cans",
        "gram", "grams", "g", "kg", "ounce", "ounces", "oz", "pound", "pounds", "lb", "stick",
        "sticks", "sprig", "sprigs", "knob", "handful", "head", "heads",
    ];
    const BREAKS: &[&str] = &[
        "with", "and", "or", "of", "on", "in", "plus", "then", "also", "for", "to", "over",
        "topped", "served",
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cue {
        Article,
        Fraction,
        Number,
        Quantifier,
        Measure,
    }

    fn is_break(word: &str) -> bool {
        BREAKS.contains(&word)
    }

    fn is_measure(word: &str) -> bool {
        MEASURES.contains(&word)
    }

    fn is_numeric(word: &str) -> bool {
        !word.is_empty()
            && word.chars().any(|c| c.is_ascii_digit())
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || c == '/' || c == '.')
    }

    fn starts_quantity(word: &str) -> bool {
        ARTICLES.contains(&word)
            || FRACTIONS.contains(&word)
            || QUANTIFIERS.contains(&word)
            || NUMBERS.contains(&word)
            || is_numeric(word)
            || is_measure(word)
    }

    fn is_plural_cue(word: &str) -> bool {
        if let Ok(n) = word.parse::<u64>() {
            return n > 1;
        }
        (NUMBERS.contains(&word) && word != "one") || (is_measure(word) && word.ends_with('s'))
    }

    pub fn scan(text: &str) -> Vec<RawIngredient> {
        let tokens: Vec<(String, String)> = text
            .split_whitespace()
            .filter_map(|word| {
                let raw = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '/' && c != '-');
                (!raw.is_empty()).then(|| (raw.to_owned(), raw.to_lowercase()))
            })
            .collect();

        let mut out = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if is_break(&tokens[i].1) {
                i += 1;
                continue;
            }

            let mut phrase: Vec<&str> = Vec::new();
            let mut plural = false;
            let mut fraction_lead = false;
            let mut last: Option<Cue> = None;

            if starts_quantity(&tokens[i].1) {
                while i < tokens.len() {
                    let low = tokens[i].1.as_str();

                    if ARTICLES.contains(&low)
                        && (last.is_none() || last == Some(Cue::Fraction))
                    {
                        last = Some(Cue::Article);
                    } else if FRACTIONS.contains(&low)
                        && (last.is_none() || last == Some(Cue::Article))
                    {
                        fraction_lead = true;
                        last = Some(Cue::Fraction);
                    } else if (NUMBERS.contains(&low) || is_numeric(low))
                        && (last.is_none() || last == Some(Cue::Article))
                    {
                        last = Some(Cue::Number);
                    } else if QUANTIFIERS.contains(&low) && last.is_none() {
                        last = Some(Cue::Quantifier);
                    } else if is_measure(low) {
                        last = Some(Cue::Measure);
                        plural = plural || low.ends_with('s');
                        phrase.push(tokens[i].0.as_str());
                        // an "of" right after a measure closes the phrase
                        if i + 1 < tokens.len() && tokens[i + 1].1 == "of" {
                            i += 1;
                        }
                        i += 1;
                        break;
                    } else {
                        break;
                    }

                    plural = plural || is_plural_cue(low);
                    phrase.push(tokens[i].0.as_str());
                    i += 1;
                }

                // "half an avocado": the referred word belongs to the
                // quantity span and opens the name run
                if fraction_lead
                    && matches!(last, Some(Cue::Fraction) | Some(Cue::Article))
                    && i < tokens.len()
                    && !is_break(&tokens[i].1)
                    && !starts_quantity(&tokens[i].1)
                {
                    phrase.push(tokens[i].0.as_str());
                }
            }

            let mut name: Vec<&str> = Vec::new();
            while i < tokens.len() {
                let low = tokens[i].1.as_str();
                if is_break(low) || starts_quantity(low) {
                    break;
                }
                name.push(tokens[i].0.as_str());
                i += 1;
                if plural && low.ends_with('s') {
                    break;
                }
            }

            let quantity = phrase.join(" ");
            let name = name.join(" ");
            out.push(RawIngredient {
                name: (!name.is_empty()).then_some(name),
                quantity: (!quantity.is_empty()).then_some(quantity),
            });
        }

        out
    }
}
