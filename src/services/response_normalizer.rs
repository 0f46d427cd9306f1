use serde::de::DeserializeOwned;

use crate::domain::Source;

use super::GenerateContentResponse;

/// Strips markdown code fences the model sometimes wraps its JSON in.
pub fn clean_json(text: &str) -> String {
    if text.contains("```json") {
        text.replace("```json", "").replace("```", "").trim().to_string()
    } else if text.contains("```") {
        text.replace("```", "").trim().to_string()
    } else {
        text.trim().to_string()
    }
}

/// Web sources cited by the first candidate. Chunks without both a title
/// and a uri are dropped.
pub fn extract_sources(response: &GenerateContentResponse) -> Vec<Source> {
    response
        .grounding_chunks()
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| match (web.title.as_deref(), web.uri.as_deref()) {
            (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => Some(Source {
                title: title.to_string(),
                uri: uri.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// Parses the model's answer text; an empty answer is treated as `{}`.
pub fn parse_model_json<T: DeserializeOwned>(
    response: &GenerateContentResponse,
) -> Result<T, (serde_json::Error, String)> {
    let text = clean_json(response.text().as_deref().unwrap_or("{}"));
    serde_json::from_str(&text).map_err(|e| (e, text))
}
