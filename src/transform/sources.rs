// Grounding source extraction
// Author: kelexine (https://github.com/kelexine)

use crate::models::gemini::GroundingChunk;
use crate::models::post::Source;

/// Cited web sources from search grounding.
///
/// Chunks without a web reference or with an empty URI are dropped. A
/// missing or empty title falls back to the URI.
pub fn extract_sources(chunks: &[GroundingChunk]) -> Vec<Source> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
            let title = web
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(uri);
            Some(Source {
                uri: uri.to_string(),
                title: title.to_string(),
            })
        })
        .collect()
}
