// src/presentation/summary.rs
//
// Text handed to the external summariser. The summariser itself is not part
// of this crate.

use super::enrichment::EnrichmentPayload;

pub fn summary_instruction(query: &str) -> String {
    format!(
        "You are a real estate assistant. A user asked:\n\
         \"\"\"{query}\"\"\"\n\
         Below is a JSON object with property listings (with neighborhood) and \
         the notable schools of each neighborhood. Please:\n\
         - Summarize the key insights (e.g., price range, best deals).\n\
         - Mention neighborhood context and nearby schools.\n\
         - If there are no listings, suggest adjusting budget or neighborhood.\n\
         Respond in a friendly conversational style."
    )
}

pub fn handoff_message(payload: &EnrichmentPayload) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(payload)?;
    Ok(format!("Here are the listings data:\n{json}"))
}
