use serde_json::Value;

/// Best-effort extraction of the JSON object embedded in a free-form
/// completion. The provider may wrap the object in commentary, so the scan
/// takes the substring from the first `{` to the last `}` inclusive and
/// parses that. Returns `None` when no brace pair exists or the substring
/// is not valid JSON.
///
/// Assumes exactly one object is embedded; unrelated braces outside the
/// real object can make the scan pick the wrong span. Kept as-is for
/// compatibility with existing behavior on malformed replies.
pub fn extract_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
