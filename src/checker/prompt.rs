/// Builds the fixed instruction sent to the provider for one item. The item
/// name is interpolated into prose, not into a JSON literal, so no escaping
/// is needed.
pub fn build_prompt(item: &str) -> String {
    format!(
        r#"You are a TSA (Transportation Security Administration) expert.

For the item "{item}", please provide:
1. Whether it's allowed in carry-on baggage (true/false)
2. Whether it's allowed in checked baggage (true/false)
3. A brief description of the item category
4. Any specific restrictions or requirements

Please respond in JSON format with these exact keys:
{{
    "carry_on_allowed": boolean,
    "checked_baggage_allowed": boolean,
    "description": "brief description of the item and its category",
    "restrictions": "any specific restrictions, size limits, or special requirements"
}}

Base your response on official TSA guidelines. If unsure about an item, err on the side of caution and suggest checking with TSA directly."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_item() {
        let prompt = build_prompt("nail scissors");
        assert!(prompt.contains("\"nail scissors\""));
    }

    #[test]
    fn test_prompt_names_all_result_keys() {
        let prompt = build_prompt("laptop");
        for key in [
            "carry_on_allowed",
            "checked_baggage_allowed",
            "description",
            "restrictions",
        ] {
            assert!(prompt.contains(key), "prompt missing key {key}");
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("water bottle"), build_prompt("water bottle"));
    }
}
