use serde_json::Value;

/// One prompt typed into Cursor's AI panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Decode the raw `aiService.prompts` value into prompts.
///
/// Returns `None` when there is no value, it is not JSON, or it is not a JSON array.
/// Array elements that are not objects with a `text` field are dropped. String texts are
/// kept as-is; any other JSON value is rendered as its JSON text.
pub fn parse_prompts(raw: Option<&str>) -> Option<Vec<Prompt>> {
    let raw = raw?;
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Could not parse prompts as JSON: {}", e);
            return None;
        }
    };

    let Value::Array(entries) = value else {
        tracing::warn!("Prompts value is not a JSON array");
        return None;
    };

    Some(
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(mut fields) => fields.remove("text").map(|text| match text {
                    Value::String(s) => Prompt::new(s),
                    other => Prompt::new(other.to_string()),
                }),
                _ => None,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(Prompt::text).collect()
    }

    #[test]
    fn test_parse_well_formed() {
        let prompts = parse_prompts(Some(r#"[{"text":"hello"},{"text":"world"}]"#)).unwrap();
        assert_eq!(texts(&prompts), vec!["hello", "world"]);
    }

    #[test]
    fn test_heterogeneous_array_keeps_order() {
        let prompts =
            parse_prompts(Some(r#"[{"text":"a"},{"no_text":1},"ignored_string",{"text":"b"}]"#))
                .unwrap();
        assert_eq!(texts(&prompts), vec!["a", "b"]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let prompts =
            parse_prompts(Some(r#"[{"text":"fix the build","commandType":4}]"#)).unwrap();
        assert_eq!(prompts, vec![Prompt::new("fix the build")]);
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(parse_prompts(Some("[]")), Some(Vec::new()));
    }

    #[test]
    fn test_absent_and_malformed() {
        assert_eq!(parse_prompts(None), None);
        assert_eq!(parse_prompts(Some("not json")), None);
        assert_eq!(parse_prompts(Some("")), None);
    }

    #[test]
    fn test_non_array_top_level() {
        assert_eq!(parse_prompts(Some(r#"{"text":"solo"}"#)), None);
        assert_eq!(parse_prompts(Some(r#""[]""#)), None);
        assert_eq!(parse_prompts(Some("42")), None);
    }

    #[test]
    fn test_non_string_text_is_coerced() {
        let prompts =
            parse_prompts(Some(r#"[{"text":5},{"text":null},{"text":"line one\nline two"}]"#))
                .unwrap();
        assert_eq!(texts(&prompts), vec!["5", "null", "line one\nline two"]);
    }
}
