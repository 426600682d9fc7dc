use crate::Result;
use serde::Serialize;

/// Pretty (two-space indent) by default, single line when `compact`.
pub fn render_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pretty_and_compact() {
        let v = json!({"node": "Chat", "n": [1, 2]});
        assert_eq!(
            render_json(&v, false).unwrap(),
            "{\n  \"node\": \"Chat\",\n  \"n\": [\n    1,\n    2\n  ]\n}"
        );
        assert_eq!(render_json(&v, true).unwrap(), r#"{"node":"Chat","n":[1,2]}"#);
    }

    #[test]
    fn non_ascii_is_kept_verbatim() {
        let v = json!("Zażółć");
        assert_eq!(render_json(&v, true).unwrap(), "\"Zażółć\"");
    }
}
