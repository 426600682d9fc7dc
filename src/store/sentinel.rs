//! In-band placeholders for references that could not be expanded.
//!
//! Rendered as tagged strings so they survive JSON output untouched:
//! - `<circular_ref:12>`        reference 12 was already being resolved
//! - `<max_depth_exceeded:11>`  expansion stopped at depth 11

use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentinel {
    /// Carries the reference string exactly as it appeared in the store.
    CircularRef(String),
    MaxDepthExceeded(usize),
}

impl Sentinel {
    pub fn into_value(self) -> Value {
        Value::String(self.to_string())
    }

    /// Recognise a placeholder previously produced by the resolver.
    pub fn detect(value: &Value) -> Option<Sentinel> {
        static SENTINEL_RE: OnceLock<Option<Regex>> = OnceLock::new();

        let s = value.as_str()?;
        let re = SENTINEL_RE
            .get_or_init(|| Regex::new(r"^<(circular_ref|max_depth_exceeded):(\d+)>$").ok())
            .as_ref()?;
        let caps = re.captures(s)?;
        let arg = caps.get(2)?.as_str();

        match caps.get(1)?.as_str() {
            "circular_ref" => Some(Sentinel::CircularRef(arg.to_string())),
            _ => arg.parse().ok().map(Sentinel::MaxDepthExceeded),
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::CircularRef(raw) => write!(f, "<circular_ref:{}>", raw),
            Sentinel::MaxDepthExceeded(depth) => write!(f, "<max_depth_exceeded:{}>", depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_tagged_strings() {
        assert_eq!(
            Sentinel::CircularRef("007".into()).into_value(),
            json!("<circular_ref:007>")
        );
        assert_eq!(
            Sentinel::MaxDepthExceeded(11).to_string(),
            "<max_depth_exceeded:11>"
        );
    }

    #[test]
    fn detects_its_own_output() {
        for s in [
            Sentinel::CircularRef("3".into()),
            Sentinel::CircularRef("007".into()),
            Sentinel::MaxDepthExceeded(11),
        ] {
            assert_eq!(Sentinel::detect(&s.clone().into_value()), Some(s));
        }
    }

    #[test]
    fn ignores_ordinary_data() {
        for v in [
            json!("circular_ref:3"),
            json!("<circular_ref:>"),
            json!("<max_depth_exceeded:x>"),
            json!("prefix <circular_ref:3>"),
            json!(3),
            json!(null),
        ] {
            assert_eq!(Sentinel::detect(&v), None, "{v}");
        }
    }
}
