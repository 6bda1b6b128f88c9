pub mod opt_duration {
    use crate::time::timeunit::DurationLiteral;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    /// Deserializes an optional duration literal ("250ms", "30s", bare
    /// seconds). A zero duration reads as `None`, matching the original
    /// harnesses where 0 meant "no timeout".
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = match Option::<String>::deserialize(deserializer)? {
            Some(literal) => literal,
            None => return Ok(None),
        };
        match literal.parse::<DurationLiteral>() {
            Ok(parsed) => {
                let duration: Duration = parsed.into();
                if duration == Duration::default() {
                    Ok(None)
                } else {
                    Ok(Some(duration))
                }
            }
            Err(err) => Err(D::Error::custom(err.to_string())),
        }
    }
}
