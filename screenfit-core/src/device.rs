use regex::Regex;

use crate::{Error, Result};

/// Case-insensitive match of a user agent against a list of mobile tokens.
#[derive(Debug, Clone)]
pub struct MobileDetector {
    // `None` when there are no tokens to look for.
    pattern: Option<Regex>,
}

impl MobileDetector {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !token.is_empty())
            .map(regex::escape)
            .collect();
        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = Regex::new(&format!("(?i){}", alternatives.join("|")))
            .map_err(|err| Error::InvalidArgument(format!("bad mobile tokens: {}", err)))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_mobile(&self, user_agent: &str) -> bool {
        self.pattern
            .as_ref()
            .map_or(false, |pattern| pattern.is_match(user_agent))
    }
}
