use std::fmt;

use thiserror::Error;

pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const HUGGINGFACE_TOKEN: &str = "HUGGINGFACEHUB_API_TOKEN";

const REDACT_PLACEHOLDER: &str = "****";

#[derive(Debug, Error, PartialEq)]
#[error("{0} is missing")]
pub struct MissingSecret(pub &'static str);

/// Credentials for the hosted services. Only ever read from the process
/// environment (optionally seeded from a `.env` file).
#[derive(Clone)]
pub struct Secrets {
    pub pinecone_api_key: String,
    pub groq_api_key: String,
    pub huggingface_token: Option<String>,
}

impl Secrets {
    /// Reads the secrets through `lookup`. The vector store key is checked
    /// first, then the LLM key; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MissingSecret>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let pinecone_api_key = read(PINECONE_API_KEY).ok_or(MissingSecret(PINECONE_API_KEY))?;
        let groq_api_key = read(GROQ_API_KEY).ok_or(MissingSecret(GROQ_API_KEY))?;
        let huggingface_token = read(HUGGINGFACE_TOKEN);

        Ok(Self {
            pinecone_api_key,
            groq_api_key,
            huggingface_token,
        })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("pinecone_api_key", &REDACT_PLACEHOLDER)
            .field("groq_api_key", &REDACT_PLACEHOLDER)
            .field(
                "huggingface_token",
                &self.huggingface_token.as_ref().map(|_| REDACT_PLACEHOLDER),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_all_secrets() {
        let secrets = Secrets::from_lookup(lookup_from(&[
            (PINECONE_API_KEY, "pc-key"),
            (GROQ_API_KEY, " gsk-key "),
            (HUGGINGFACE_TOKEN, "hf-token"),
        ]))
        .expect("secrets present");

        assert_eq!(secrets.pinecone_api_key, "pc-key");
        assert_eq!(secrets.groq_api_key, "gsk-key");
        assert_eq!(secrets.huggingface_token.as_deref(), Some("hf-token"));
    }

    #[test]
    fn missing_pinecone_key_is_reported_first() {
        let err = Secrets::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, MissingSecret(PINECONE_API_KEY));
        assert_eq!(err.to_string(), "PINECONE_API_KEY is missing");
    }

    #[test]
    fn blank_groq_key_counts_as_missing() {
        let err = Secrets::from_lookup(lookup_from(&[
            (PINECONE_API_KEY, "pc-key"),
            (GROQ_API_KEY, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, MissingSecret(GROQ_API_KEY));
    }

    #[test]
    fn huggingface_token_is_optional() {
        let secrets = Secrets::from_lookup(lookup_from(&[
            (PINECONE_API_KEY, "pc-key"),
            (GROQ_API_KEY, "gsk-key"),
        ]))
        .expect("secrets present");
        assert!(secrets.huggingface_token.is_none());
    }

    #[test]
    fn debug_output_redacts_keys() {
        let secrets = Secrets::from_lookup(lookup_from(&[
            (PINECONE_API_KEY, "pc-key"),
            (GROQ_API_KEY, "gsk-key"),
        ]))
        .expect("secrets present");
        let rendered = format!("{:?}", secrets);
        assert!(!rendered.contains("pc-key"));
        assert!(!rendered.contains("gsk-key"));
        assert!(rendered.contains("****"));
    }
}
