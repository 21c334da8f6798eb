use std::env;

const SILENCE_PARSER_ENV_VAR: &str = "PDFTEXT_SILENCE_PARSER";

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    /// Redirect the PDF parser's own stdout/stderr chatter to /dev/null while it runs.
    pub silence_parser: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            silence_parser: true,
        }
    }
}

impl ExtractorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            silence_parser: env::var(SILENCE_PARSER_ENV_VAR)
                .map(|value| parse_flag(&value, defaults.silence_parser))
                .unwrap_or(defaults.silence_parser),
        }
    }
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
