use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Search failed. ({0})")]
    SearchFailed(u16),

    #[error("Failed to fetch prices. ({0})")]
    PriceFetchFailed(u16),

    /// The underlying cause is kept for logging; users only see the fixed message.
    #[error("Failed to fetch currency conversion rate.")]
    ExchangeRate(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_carry_code() {
        assert_eq!(Error::SearchFailed(403).to_string(), "Search failed. (403)");
        assert_eq!(
            Error::PriceFetchFailed(500).to_string(),
            "Failed to fetch prices. (500)"
        );
    }

    #[test]
    fn test_exchange_rate_error_hides_cause() {
        let err = Error::ExchangeRate("connection refused".to_string());
        assert_eq!(err.to_string(), "Failed to fetch currency conversion rate.");
    }
}
