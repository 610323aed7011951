use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds a value that is not a duration literal.
    ///
    /// Recovered by the duration resolver, which falls back to the default value.
    #[error("Invalid duration '{value}' for {var}: {source}")]
    InvalidDuration {
        /// Name of the environment variable
        var: String,
        /// The raw value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: humantime::DurationError,
    },

    /// Duration literal parsed to zero, which cannot drive a timer or an auction window.
    #[error("Duration for {0} must be greater than zero")]
    ZeroDuration(String),

    /// Bind address is not a valid socket address.
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        /// The raw value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: std::net::AddrParseError,
    },
}
