use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A defect in the way a problem was put together, caught at registration
/// time. A problem that failed registration must not be searched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("constraint `{constraint}` references no variables")]
    EmptyVariableSet { constraint: String },

    #[error("constraint `{constraint}` references undeclared variable {variable}")]
    UndeclaredVariable {
        constraint: String,
        variable: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration: {inner}\n{backtrace}")]
    Configuration {
        inner: Box<ConfigurationError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ConfigurationError> for Error {
    fn from(inner: ConfigurationError) -> Self {
        Error::Configuration {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
