use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Failures of the outbound HTTP adapter.
///
/// Each variant renders as the exact message shown to the user; endpoint and
/// status are kept as context for logs and retry decisions only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timeout. Please try again.")]
    Timeout { endpoint: String },
    #[error("Network error. Please check your connection.")]
    Network { endpoint: String },
    #[error("{}", .message.as_deref().unwrap_or("Invalid request. Please check your input."))]
    InvalidRequest {
        endpoint: String,
        message: Option<String>,
    },
    #[error("Unauthorized. Please check your API key.")]
    Unauthorized { endpoint: String },
    #[error("Forbidden. You don't have permission for this action.")]
    Forbidden { endpoint: String },
    #[error("Resource not found.")]
    NotFound { endpoint: String },
    #[error("Too many requests. Please try again later.")]
    RateLimited { endpoint: String },
    #[error("Server error. Please try again later.")]
    Server { endpoint: String },
    #[error("{}", .message.as_deref().unwrap_or("An unexpected error occurred."))]
    Unexpected {
        status: u16,
        endpoint: String,
        message: Option<String>,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration '{var}' is not set")]
    MissingVar { var: String, hint: String },
    #[error("Invalid configuration value for '{var}': {value}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },
}

/// Service-boundary outcome errors.
///
/// Every service operation returns `Result<_, ServiceError>`; nothing is
/// allowed to propagate past the service as a panic or a raw transport error.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Please enter a valid URL (must start with http:// or https://)")]
    InvalidUrl { input: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => Self::api_severity(api_error),
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Service(service_error) => match service_error {
                ServiceError::InvalidUrl { .. } => ErrorSeverity::Low,
                ServiceError::Api(api_error) => Self::api_severity(api_error),
            },
        }
    }

    fn api_severity(api_error: &ApiError) -> ErrorSeverity {
        match api_error {
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => ErrorSeverity::High,
            ApiError::Server { .. } => ErrorSeverity::High,
            ApiError::Unexpected { status, .. } if *status >= 500 => ErrorSeverity::High,
            _ => ErrorSeverity::Medium,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            // Service outcomes already carry the user-facing message verbatim
            AppError::Service(service_error) => format!("{}", service_error),
            AppError::Api(api_error) => format!("{}", api_error),
            AppError::Cli(CliError::InvalidArguments(message)) => message.clone(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        let api_error = match self {
            AppError::Api(api_error) => Some(api_error),
            AppError::Service(ServiceError::Api(api_error)) => Some(api_error),
            AppError::Service(ServiceError::InvalidUrl { .. }) => {
                return Some(
                    "The URL must be absolute, e.g. https://example.com/page".to_string(),
                );
            }
            AppError::Config(ConfigError::MissingVar { hint, .. }) => {
                return Some(hint.clone());
            }
            _ => None,
        };

        match api_error? {
            ApiError::Timeout { .. } | ApiError::Network { .. } => {
                Some("Check your internet connection and try again".to_string())
            }
            ApiError::Unauthorized { .. } => {
                Some("Set SHORTLY_API_KEY or pass --api-key".to_string())
            }
            ApiError::RateLimited { .. } => {
                Some("Wait a moment before submitting another URL".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages_are_exact() {
        let endpoint = "/".to_string();
        assert_eq!(
            format!(
                "{}",
                ApiError::Timeout {
                    endpoint: endpoint.clone()
                }
            ),
            "Request timeout. Please try again."
        );
        assert_eq!(
            format!(
                "{}",
                ApiError::Network {
                    endpoint: endpoint.clone()
                }
            ),
            "Network error. Please check your connection."
        );
        assert_eq!(
            format!(
                "{}",
                ApiError::Unauthorized {
                    endpoint: endpoint.clone()
                }
            ),
            "Unauthorized. Please check your API key."
        );
        assert_eq!(
            format!(
                "{}",
                ApiError::Forbidden {
                    endpoint: endpoint.clone()
                }
            ),
            "Forbidden. You don't have permission for this action."
        );
        assert_eq!(
            format!(
                "{}",
                ApiError::NotFound {
                    endpoint: endpoint.clone()
                }
            ),
            "Resource not found."
        );
        assert_eq!(
            format!(
                "{}",
                ApiError::RateLimited {
                    endpoint: endpoint.clone()
                }
            ),
            "Too many requests. Please try again later."
        );
        assert_eq!(
            format!("{}", ApiError::Server { endpoint }),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn test_invalid_request_prefers_body_message() {
        let with_body = ApiError::InvalidRequest {
            endpoint: "/".to_string(),
            message: Some("original_url is required".to_string()),
        };
        assert_eq!(format!("{}", with_body), "original_url is required");

        let without_body = ApiError::InvalidRequest {
            endpoint: "/".to_string(),
            message: None,
        };
        assert_eq!(
            format!("{}", without_body),
            "Invalid request. Please check your input."
        );
    }

    #[test]
    fn test_unexpected_falls_back_to_generic_message() {
        let err = ApiError::Unexpected {
            status: 502,
            endpoint: "/".to_string(),
            message: None,
        };
        assert_eq!(format!("{}", err), "An unexpected error occurred.");

        let err = ApiError::Unexpected {
            status: 503,
            endpoint: "/".to_string(),
            message: Some("maintenance window".to_string()),
        };
        assert_eq!(format!("{}", err), "maintenance window");
    }

    #[test]
    fn test_service_error_invalid_url_message() {
        let err = ServiceError::InvalidUrl {
            input: "javascript:alert(1)".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Please enter a valid URL (must start with http:// or https://)"
        );
    }

    #[test]
    fn test_service_error_is_transparent_through_app_error() {
        let app_err = AppError::Service(ServiceError::Api(ApiError::RateLimited {
            endpoint: "/".to_string(),
        }));
        assert_eq!(
            format!("{}", app_err),
            "Too many requests. Please try again later."
        );
        assert_eq!(
            app_err.display_friendly(),
            "Too many requests. Please try again later."
        );
    }

    #[test]
    fn test_severity() {
        let app_err = AppError::Service(ServiceError::InvalidUrl {
            input: "nope".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Low);

        let app_err = AppError::Api(ApiError::Unauthorized {
            endpoint: "/".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Api(ApiError::Unexpected {
            status: 503,
            endpoint: "/".to_string(),
            message: None,
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Config(ConfigError::MissingVar {
            var: "SHORTLY_API_URL".to_string(),
            hint: "hint".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_troubleshooting_hints() {
        let app_err = AppError::Service(ServiceError::Api(ApiError::Timeout {
            endpoint: "/".to_string(),
        }));
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err = AppError::Api(ApiError::NotFound {
            endpoint: "/abc123".to_string(),
        });
        assert!(app_err.troubleshooting_hint().is_none());
    }
}
