use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "request.input.text")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., HTTP status, body snippet)
    pub details: Option<String>,
    /// Source of the error (e.g., "synthesis_client", "voice_resolver")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the TTS client library.
/// Every failure is returned to the caller as one of these categories;
/// nothing is logged-and-dropped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// A synthesis call was issued while another one was still pending.
    #[error("Synthesis already in progress")]
    AlreadyInProgress,

    /// The pending synthesis call was aborted through its cancel handle.
    #[error("Synthesis cancelled")]
    Cancelled,

    #[error("Transport failure: {message}{}", format_context(.context))]
    Transport {
        message: String,
        context: ErrorContext,
    },

    #[error("Malformed response: {message}{}", format_context(.context))]
    MalformedResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Playback failure: {message}{}", format_context(.context))]
    Playback {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn transport_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Transport {
            message: msg.into(),
            context,
        }
    }

    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            context,
        }
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Error::Playback {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn playback_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Playback {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Transport { context, .. }
            | Error::MalformedResponse { context, .. }
            | Error::Playback { context, .. } => Some(context),
            _ => None,
        }
    }
}
