// Macros file - tracing macros are imported within the macro definitions

/// Standardized logging macros for consistent field names and message
/// patterns across the API and configuration layers.

/// Log the start of an API operation with consistent fields
#[macro_export]
macro_rules! log_api_start {
    ($operation:expr, question_id = $question_id:expr) => {
        tracing::debug!(
            operation = $operation,
            question_id = $question_id,
            "API operation started"
        );
    };
    ($operation:expr, category_id = $category_id:expr) => {
        tracing::debug!(
            operation = $operation,
            category_id = $category_id,
            "API operation started"
        );
    };
    ($operation:expr, page = $page:expr) => {
        tracing::debug!(
            operation = $operation,
            page = $page,
            "API operation started"
        );
    };
    ($operation:expr) => {
        tracing::debug!(operation = $operation, "API operation started");
    };
}

/// Log successful completion of an API operation
#[macro_export]
macro_rules! log_api_success {
    ($operation:expr, question_id = $question_id:expr, $msg:expr) => {{
        tracing::info!(
            operation = $operation,
            question_id = $question_id,
            "API operation completed: {}", $msg
        );
    }};
    ($operation:expr, count = $count:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            count = $count,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {{
        tracing::info!(
            operation = $operation,
            "API operation completed: {}", $msg
        );
    }};
}

/// Log non-fatal conditions that end a request early (empty pages,
/// validation rejections)
#[macro_export]
macro_rules! log_api_warn {
    ($operation:expr, question_id = $question_id:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            question_id = $question_id,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, page = $page:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            page = $page,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            "API operation warning: {}", $msg
        );
    };
}

/// Log system startup and configuration events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}
