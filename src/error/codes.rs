/// Error code registry for quiztime
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Question bank (load) errors
/// - 4000-4999: Session errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_INVALID_EXTENSION: u16 = 1001;
    pub const CONFIG_INVALID_TIME_LIMIT: u16 = 1002;

    // Load errors (3000-3999)
    pub const LOAD_IO_ERROR: u16 = 3001;
    pub const LOAD_INVALID_RECORD: u16 = 3002;
    pub const LOAD_CSV_ERROR: u16 = 3003;

    // Session errors (4000-4999)
    pub const SESSION_DISPLAY_ERROR: u16 = 4001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_INVALID_EXTENSION => "Question bank must be a .csv file",
        ErrorCode::CONFIG_INVALID_TIME_LIMIT => "Time limit out of range",
        ErrorCode::LOAD_IO_ERROR => "Question bank could not be opened or read",
        ErrorCode::LOAD_INVALID_RECORD => "Question bank record does not have two fields",
        ErrorCode::LOAD_CSV_ERROR => "Question bank is not valid CSV",
        ErrorCode::SESSION_DISPLAY_ERROR => "Failed to write quiz output",
        _ => "Unknown error",
    }
}
