use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagError>;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("{count} tags configured, at most {max} are supported")]
    TooManyTags { count: usize, max: usize },
    #[error("At least one tag must be configured")]
    NoTags,
    #[error("Display server error: {0}")]
    Protocol(ProtocolError),
    #[error("Display server closed the connection")]
    DisplayClosed,
    #[error("Refusing to spawn an empty command")]
    EmptyCommand,
}

// X11 request opcodes and error codes that show up in the allow-list below.
const BAD_WINDOW: u8 = 3;
const BAD_MATCH: u8 = 8;
const BAD_DRAWABLE: u8 = 9;
const BAD_ACCESS: u8 = 10;
const X_CONFIGURE_WINDOW: u8 = 12;
const X_GRAB_BUTTON: u8 = 28;
const X_GRAB_KEY: u8 = 33;
const X_SET_INPUT_FOCUS: u8 = 42;
const X_COPY_AREA: u8 = 62;
const X_POLY_SEGMENT: u8 = 66;
const X_POLY_FILL_RECTANGLE: u8 = 70;
const X_POLY_TEXT8: u8 = 74;

/// An asynchronous error reported by the display server for one of our requests.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolError {
    pub request_code: u8,
    pub error_code: u8,
}

impl ProtocolError {
    /// Errors caused by windows vanishing between a request and its execution.
    ///
    /// These are expected while clients come and go and are only logged.
    #[must_use]
    pub const fn is_ignorable(&self) -> bool {
        matches!(
            (self.request_code, self.error_code),
            (_, BAD_WINDOW)
                | (X_SET_INPUT_FOCUS | X_CONFIGURE_WINDOW, BAD_MATCH)
                | (
                    X_POLY_TEXT8 | X_POLY_FILL_RECTANGLE | X_POLY_SEGMENT | X_COPY_AREA,
                    BAD_DRAWABLE
                )
                | (X_GRAB_BUTTON | X_GRAB_KEY, BAD_ACCESS)
        )
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "request code={}, error code={}",
            self.request_code, self.error_code
        )
    }
}
