//! Crate error type
//!
//! Every precondition the simulation relies on fails fast with one of these
//! instead of producing wrong motion.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// `advance` was called before bounds were bound
    Unbound,
    /// `bind` was called a second time
    AlreadyBound,
    /// Bounds edges are not finite or not ordered (left < right, top < bottom)
    MalformedBounds {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
    /// Body position is not finite
    InvalidPosition { x: f32, y: f32 },
    /// Body position lies outside the bounds it is being bound to
    OutsideBounds { x: f32, y: f32 },
    /// Delta time is negative or not finite
    InvalidDeltaTime(f32),
    /// Direction is not unit length
    InvalidDirection { x: f32, y: f32 },
    InvalidSpeed(f32),
    InvalidRadius(f32),
    /// Settings parsed but failed validation
    InvalidSettings(String),
    SettingsParse(serde_json::Error),
    Io(std::io::Error),
    /// Host backend failure (window, canvas, context)
    Platform(String),
    /// Runner frame requested before `start`
    NotStarted,
    /// Runner `start` called while a game context is alive
    AlreadyStarted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unbound => write!(f, "body advanced before bounds were bound"),
            Error::AlreadyBound => write!(f, "body bounds are already bound"),
            Error::MalformedBounds {
                left,
                top,
                right,
                bottom,
            } => write!(
                f,
                "malformed bounds [{left}, {top}, {right}, {bottom}] (need left < right, top < bottom)"
            ),
            Error::InvalidPosition { x, y } => {
                write!(f, "body position ({x}, {y}) is not finite")
            }
            Error::OutsideBounds { x, y } => {
                write!(f, "body position ({x}, {y}) lies outside its bounds")
            }
            Error::InvalidDeltaTime(dt) => {
                write!(f, "delta time must be finite and non-negative, got {dt}")
            }
            Error::InvalidDirection { x, y } => {
                write!(f, "direction ({x}, {y}) is not unit length")
            }
            Error::InvalidSpeed(speed) => write!(f, "speed must be positive, got {speed}"),
            Error::InvalidRadius(radius) => write!(f, "radius must be positive, got {radius}"),
            Error::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
            Error::SettingsParse(e) => write!(f, "failed to parse settings: {e}"),
            Error::Io(e) => write!(f, "i/o error: {e}"),
            Error::Platform(msg) => write!(f, "platform error: {msg}"),
            Error::NotStarted => write!(f, "runner frame requested before start"),
            Error::AlreadyStarted => write!(f, "runner is already started"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SettingsParse(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SettingsParse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
