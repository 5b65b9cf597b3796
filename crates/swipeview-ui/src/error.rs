use std::fmt;

use swipeview_foundation::SwipeDirection;

/// Invalid child setup detected while resolving a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeConfigError {
    NoChildren,
    TooManyChildren { count: usize },
    /// Both background views resolved to the same horizontal side.
    BackgroundAlignmentConflict,
}

impl fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeConfigError::NoChildren => {
                write!(f, "specify at least 1 child view to use as foreground content")
            }
            SwipeConfigError::TooManyChildren { count } => {
                write!(f, "specify only up to 3 views; got {count}")
            }
            SwipeConfigError::BackgroundAlignmentConflict => write!(
                f,
                "background views must have opposite horizontal gravity; one aligned to start and one to end"
            ),
        }
    }
}

impl std::error::Error for SwipeConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    Config(SwipeConfigError),
    MissingDirectionView { direction: SwipeDirection },
}

impl fmt::Display for SwipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeError::Config(err) => write!(f, "invalid swipe configuration: {err}"),
            SwipeError::MissingDirectionView { direction } => {
                write!(f, "view for the {direction} direction doesn't exist")
            }
        }
    }
}

impl std::error::Error for SwipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwipeError::Config(err) => Some(err),
            SwipeError::MissingDirectionView { .. } => None,
        }
    }
}

impl From<SwipeConfigError> for SwipeError {
    fn from(err: SwipeConfigError) -> Self {
        SwipeError::Config(err)
    }
}
