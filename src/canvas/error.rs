use std::error::Error;
use std::fmt;

///
/// Errors that can occur while preparing a curve rendering pass
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The viewport cannot map pixels to mathematical coordinates: the margins leave no
    /// drawable pixels, or one of the range spans is zero or non-finite
    DegenerateCanvas,
}

impl fmt::Display for RenderError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DegenerateCanvas => write!(
                formatter,
                "viewport has no usable pixel-to-maths mapping (empty drawing area or empty range)"
            ),
        }
    }
}

impl Error for RenderError {}
