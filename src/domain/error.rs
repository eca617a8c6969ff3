//! Configuration errors raised while building a review session

use thiserror::Error;

/// Problems that make the overlay impossible to construct
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The screen sequence is empty
    #[error("at least one screen is required")]
    NoScreens,
    /// A screen ordinal outside the sequence was requested
    #[error("screen {ordinal} is out of range (have {count})")]
    ScreenOutOfRange { ordinal: usize, count: usize },
    /// The image source has no image for an ordinal below its count
    #[error("screen source has no image for screen {0}")]
    MissingScreen(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_screen() {
        let err = ConfigError::ScreenOutOfRange { ordinal: 7, count: 3 };
        assert_eq!(err.to_string(), "screen 7 is out of range (have 3)");
        assert_eq!(
            ConfigError::MissingScreen(2).to_string(),
            "screen source has no image for screen 2"
        );
    }
}
