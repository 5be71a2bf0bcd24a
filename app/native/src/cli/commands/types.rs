//! Shared types for CLI commands.

use crate::modules::snap::Viewport;

/// Parses a viewport dimension in pixels.
///
/// Accepts any finite, strictly positive number.
///
/// # Errors
///
/// Returns a message suitable for clap if the value is not a positive number.
pub fn parse_dimension(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid dimension '{s}'. Expected a number of pixels."))?;

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("Invalid dimension '{s}'. Expected a positive number of pixels."))
    }
}

/// Viewport size given on the command line.
#[derive(clap::Args, Debug, Clone, Copy, PartialEq)]
pub struct ViewportArgs {
    /// Viewport width in pixels.
    #[arg(value_name = "WIDTH", value_parser = parse_dimension)]
    pub width: f64,

    /// Viewport height in pixels.
    #[arg(value_name = "HEIGHT", value_parser = parse_dimension)]
    pub height: f64,
}

impl ViewportArgs {
    #[must_use]
    pub const fn viewport(self) -> Viewport { Viewport::new(self.width, self.height) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_valid() {
        assert_eq!(parse_dimension("1920"), Ok(1920.0));
        assert_eq!(parse_dimension(" 1366.5 "), Ok(1366.5));
    }

    #[test]
    fn test_parse_dimension_rejects_non_positive() {
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("-800").is_err());
        assert!(parse_dimension("inf").is_err());
        assert!(parse_dimension("wide").is_err());
    }
}
