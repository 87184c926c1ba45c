use std::fmt;

use crate::error::RatingError;

pub const MAX_RATING: f64 = 5.0;

/// Average release rating on the site's 0–5 scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    /// # Errors
    /// [`RatingError::OutOfRange`] for values outside `[0, 5]` (NaN included).
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if (0.0..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    /// Parses the rating text shown on a release page (`" 3.45 "`).
    ///
    /// Like the page script, only the leading number is read, so trailing
    /// text such as `"3.45 / 5"` is tolerated.
    ///
    /// # Errors
    /// Empty text, no leading number, or a value outside `[0, 5]`.
    pub fn parse(text: &str) -> Result<Self, RatingError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RatingError::Empty);
        }

        let end = text
            .char_indices()
            .find(|&(_, c)| !(c.is_ascii_digit() || c == '.'))
            .map_or(text.len(), |(i, _)| i);
        let value = text[..end]
            .parse::<f64>()
            .map_err(|_| RatingError::NotANumber(text.to_string()))?;

        Self::new(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `rating * 100 / 5`, evaluated in that order.
    #[inline]
    pub fn percentage(self) -> f64 {
        (self.0 * 100.0) / MAX_RATING
    }

    /// Share of the bar covered by the mask.
    #[inline]
    pub fn remaining_percentage(self) -> f64 {
        100.0 - self.percentage()
    }

    /// Filled width in pixels for a track `track_px` wide.
    #[inline]
    pub fn filled_width(self, track_px: f64) -> f64 {
        track_px * self.percentage() / 100.0
    }

    /// Tooltip text, e.g. `3.45/5 (69%)`.
    pub fn title(self) -> String {
        format!("{}/{} ({}%)", self.0, MAX_RATING, self.percentage())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_text() {
        let r = Rating::parse("  3.45\n").unwrap();
        assert_eq!(r.value(), 3.45);
        assert_eq!(r.percentage(), 69.0);
        assert_eq!(r.remaining_percentage(), 31.0);
    }

    #[test]
    fn trailing_text_ignored() {
        assert_eq!(Rating::parse("4.00 / 5").unwrap().value(), 4.0);
    }

    #[test]
    fn title_format() {
        assert_eq!(Rating::parse("3.45").unwrap().title(), "3.45/5 (69%)");
        assert_eq!(Rating::new(2.5).unwrap().title(), "2.5/5 (50%)");
    }

    #[test]
    fn pixel_mapping() {
        let r = Rating::new(2.5).unwrap();
        assert_eq!(r.filled_width(300.0), 150.0);
        assert_eq!(Rating::new(0.0).unwrap().filled_width(300.0), 0.0);
        assert_eq!(Rating::new(5.0).unwrap().filled_width(300.0), 300.0);
    }

    #[test]
    fn rejects_bad_text() {
        assert_eq!(Rating::parse("   "), Err(RatingError::Empty));
        assert!(matches!(Rating::parse("n/a"), Err(RatingError::NotANumber(_))));
        assert!(matches!(Rating::parse("."), Err(RatingError::NotANumber(_))));
        assert_eq!(Rating::parse("5.5"), Err(RatingError::OutOfRange(5.5)));
    }

    #[test]
    fn rejects_nan() {
        assert!(Rating::new(f64::NAN).is_err());
    }
}
