//! Rating-to-stars conversion.
//!
//! Converts a decimal rating into exactly [`STAR_COUNT`] ordered segments for
//! display. The conversion is pure: identical input always yields identical
//! output, and it may be called for any number of products.
//!
//! # Algorithm
//!
//! ```text
//! rating = clamp(rating, 0, 5)        (NaN counts as 0)
//! full   = floor(rating)
//! frac   = rating - full
//!
//! i <  full             → Full
//! i == full && frac > 0 → Partial(frac)
//! otherwise             → Empty
//! ```

/// Number of segments in every rendered rating.
pub const STAR_COUNT: usize = 5;

/// Highest representable rating.
pub const MAX_RATING: f64 = 5.0;

/// One visual unit of a star rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarSegment {
    /// Completely filled star.
    Full,
    /// Star filled from the left by the given fraction, in `(0, 1)`.
    Partial(f64),
    /// Unfilled star.
    Empty,
}

impl StarSegment {
    /// Fill amount of the segment: `1.0`, the partial fraction, or `0.0`.
    #[must_use]
    pub fn fill(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Partial(fraction) => fraction,
            Self::Empty => 0.0,
        }
    }
}

/// Clamps a raw rating into `[0, MAX_RATING]`.
///
/// Values below zero become `0`, values above five become `5`, and `NaN`
/// becomes `0` so that malformed ratings render as five empty stars.
#[must_use]
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

/// Renders a rating as five ordered star segments.
///
/// At most one [`StarSegment::Partial`] is produced, always directly after
/// the last [`StarSegment::Full`]. Whole ratings produce no partial segment.
///
/// # Examples
///
/// ```
/// use wealthwagon::domain::{render_stars, StarSegment};
///
/// let stars = render_stars(2.0);
/// assert_eq!(
///     stars,
///     [StarSegment::Full, StarSegment::Full, StarSegment::Empty, StarSegment::Empty, StarSegment::Empty]
/// );
/// ```
#[must_use]
pub fn render_stars(rating: f64) -> [StarSegment; STAR_COUNT] {
    let rating = clamp_rating(rating);
    let full = rating.floor();
    let fraction = rating - full;
    // rating is within [0, 5], so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = full as usize;

    std::array::from_fn(|i| {
        if i < full {
            StarSegment::Full
        } else if i == full && fraction > 0.0 {
            StarSegment::Partial(fraction)
        } else {
            StarSegment::Empty
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn total_fill(stars: &[StarSegment]) -> f64 {
        stars.iter().map(|s| s.fill()).sum()
    }

    fn count(stars: &[StarSegment], wanted: fn(&StarSegment) -> bool) -> usize {
        stars.iter().filter(|s| wanted(s)).count()
    }

    #[test]
    fn zero_renders_five_empty_stars() {
        assert_eq!(render_stars(0.0), [StarSegment::Empty; 5]);
    }

    #[test]
    fn five_renders_five_full_stars() {
        assert_eq!(render_stars(5.0), [StarSegment::Full; 5]);
    }

    #[test]
    fn fractional_rating_has_one_partial_after_full_stars() {
        let stars = render_stars(3.7);

        assert_eq!(&stars[..3], &[StarSegment::Full; 3]);
        match stars[3] {
            StarSegment::Partial(fraction) => assert!((fraction - 0.7).abs() < EPSILON),
            other => panic!("expected partial star, got {other:?}"),
        }
        assert_eq!(stars[4], StarSegment::Empty);
    }

    #[test]
    fn whole_ratings_have_no_partial() {
        for rating in [0.0, 1.0, 2.0, 3.0, 4.0, 5.0] {
            let stars = render_stars(rating);
            assert_eq!(count(&stars, |s| matches!(s, StarSegment::Partial(_))), 0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected_full = rating as usize;
            assert_eq!(count(&stars, |s| *s == StarSegment::Full), expected_full);
        }
    }

    #[test]
    fn fill_sums_to_rating_across_the_range() {
        for step in 0..=500 {
            let rating = f64::from(step) / 100.0;
            let stars = render_stars(rating);

            assert_eq!(stars.len(), STAR_COUNT);
            assert!(count(&stars, |s| matches!(s, StarSegment::Partial(_))) <= 1);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let full = rating.floor() as usize;
            assert_eq!(count(&stars, |s| *s == StarSegment::Full), full);
            assert!(
                (total_fill(&stars) - rating).abs() < EPSILON,
                "rating {rating} rendered as {stars:?}"
            );
        }
    }

    #[test]
    fn partial_always_follows_last_full() {
        let stars = render_stars(1.25);
        assert_eq!(stars[0], StarSegment::Full);
        assert!(matches!(stars[1], StarSegment::Partial(_)));
        assert_eq!(&stars[2..], &[StarSegment::Empty; 3]);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(render_stars(-2.5), [StarSegment::Empty; 5]);
        assert_eq!(render_stars(7.3), [StarSegment::Full; 5]);
        assert_eq!(render_stars(f64::NAN), [StarSegment::Empty; 5]);
        assert_eq!(render_stars(f64::INFINITY), [StarSegment::Full; 5]);
    }

    #[test]
    fn rendering_is_repeatable() {
        assert_eq!(render_stars(4.4), render_stars(4.4));
    }
}
