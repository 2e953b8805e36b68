//! Star rating renderer.
//!
//! Draws the five [`StarSegment`]s of a rating as colored glyphs. A terminal
//! cell cannot be clipped, so a partial star is drawn as a filled glyph whose
//! color sits between the empty and full star colors in proportion to its
//! fill fraction.

use crate::domain::StarSegment;
use crate::ui::theme::Theme;

/// Glyph for full and partial stars.
pub const FULL_STAR: char = '★';

/// Glyph for empty stars.
pub const EMPTY_STAR: char = '☆';

/// Returns the ANSI-styled glyphs for `stars`, followed by a reset.
///
/// # Example
///
/// ```rust
/// use wealthwagon::domain::render_stars;
/// use wealthwagon::ui::components::stars::{plain_stars, star_glyphs};
/// use wealthwagon::ui::Theme;
///
/// let stars = render_stars(3.5);
/// assert_eq!(plain_stars(&stars), "★★★★☆");
/// assert!(star_glyphs(&stars, &Theme::default()).contains('☆'));
/// ```
#[must_use]
pub fn star_glyphs(stars: &[StarSegment], theme: &Theme) -> String {
    let mut out = String::new();

    for segment in stars {
        let color = match segment {
            StarSegment::Full => theme.colors.star_full.clone(),
            StarSegment::Partial(fraction) => {
                Theme::blend(&theme.colors.star_empty, &theme.colors.star_full, *fraction)
            }
            StarSegment::Empty => theme.colors.star_empty.clone(),
        };
        out.push_str(&Theme::fg(&color));
        out.push(glyph(*segment));
    }

    out.push_str(Theme::reset());
    out
}

/// Returns the unstyled glyphs for `stars`.
#[must_use]
pub fn plain_stars(stars: &[StarSegment]) -> String {
    stars.iter().map(|segment| glyph(*segment)).collect()
}

fn glyph(segment: StarSegment) -> char {
    match segment {
        StarSegment::Full | StarSegment::Partial(_) => FULL_STAR,
        StarSegment::Empty => EMPTY_STAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render_stars;

    #[test]
    fn partial_star_is_tinted_between_empty_and_full() {
        let theme = Theme::default();
        let glyphs = star_glyphs(&render_stars(0.5), &theme);
        let tint = Theme::fg(&Theme::blend(&theme.colors.star_empty, &theme.colors.star_full, 0.5));

        assert!(glyphs.starts_with(&format!("{tint}★")));
        assert!(glyphs.ends_with(Theme::reset()));
    }

    #[test]
    fn plain_stars_cover_all_segments() {
        assert_eq!(plain_stars(&render_stars(0.0)), "☆☆☆☆☆");
        assert_eq!(plain_stars(&render_stars(5.0)), "★★★★★");
        assert_eq!(plain_stars(&render_stars(2.2)), "★★★☆☆");
    }
}
