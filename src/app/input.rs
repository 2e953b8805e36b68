//! Translation of terminal input lines into events.
//!
//! The search box is line based: anything typed and confirmed with Enter is
//! a search, except for a few `:` commands.
//!
//! | Input        | Event                    |
//! |--------------|--------------------------|
//! | `:q`, `:quit`| [`Event::Quit`]          |
//! | `:n`         | [`Event::NextPage`]      |
//! | `:p`         | [`Event::PrevPage`]      |
//! | `:1` … `:4`  | [`Event::QuickSearch`]   |
//! | anything else| [`Event::Submit`]        |

use super::handler::Event;
use super::state::POPULAR_SEARCHES;

/// Parses one line of input into an event.
///
/// Unrecognized `:` commands are submitted as ordinary queries, so a product
/// name starting with a colon is still searchable.
///
/// # Example
///
/// ```rust
/// use wealthwagon::app::{parse_input, Event};
///
/// assert!(matches!(parse_input(":2"), Event::QuickSearch(1)));
/// assert!(matches!(parse_input("gaming mouse"), Event::Submit(q) if q == "gaming mouse"));
/// ```
#[must_use]
pub fn parse_input(line: &str) -> Event {
    let trimmed = line.trim();

    match trimmed {
        ":q" | ":quit" => return Event::Quit,
        ":n" => return Event::NextPage,
        ":p" => return Event::PrevPage,
        _ => {}
    }

    if let Some(index) = trimmed
        .strip_prefix(':')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| (1..=POPULAR_SEARCHES.len()).contains(n))
    {
        return Event::QuickSearch(index - 1);
    }

    Event::Submit(line.to_string())
}
