//! Rendered frames for each search state.

use wealthwagon::client::SearchRequest;
use wealthwagon::domain::SearchError;
use wealthwagon::ui::render;
use wealthwagon::{handle_event, AppState, Event, Product, SearchResponse, Theme};

fn submitted(query: &str) -> (AppState, SearchRequest) {
    let mut state = AppState::new(Theme::default());
    let request = state.submit(query).unwrap();
    (state, request)
}

#[test]
fn idle_screen_shows_welcome_and_popular_searches() {
    let frame = render(&AppState::new(Theme::default()));

    assert!(frame.contains("WealthWagon"));
    assert!(frame.contains("Start saving with WealthWagon"));
    for label in ["Laptops", "Smartphones", "Headphones", "Cameras"] {
        assert!(frame.contains(label), "missing {label}");
    }
}

#[test]
fn loading_screen() {
    let (state, _) = submitted("laptop");
    assert!(render(&state).contains("Finding the best deals for you..."));
}

fn laptop() -> Product {
    Product {
        title: "Laptop 14".to_string(),
        store: "Amazon".to_string(),
        price: 54999.0,
        rating: 3.5,
        image: "https://img.example/1.png".to_string(),
        link: "https://shop.example/1".to_string(),
    }
}

fn with_results(query: &str, products: Vec<Product>) -> AppState {
    let (mut state, request) = submitted(query);
    handle_event(
        &mut state,
        Event::SearchCompleted(SearchResponse::products(&request, products)),
    );
    state
}

#[test]
fn results_screen_shows_cards() {
    let state = with_results("laptop", vec![laptop()]);

    let frame = render(&state);
    assert!(frame.contains("Best deals for laptop"));
    assert!(frame.contains("Laptop 14"));
    assert!(frame.contains("From Amazon"));
    assert!(frame.contains("₹54999"));
    assert!(frame.contains("★"));
    assert!(frame.contains("https://shop.example/1"));
    assert!(frame.contains("Image ↗"));
    assert!(frame.contains("https://img.example/1.png"));
}

#[test]
fn escape_sequences_from_the_api_never_reach_the_terminal() {
    let hostile = Product {
        title: "Evil\u{1b}[2J\u{1b}]0;pwned\u{7}".to_string(),
        link: "https://a\u{1b}\\\u{1b}[8m".to_string(),
        ..laptop()
    };
    let frame = render(&with_results("tv", vec![hostile]));

    assert!(!frame.contains("\u{1b}[2J\u{1b}]0;pwned"));
    assert!(!frame.contains("\u{1b}]0;"));
    assert!(!frame.contains("\u{7}"));
    assert!(!frame.contains("https://a"));
    assert!(!frame.contains("\u{1b}[8m"));
    assert!(frame.contains("Evil[2J]0;pwned"));
    assert!(frame.contains("View Deal"));
}

/// Row (1-indexed) of the last cursor move before `needle` in `frame`.
fn row_of(frame: &str, needle: &str) -> Option<usize> {
    let end = frame.find(needle)?;
    frame[..end]
        .split("\u{1b}[")
        .filter_map(|seq| {
            let params_end = seq.find(|c: char| !(c.is_ascii_digit() || c == ';'))?;
            if !seq[params_end..].starts_with('H') {
                return None;
            }
            seq[..params_end].split(';').next()?.parse::<usize>().ok()
        })
        .last()
}

#[test]
fn cards_stay_above_the_footer_on_short_terminals() {
    let mut state = with_results("laptop", vec![laptop()]);

    // prompt 16, footer 15, border 14
    state.resize(16, 80);
    let frame = render(&state);
    assert_eq!(row_of(&frame, "Laptop 14"), Some(9));
    assert_eq!(row_of(&frame, "View Deal"), Some(13));

    // prompt 13, footer 12, border 11: no room for a card
    state.resize(13, 80);
    let frame = render(&state);
    assert!(!frame.contains("Laptop 14"));
    assert!(!frame.contains("View Deal"));
    assert_eq!(row_of(&frame, "Enlarge the terminal"), Some(9));
}
