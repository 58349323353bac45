use super::*;
use crate::cards::RecipeCard;

fn list(n: usize) -> CardList {
    CardList::new(
        (1..=n)
            .map(|i| RecipeCard::new(format!("Recipe {i}"), if i % 2 == 0 { "even" } else { "odd" }, ""))
            .collect(),
    )
}

fn numbers(controls: &[PageControl]) -> Vec<String> {
    controls
        .iter()
        .map(|c| match c {
            PageControl::Prev { disabled, .. } => format!("prev{}", if *disabled { "-" } else { "" }),
            PageControl::Next { disabled, .. } => format!("next{}", if *disabled { "-" } else { "" }),
            PageControl::Page { number, active } => format!("{number}{}", if *active { "*" } else { "" }),
            PageControl::Ellipsis => "...".to_owned(),
        })
        .collect()
}

// =============================================================
// page_count
// =============================================================

#[test]
fn page_count_is_ceiling() {
    assert_eq!(page_count(0, 6), 0);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(14, 6), 3);
}

#[test]
fn pages_never_exceed_page_size() {
    for n in 0..30 {
        let cards = list(n);
        let mut pager = Pager::new(6);
        let total = pager.total_pages(&cards);
        assert_eq!(total, n.div_ceil(6));
        for page in 1..=total {
            pager.go_to(page, &cards);
            let shown = pager.window(&cards).len();
            assert!(shown <= 6 && shown > 0, "n={n} page={page} shown={shown}");
        }
    }
}

// =============================================================
// windows
// =============================================================

#[test]
fn fourteen_cards_third_page_shows_last_two() {
    let cards = list(14);
    let mut pager = Pager::new(6);
    assert_eq!(pager.total_pages(&cards), 3);

    assert_eq!(pager.go_to(3, &cards), 3);
    assert_eq!(pager.window(&cards), vec![12, 13]);

    let controls = pager.controls(&cards);
    assert_eq!(numbers(&controls), vec!["prev", "1", "2", "3*", "next-"]);
    assert_eq!(controls.last().and_then(PageControl::target), None);
}

#[test]
fn window_skips_unmatched_cards() {
    let mut cards = list(14);
    cards.filter(&crate::cards::TagFilter::Tag("even".into()));
    let mut pager = Pager::new(6);
    assert_eq!(pager.total_pages(&cards), 2);

    pager.go_to(2, &cards);
    assert_eq!(pager.window(&cards), vec![13]);
    let flags = pager.display_flags(&cards);
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    assert!(flags[13]);
}

#[test]
fn go_to_clamps_out_of_range() {
    let cards = list(14);
    let mut pager = Pager::new(6);
    assert_eq!(pager.go_to(0, &cards), 1);
    assert_eq!(pager.go_to(9, &cards), 3);
    assert_eq!(pager.go_to(2, &list(0)), 1);
}

#[test]
fn applies_only_to_lists_longer_than_a_page() {
    let pager = Pager::new(6);
    assert!(!pager.applies_to(&list(6)));
    assert!(pager.applies_to(&list(7)));
}

// =============================================================
// controls
// =============================================================

#[test]
fn single_page_renders_nothing() {
    assert!(controls(1, 1).is_empty());
    assert!(controls(1, 0).is_empty());
}

#[test]
fn first_page_disables_prev() {
    assert_eq!(numbers(&controls(1, 3)), vec!["prev-", "1*", "2", "3", "next"]);
}

#[test]
fn distant_pages_collapse_to_ellipsis() {
    assert_eq!(numbers(&controls(5, 10)), vec!["prev", "1", "...", "4", "5*", "6", "...", "10", "next"]);
    assert_eq!(numbers(&controls(1, 10)), vec!["prev-", "1*", "2", "...", "10", "next"]);
    assert_eq!(numbers(&controls(10, 10)), vec!["prev", "1", "...", "9", "10*", "next-"]);
}

#[test]
fn prev_and_next_target_neighbours() {
    let c = controls(2, 3);
    assert_eq!(c.first().and_then(PageControl::target), Some(1));
    assert_eq!(c.last().and_then(PageControl::target), Some(3));
}
