//! Recipe card search and tag filtering.
//!
//! Cards carry `data-title`, `data-tags`, and `data-ingredients`. Search and
//! filter each recompute the `matched` flag of every card from scratch, so the
//! last action wins; they never intersect.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

/// One recipe card's searchable metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub tags: String,
    pub ingredients: String,
    /// Whether the last search/filter kept this card.
    pub matched: bool,
}

impl RecipeCard {
    #[must_use]
    pub fn new(title: impl Into<String>, tags: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self { title: title.into(), tags: tags.into(), ingredients: ingredients.into(), matched: true }
    }

    /// `needle` must already be lowercased and trimmed.
    fn contains_term(&self, needle: &str) -> bool {
        [&self.title, &self.tags, &self.ingredients]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A tag filter selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a `data-filter` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == FILTER_ALL { Self::All } else { Self::Tag(raw.to_owned()) }
    }
}

/// An ordered list of cards in one container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardList {
    cards: Vec<RecipeCard>,
}

impl CardList {
    #[must_use]
    pub fn new(cards: Vec<RecipeCard>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Keep cards whose title, tags, or ingredients contain `term`
    /// (case-insensitive, trimmed). An empty term keeps everything.
    /// Returns the number of matched cards.
    pub fn search(&mut self, term: &str) -> usize {
        let needle = term.trim().to_lowercase();
        for card in &mut self.cards {
            card.matched = needle.is_empty() || card.contains_term(&needle);
        }
        self.matched_count()
    }

    /// Keep cards whose tags contain the filter tag. Returns the matched count.
    pub fn filter(&mut self, filter: &TagFilter) -> usize {
        for card in &mut self.cards {
            card.matched = match filter {
                TagFilter::All => true,
                TagFilter::Tag(tag) => card.tags.contains(tag.as_str()),
            };
        }
        self.matched_count()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Indices of matched cards, in document order.
    #[must_use]
    pub fn matched_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.matched.then_some(i))
            .collect()
    }

    /// Per-card display flags when there is no pagination.
    #[must_use]
    pub fn display_flags(&self) -> Vec<bool> {
        self.cards.iter().map(|c| c.matched).collect()
    }
}
