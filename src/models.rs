use std::collections::BTreeMap;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::Config;
use crate::services::stats;

/// One vocabulary record from a word list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordEntry {
    pub term: String,
    pub translation: Option<String>,
    pub pos: Option<String>,
    pub category: Option<String>,
}

impl WordEntry {
    /// True when the category or part of speech equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        [&self.category, &self.pos]
            .iter()
            .filter_map(|t| t.as_deref())
            .any(|t| t.to_lowercase() == tag)
    }
}

/// All entries read from one CSV source, in file order
#[derive(Debug, Clone)]
pub struct WordCollection {
    pub label: String,
    pub source: PathBuf,
    pub entries: Vec<WordEntry>,
}

impl WordCollection {
    pub fn new(label: &str, source: PathBuf, entries: Vec<WordEntry>) -> Self {
        WordCollection { label: label.to_string(), source, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The known and missing lists as loaded at startup
#[derive(Debug, Clone)]
pub struct WordLists {
    pub known: WordCollection,
    pub missing: WordCollection,
    pub loaded_at: DateTime<Utc>,
}

impl WordLists {
    pub fn new(known: WordCollection, missing: WordCollection) -> Self {
        WordLists { known, missing, loaded_at: Utc::now() }
    }

    pub fn collections(&self) -> [&WordCollection; 2] {
        [&self.known, &self.missing]
    }

    pub fn get(&self, label: &str) -> Option<&WordCollection> {
        self.collections().into_iter().find(|c| c.label.eq_ignore_ascii_case(label))
    }
}

/// Aggregate counts derived from the word lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub totals: BTreeMap<String, usize>,
    pub by_pos: BTreeMap<String, BTreeMap<String, usize>>,
    pub by_category: BTreeMap<String, BTreeMap<String, usize>>,
}

/// Application state shared across all handlers
pub struct AppState {
    pub lists: WordLists,
    pub stats: Stats,
    pub config: Config,
}

impl AppState {
    pub fn new(lists: WordLists, config: Config) -> Self {
        let stats = stats::compute(lists.collections());
        AppState { lists, stats, config }
    }
}

#[derive(Serialize)]
pub struct ListingResponse<'a> {
    pub stats: &'a Stats,
    pub known: &'a [WordEntry],
    pub missing: &'a [WordEntry],
    pub loaded_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct FlashcardQuery {
    pub mode: Option<String>,
    pub category: Option<String>,
    pub list: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct Flashcard {
    pub term: String,
    pub translation: Option<String>,
    pub pos: Option<String>,
    pub category: Option<String>,
}

impl From<WordEntry> for Flashcard {
    fn from(entry: WordEntry) -> Self {
        Flashcard {
            term: entry.term,
            translation: entry.translation,
            pos: entry.pos,
            category: entry.category,
        }
    }
}

#[derive(Serialize)]
pub struct FlashcardResponse {
    pub mode: String,
    pub list: String,
    pub total: usize,
    pub cards: Vec<Flashcard>,
}

#[derive(Serialize)]
pub struct PosBadge {
    pub text: String,
    pub color: &'static str,
    pub label: String,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct CategoryBadge {
    pub text: String,
    pub color: &'static str,
    pub label: String,
    pub icon: &'static str,
}

#[derive(Serialize)]
pub struct RandomCardResponse {
    pub word: String,
    pub pos: PosBadge,
    pub gender_or_group: CategoryBadge,
    pub total_cards: usize,
}
