use std::fmt;
use rand::seq::SliceRandom;
use log::debug;
use crate::error::FlashcardError;
use crate::models::{WordCollection, WordEntry};

/// How a practice session orders or filters its cards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlashcardMode {
    #[default]
    Sequential,
    Random,
    Category(String),
}

impl FlashcardMode {
    /// Validate a request-supplied mode; `category` is only read for the category mode
    pub fn parse(mode: &str, category: Option<&str>) -> Result<Self, FlashcardError> {
        match mode.trim().to_lowercase().as_str() {
            "sequential" => Ok(FlashcardMode::Sequential),
            "random" => Ok(FlashcardMode::Random),
            "category" => match category.map(str::trim).filter(|c| !c.is_empty()) {
                Some(tag) => Ok(FlashcardMode::Category(tag.to_string())),
                None => Err(FlashcardError::InvalidMode("category (no tag given)".to_string())),
            },
            _ => Err(FlashcardError::InvalidMode(mode.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlashcardMode::Sequential => "sequential",
            FlashcardMode::Random => "random",
            FlashcardMode::Category(_) => "category",
        }
    }
}

impl fmt::Display for FlashcardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashcardMode::Category(tag) => write!(f, "category:{}", tag),
            other => f.write_str(other.name()),
        }
    }
}

/// Pick the cards for a practice session
pub fn select(collection: &WordCollection, mode: &FlashcardMode) -> Vec<WordEntry> {
    let mut cards: Vec<WordEntry> = match mode {
        FlashcardMode::Category(tag) => collection
            .entries
            .iter()
            .filter(|e| e.has_tag(tag))
            .cloned()
            .collect(),
        _ => collection.entries.clone(),
    };

    if *mode == FlashcardMode::Random {
        cards.shuffle(&mut rand::thread_rng());
    }

    debug!("Selected {} of {} {} cards ({})", cards.len(), collection.len(), collection.label, mode);
    cards
}

/// One card drawn uniformly from the collection
pub fn random_card(collection: &WordCollection) -> Option<&WordEntry> {
    collection.entries.choose(&mut rand::thread_rng())
}
