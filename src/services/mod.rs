pub mod flashcard;
pub mod stats;
pub mod word_info;
pub mod word_store;
