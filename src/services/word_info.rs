use crate::utils::title_case;

/// Display metadata for a part of speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosInfo {
    pub color: &'static str,
    pub label: String,
    pub description: &'static str,
}

/// Display metadata for a noun gender or verb group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub color: &'static str,
    pub label: String,
    pub icon: &'static str,
}

const DEFAULT_POS_COLOR: &str = "#718096";
const DEFAULT_CATEGORY_COLOR: &str = "#a0aec0";

/// Colour, label and description for a part of speech
pub fn pos_info(pos: &str) -> PosInfo {
    let (color, label, description) = match pos.trim().to_lowercase().as_str() {
        "verb" => ("#667eea", "Verb", "Action or state word"),
        "noun" => ("#f093fb", "Noun", "Person, place, or thing"),
        "adjective" => ("#4fd1c5", "Adjective", "Describes a noun"),
        "adverb" => ("#fbd38d", "Adverb", "Modifies a verb or adjective"),
        "pronoun" => ("#fc8181", "Pronoun", "Replaces a noun"),
        "preposition" => ("#9f7aea", "Preposition", "Shows relationship between words"),
        "conjunction" => ("#ed8936", "Conjunction", "Connects words or phrases"),
        "interjection" => ("#f56565", "Interjection", "Expresses emotion"),
        "article" => ("#48bb78", "Article", "Defines a noun (the, a, an)"),
        _ => {
            return PosInfo {
                color: DEFAULT_POS_COLOR,
                label: title_case(pos),
                description: "Word type",
            }
        }
    };

    PosInfo { color, label: label.to_string(), description }
}

/// Colour, label and icon for a noun gender or verb group
pub fn category_info(category: &str) -> CategoryInfo {
    let (color, label, icon) = match category.trim().to_lowercase().as_str() {
        "masculine" => ("#4299e1", "Masculine", "♂"),
        "feminine" => ("#ed64a6", "Feminine", "♀"),
        "1st group" => ("#38b2ac", "1st Group", "①"),
        "2nd group" => ("#9f7aea", "2nd Group", "②"),
        "3rd group" => ("#ed8936", "3rd Group", "③"),
        _ => {
            return CategoryInfo {
                color: DEFAULT_CATEGORY_COLOR,
                label: title_case(category),
                icon: "•",
            }
        }
    };

    CategoryInfo { color, label: label.to_string(), icon }
}
