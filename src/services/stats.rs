use crate::models::{Stats, WordCollection};

pub const OVERALL: &str = "overall";
const UNKNOWN_POS: &str = "unknown";
const NO_CATEGORY: &str = "none";

/// Count entries per collection, per part of speech and per category
pub fn compute<'a, I>(collections: I) -> Stats
where
    I: IntoIterator<Item = &'a WordCollection>,
{
    let mut stats = Stats::default();
    let mut overall = 0;

    for coll in collections {
        *stats.totals.entry(coll.label.clone()).or_insert(0) += coll.len();
        overall += coll.len();

        let by_pos = stats.by_pos.entry(coll.label.clone()).or_default();
        let by_category = stats.by_category.entry(coll.label.clone()).or_default();

        for entry in &coll.entries {
            let pos = entry.pos.as_deref().unwrap_or(UNKNOWN_POS).to_lowercase();
            *by_pos.entry(pos).or_insert(0) += 1;

            let category = entry.category.as_deref().unwrap_or(NO_CATEGORY).to_lowercase();
            *by_category.entry(category).or_insert(0) += 1;
        }
    }

    stats.totals.insert(OVERALL.to_string(), overall);
    stats
}

/// Tally of a single collection's parts of speech, most common first
pub fn top_pos(stats: &Stats, label: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = stats
        .by_pos
        .get(label)
        .map(|m| m.iter().map(|(k, v)| (k.clone(), *v)).collect())
        .unwrap_or_default();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
