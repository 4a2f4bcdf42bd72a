//! HTML views. Every function here maps already-loaded data to markup and
//! never touches the word store itself.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use crate::config::AppEnv;
use crate::models::{Stats, WordCollection, WordEntry, WordLists};
use crate::services::stats::{top_pos, OVERALL};
use crate::services::word_info::{category_info, pos_info};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7fafc; color: #2d3748; }
nav { padding: 1rem 2rem; background: #2d3748; }
nav a { color: #fff; margin-right: 1.5rem; text-decoration: none; }
main { max-width: 960px; margin: 0 auto; padding: 1rem 2rem; }
table { width: 100%; border-collapse: collapse; margin-bottom: 2rem; background: #fff; }
th, td { text-align: left; padding: .4rem .6rem; border-bottom: 1px solid #e2e8f0; }
.badge { display: inline-block; padding: .1rem .5rem; border-radius: .75rem; color: #fff; font-size: .8rem; }
.stats { display: flex; gap: 1rem; margin-bottom: 2rem; }
.stat { flex: 1; background: #fff; padding: 1rem; border-radius: .5rem; text-align: center; }
.stat strong { display: block; font-size: 2rem; }
.muted { color: #a0aec0; }
#card { width: 320px; height: 200px; margin: 2rem auto; perspective: 800px; cursor: pointer; }
#card .inner { position: relative; width: 100%; height: 100%; transition: transform .5s; transform-style: preserve-3d; }
#card.flipped .inner { transform: rotateY(180deg); }
#card .face { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center;
  justify-content: center; gap: .5rem; backface-visibility: hidden; background: #fff; border-radius: 1rem;
  box-shadow: 0 4px 12px rgba(0,0,0,.1); font-size: 1.75rem; }
#card .back { transform: rotateY(180deg); font-size: 1rem; }
.controls { text-align: center; }
"#;

const CARDS_SCRIPT: &str = r#"
const card = document.getElementById('card');
const front = document.getElementById('front-word');
const translation = document.getElementById('translation');
const pos = document.getElementById('pos');
const posDesc = document.getElementById('pos-desc');
const group = document.getElementById('group');
const total = document.getElementById('total');
const form = document.getElementById('deck-form');

let deck = [];
let position = 0;

function show(word, meaning, posBadge, groupBadge, counter) {
  card.classList.remove('flipped');
  front.textContent = word;
  translation.textContent = meaning || '';
  pos.textContent = posBadge.label;
  pos.style.background = posBadge.color;
  posDesc.textContent = posBadge.description || '';
  group.textContent = groupBadge.label;
  group.style.background = groupBadge.color;
  total.textContent = counter;
}

function showError(message) {
  card.classList.remove('flipped');
  front.textContent = message;
  total.textContent = '';
}

async function randomCard() {
  const res = await fetch('/api/random-card');
  const data = await res.json();
  if (!res.ok) {
    showError(data.error);
    return;
  }
  show(
    data.word,
    '',
    data.pos,
    { label: data.gender_or_group.icon + ' ' + data.gender_or_group.label, color: data.gender_or_group.color },
    data.total_cards + ' cards'
  );
}

function deckCard() {
  const c = deck[position];
  show(
    c.term,
    c.translation,
    { label: c.pos || '-', color: '#718096' },
    { label: c.category || '-', color: '#a0aec0' },
    (position + 1) + ' / ' + deck.length
  );
}

async function loadDeck(event) {
  event.preventDefault();
  const params = new URLSearchParams(new FormData(form));
  if (!params.get('category')) {
    params.delete('category');
  }
  const res = await fetch('/api/flashcards?' + params.toString());
  const data = await res.json();
  if (!res.ok) {
    deck = [];
    showError(data.error);
    return;
  }
  deck = data.cards;
  position = 0;
  if (deck.length === 0) {
    showError('No cards match');
    return;
  }
  deckCard();
}

function nextCard() {
  if (deck.length === 0) {
    randomCard();
    return;
  }
  position = (position + 1) % deck.length;
  deckCard();
}

card.addEventListener('click', () => card.classList.toggle('flipped'));
document.getElementById('next').addEventListener('click', nextCard);
form.addEventListener('submit', loadDeck);
randomCard();
"#;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Word list" }
                    a href="/cards" { "Flashcards" }
                }
                main { (body) }
            }
        }
    }
}

fn pos_badge(pos: Option<&str>) -> Markup {
    match pos {
        Some(pos) => {
            let info = pos_info(pos);
            html! {
                span.badge style={ "background:" (info.color) } title=(info.description) { (info.label) }
            }
        }
        None => html! { span.muted { "-" } },
    }
}

fn category_badge(category: Option<&str>) -> Markup {
    match category {
        Some(category) => {
            let info = category_info(category);
            html! {
                span.badge style={ "background:" (info.color) } { (info.icon) " " (info.label) }
            }
        }
        None => html! { span.muted { "-" } },
    }
}

fn word_row(entry: &WordEntry) -> Markup {
    html! {
        tr {
            td { strong { (entry.term) } }
            td {
                @if let Some(translation) = &entry.translation {
                    (translation)
                } @else {
                    span.muted { "-" }
                }
            }
            td { (pos_badge(entry.pos.as_deref())) }
            td { (category_badge(entry.category.as_deref())) }
        }
    }
}

fn word_table(title: &str, collection: &WordCollection) -> Markup {
    html! {
        h2 { (title) " (" (collection.len()) ")" }
        @if collection.is_empty() {
            p.muted { "No words in this list." }
        } @else {
            table {
                thead { tr { th { "Word" } th { "Translation" } th { "Type" } th { "Gender / group" } } }
                tbody {
                    @for entry in &collection.entries {
                        (word_row(entry))
                    }
                }
            }
        }
    }
}

fn stat_box(label: &str, value: usize) -> Markup {
    html! {
        div.stat { strong { (value) } (label) }
    }
}

/// Listing page: totals, the part-of-speech breakdown, and both word tables
pub fn index_page(lists: &WordLists, stats: &Stats, env: AppEnv) -> Markup {
    let count = |label: &str| stats.totals.get(label).copied().unwrap_or(0);
    let breakdown = top_pos(stats, &lists.known.label);

    layout("French words", html! {
        h1 { "French words" }
        div.stats {
            (stat_box("known", count(&lists.known.label)))
            (stat_box("missing", count(&lists.missing.label)))
            (stat_box("total", count(OVERALL)))
        }
        @if !breakdown.is_empty() {
            p {
                @for (pos, n) in &breakdown {
                    (pos_badge(Some(pos.as_str()))) " " (n) " "
                }
            }
        }
        (word_table("Known words", &lists.known))
        (word_table("Missing words", &lists.missing))
        p.muted {
            "Loaded " (lists.loaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            @if env != AppEnv::Production {
                " (" (env.to_string()) ")"
            }
        }
    })
}

/// Flashcard practice page. "Next" draws random known cards until a deck is
/// loaded from the selector, then steps through that deck.
pub fn cards_page() -> Markup {
    layout("Flashcards", html! {
        h1 { "Flashcards" }
        form.controls id="deck-form" {
            label {
                "Mode "
                select name="mode" {
                    @for mode in ["random", "sequential", "category"] {
                        option value=(mode) { (mode) }
                    }
                }
            }
            " "
            label { "Category " input name="category" type="text" placeholder="feminine, verb, ..."; }
            " "
            label {
                "List "
                select name="list" {
                    option value="known" { "known" }
                    option value="missing" { "missing" }
                }
            }
            " "
            button type="submit" { "Load deck" }
        }
        div id="card" {
            div.inner {
                div.face.front { span id="front-word" { "…" } }
                div.face.back {
                    strong id="translation" {}
                    span.badge id="pos" {}
                    span id="pos-desc" {}
                    span.badge id="group" {}
                }
            }
        }
        div.controls {
            button id="next" type="button" { "Next card" }
            p.muted id="total" {}
        }
        script { (PreEscaped(CARDS_SCRIPT)) }
    })
}
