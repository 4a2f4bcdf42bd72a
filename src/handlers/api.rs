use actix_web::{get, web, HttpResponse, Responder};
use log::{info, warn};
use crate::error::AppError;
use crate::models::{
    AppState, CategoryBadge, Flashcard, FlashcardQuery, FlashcardResponse, ListingResponse,
    PosBadge, RandomCardResponse,
};
use crate::services::flashcard::{self, FlashcardMode};
use crate::services::word_info::{category_info, pos_info};
use crate::utils::apply_limit;

const DEFAULT_LIST: &str = "known";

#[get("/api/words")]
pub async fn list_words(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ListingResponse {
        stats: &data.stats,
        known: &data.lists.known.entries,
        missing: &data.lists.missing.entries,
        loaded_at: data.lists.loaded_at,
    })
}

#[get("/api/stats")]
pub async fn get_stats(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.stats)
}

#[get("/api/flashcards")]
pub async fn flashcards(
    data: web::Data<AppState>,
    query: web::Query<FlashcardQuery>,
) -> Result<HttpResponse, AppError> {
    let list = query.list.as_deref().unwrap_or(DEFAULT_LIST);
    let collection = data.lists.get(list)
        .ok_or_else(|| AppError::UnknownList(list.to_string()))?;

    // Unrecognized modes are not a client error; practice continues in file order
    let mode = match query.mode.as_deref() {
        Some(raw) => FlashcardMode::parse(raw, query.category.as_deref()).unwrap_or_else(|e| {
            warn!("{}, falling back to {}", e, FlashcardMode::default());
            FlashcardMode::default()
        }),
        None => FlashcardMode::default(),
    };

    let selected = flashcard::select(collection, &mode);
    let total = selected.len();
    let cards: Vec<Flashcard> = apply_limit(selected, query.limit)
        .into_iter()
        .map(Flashcard::from)
        .collect();

    info!("Serving {} of {} {} flashcards ({})", cards.len(), total, collection.label, mode);

    Ok(HttpResponse::Ok().json(FlashcardResponse {
        mode: mode.name().to_string(),
        list: collection.label.clone(),
        total,
        cards,
    }))
}

#[get("/api/random-card")]
pub async fn random_card(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let known = &data.lists.known;
    let card = flashcard::random_card(known).ok_or(AppError::NoCards)?;

    let pos = card.pos.clone().unwrap_or_default();
    let pos_meta = pos_info(&pos);
    let group = card.category.clone().unwrap_or_default();
    let group_meta = category_info(&group);

    Ok(HttpResponse::Ok().json(RandomCardResponse {
        word: card.term.clone(),
        pos: PosBadge {
            text: pos,
            color: pos_meta.color,
            label: pos_meta.label,
            description: pos_meta.description,
        },
        gender_or_group: CategoryBadge {
            text: group,
            color: group_meta.color,
            label: group_meta.label,
            icon: group_meta.icon,
        },
        total_cards: known.len(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;
    use crate::handlers::{routes, testing::state};

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data(web::Data::new($state)).configure(routes)).await
        };
    }

    fn terms(body: &Value) -> Vec<String> {
        body["cards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["term"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_list_words() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/words").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["stats"]["totals"]["known"], 3);
        assert_eq!(body["stats"]["totals"]["missing"], 1);
        assert_eq!(body["stats"]["totals"]["overall"], 4);
        assert_eq!(body["known"][0]["term"], "chat");
        assert_eq!(body["known"][0]["translation"], "cat");
        assert_eq!(body["missing"][0]["term"], "pomme");
        assert!(body["loaded_at"].is_string());
    }

    #[actix_web::test]
    async fn test_stats() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totals"]["overall"], 4);
        assert_eq!(body["by_pos"]["known"]["noun"], 2);
    }

    #[actix_web::test]
    async fn test_flashcards_default_is_sequential() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/flashcards").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["mode"], "sequential");
        assert_eq!(body["list"], "known");
        assert_eq!(body["total"], 3);
        assert_eq!(terms(&body), vec!["chat", "chien", "aller"]);
        assert_eq!(body["cards"][0]["translation"], "cat");
    }

    #[actix_web::test]
    async fn test_flashcards_random_returns_all_cards() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/flashcards?mode=random").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["mode"], "random");
        let mut got = terms(&body);
        got.sort();
        assert_eq!(got, vec!["aller", "chat", "chien"]);
    }

    #[actix_web::test]
    async fn test_flashcards_category_and_limit() {
        let app = app!(state());
        let req = test::TestRequest::get()
            .uri("/api/flashcards?mode=category&category=noun&limit=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["mode"], "category");
        assert_eq!(body["total"], 2);
        assert_eq!(terms(&body), vec!["chat"]);
    }

    #[actix_web::test]
    async fn test_flashcards_unknown_mode_falls_back() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/flashcards?mode=backwards").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mode"], "sequential");
        assert_eq!(terms(&body), vec!["chat", "chien", "aller"]);
    }

    #[actix_web::test]
    async fn test_flashcards_bad_limit_is_json_error() {
        let app = app!(state());
        for uri in ["/api/flashcards?limit=abc", "/api/flashcards?limit=-1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");

            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].as_str().unwrap().starts_with("Invalid query: "));
        }
    }

    #[actix_web::test]
    async fn test_flashcards_missing_list() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/flashcards?list=missing").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["list"], "missing");
        assert_eq!(terms(&body), vec!["pomme"]);
    }

    #[actix_web::test]
    async fn test_flashcards_unknown_list_is_bad_request() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/flashcards?list=archived").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown word list: archived");
    }

    #[actix_web::test]
    async fn test_flashcards_empty_list() {
        let app = app!(crate::handlers::testing::empty_state());
        let req = test::TestRequest::get().uri("/api/flashcards?mode=random").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total"], 0);
        assert!(body["cards"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_random_card() {
        let app = app!(state());
        let req = test::TestRequest::get().uri("/api/random-card").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let word = body["word"].as_str().unwrap();
        assert!(["chat", "chien", "aller"].contains(&word));
        assert_eq!(body["total_cards"], 3);
        assert!(body["pos"]["color"].as_str().unwrap().starts_with('#'));
        assert!(body["gender_or_group"]["icon"].is_string());
    }

    #[actix_web::test]
    async fn test_random_card_empty_is_not_found() {
        let app = app!(crate::handlers::testing::empty_state());
        let req = test::TestRequest::get().uri("/api/random-card").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No cards available");
    }
}
