//! Single binary JSON server hosting one court-rotation session.
//! Run with: cargo run --bin web
//! Settings come from env: HOST, PORT, COURT_COUNT, TICK_SECS, DATA_FILE, ADMIN_TOKEN.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use court_rotation::config::Settings;
use court_rotation::{
    complete_match, fill_courts, ticker, writer, JsonFileRepository, PlayerId, PlayerRepository,
    RosterEntry, Session, Zone,
};
use serde::Deserialize;
use std::sync::{Arc, RwLock};

/// The one session, shared by all handlers and the ticker.
type AppState = Data<RwLock<Session>>;

/// Admin token for privileged routes (None = open).
struct AdminToken(Option<String>);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CourtCountBody {
    count: i64,
}

#[derive(Deserialize)]
struct CompleteMatchBody {
    winning_team: u8,
}

#[derive(Deserialize)]
struct MoveBody {
    zone: Zone,
}

#[derive(Deserialize)]
struct RatingBody {
    rating: i32,
}

/// Path segment: court index (e.g. /api/courts/{index}/complete)
#[derive(Deserialize)]
struct CourtPath {
    index: usize,
}

/// Path segment: player id (e.g. /api/players/{id}/zone)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "court-rotation",
    })
}

/// Current courts, pools and roster.
#[get("/api/session")]
async fn api_get_session(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.snapshot()),
        Err(_) => lock_error(),
    }
}

/// Replace the roster; everyone starts in Waiting.
#[put("/api/roster")]
async fn api_ingest_roster(state: AppState, body: Json<Vec<RosterEntry>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.ingest_roster(body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(g.snapshot()),
        Err(e) => bad_request(e),
    }
}

/// Recently finished matches, oldest first.
#[get("/api/history")]
async fn api_get_history(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.history()),
        Err(_) => lock_error(),
    }
}

/// Fill all empty courts from Waiting.
#[post("/api/courts/allocate")]
async fn api_allocate(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let formed = fill_courts(&mut g);
    log::debug!("Allocation formed {} courts", formed);
    HttpResponse::Ok().json(g.snapshot())
}

/// Set the number of courts (minimum 1).
#[put("/api/courts/count")]
async fn api_set_court_count(state: AppState, body: Json<CourtCountBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.set_court_count(usize::try_from(body.count.max(1)).unwrap_or(1));
    HttpResponse::Ok().json(g.snapshot())
}

/// Record the winner on a court and rotate.
#[post("/api/courts/{index}/complete")]
async fn api_complete_match(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<CompleteMatchBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match complete_match(&mut g, path.index, body.winning_team) {
        Ok(record) => HttpResponse::Ok().json(serde_json::json!({
            "match": record,
            "session": g.snapshot(),
        })),
        Err(e) => bad_request(e),
    }
}

/// Move a player between Waiting and Resting.
#[put("/api/players/{id}/zone")]
async fn api_move_player(state: AppState, path: Path<PlayerPath>, body: Json<MoveBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.move_player(path.id, body.zone) {
        Ok(()) => HttpResponse::Ok().json(g.snapshot()),
        Err(e) => bad_request(e),
    }
}

/// Privileged: set a player's rating directly.
#[put("/api/players/{id}/rating")]
async fn api_override_rating(
    state: AppState,
    admin: Data<AdminToken>,
    req: HttpRequest,
    path: Path<PlayerPath>,
    body: Json<RatingBody>,
) -> HttpResponse {
    if let Some(expected) = &admin.0 {
        let given = req
            .headers()
            .get("X-Admin-Token")
            .and_then(|v| v.to_str().ok());
        if given != Some(expected.as_str()) {
            return HttpResponse::Forbidden().json(serde_json::json!({ "error": "Admin token required" }));
        }
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.override_rating(path.id, body.rating) {
        Ok(()) => HttpResponse::Ok().json(g.snapshot()),
        Err(e) => bad_request(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    let repository = JsonFileRepository::new(&settings.data_file);
    let saved = match repository.load() {
        Ok(players) => players,
        Err(e) => {
            log::error!("Could not load {}: {}", settings.data_file.display(), e);
            Vec::new()
        }
    };
    let (roster_writer, writer_task) = writer::spawn(repository);
    let mut session = Session::new(settings.court_count, roster_writer);
    if !saved.is_empty() {
        if let Err(e) = session.restore_roster(saved) {
            log::error!("Ignoring saved roster in {}: {}", settings.data_file.display(), e);
        }
    }

    let shared = Arc::new(RwLock::new(session));
    let ticker = ticker::spawn(shared.clone(), settings.tick_interval);
    let state: AppState = Data::from(shared);
    let admin = Data::new(AdminToken(settings.admin_token.clone()));

    let bind = (settings.host.clone(), settings.port);
    log::info!(
        "Starting server at http://{}:{} with {} court(s)",
        bind.0,
        bind.1,
        settings.court_count
    );

    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(admin.clone())
            .service(api_health)
            .service(api_get_session)
            .service(api_ingest_roster)
            .service(api_get_history)
            .service(api_allocate)
            .service(api_set_court_count)
            .service(api_complete_match)
            .service(api_move_player)
            .service(api_override_rating)
    })
    .bind(bind)?
    .run()
    .await;

    ticker.stop().await;
    writer_task.stop().await;
    result
}
