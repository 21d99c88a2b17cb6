// HTTP handler bindings for the legacy Battlesnake API endpoints
//
// Thin wrappers binding Rocket routes to the Bot. The wire format is the
// 2018-era protocol: /start returns a display color, /move returns the
// chosen direction, /end and /ping are bare acknowledgements.

use rocket::serde::json::Json;
use serde_json::{json, Value};

use chartreuse_snake::bot::Bot;
use chartreuse_snake::types::GameState;

/// POST /start endpoint
/// Called when a game starts; the response carries our display color
#[post("/start", format = "json", data = "<_start_req>")]
pub fn start(bot: &rocket::State<Bot>, _start_req: Json<Value>) -> Json<Value> {
    bot.start();
    Json(json!({ "color": bot.color() }))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub fn get_move(bot: &rocket::State<Bot>, move_req: Json<GameState>) -> Json<Value> {
    let direction = bot.get_move(&move_req);
    Json(json!({ "move": direction }))
}

/// POST /end endpoint
/// Called when a game ends; acknowledgement only
#[post("/end", format = "json", data = "<_end_req>")]
pub fn end(bot: &rocket::State<Bot>, _end_req: Json<Value>) -> Json<Value> {
    bot.end();
    Json(json!({}))
}

/// POST /ping endpoint
/// Used by the game host to check that this snake is still alive
#[post("/ping")]
pub fn ping() -> Json<Value> {
    Json(json!({}))
}
