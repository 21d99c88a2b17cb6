#[macro_use]
extern crate rocket;

use log::info;
use rocket::fairing::AdHoc;
use std::env;

use chartreuse_snake::bot::Bot;
use chartreuse_snake::config::Config;

mod handler;

#[launch]
fn rocket() -> _ {
    // The game host reaches us on the port named by the `PORT` environment
    // variable. Rocket looks at `ROCKET_PORT` instead, so bridge the two;
    // 9001 is the historical default for this snake.
    let port = env::var("PORT").unwrap_or_else(|_| "9001".to_string());
    env::set_var("ROCKET_PORT", &port);

    // We default to 'info' level logging. But if the `RUST_LOG` environment
    // variable is set, we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Battlesnake Server on port {}...", port);

    // Load configuration once at startup
    let config = Config::load_or_default();
    let bot = Bot::new(config);

    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/chartreuse-snake");
            })
        }))
        .mount(
            "/",
            routes![handler::start, handler::get_move, handler::end, handler::ping],
        )
}
