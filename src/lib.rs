// Library exports for the chartreuse Battlesnake
// This keeps the decision engine usable from integration tests without
// going through the HTTP layer

pub mod bot;
pub mod config;
pub mod decision_log;
pub mod grid;
pub mod search;
pub mod types;
