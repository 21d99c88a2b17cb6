// Depth-bounded move scoring and selection
//
// A recursive tree walk over candidate moves with in-place mark/restore
// on the shared grid. Rivals do not move during the walk; they are frozen
// obstacles, which keeps each turn's work a pure function of the snapshot
// and the shuffle seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::grid::{Cell, Grid};
use crate::types::{Board, Direction, Point, Snake};

/// Inputs that stay fixed for the whole turn's search
#[derive(Debug, Clone, Copy)]
pub struct TurnContext {
    /// True when food is worth chasing this turn: the board is contested
    /// (any other snake, or a larger-or-equal rival) or our health is low.
    pub food_valuable: bool,
}

impl TurnContext {
    pub fn new(board: &Board, you: &Snake, config: &Config) -> Self {
        let contested = board.snakes.len() > 1 || board.larger_rivals(you).next().is_some();
        let hungry = you.health < config.scores.low_health_threshold;
        TurnContext {
            food_valuable: contested || hungry,
        }
    }
}

/// Scores one candidate move from `position` at the given depth.
///
/// Leaving the board and colliding with a body are scored identically:
/// the collision penalty softened by depth, so running out of room later
/// beats running out of room now. Survivable cells accumulate a bonus
/// (danger, valuable food, edge proximity) and recurse; at the depth
/// cutoff the recursion is replaced by the local free-area estimate.
///
/// The grid is guaranteed to be bit-for-bit unchanged when this returns.
pub fn score_move(
    grid: &mut Grid,
    position: Point,
    direction: Direction,
    depth: i32,
    ctx: TurnContext,
    config: &Config,
) -> i32 {
    let scores = &config.scores;
    let candidate = direction.apply(&position);

    if !grid.in_bounds(candidate) {
        return scores.collision_penalty + scores.collision_depth_rebate * depth;
    }

    let state = grid.at(candidate);
    if state == Cell::Occupied {
        return scores.collision_penalty + scores.collision_depth_rebate * depth;
    }

    let mut bonus = 0;
    match state {
        Cell::Danger => bonus += scores.danger_penalty,
        Cell::Food if ctx.food_valuable => bonus += scores.food_bonus - depth,
        _ => {}
    }
    if candidate.x == 0 || candidate.x == grid.width() - 1 {
        bonus -= scores.edge_penalty;
    }
    if candidate.y == 0 || candidate.y == grid.height() - 1 {
        bonus -= scores.edge_penalty;
    }

    if depth >= config.search.max_depth {
        return grid.free_area(candidate, config.search.sample_half_width) + bonus;
    }

    // Mark, recurse over all four successors, restore. A single missed
    // restoration corrupts every sibling evaluation, so nothing between
    // the two set() calls is allowed to return early.
    grid.set(candidate, Cell::Occupied);
    let mut best = i32::MIN;
    for next in Direction::all() {
        best = best.max(score_move(grid, candidate, next, depth + 1, ctx, config));
    }
    grid.set(candidate, state);

    best + bonus
}

/// Scores all four moves from `head` in a freshly shuffled order and
/// returns them stable-sorted by descending score. Ties resolve to
/// whichever tied move was shuffled earliest.
pub fn rank_moves<R: Rng>(
    grid: &mut Grid,
    head: Point,
    ctx: TurnContext,
    config: &Config,
    rng: &mut R,
) -> Vec<(Direction, i32)> {
    let mut directions = Direction::all();
    directions.shuffle(rng);

    let mut ranked: Vec<(Direction, i32)> = directions
        .iter()
        .map(|&direction| (direction, score_move(grid, head, direction, 0, ctx, config)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Picks the best-scoring move from `head`. There is no "no legal move"
/// outcome; when every move is bad this still returns the least-bad one.
pub fn choose_move<R: Rng>(
    grid: &mut Grid,
    head: Point,
    ctx: TurnContext,
    config: &Config,
    rng: &mut R,
) -> Direction {
    rank_moves(grid, head, ctx, config, rng)[0].0
}
