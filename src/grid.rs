// Per-turn occupancy grid
//
// Built fresh from every move request and dropped with it; nothing here
// survives across turns. The scorer mutates the grid in place during its
// recursion, so a grid must never be shared between concurrent requests.

use crate::types::{Board, Direction, Point, Snake};

/// State of a single board cell. Every in-bounds cell holds exactly one
/// of these at any instant during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Occupied,
    Danger,
}

/// Height x width cell matrix, indexed [y][x]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds the grid for one turn: all cells empty, then every body
    /// segment of every snake marked occupied, then every food point
    /// marked food. The two passes are sequential on purpose; a food
    /// point sharing a cell with a body ends up recorded as food.
    /// Snapshot points are trusted to be in bounds.
    pub fn from_snapshot(board: &Board) -> Self {
        let width = board.width as i32;
        let height = board.height as i32;
        let mut grid = Grid {
            width,
            height,
            cells: vec![vec![Cell::Empty; width as usize]; height as usize],
        };

        for snake in &board.snakes {
            for segment in &snake.body {
                grid.set(*segment, Cell::Occupied);
            }
        }
        for food in &board.food {
            grid.set(*food, Cell::Food);
        }

        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Cell state at `point`. The caller guarantees the point is in
    /// bounds; violating that is a bug in the caller, not a recoverable
    /// condition.
    pub fn at(&self, point: Point) -> Cell {
        self.cells[point.y as usize][point.x as usize]
    }

    pub fn set(&mut self, point: Point, cell: Cell) {
        self.cells[point.y as usize][point.x as usize] = cell;
    }

    /// Marks every in-bounds, non-occupied cell one step from the head of
    /// each larger-or-equal rival as danger. A rival that size wins any
    /// collision there next turn, so food on such a cell is not worth
    /// pursuing: danger overwrites food.
    pub fn project_threats(&mut self, board: &Board, you: &Snake) {
        for rival in board.larger_rivals(you) {
            let head = match rival.head() {
                Some(head) => head,
                None => continue,
            };
            for direction in Direction::all() {
                let reach = direction.apply(&head);
                if self.in_bounds(reach) && self.at(reach) != Cell::Occupied {
                    self.set(reach, Cell::Danger);
                }
            }
        }
    }

    /// Count of non-occupied cells in the square of the given half-width
    /// around `center`, clipped to board bounds. A cheap stand-in for
    /// escape room at the search horizon; it deliberately ignores food
    /// and danger marks.
    pub fn free_area(&self, center: Point, half_width: i32) -> i32 {
        let mut free = 0;
        for y in (center.y - half_width)..=(center.y + half_width) {
            for x in (center.x - half_width)..=(center.x + half_width) {
                let point = Point { x, y };
                if self.in_bounds(point) && self.at(point) != Cell::Occupied {
                    free += 1;
                }
            }
        }
        free
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(id: &str, health: i32, body: Vec<Point>) -> Snake {
        Snake {
            id: id.to_string(),
            name: id.to_string(),
            health,
            body,
        }
    }

    fn point(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_empty_snapshot_builds_all_empty() {
        let board = Board {
            height: 3,
            width: 4,
            snakes: vec![],
            food: vec![],
        };
        let grid = Grid::from_snapshot(&board);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.at(point(x, y)), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_bodies_marked_occupied() {
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![snake("a", 100, vec![point(1, 1), point(1, 2), point(2, 2)])],
            food: vec![],
        };
        let grid = Grid::from_snapshot(&board);
        assert_eq!(grid.at(point(1, 1)), Cell::Occupied);
        assert_eq!(grid.at(point(1, 2)), Cell::Occupied);
        assert_eq!(grid.at(point(2, 2)), Cell::Occupied);
        assert_eq!(grid.at(point(0, 0)), Cell::Empty);
    }

    #[test]
    fn test_food_applied_after_bodies() {
        // Bodies first, food second: a food point on a body cell ends up
        // recorded as food. The write order is part of the contract.
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![snake("a", 100, vec![point(2, 2)])],
            food: vec![point(2, 2), point(4, 4)],
        };
        let grid = Grid::from_snapshot(&board);
        assert_eq!(grid.at(point(2, 2)), Cell::Food);
        assert_eq!(grid.at(point(4, 4)), Cell::Food);
    }

    #[test]
    fn test_threats_projected_around_larger_rival_head() {
        let you = snake("me", 100, vec![point(0, 0)]);
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![
                you.clone(),
                snake("rival", 100, vec![point(2, 2), point(2, 3)]),
            ],
            food: vec![],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);

        assert_eq!(grid.at(point(2, 1)), Cell::Danger);
        assert_eq!(grid.at(point(1, 2)), Cell::Danger);
        assert_eq!(grid.at(point(3, 2)), Cell::Danger);
        // Occupied by the rival's own neck; never downgraded to danger.
        assert_eq!(grid.at(point(2, 3)), Cell::Occupied);
    }

    #[test]
    fn test_danger_overwrites_food() {
        let you = snake("me", 100, vec![point(0, 0)]);
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![you.clone(), snake("rival", 100, vec![point(2, 2)])],
            food: vec![point(2, 1)],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);
        assert_eq!(grid.at(point(2, 1)), Cell::Danger);
    }

    #[test]
    fn test_smaller_rival_projects_nothing() {
        let you = snake("me", 100, vec![point(0, 0), point(0, 1), point(0, 2)]);
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![you.clone(), snake("rival", 100, vec![point(2, 2)])],
            food: vec![],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);
        assert_eq!(grid.at(point(2, 1)), Cell::Empty);
        assert_eq!(grid.at(point(1, 2)), Cell::Empty);
    }

    #[test]
    fn test_own_head_is_not_a_threat() {
        // Self is excluded from rival classification by identifier match,
        // even though it trivially ties itself on length.
        let you = snake("me", 100, vec![point(2, 2)]);
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![you.clone()],
            food: vec![],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);
        assert_eq!(grid.at(point(2, 1)), Cell::Empty);
        assert_eq!(grid.at(point(1, 2)), Cell::Empty);
    }

    #[test]
    fn test_threat_projection_clips_at_board_edge() {
        let you = snake("me", 100, vec![point(4, 4)]);
        let board = Board {
            height: 5,
            width: 5,
            snakes: vec![you.clone(), snake("rival", 100, vec![point(0, 0)])],
            food: vec![],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);
        // Only the two in-bounds neighbors are marked.
        assert_eq!(grid.at(point(1, 0)), Cell::Danger);
        assert_eq!(grid.at(point(0, 1)), Cell::Danger);
    }

    #[test]
    fn test_free_area_open_center() {
        let board = Board {
            height: 7,
            width: 7,
            snakes: vec![],
            food: vec![],
        };
        let grid = Grid::from_snapshot(&board);
        assert_eq!(grid.free_area(point(3, 3), 2), 25);
    }

    #[test]
    fn test_free_area_clipped_at_corner() {
        let board = Board {
            height: 7,
            width: 7,
            snakes: vec![],
            food: vec![],
        };
        let grid = Grid::from_snapshot(&board);
        // 3x3 window survives the clip at (0,0).
        assert_eq!(grid.free_area(point(0, 0), 2), 9);
    }

    #[test]
    fn test_free_area_ignores_food_and_danger() {
        let you = snake("me", 100, vec![point(6, 6)]);
        let board = Board {
            height: 7,
            width: 7,
            snakes: vec![
                you.clone(),
                snake("rival", 100, vec![point(3, 3), point(3, 4)]),
            ],
            food: vec![point(2, 2)],
        };
        let mut grid = Grid::from_snapshot(&board);
        grid.project_threats(&board, &you);
        // Two occupied segments are excluded; food and danger still count
        // as free space at the horizon.
        assert_eq!(grid.free_area(point(3, 3), 2), 23);
    }
}
