mod harness;

use ::common::{render_game, Direction, DrawSurface, GameState, Palette};
use harness::*;

#[derive(Debug, Clone, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: String,
}

#[derive(Default)]
struct RecordingSurface {
    rects: Vec<Rect>,
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.rects.push(Rect { x, y, w: width, h: height, color: color.to_string() });
    }
}

fn rect(x: f64, y: f64, w: f64, h: f64, color: &str) -> Rect {
    Rect { x, y, w, h, color: color.to_string() }
}

#[test]
fn test_draw_order_and_insets() {
    let cells = body(&[(10, 10), (9, 10)]);
    let state = GameState::from_parts(20, cells, Direction::Right, pos(15, 10)).unwrap();
    let palette = Palette::default();
    let mut surface = RecordingSurface::default();

    render_game(&state, 20.0, &palette, &mut surface);
    let rects = surface.rects;

    // background + 4 wall cells per ring index + food + two segments
    assert_eq!(rects.len(), 1 + 4 * 20 + 1 + 2);
    assert_eq!(rects[0], rect(0.0, 0.0, 400.0, 400.0, "#0f172a"));
    assert!(rects[1..81].iter().all(|r| r.color == "#64748b" && r.w == 20.0 && r.h == 20.0));
    assert_eq!(rects[81], rect(300.0, 200.0, 20.0, 20.0, "#ef4444"));
    // Head inset by 2, body by 4
    assert_eq!(rects[82], rect(202.0, 202.0, 16.0, 16.0, "#22c55e"));
    assert_eq!(rects[83], rect(184.0, 204.0, 12.0, 12.0, "#22c55e"));
}

#[test]
fn test_wall_ring_covers_the_border() {
    let state = GameState::from_parts(4, body(&[(1, 1)]), Direction::Right, pos(2, 2)).unwrap();
    let mut surface = RecordingSurface::default();
    render_game(&state, 10.0, &Palette::default(), &mut surface);

    let mut walls: Vec<(i32, i32)> = surface
        .rects
        .iter()
        .filter(|r| r.color == "#64748b")
        .map(|r| ((r.x / 10.0) as i32, (r.y / 10.0) as i32))
        .collect();
    walls.sort();
    walls.dedup();

    let mut expected = Vec::new();
    for x in 0..4 {
        for y in 0..4 {
            if x == 0 || y == 0 || x == 3 || y == 3 {
                expected.push((x, y));
            }
        }
    }
    expected.sort();
    assert_eq!(walls, expected);
}

#[test]
fn test_rendering_is_a_pure_function_of_state() {
    let cells = body(&[(3, 3), (2, 3), (2, 2)]);
    let state = GameState::from_parts(6, cells, Direction::Right, pos(4, 4)).unwrap();
    let palette = Palette { snake: "lime".to_string(), ..Palette::default() };

    let mut first = RecordingSurface::default();
    let mut second = RecordingSurface::default();
    render_game(&state, 12.0, &palette, &mut first);
    render_game(&state, 12.0, &palette, &mut second);

    assert_eq!(first.rects, second.rects);
    assert_eq!(first.rects.last().map(|r| r.color.as_str()), Some("lime"));
}
