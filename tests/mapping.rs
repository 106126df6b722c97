#![cfg(feature = "host")]
#![allow(missing_docs, reason = "integration tests")]
//! Host-level tests for panel wiring layouts.

use rainbow_panel::led2d::{Frame2d, LedLayout};
use smart_leds::RGB8;

// 3 wide, 2 tall, wired down column 0, up column 1, down column 2.
const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major();

#[test]
fn linear_layouts_follow_the_strip() {
    const ROW: LedLayout<4, 4, 1> = LedLayout::linear_h();
    const COLUMN: LedLayout<3, 1, 3> = LedLayout::linear_v();
    assert_eq!(ROW.index_to_xy(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(COLUMN.index_to_xy(), &[(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn serpentine_column_major_snakes_vertically() {
    assert_eq!(
        SERPENTINE.index_to_xy(),
        &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]
    );
}

#[test]
fn serpentine_row_major_snakes_horizontally() {
    const ROWS: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        ROWS.index_to_xy(),
        &[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn rotations_and_flips_move_cells() {
    assert_eq!(
        *SERPENTINE.rotate_cw().index_to_xy(),
        [(1, 0), (0, 0), (0, 1), (1, 1), (1, 2), (0, 2)]
    );
    assert_eq!(
        *SERPENTINE.rotate_ccw().index_to_xy(),
        [(0, 2), (1, 2), (1, 1), (0, 1), (0, 0), (1, 0)]
    );
    assert_eq!(
        *SERPENTINE.rotate_180().index_to_xy(),
        [(2, 1), (2, 0), (1, 0), (1, 1), (0, 1), (0, 0)]
    );
    assert_eq!(
        *SERPENTINE.flip_h().index_to_xy(),
        [(2, 0), (2, 1), (1, 1), (1, 0), (0, 0), (0, 1)]
    );
    assert_eq!(
        *SERPENTINE.flip_v().index_to_xy(),
        [(0, 1), (0, 0), (1, 0), (1, 1), (2, 1), (2, 0)]
    );
}

#[test]
fn four_quarter_turns_are_identity() {
    let turned = SERPENTINE.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
    assert_eq!(turned, SERPENTINE);
    assert_eq!(SERPENTINE.rotate_cw().rotate_ccw(), SERPENTINE);
}

#[test]
fn combine_places_second_panel_after_the_first() {
    let wide = SERPENTINE.combine_h::<6, 12, 3, 6>(SERPENTINE);
    assert_eq!(wide.index_to_xy()[6..], [(3, 0), (3, 1), (4, 1), (4, 0), (5, 0), (5, 1)]);

    let tall = SERPENTINE.combine_v::<6, 12, 2, 4>(SERPENTINE);
    assert_eq!(
        *tall.index_to_xy(),
        [
            (0, 0),
            (0, 1),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (1, 2),
            (2, 2),
            (2, 3),
        ]
    );
}

#[test]
fn xy_to_index_inverts_the_layout() {
    let inverse = SERPENTINE.xy_to_index();
    for (led_index, &(x_index, y_index)) in SERPENTINE.index_to_xy().iter().enumerate() {
        let cell = usize::from(y_index) * 3 + usize::from(x_index);
        assert_eq!(usize::from(inverse[cell]), led_index);
    }
}

#[test]
fn frame_to_strip_uses_physical_order() {
    let mut frame = Frame2d::<3, 2>::new();
    frame[(1, 0)] = RGB8::new(1, 2, 3);
    frame[(2, 1)] = RGB8::new(4, 5, 6);

    let strip = frame.to_strip(&SERPENTINE);

    // (1, 0) is LED 3 and (2, 1) is LED 5 on the snake.
    assert_eq!(strip[3], RGB8::new(1, 2, 3));
    assert_eq!(strip[5], RGB8::new(4, 5, 6));
    assert_eq!(strip.iter().filter(|&&led| led != RGB8::default()).count(), 2);
}

#[test]
#[should_panic(expected = "two LEDs map to the same cell")]
fn layout_rejects_shared_cells() {
    let _ = LedLayout::<4, 2, 2>::new([(0, 0), (1, 0), (1, 1), (1, 0)]);
}

#[test]
#[should_panic(expected = "x coordinate out of bounds")]
fn layout_rejects_cells_past_the_right_edge() {
    let _ = LedLayout::<4, 2, 2>::new([(0, 0), (0, 1), (2, 1), (1, 0)]);
}

#[test]
#[should_panic(expected = "W * H must equal N")]
fn layout_rejects_wrong_led_count() {
    let _ = LedLayout::<3, 2, 2>::new([(0, 0), (1, 0), (0, 1)]);
}
