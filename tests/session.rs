//! Session lifecycle and frame output as seen by a host

use bubble_pop::Session;
use bubble_pop::Tuning;
use bubble_pop::render::{DrawOp, RecordingSurface};
use bubble_pop::sim::GameEvent;

fn surface() -> RecordingSurface {
    RecordingSurface::new(600.0, 450.0)
}

#[test]
fn test_start_run_stop() {
    let mut session = Session::new(Tuning::default());
    let mut s = surface();

    assert!(session.run(0.0, &mut s).is_none());
    assert!(session.start(0.0, 600.0, 450.0));
    assert!(!session.start(1.0, 600.0, 450.0));

    assert!(session.run(16.0, &mut s).is_some());
    assert!(!s.ops.is_empty());
    assert_eq!(session.game().unwrap().ticks(), 1);

    assert!(session.stop());
    s.reset();
    assert!(session.run(32.0, &mut s).is_none());
    assert!(s.ops.is_empty());
    assert!(!session.stop());
}

#[test]
fn test_restart_from_stopped_and_running() {
    let mut session = Session::new(Tuning::default());
    session.restart(0.0, 600.0, 450.0);
    assert!(session.is_running());

    let mut s = surface();
    for i in 1..=10 {
        session.run(i as f64 * 16.0, &mut s);
    }
    session.restart(500.0, 600.0, 450.0);
    let game = session.game().unwrap();
    assert_eq!(game.ticks(), 0);
    assert_eq!(game.player.position.x, 300.0);
}

#[test]
fn test_frame_draw_order() {
    let mut session = Session::new(Tuning::default());
    session.start(0.0, 600.0, 450.0);
    session.key_down("ArrowUp");
    let mut s = surface();
    session.run(16.0, &mut s);

    let at = |pred: &dyn Fn(&DrawOp) -> bool| s.ops.iter().position(|op| pred(op)).unwrap();
    let clear = at(&|op| matches!(op, DrawOp::ClearRect { .. }));
    let bullet = at(&|op| *op == DrawOp::LineWidth(1.0));
    let player = at(&|op| *op == DrawOp::Fill);
    let bubble = at(&|op| matches!(op, DrawOp::Arc { .. }));
    let ground = at(&|op| matches!(op, DrawOp::FillRect { y, .. } if *y == 425.0));
    let roof = at(&|op| matches!(op, DrawOp::FillRect { y, h, .. } if *y == 0.0 && *h == 25.0));

    assert_eq!(clear, 0);
    assert!(bullet < player);
    assert!(player < bubble);
    assert!(bubble < ground);
    assert!(ground < roof);
}

#[test]
fn test_canvas_resize_followed_each_tick() {
    let mut session = Session::new(Tuning::default());
    session.start(0.0, 600.0, 450.0);
    let mut s = RecordingSurface::new(800.0, 500.0);
    session.run(16.0, &mut s);

    let game = session.game().unwrap();
    assert_eq!(game.world.width, 800.0);
    assert_eq!(game.world.ground_y(), 475.0);
    assert_eq!(
        s.ops[0],
        DrawOp::ClearRect {
            x: 0.0,
            y: 0.0,
            w: 800.0,
            h: 500.0
        }
    );
}

#[test]
fn test_events_drained_per_tick() {
    let mut session = Session::new(Tuning::default());
    session.start(0.0, 600.0, 450.0);
    session.key_down("w");
    let mut s = surface();

    let first = session.run(16.0, &mut s).unwrap();
    assert!(first.contains(&GameEvent::BulletFired));
    let second = session.run(32.0, &mut s).unwrap();
    assert!(!second.contains(&GameEvent::BulletFired));
}

#[test]
fn test_held_keys_move_player() {
    let mut session = Session::new(Tuning::default());
    session.start(0.0, 600.0, 450.0);
    let mut s = surface();

    session.key_down("d");
    session.run(100.0, &mut s);
    let x = session.game().unwrap().player.position.x;
    assert!((x - 310.0).abs() < 1e-9);

    // A stale release of the opposite key keeps the player moving
    session.key_up("a");
    session.run(200.0, &mut s);
    let x = session.game().unwrap().player.position.x;
    assert!((x - 320.0).abs() < 1e-9);

    session.key_up("d");
    session.run(300.0, &mut s);
    let x = session.game().unwrap().player.position.x;
    assert!((x - 320.0).abs() < 1e-9);
}

#[test]
fn test_same_inputs_same_frames() {
    let frames = || {
        let mut session = Session::new(Tuning::default());
        session.start(0.0, 600.0, 450.0);
        let mut s = surface();
        for i in 1..=50 {
            if i == 5 {
                session.key_down("w");
            }
            session.run(i as f64 * 16.0, &mut s);
        }
        s.ops
    };
    assert_eq!(frames(), frames());
}
