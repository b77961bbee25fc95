use robots_vs_dinosaurs::compute::init_state;
use robots_vs_dinosaurs::entities::*;
use robots_vs_dinosaurs::sprite::{any_colliding, colliding, remove_indices, Rect};
use robots_vs_dinosaurs::{GameConfig, GameError};

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn tiers_follow_rows() {
    assert_eq!(Tier::for_row(0), Tier::Green);
    assert_eq!(Tier::for_row(1), Tier::Yellow);
    assert_eq!(Tier::for_row(2), Tier::Red);
    assert_eq!(Tier::for_row(9), Tier::Red);
}

#[test]
fn direction_steps() {
    assert_eq!(Direction::Right.step(), 1.0);
    assert_eq!(Direction::Left.step(), -1.0);
    assert_eq!(Direction::Static.step(), 0.0);
}

#[test]
fn status_terminality() {
    assert!(!GameStatus::Ongoing.is_terminal());
    assert!(GameStatus::Lost { score: 0 }.is_terminal());
    assert!(GameStatus::Cleared { score: 10 }.is_terminal());
}

// ── sprites ───────────────────────────────────────────────────────────────────

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(9.5, 9.5, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
}

#[test]
fn rect_anchors() {
    let c = Rect::from_center(10.0, 20.0, 4.0, 20.0);
    assert_eq!((c.x, c.y), (8.0, 10.0));
    let m = Rect::from_midbottom(300.0, 600.0, 48.0, 28.0);
    assert_eq!((m.left(), m.right(), m.top(), m.bottom()), (276.0, 324.0, 572.0, 600.0));
}

#[test]
fn group_queries_are_ordered_and_fresh() {
    let probe = Rect::new(5.0, 5.0, 10.0, 10.0);
    let mut group = vec![
        Block::new(0.0, 0.0),
        Block::new(100.0, 100.0),
        Block::new(12.0, 12.0),
    ];
    assert_eq!(colliding(&probe, &group), vec![0, 2]);
    assert!(any_colliding(&probe, &group));

    remove_indices(&mut group, &[0, 2]);
    assert_eq!(group, vec![Block::new(100.0, 100.0)]);
    assert!(colliding(&probe, &group).is_empty());
    assert!(!any_colliding(&probe, &group));
}

#[test]
fn remove_indices_walks_hits_in_order() {
    let mut group: Vec<usize> = (0..1000).collect();
    let hits: Vec<usize> = (0..1000).filter(|i| i % 3 == 0).collect();
    remove_indices(&mut group, &hits);
    assert_eq!(group.len(), 666);
    assert!(group.iter().all(|v| v % 3 != 0));

    let mut small = vec!['a', 'b', 'c', 'd'];
    remove_indices(&mut small, &[1, 1, 3, 7]);
    assert_eq!(small, vec!['a', 'c']);

    remove_indices(&mut small, &[]);
    assert_eq!(small, vec!['a', 'c']);
}

// ── entities ──────────────────────────────────────────────────────────────────

#[test]
fn dinosaur_takes_damage() {
    let mut d = Dinosaur::new(Tier::Red, 0.0, 0.0);
    d.get_damage(50);
    assert_eq!(d.current_health, 100);
    assert!(!d.is_dead());
    d.get_damage(100);
    assert!(d.is_dead());
}

#[test]
fn monster_spawns_outside_the_screen() {
    let left = Monster::new(Side::Left, 600.0);
    assert_eq!(left.rect.right(), -50.0);
    assert!(left.speed > 0.0);

    let right = Monster::new(Side::Right, 600.0);
    assert_eq!(right.rect.left(), 650.0);
    assert!(right.speed < 0.0);
}

#[test]
fn monster_dies_to_one_heavy_hit() {
    let mut m = Monster::new(Side::Left, 600.0);
    m.get_damage(100);
    assert!(m.is_dead());
}

#[test]
fn robot_shift_stays_on_screen() {
    let mut r = Robot::new(300.0, 600.0, 600.0);
    r.shift(-1000.0);
    assert_eq!(r.rect.left(), 0.0);
    r.shift(1000.0);
    assert_eq!(r.rect.right(), 600.0);
}

#[test]
fn laser_update_reports_off_screen() {
    let mut up = Laser::from_robot(10.0, -35.0); // top at -45
    assert!(!up.update(600.0));
    let mut down = Laser::from_dinosaur(10.0, 300.0);
    assert!(down.update(600.0));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        GameConfig { obstacle_amount: 0, ..GameConfig::default() },
        GameConfig { screen_width: 0.0, ..GameConfig::default() },
        GameConfig { dinosaur_cols: 10, ..GameConfig::default() },
        GameConfig { dinosaur_rows: 11, ..GameConfig::default() },
    ];
    for config in bad {
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
    let mut cloned = original.clone();

    cloned.robot.rect.x = 99.0;
    cloned.score = 999;
    cloned.dinosaurs.clear();

    assert_eq!(original.robot.rect.x, 276.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.dinosaurs.len(), 12);
}
