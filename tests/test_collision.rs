use robots_vs_dinosaurs::collision::*;
use robots_vs_dinosaurs::compute::init_state;
use robots_vs_dinosaurs::entities::*;
use robots_vs_dinosaurs::GameConfig;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default field emptied of dinosaurs and cover, with one far-away dinosaur
/// so resolution does not report a cleared formation.
fn make_state() -> GameState {
    let mut s = init_state(GameConfig::default(), &mut StdRng::seed_from_u64(42)).unwrap();
    s.dinosaurs.clear();
    s.blocks.clear();
    s.dinosaurs.push(Dinosaur::new(Tier::Red, 10.0, 10.0));
    s
}

fn robot_centre(s: &GameState) -> (f32, f32) {
    s.robot.rect.center()
}

// ── robot lasers ──────────────────────────────────────────────────────────────

#[test]
fn robot_laser_destroys_block_and_itself() {
    let mut s = make_state();
    s.blocks.push(Block::new(200.0, 300.0));
    s.blocks.push(Block::new(400.0, 300.0));
    s.robot.lasers.push(Laser::from_robot(203.0, 303.0));

    let status = collision_checks(&mut s);

    assert_eq!(status, GameStatus::Ongoing);
    assert!(s.robot.lasers.is_empty());
    assert_eq!(s.blocks, vec![Block::new(400.0, 300.0)]);
    assert_eq!(s.score, 0);
}

#[test]
fn block_shields_dinosaur_behind_it() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Green, 100.0, 100.0));
    s.blocks.push(Block::new(118.0, 110.0));
    s.robot.lasers.push(Laser::from_robot(120.0, 115.0));

    resolve_robot_lasers(&mut s);

    assert!(s.blocks.is_empty());
    assert_eq!(s.dinosaurs.len(), 2);
    assert_eq!(s.dinosaurs[1].current_health, 50);
    assert_eq!(s.score, 0);
}

#[test]
fn green_dinosaur_dies_in_one_hit() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Green, 100.0, 100.0));
    s.robot.lasers.push(Laser::from_robot(120.0, 115.0));

    resolve_robot_lasers(&mut s);

    assert_eq!(s.dinosaurs.len(), 1);
    assert_eq!(s.score, 300);
    assert!(s.robot.lasers.is_empty());
}

#[test]
fn yellow_and_red_dinosaurs_lose_fifty_per_hit() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Yellow, 100.0, 100.0));
    s.dinosaurs.push(Dinosaur::new(Tier::Red, 300.0, 100.0));
    s.robot.lasers.push(Laser::from_robot(120.0, 115.0));
    s.robot.lasers.push(Laser::from_robot(320.0, 115.0));

    resolve_robot_lasers(&mut s);

    assert_eq!(s.dinosaurs.len(), 3);
    assert_eq!(s.dinosaurs[1].current_health, 50);
    assert_eq!(s.dinosaurs[2].current_health, 100);
    assert_eq!(s.score, 200 + 100);
    assert!(s.robot.lasers.is_empty());
}

#[test]
fn one_laser_hits_every_dinosaur_it_overlaps_once() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Green, 100.0, 100.0));
    s.dinosaurs.push(Dinosaur::new(Tier::Green, 140.0, 100.0));
    s.robot.lasers.push(Laser::from_robot(140.0, 115.0));

    resolve_robot_lasers(&mut s);

    assert_eq!(s.dinosaurs.len(), 1);
    assert_eq!(s.score, 600);
    assert!(s.robot.lasers.is_empty());
}

#[test]
fn later_lasers_see_earlier_removals() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Yellow, 100.0, 100.0));
    for _ in 0..3 {
        s.robot.lasers.push(Laser::from_robot(120.0, 115.0));
    }

    resolve_robot_lasers(&mut s);

    // Two lasers kill the yellow dinosaur, the third finds nothing left.
    assert_eq!(s.dinosaurs.len(), 1);
    assert_eq!(s.score, 400);
    assert_eq!(s.robot.lasers.len(), 1);
}

#[test]
fn missing_robot_laser_survives() {
    let mut s = make_state();
    s.robot.lasers.push(Laser::from_robot(300.0, 300.0));
    resolve_robot_lasers(&mut s);
    assert_eq!(s.robot.lasers.len(), 1);
}

#[test]
fn monster_kill_awards_bonus_once() {
    let mut s = make_state();
    let mut monster = Monster::new(Side::Right, 600.0);
    monster.rect.x = 200.0;
    s.monster = Some(monster);
    s.score = 50;
    s.robot.lasers.push(Laser::from_robot(228.0, 94.0));

    resolve_robot_lasers(&mut s);

    assert!(s.monster.is_none());
    assert_eq!(s.score, 150);
    assert!(s.robot.lasers.is_empty());
}

#[test]
fn dinosaur_takes_priority_over_monster() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Red, 200.0, 80.0));
    let mut monster = Monster::new(Side::Left, 600.0);
    monster.rect.x = 200.0;
    s.monster = Some(monster);
    s.robot.lasers.push(Laser::from_robot(220.0, 94.0));

    resolve_robot_lasers(&mut s);

    assert!(s.monster.is_some());
    assert_eq!(s.dinosaurs[1].current_health, 100);
    assert_eq!(s.score, 100);
}

// ── dinosaur lasers ───────────────────────────────────────────────────────────

#[test]
fn dinosaur_laser_destroys_block_and_itself() {
    let mut s = make_state();
    s.blocks.push(Block::new(200.0, 480.0));
    s.dinosaur_lasers.push(Laser::from_dinosaur(203.0, 483.0));

    let status = resolve_dinosaur_lasers(&mut s);

    assert_eq!(status, GameStatus::Ongoing);
    assert!(s.blocks.is_empty());
    assert!(s.dinosaur_lasers.is_empty());
}

#[test]
fn block_shields_robot() {
    let mut s = make_state();
    let (cx, cy) = robot_centre(&s);
    s.blocks.push(Block::new(cx - 3.0, cy - 3.0));
    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));

    resolve_dinosaur_lasers(&mut s);

    assert_eq!(s.robot.current_health, 150);
    assert!(s.blocks.is_empty());
}

#[test]
fn dinosaur_laser_damages_robot() {
    let mut s = make_state();
    let (cx, cy) = robot_centre(&s);
    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));

    resolve_dinosaur_lasers(&mut s);

    assert_eq!(s.robot.current_health, 100);
    assert_eq!(s.lives, 3);
    assert!(s.dinosaur_lasers.is_empty());
}

#[test]
fn depleted_robot_costs_a_life_and_heals() {
    let mut s = make_state();
    s.robot.current_health = 50;
    let (cx, cy) = robot_centre(&s);
    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));

    let status = resolve_dinosaur_lasers(&mut s);

    assert_eq!(status, GameStatus::Ongoing);
    assert_eq!(s.lives, 2);
    assert_eq!(s.robot.current_health, 150);
}

#[test]
fn last_life_lost_stops_resolution() {
    let mut s = make_state();
    s.lives = 1;
    s.robot.current_health = 50;
    s.score = 900;
    let (cx, cy) = robot_centre(&s);
    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));
    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));
    s.dinosaurs.push(Dinosaur::new(Tier::Red, cx - 20.0, cy - 15.0));

    let status = collision_checks(&mut s);

    assert_eq!(status, GameStatus::Lost { score: 900 });
    assert_eq!(s.lives, 0);
    // The second laser was never examined and the contact pass never ran.
    assert_eq!(s.dinosaur_lasers.len(), 1);
    assert_eq!(s.dinosaurs[1].current_health, 150);
}

#[test]
fn three_hits_on_last_life_lose_the_run() {
    let mut s = make_state();
    s.lives = 1;
    let (cx, cy) = robot_centre(&s);

    for _ in 0..2 {
        s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));
        assert_eq!(collision_checks(&mut s), GameStatus::Ongoing);
    }
    assert_eq!(s.robot.current_health, 50);

    s.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));
    assert_eq!(collision_checks(&mut s), GameStatus::Lost { score: 0 });
    assert_eq!(s.lives, 0);
}

// ── dinosaur contact ──────────────────────────────────────────────────────────

#[test]
fn dinosaur_crushes_blocks_and_survives() {
    let mut s = make_state();
    s.dinosaurs.push(Dinosaur::new(Tier::Yellow, 200.0, 470.0));
    s.blocks.push(Block::new(210.0, 480.0));
    s.blocks.push(Block::new(230.0, 495.0));
    s.blocks.push(Block::new(400.0, 480.0));

    resolve_dinosaur_contact(&mut s);

    assert_eq!(s.blocks, vec![Block::new(400.0, 480.0)]);
    assert_eq!(s.dinosaurs[1].current_health, 100);
}

#[test]
fn robot_contact_hurts_dinosaur_only() {
    let mut s = make_state();
    let (cx, cy) = robot_centre(&s);
    let mut dinosaur = Dinosaur::new(Tier::Green, cx - 20.0, cy - 15.0);
    dinosaur.current_health = 5;
    s.dinosaurs.push(dinosaur);

    resolve_dinosaur_contact(&mut s);
    resolve_dinosaur_contact(&mut s);

    assert_eq!(s.robot.current_health, 150);
    assert_eq!(s.lives, 3);
    assert_eq!(s.dinosaurs.len(), 2);
    assert_eq!(s.dinosaurs[1].current_health, -5);
}

// ── terminal conditions ───────────────────────────────────────────────────────

#[test]
fn killing_the_last_dinosaur_clears_the_formation() {
    let mut s = make_state();
    s.dinosaurs.clear();
    s.dinosaurs.push(Dinosaur::new(Tier::Green, 100.0, 100.0));
    s.robot.lasers.push(Laser::from_robot(120.0, 115.0));
    s.lives = 1;

    assert_eq!(collision_checks(&mut s), GameStatus::Cleared { score: 300 });
}

#[test]
fn laser_hit_classification() {
    let mut s = make_state();
    s.blocks.push(Block::new(500.0, 500.0));
    let at_block = Laser::from_robot(502.0, 502.0);
    let at_nothing = Laser::from_robot(300.0, 300.0);
    let at_dino = Laser::from_robot(30.0, 25.0);

    assert_eq!(robot_laser_hit(&s, &at_block), LaserHit::Blocks(vec![0]));
    assert_eq!(robot_laser_hit(&s, &at_nothing), LaserHit::Nothing);
    assert_eq!(robot_laser_hit(&s, &at_dino), LaserHit::Dinosaurs(vec![0]));

    let (cx, cy) = robot_centre(&s);
    assert_eq!(dinosaur_laser_hit(&s, &Laser::from_dinosaur(cx, cy)), LaserHit::Robot);
    assert_eq!(dinosaur_laser_hit(&s, &at_nothing), LaserHit::Nothing);
}
