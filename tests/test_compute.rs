use alien_invasion::compute::*;
use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

fn settings() -> Settings {
    Settings::with_screen_size(40, 20)
}

fn alien_at(x: f32, y: f32) -> Alien {
    Alien { x, y, width: 3.0, height: 2.0 }
}

fn bullet_at(x: f32, y: f32) -> Bullet {
    Bullet { x, y, width: 1.0, height: 1.0 }
}

// ── fleet_dimensions ──────────────────────────────────────────────────────────

#[test]
fn fleet_dimensions_default_screen() {
    // (120 - 6) / 6 = 19 columns, (40 - 6 - 2) / 4 = 8 rows
    assert_eq!(fleet_dimensions(120.0, 40.0, 3.0, 2.0, 2.0), (19, 8));
}

#[test]
fn fleet_dimensions_floor() {
    // (40 - 6) / 6 = 5.67 → 5, (20 - 6 - 2) / 4 = 3
    assert_eq!(fleet_dimensions(40.0, 20.0, 3.0, 2.0, 2.0), (5, 3));
    // (41 - 6) / 6 = 5.83 → 5, (21 - 6 - 2) / 4 = 3.25 → 3
    assert_eq!(fleet_dimensions(41.0, 21.0, 3.0, 2.0, 2.0), (5, 3));
}

#[test]
fn fleet_dimensions_never_negative() {
    assert_eq!(fleet_dimensions(4.0, 5.0, 3.0, 2.0, 2.0), (0, 0));
    assert_eq!(fleet_dimensions(0.0, 0.0, 3.0, 2.0, 2.0), (0, 0));
    assert_eq!(fleet_dimensions(100.0, 100.0, 0.0, 2.0, 2.0), (0, 0));
}

#[test]
fn fleet_dimensions_deterministic() {
    let a = fleet_dimensions(97.0, 33.0, 4.0, 3.0, 2.0);
    let b = fleet_dimensions(97.0, 33.0, 4.0, 3.0, 2.0);
    assert_eq!(a, b);
}

// ── create_fleet ──────────────────────────────────────────────────────────────

#[test]
fn create_fleet_fills_grid() {
    let s = settings();
    let fleet = create_fleet(&s, s.ship_height);
    assert_eq!(fleet.len(), 15);

    let first = &fleet[0];
    assert_eq!((first.x, first.y), (3.0, 2.0));
    let last = fleet.last().unwrap();
    assert_eq!((last.x, last.y), (3.0 + 6.0 * 4.0, 2.0 + 4.0 * 2.0));
}

#[test]
fn create_fleet_leaves_no_overlaps() {
    let s = Settings::default();
    let fleet = create_fleet(&s, s.ship_height);
    assert_eq!(fleet.len(), 19 * 8);
    for (i, a) in fleet.iter().enumerate() {
        for b in fleet.iter().skip(i + 1) {
            assert!(!a.rect().intersects(&b.rect()));
        }
    }
}

#[test]
fn create_fleet_empty_on_tiny_screen() {
    let s = Settings::with_screen_size(5, 5);
    assert!(create_fleet(&s, s.ship_height).is_empty());
}

// ── Fleet movement ────────────────────────────────────────────────────────────

#[test]
fn edge_check_flips_and_drops() {
    let mut s = settings();
    let mut aliens = vec![alien_at(37.0, 4.0), alien_at(20.0, 8.0)];
    assert_eq!(s.fleet_direction, 1);

    assert!(check_fleet_edges(&mut aliens, &mut s));

    assert_eq!(s.fleet_direction, -1);
    assert_eq!(aliens[0].y, 4.0 + s.alien_drop_speed);
    assert_eq!(aliens[1].y, 8.0 + s.alien_drop_speed);
}

#[test]
fn edge_check_without_contact_changes_nothing() {
    let mut s = settings();
    let mut aliens = vec![alien_at(10.0, 4.0), alien_at(20.0, 8.0)];
    let before = aliens.clone();

    assert!(!check_fleet_edges(&mut aliens, &mut s));

    assert_eq!(s.fleet_direction, 1);
    assert_eq!(aliens, before);
}

#[test]
fn change_direction_twice_restores_heading() {
    let mut s = settings();
    let mut aliens = vec![alien_at(10.0, 4.0)];
    change_fleet_direction(&mut aliens, &mut s);
    change_fleet_direction(&mut aliens, &mut s);
    assert_eq!(s.fleet_direction, 1);
    assert_eq!(aliens[0].y, 4.0 + 2.0 * s.alien_drop_speed);
}

// ── bullet_alien_collisions ───────────────────────────────────────────────────

#[test]
fn miss_changes_nothing() {
    let mut bullets = vec![bullet_at(1.0, 15.0)];
    let mut aliens = vec![alien_at(10.0, 4.0)];
    assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 0);
    assert_eq!(bullets.len(), 1);
    assert_eq!(aliens.len(), 1);
}

#[test]
fn single_hit_removes_both() {
    let mut bullets = vec![bullet_at(11.0, 5.0), bullet_at(30.0, 15.0)];
    let mut aliens = vec![alien_at(10.0, 4.0), alien_at(20.0, 4.0)];

    assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 1);

    assert_eq!(bullets, vec![bullet_at(30.0, 15.0)]);
    assert_eq!(aliens, vec![alien_at(20.0, 4.0)]);
}

#[test]
fn one_bullet_can_destroy_two_aliens() {
    // Aliens stacked so one bullet straddles both
    let mut bullets = vec![bullet_at(11.0, 5.5)];
    let mut aliens = vec![alien_at(10.0, 4.0), alien_at(10.0, 6.0)];

    assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 2);

    assert!(bullets.is_empty());
    assert!(aliens.is_empty());
}

#[test]
fn two_bullets_on_one_alien_count_once() {
    let mut bullets = vec![bullet_at(10.0, 4.0), bullet_at(12.0, 5.0)];
    let mut aliens = vec![alien_at(10.0, 4.0)];

    assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 1);

    assert!(bullets.is_empty());
    assert!(aliens.is_empty());
}

// ── Ship / bottom checks ──────────────────────────────────────────────────────

#[test]
fn alien_touching_ship_detected() {
    let s = settings();
    let ship = Ship::new(&s); // x = 18.5, y = 18
    assert!(!any_alien_hits_ship(&[alien_at(18.0, 10.0)], &ship));
    assert!(any_alien_hits_ship(&[alien_at(18.0, 17.0)], &ship));
}

#[test]
fn alien_reaching_bottom_detected() {
    let s = settings();
    assert!(!any_alien_at_bottom(&[alien_at(2.0, 17.9)], &s));
    assert!(any_alien_at_bottom(&[alien_at(2.0, 18.0)], &s));
    assert!(any_alien_at_bottom(&[alien_at(2.0, 5.0), alien_at(2.0, 19.0)], &s));
}
