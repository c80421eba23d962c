//! Particle driver lifecycle tests
//!
//! Mount, spawn, schedule and teardown against a simulated page with a
//! virtual clock.

mod common;

use common::{init_tracing, ParticlePage};
use wingspay_core::{ParticleConfig, ParticleDriver, Point, Rect, SiteError};

fn config() -> ParticleConfig {
    ParticleConfig::default()
}

/// Trail always fires and always releases exactly one particle
fn single_trail_config() -> ParticleConfig {
    ParticleConfig {
        trail_probability: 1.0,
        max_trail: 1,
        ..ParticleConfig::default()
    }
}

// ============================================================================
// Mount
// ============================================================================

/// Touch host: no elements, no listeners
#[test]
fn test_touch_host_is_disabled() {
    let page = ParticlePage::touch();
    page.add_target(Rect::new(0.0, 0.0, 50.0, 20.0));

    let driver = ParticleDriver::mount(page.host(), config(), 1).unwrap();
    assert!(driver.is_none());
    assert_eq!(page.attached_count(), 0);
    assert_eq!(page.listener_count(), 0);
}

/// Pointer host: N elements, one move listener, one enter listener per target
#[test]
fn test_mount_creates_pool_and_listeners() {
    init_tracing();
    let page = ParticlePage::new();
    page.add_target(Rect::new(0.0, 0.0, 50.0, 20.0));
    page.add_target(Rect::new(100.0, 0.0, 50.0, 20.0));

    let driver = ParticleDriver::mount(page.host(), config(), 1).unwrap().unwrap();
    assert_eq!(driver.capacity(), 20);
    assert_eq!(page.attached_count(), 20);
    assert_eq!(page.move_listener_count(), 1);
    assert_eq!(page.listener_count(), 3);
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.active_count(), 0);
}

/// A failed element creation removes the ones already attached
#[test]
fn test_mount_failure_rolls_back() {
    let page = ParticlePage::new();
    page.fail_at.set(Some(7));

    let result = ParticleDriver::mount(page.host(), config(), 1);
    assert!(matches!(result, Err(SiteError::Dom(_))));
    assert_eq!(page.attached_count(), 0);
    assert_eq!(page.listener_count(), 0);
}

/// Settings the spawn policy cannot sample from are refused up front
#[test]
fn test_mount_rejects_invalid_config() {
    let page = ParticlePage::new();
    let empty_trail = ParticleConfig {
        trail_probability: 1.0,
        max_trail: 0,
        ..ParticleConfig::default()
    };
    let result = ParticleDriver::mount(page.host(), empty_trail, 1);
    assert!(matches!(result, Err(SiteError::Config(_))));
    assert_eq!(page.attached_count(), 0);
    assert_eq!(page.listener_count(), 0);

    let certain_plus = ParticleConfig {
        trail_probability: 1.5,
        ..ParticleConfig::default()
    };
    let result = ParticleDriver::mount(page.host(), certain_plus, 1);
    assert!(matches!(result, Err(SiteError::Config(_))));
    assert_eq!(page.attached_count(), 0);
}

// ============================================================================
// Spawning
// ============================================================================

/// 25 spawns on N=20 wrap exactly once
#[test]
fn test_spawn_sequence_wraps_once() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), config(), 9).unwrap().unwrap();

    let seq: Vec<usize> = (0..25)
        .map(|i| driver.spawn_particle(i as f64, i as f64).unwrap())
        .collect();
    let expected: Vec<usize> = (0..20).chain(0..5).collect();
    assert_eq!(seq, expected);
    assert_eq!(driver.cursor(), 5);
}

/// Cursor advances by one even when the slot is still animating
#[test]
fn test_cursor_ignores_active_slots() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), config(), 9).unwrap().unwrap();

    for expected in 0..20 {
        assert_eq!(driver.cursor(), expected);
        driver.spawn_particle(0.0, 0.0);
    }
    assert_eq!(driver.active_count(), 20);
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.spawn_particle(0.0, 0.0), Some(0));
    assert_eq!(driver.cursor(), 1);
}

/// Spawn positions and styles the element from fresh params
#[test]
fn test_spawn_renders_params() {
    let page = ParticlePage::new();
    let cfg = config();
    let driver = ParticleDriver::mount(page.host(), cfg.clone(), 3).unwrap().unwrap();

    let slot = driver.spawn_particle(120.0, 80.0).unwrap();
    assert!(driver.is_slot_active(slot));

    let renders = page.renders.borrow();
    let (element, params) = &renders[0];
    assert_eq!(*element, slot);
    assert_eq!(params.origin, Point::new(120.0, 80.0));
    assert!(cfg.palette.contains(&params.color));
    assert_eq!(driver.slot_params(slot).as_ref(), Some(params));
}

/// Completion flips the slot back to idle
#[test]
fn test_animation_finish_releases_slot() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), config(), 3).unwrap().unwrap();

    driver.spawn_particle(1.0, 1.0);
    driver.spawn_particle(2.0, 2.0);
    assert_eq!(driver.active_count(), 2);

    page.finish_animations();
    assert_eq!(driver.active_count(), 0);
}

/// An overlapped animation's completion does not idle the newer spawn
#[test]
fn test_stale_finish_keeps_newer_spawn_active() {
    let page = ParticlePage::new();
    let cfg = ParticleConfig {
        capacity: 1,
        ..ParticleConfig::default()
    };
    let driver = ParticleDriver::mount(page.host(), cfg, 3).unwrap().unwrap();

    driver.spawn_particle(0.0, 0.0);
    page.finish_animations();
    driver.spawn_particle(0.0, 0.0);
    driver.spawn_particle(0.0, 0.0);

    // finishing both in-flight animations: only the newest releases
    page.finish_animations();
    assert!(!driver.is_slot_active(0));
    assert_eq!(page.render_count(), 3);
}

// ============================================================================
// Event policy
// ============================================================================

/// Pointer movement schedules spawns instead of running them inline
#[test]
fn test_pointer_move_spawns_after_delay() {
    let page = ParticlePage::new();
    let cfg = ParticleConfig {
        trail_probability: 1.0,
        ..ParticleConfig::default()
    };
    let driver = ParticleDriver::mount(page.host(), cfg, 5).unwrap().unwrap();

    page.fire_move(Point::new(300.0, 300.0));
    let scheduled = driver.pending_spawns();
    assert!((1..=3).contains(&scheduled));
    assert_eq!(page.render_count(), 0);

    page.advance(0);
    assert_eq!(page.render_count(), 1);

    page.advance(100);
    assert_eq!(page.render_count(), scheduled);
    assert_eq!(driver.pending_spawns(), 0);

    for (_, params) in page.renders.borrow().iter() {
        assert!((params.origin.x - 300.0).abs() <= 10.0 + 1e-9);
        assert!((params.origin.y - 300.0).abs() <= 10.0 + 1e-9);
    }
}

/// Staggered trail spawns follow the pointer instead of staying behind
#[test]
fn test_late_trail_spawns_follow_pointer() {
    let cfg = ParticleConfig {
        trail_probability: 1.0,
        ..ParticleConfig::default()
    };
    let (page, driver) = (0..64)
        .find_map(|seed| {
            let page = ParticlePage::new();
            let driver = ParticleDriver::mount(page.host(), cfg.clone(), seed).ok()??;
            page.fire_move(Point::new(0.0, 0.0));
            (driver.pending_spawns() == 3).then_some((page, driver))
        })
        .expect("a seed that releases a full trail");

    page.advance(0);
    assert_eq!(page.render_count(), 1);

    page.fire_move(Point::new(1000.0, 1000.0));
    page.advance(200);
    assert!(page.render_count() >= 3);
    assert_eq!(driver.pending_spawns(), 0);

    let renders = page.renders.borrow();
    let (_, first) = &renders[0];
    assert!(first.origin.x.abs() <= 10.0 + 1e-9);
    assert!(first.origin.y.abs() <= 10.0 + 1e-9);
    for (slot, params) in renders.iter().skip(1) {
        assert!(
            (params.origin.x - 1000.0).abs() <= 10.0 + 1e-9
                && (params.origin.y - 1000.0).abs() <= 10.0 + 1e-9,
            "slot {slot} spawned at {:?}",
            params.origin
        );
    }
}

/// Zero trail probability never spawns
#[test]
fn test_pointer_move_can_skip() {
    let page = ParticlePage::new();
    let cfg = ParticleConfig {
        trail_probability: 0.0,
        ..ParticleConfig::default()
    };
    let driver = ParticleDriver::mount(page.host(), cfg, 5).unwrap().unwrap();

    for i in 0..50 {
        page.fire_move(Point::new(i as f64, 0.0));
    }
    page.advance(1_000);
    assert_eq!(page.render_count(), 0);
    assert_eq!(driver.cursor(), 0);
}

/// Entering an interactive element bursts 8 particles inside it
#[test]
fn test_pointer_enter_bursts_inside_target() {
    let page = ParticlePage::new();
    let bounds = Rect::new(200.0, 40.0, 96.0, 32.0);
    let target = page.add_target(bounds);
    let driver = ParticleDriver::mount(page.host(), config(), 5).unwrap().unwrap();

    page.fire_enter(target);
    assert_eq!(driver.pending_spawns(), 8);

    page.advance(30 * 3);
    assert_eq!(page.render_count(), 4);

    page.advance(1_000);
    assert_eq!(page.render_count(), 8);
    assert_eq!(driver.cursor(), 8);
    let slack = Rect::new(
        bounds.left - 1e-9,
        bounds.top - 1e-9,
        bounds.width + 2e-9,
        bounds.height + 2e-9,
    );
    for (_, params) in page.renders.borrow().iter() {
        assert!(slack.contains(params.origin));
    }
}

/// Targets added after mount are not tracked
#[test]
fn test_targets_captured_once_at_mount() {
    let page = ParticlePage::new();
    let _driver = ParticleDriver::mount(page.host(), config(), 5).unwrap().unwrap();

    let late = page.add_target(Rect::new(0.0, 0.0, 10.0, 10.0));
    page.fire_enter(late);
    page.advance(1_000);
    assert_eq!(page.render_count(), 0);
}

/// Fired timers are pruned instead of piling up
#[test]
fn test_fired_timers_are_pruned() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), single_trail_config(), 5)
        .unwrap()
        .unwrap();

    for i in 0..100 {
        page.fire_move(Point::new(i as f64, 0.0));
        page.advance(0);
    }
    assert_eq!(page.render_count(), 100);
    assert_eq!(driver.pending_spawns(), 0);
    assert_eq!(page.pending_timers(), 0);
    assert_eq!(driver.cursor(), 100 % 20);
}

// ============================================================================
// Teardown
// ============================================================================

/// Unmount after spawning leaves nothing behind
#[test]
fn test_unmount_removes_everything() {
    let page = ParticlePage::new();
    let target = page.add_target(Rect::new(0.0, 0.0, 40.0, 40.0));
    let driver = ParticleDriver::mount(page.host(), config(), 5).unwrap().unwrap();

    driver.spawn_particle(10.0, 10.0);
    page.fire_enter(target);
    assert!(page.pending_timers() > 0);

    driver.unmount();
    assert!(!driver.is_mounted());
    assert_eq!(page.attached_count(), 0);
    assert_eq!(page.listener_count(), 0);
    assert_eq!(page.pending_timers(), 0);
    assert_eq!(driver.capacity(), 0);
}

/// Late animation completions and direct spawns after unmount are no-ops
#[test]
fn test_callbacks_after_unmount_are_inert() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), config(), 5).unwrap().unwrap();

    driver.spawn_particle(10.0, 10.0);
    driver.unmount();

    page.finish_animations();
    assert_eq!(driver.spawn_particle(1.0, 1.0), None);
    assert_eq!(page.render_count(), 1);
    assert_eq!(page.attached_count(), 0);
}

/// Unmount twice is harmless
#[test]
fn test_unmount_is_idempotent() {
    let page = ParticlePage::new();
    let driver = ParticleDriver::mount(page.host(), config(), 5).unwrap().unwrap();
    driver.unmount();
    driver.unmount();
    assert_eq!(page.attached_count(), 0);
}

/// Dropping the driver tears it down
#[test]
fn test_drop_unmounts() {
    let page = ParticlePage::new();
    page.add_target(Rect::new(0.0, 0.0, 40.0, 40.0));
    {
        let driver = ParticleDriver::mount(page.host(), single_trail_config(), 5)
            .unwrap()
            .unwrap();
        page.fire_move(Point::new(5.0, 5.0));
        assert_eq!(driver.pending_spawns(), 1);
    }
    assert_eq!(page.attached_count(), 0);
    assert_eq!(page.listener_count(), 0);
    assert_eq!(page.pending_timers(), 0);

    page.fire_move(Point::new(5.0, 5.0));
    page.advance(1_000);
    assert_eq!(page.render_count(), 0);
}
