//! Integration test: pipe spawning and pooling over a long flight.

use flappy::config::PipesConfig;
use flappy::game::Pipes;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn spawner() -> (Pipes, ChaCha8Rng) {
    let mut pipes = Pipes::new(&PipesConfig::default(), 0.0);
    pipes.start_spawning();
    (pipes, ChaCha8Rng::seed_from_u64(42))
}

fn active_xs(pipes: &Pipes) -> Vec<f32> {
    pipes.active().map(|p| p.position().x).collect()
}

#[test]
fn test_first_tick_places_two_pipes() {
    let (mut pipes, mut rng) = spawner();
    assert_eq!(pipes.next_pipe_x(), 400.0);

    pipes.tick(0.0, &mut rng);

    assert_eq!(active_xs(&pipes), vec![400.0, 1000.0]);
    assert_eq!(pipes.next_pipe_x(), 1600.0);
}

#[test]
fn test_long_flight_keeps_pool_consistent() {
    let config = PipesConfig::default();
    let (mut pipes, mut rng) = spawner();

    let mut bird_x = 0.0_f32;
    let mut last_next = pipes.next_pipe_x();

    while bird_x < 30_000.0 {
        pipes.tick(bird_x, &mut rng);
        let pool = pipes.pool();

        // Active and free sets are disjoint and together cover the pool.
        for &handle in pipes.active_handles() {
            assert!(!pool.is_free(handle));
            assert!(pool.get(handle).is_active());
        }
        assert_eq!(pipes.active_count() + pool.free_count(), pool.capacity());

        // Lookahead is filled and nothing stale survives a tick.
        assert!(pipes.next_pipe_x() >= bird_x + config.spawn_lookahead);
        assert!(pipes.next_pipe_x() >= last_next);
        last_next = pipes.next_pipe_x();

        let xs = active_xs(&pipes);
        assert!(xs.iter().all(|&x| x >= bird_x - config.despawn_distance));
        for pair in xs.windows(2) {
            assert_eq!(pair[1] - pair[0], config.spacing);
        }

        for pipe in pipes.active() {
            let centre = pipe.position().y;
            assert!(centre >= config.min_height && centre <= config.max_height);
        }

        bird_x += 200.0 / 60.0;
    }

    // The warm pool is big enough for the steady state.
    assert_eq!(pipes.pool().cold_allocations(), 0);
    assert_eq!(pipes.pool().capacity(), config.initial_pool_size);
}

#[test]
fn test_reset_then_resume_spawns_from_reset_distance() {
    let (mut pipes, mut rng) = spawner();
    pipes.tick(0.0, &mut rng);
    pipes.tick(2500.0, &mut rng);
    assert!(pipes.active_count() > 0);

    pipes.reset(0.0);
    assert_eq!(pipes.active_count(), 0);
    assert_eq!(pipes.pool().free_count(), pipes.pool().capacity());

    pipes.tick(0.0, &mut rng);
    assert_eq!(active_xs(&pipes), vec![800.0]);
    assert_eq!(pipes.next_pipe_x(), 1400.0);
}

#[test]
fn test_same_seed_same_gaps() {
    let (mut a, mut rng_a) = spawner();
    let (mut b, mut rng_b) = spawner();
    a.tick(5000.0, &mut rng_a);
    b.tick(5000.0, &mut rng_b);

    let gaps_a: Vec<f32> = a.active().map(|p| p.position().y).collect();
    let gaps_b: Vec<f32> = b.active().map(|p| p.position().y).collect();
    assert_eq!(gaps_a, gaps_b);
}
