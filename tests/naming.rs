use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use touch_canvas::config::NamingConfig;
use touch_canvas::state::NamePool;

#[test]
fn test_pool_draws_five_suffixes_in_range() {
    let config = NamingConfig::default();
    let pool = NamePool::generate(&config, &mut StdRng::seed_from_u64(3));

    assert_eq!(pool.candidates().len(), 5);
    for n in pool.candidates() {
        assert!((1..=100).contains(n));
    }
    for name in pool.candidate_names() {
        assert!(name.starts_with("drawing"));
        let suffix: u32 = name["drawing".len()..].parse().unwrap();
        assert!((1..=100).contains(&suffix));
    }
}

#[test]
fn test_choose_returns_a_candidate() {
    let pool = NamePool::generate(&NamingConfig::default(), &mut StdRng::seed_from_u64(11));
    let names: HashSet<String> = pool.candidate_names().collect();

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let name = pool.choose(&mut rng, |_| false);
        assert!(names.contains(&name));
    }
}

#[test]
fn test_choose_skips_taken_names() {
    let config = NamingConfig {
        pool_size: 2,
        min_suffix: 1,
        max_suffix: 1,
        ..NamingConfig::default()
    };
    let pool = NamePool::generate(&config, &mut StdRng::seed_from_u64(0));
    assert_eq!(pool.candidates(), &[1, 1]);

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(pool.choose(&mut rng, |_| false), "drawing1");

    let fallback = pool.choose(&mut rng, |name| name == "drawing1");
    assert!(fallback.starts_with("drawing-"));
    assert_eq!(fallback.len(), "drawing-".len() + 32);
}

#[test]
fn test_custom_prefix() {
    let config = NamingConfig {
        prefix: "sketch".to_owned(),
        ..NamingConfig::default()
    };
    let pool = NamePool::generate(&config, &mut StdRng::seed_from_u64(9));
    let name = pool.choose(&mut StdRng::seed_from_u64(9), |_| false);
    assert!(name.starts_with("sketch"));
}

#[test]
fn test_inverted_suffix_range_is_swapped() {
    let config = NamingConfig {
        min_suffix: 50,
        max_suffix: 10,
        ..NamingConfig::default()
    };
    let pool = NamePool::generate(&config, &mut StdRng::seed_from_u64(8));

    assert_eq!(pool.candidates().len(), 5);
    for n in pool.candidates() {
        assert!((10..=50).contains(n), "{n}");
    }
}

#[test]
fn test_zero_pool_size_draws_one_candidate() {
    let config = NamingConfig {
        pool_size: 0,
        ..NamingConfig::default()
    };
    let pool = NamePool::generate(&config, &mut StdRng::seed_from_u64(8));
    assert_eq!(pool.candidates().len(), 1);
}
