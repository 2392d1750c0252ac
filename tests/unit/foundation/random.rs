use super::*;

#[test]
fn seeded_source_is_reproducible_and_in_range() {
    let mut a = SeededSource::new(7);
    let mut b = SeededSource::new(7);
    for _ in 0..1000 {
        let x = a.next_f64();
        assert_eq!(x, b.next_f64());
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn next_below_stays_in_bounds() {
    let mut rng = SeededSource::new(42);
    for _ in 0..1000 {
        assert!(rng.next_below(99) < 99);
    }
    assert_eq!(rng.next_below(0), 0);

    let mut top = SequenceSource::new(vec![0.999_999_999]);
    assert_eq!(top.next_below(361), 360);
}

#[test]
fn sequence_source_cycles() {
    let mut rng = SequenceSource::new(vec![0.1, 0.2]);
    assert_eq!(rng.next_f64(), 0.1);
    assert_eq!(rng.next_f64(), 0.2);
    assert_eq!(rng.next_f64(), 0.1);

    let mut empty = SequenceSource::new(Vec::new());
    assert_eq!(empty.next_f64(), 0.0);
}

#[test]
fn entropy_sources_differ() {
    let mut a = EntropySource::new();
    let mut b = EntropySource::new();
    let xs: Vec<f64> = (0..4).map(|_| a.next_f64()).collect();
    let ys: Vec<f64> = (0..4).map(|_| b.next_f64()).collect();
    assert_ne!(xs, ys);
}

#[test]
fn mut_ref_forwards() {
    fn draw(mut rng: impl RandomSource) -> f64 {
        rng.next_f64()
    }

    let mut rng = SequenceSource::new(vec![0.5, 0.25]);
    assert_eq!(draw(&mut rng), 0.5);
    assert_eq!(rng.next_f64(), 0.25);
}
