use patchcmp::lowlevel::evaluate;
use patchcmp::{ImageView, Metric};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn naive(a: &[u8], b: &[u8], metric: Metric) -> f64 {
    let n = a.len() as f64;
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            match metric {
                Metric::Mse => d * d,
                Metric::Mae | Metric::SsimProxy => d.abs(),
            }
        })
        .sum();
    sum / n
}

#[test]
fn metrics_match_naive_reference_on_random_regions() {
    let mut rng = StdRng::seed_from_u64(42);
    for &(width, height, channels) in &[(1, 1, 1), (9, 4, 1), (16, 16, 3), (33, 7, 4)] {
        let len = width * height * channels;
        let a: Vec<u8> = (0..len).map(|_| rng.random_range(0..=255)).collect();
        let b: Vec<u8> = (0..len).map(|_| rng.random_range(0..=255)).collect();
        let va = ImageView::from_interleaved(&a, width, height, channels).unwrap();
        let vb = ImageView::from_interleaved(&b, width, height, channels).unwrap();

        for metric in [Metric::Mse, Metric::Mae, Metric::SsimProxy] {
            let got = evaluate(va, vb, metric).unwrap();
            let expected = naive(&a, &b, metric);
            assert!(
                (got - expected).abs() <= 1e-9 * expected.max(1.0),
                "{metric:?} {width}x{height}x{channels}: {got} vs {expected}"
            );
        }
    }
}

#[test]
fn identical_regions_have_zero_distance() {
    let data: Vec<u8> = (0..48).map(|v| (v * 5) as u8).collect();
    let view = ImageView::from_interleaved(&data, 4, 4, 3).unwrap();
    for metric in [Metric::Mse, Metric::Mae, Metric::SsimProxy] {
        assert_eq!(evaluate(view, view, metric).unwrap(), 0.0);
    }
}

#[test]
fn metric_ignores_row_padding_of_crops() {
    let mut rng = StdRng::seed_from_u64(3);
    let a: Vec<u8> = (0..400).map(|_| rng.random_range(0..=255)).collect();
    let b: Vec<u8> = (0..400).map(|_| rng.random_range(0..=255)).collect();
    let va = ImageView::from_slice(&a, 20, 20).unwrap();
    let vb = ImageView::from_slice(&b, 20, 20).unwrap();

    let ra = va.roi(3, 5, 6, 6).unwrap();
    let rb = vb.roi(3, 5, 6, 6).unwrap();
    let mut ca = Vec::new();
    let mut cb = Vec::new();
    for (row_a, row_b) in ra.rows().zip(rb.rows()) {
        ca.extend_from_slice(row_a);
        cb.extend_from_slice(row_b);
    }
    let got = evaluate(ra, rb, Metric::Mse).unwrap();
    assert!((got - naive(&ca, &cb, Metric::Mse)).abs() < 1e-9);
}
