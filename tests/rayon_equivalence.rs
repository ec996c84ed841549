#![cfg(feature = "rayon")]

use patchcmp::lowlevel::{Dispatch, RayonDispatch, SequentialDispatch, WindowJob};
use patchcmp::{
    CancelToken, DispatchPolicy, ImageView, Metric, Mode, PatchCmpError, SearchConfig, SearchPlan,
    Searcher,
};

fn make_image(width: usize, height: usize, channels: usize, seed: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let value = ((x * 13 + seed) ^ (y * 7) ^ (x * y + c * 31)) & 0xFF;
                data.push(value as u8);
            }
        }
    }
    data
}

#[test]
fn parallel_matches_sequential_search() {
    let (w, h) = (96, 80);
    let a = make_image(w, h, 3, 1);
    let b = make_image(w, h, 3, 2);
    let gt = make_image(w, h, 3, 3);
    let va = ImageView::from_interleaved(&a, w, h, 3).unwrap();
    let vb = ImageView::from_interleaved(&b, w, h, 3).unwrap();
    let vg = ImageView::from_interleaved(&gt, w, h, 3).unwrap();

    for metric in [Metric::Mse, Metric::Mae, Metric::SsimProxy] {
        let base_cfg = SearchConfig {
            window_size: 16,
            grid_size: 10,
            metric,
            mode: Mode::PreferB,
            ..SearchConfig::default()
        };
        let seq = Searcher::new()
            .with_config(SearchConfig {
                dispatch: DispatchPolicy::Sequential,
                ..base_cfg.clone()
            })
            .search(va, vb, vg)
            .unwrap();
        let par = Searcher::new()
            .with_config(SearchConfig {
                dispatch: DispatchPolicy::Parallel,
                ..base_cfg
            })
            .search(va, vb, vg)
            .unwrap();

        assert!(!seq.stats().parallel);
        assert!(par.stats().parallel);
        assert_eq!(seq.as_slice(), par.as_slice());
        assert_eq!(seq.status(), par.status());
    }
}

#[test]
fn repeated_parallel_searches_are_identical() {
    let (w, h) = (70, 70);
    let a = make_image(w, h, 1, 4);
    let b = make_image(w, h, 1, 5);
    let gt = make_image(w, h, 1, 6);
    let va = ImageView::from_slice(&a, w, h).unwrap();
    let vb = ImageView::from_slice(&b, w, h).unwrap();
    let vg = ImageView::from_slice(&gt, w, h).unwrap();

    let searcher = Searcher::new().with_config(SearchConfig {
        window_size: 8,
        grid_size: 20,
        ..SearchConfig::default()
    });
    let first = searcher.search(va, vb, vg).unwrap();
    assert!(first.stats().parallel);
    for _ in 0..4 {
        assert_eq!(searcher.search(va, vb, vg).unwrap(), first);
    }
}

#[test]
fn strategies_return_enumeration_order() {
    let (w, h) = (24, 20);
    let a = make_image(w, h, 4, 7);
    let gt = make_image(w, h, 4, 8);
    let va = ImageView::from_interleaved(&a, w, h, 4).unwrap();
    let vg = ImageView::from_interleaved(&gt, w, h, 4).unwrap();

    let job = WindowJob {
        a: va,
        b: vg,
        gt: vg,
        window_size: 5,
        mode: Mode::PreferA,
        metric: Metric::Mae,
    };
    let plan = SearchPlan::for_views(va, vg, vg, 5, 4).unwrap();
    let cancel = CancelToken::new();
    let seq = SequentialDispatch.evaluate_all(&job, &plan, &cancel).unwrap();
    let par = RayonDispatch.evaluate_all(&job, &plan, &cancel).unwrap();
    assert_eq!(seq.len(), plan.candidates());
    assert_eq!(seq, par);

    let order: Vec<(usize, usize)> = par
        .iter()
        .filter_map(|c| c.valid())
        .map(|r| (r.y, r.x))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn cancelled_search_returns_no_results() {
    let (w, h) = (64, 64);
    let img = make_image(w, h, 1, 9);
    let view = ImageView::from_slice(&img, w, h).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    for dispatch in [DispatchPolicy::Sequential, DispatchPolicy::Parallel] {
        let err = Searcher::new()
            .with_config(SearchConfig {
                window_size: 8,
                dispatch,
                ..SearchConfig::default()
            })
            .with_cancel(cancel.clone())
            .search(view, view, view)
            .unwrap_err();
        assert_eq!(err, PatchCmpError::Cancelled);
    }
}
