use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detfilter::{quads_to_array, DetResFilter, ImageShape, Point2f, Quad};

/// A page worth of mixed boxes: upright lines, rotated lines and specks.
fn synthetic_boxes(n: usize) -> Vec<Quad> {
    (0..n)
        .map(|i| {
            let x = (i % 12) as f32 * 90.0;
            let y = (i / 12) as f32 * 28.0;
            match i % 3 {
                0 => [
                    Point2f::new(x + 80.0, y + 20.0),
                    Point2f::new(x, y),
                    Point2f::new(x, y + 20.0),
                    Point2f::new(x + 80.0, y),
                ],
                1 => [
                    Point2f::new(x, y + 15.0),
                    Point2f::new(x + 70.0, y),
                    Point2f::new(x + 75.0, y + 22.0),
                    Point2f::new(x + 5.0, y + 37.0),
                ],
                _ => [
                    Point2f::new(x, y),
                    Point2f::new(x + 6.0, y),
                    Point2f::new(x + 6.0, y + 6.0),
                    Point2f::new(x, y + 6.0),
                ],
            }
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let filter = DetResFilter::default();
    let shape = ImageShape::new(2000, 1100);

    for n in [10usize, 100, 1000] {
        let boxes = synthetic_boxes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &boxes, |b, boxes| {
            b.iter(|| filter.filter(black_box(boxes), shape))
        });
    }

    group.finish();
}

fn benchmark_array_path(c: &mut Criterion) {
    let filter = DetResFilter::default();
    let arr = quads_to_array(&synthetic_boxes(1000));

    c.bench_function("filter_tag_det_res_1000", |b| {
        b.iter(|| {
            filter
                .filter_tag_det_res(black_box(arr.view().into_dyn()), &[2000, 1100, 3])
                .expect("filter failed")
        })
    });
}

criterion_group!(benches, benchmark_filter, benchmark_array_path);
criterion_main!(benches);
