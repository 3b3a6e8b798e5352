use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use clipstage::clipper::clip_triangle;
use clipstage::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

/// Discards everything, so only the clip stage is measured.
struct NullRasterizer;

impl Rasterizer for NullRasterizer {
    fn plot(&mut self, _p: &ScreenPoint) {}
    fn line(&mut self, _p0: &ScreenPoint, _p1: &ScreenPoint) {}
    fn line_z(&mut self, _p0: &ScreenPoint, _p1: &ScreenPoint) {}
    fn fill_triangle(
        &mut self,
        _mode: FillMode,
        _p0: &ScreenPoint,
        _p1: &ScreenPoint,
        _p2: &ScreenPoint,
    ) {
    }
}

fn state() -> RenderState {
    RenderState {
        viewport: Viewport::new(0, 0, BUFFER_WIDTH, BUFFER_HEIGHT),
        ..RenderState::default()
    }
}

fn triangle(ctx: &Context<NullRasterizer>, points: [[f32; 4]; 3]) -> [Vertex; 3] {
    points.map(|p| {
        let mut v = Vertex::new(Vec4::from(p), Vec4::ONE, Vec2::ZERO);
        ctx.prepare_vertex(&mut v);
        v
    })
}

fn inside_triangle() -> [[f32; 4]; 3] {
    [
        [-0.5, -0.5, 0.0, 1.0],
        [0.5, -0.5, 0.0, 1.0],
        [0.0, 0.5, 0.0, 1.0],
    ]
}

fn one_plane_triangle() -> [[f32; 4]; 3] {
    [
        [-2.0, -0.5, 0.0, 1.0],
        [0.5, -0.5, 0.0, 1.0],
        [0.0, 0.5, 0.0, 1.0],
    ]
}

fn all_planes_triangle() -> [[f32; 4]; 3] {
    [
        [-3.0, -3.0, -2.0, 1.0],
        [3.0, -2.5, 2.0, 1.0],
        [0.2, 3.0, 0.5, 1.0],
    ]
}

fn benchmark_draw_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_triangle");

    for (name, points) in [
        ("inside", inside_triangle()),
        ("one_plane", one_plane_triangle()),
        ("all_planes", all_planes_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("null", name), &points, |b, points| {
            let mut ctx = Context::new(state(), NullRasterizer);
            let [p0, p1, p2] = triangle(&ctx, *points);
            b.iter(|| ctx.draw_triangle(black_box(&p0), black_box(&p1), black_box(&p2)));
        });

        group.bench_with_input(BenchmarkId::new("framebuffer", name), &points, |b, points| {
            let mut ctx = Context::new(state(), FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT));
            let [p0, p1, p2] = points.map(|p| {
                let mut v = Vertex::new(Vec4::from(p), Vec4::ONE, Vec2::ZERO);
                ctx.prepare_vertex(&mut v);
                v
            });
            b.iter(|| ctx.draw_triangle(black_box(&p0), black_box(&p1), black_box(&p2)));
        });
    }

    group.finish();
}

fn benchmark_clip_only(c: &mut Criterion) {
    let state = state();
    let ctx = Context::new(state.clone(), NullRasterizer);
    let [p0, p1, p2] = triangle(&ctx, all_planes_triangle());

    c.bench_function("clip_triangle_all_planes", |b| {
        b.iter(|| {
            let mut count = 0usize;
            clip_triangle(
                &state,
                black_box(&p0),
                black_box(&p1),
                black_box(&p2),
                0,
                &mut |_: &Vertex, _: &Vertex, _: &Vertex| count += 1,
            );
            count
        });
    });
}

criterion_group!(benches, benchmark_draw_triangle, benchmark_clip_only);
criterion_main!(benches);
