use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softrast::bench::{EdgeFunctionRasterizer, FrameBuffer, ScreenTriangle, ScreenVertex};
use softrast::math::vec3::Vec3;
use softrast::{Engine, RasterOptions, Scene, Settings, ShadingMode};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> ScreenTriangle {
    ScreenTriangle::new([
        ScreenVertex::new(Vec3::new(a.0, a.1, 0.5), RED),
        ScreenVertex::new(Vec3::new(b.0, b.1, 0.5), GREEN),
        ScreenVertex::new(Vec3::new(c.0, c.1, 0.5), BLUE),
    ])
}

fn small_triangle() -> ScreenTriangle {
    triangle((100.0, 100.0), (110.0, 120.0), (120.0, 100.0))
}

fn medium_triangle() -> ScreenTriangle {
    triangle((100.0, 100.0), (200.0, 300.0), (300.0, 100.0))
}

fn large_triangle() -> ScreenTriangle {
    triangle((50.0, 50.0), (400.0, 550.0), (750.0, 100.0))
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for shading in [ShadingMode::Gouraud, ShadingMode::Flat] {
        let rasterizer = EdgeFunctionRasterizer::new(RasterOptions {
            shading,
            ..Default::default()
        });

        for (name, tri) in [
            ("small", small_triangle()),
            ("medium", medium_triangle()),
            ("large", large_triangle()),
        ] {
            let id = BenchmarkId::new(format!("{:?}", shading).to_lowercase(), name);
            group.bench_with_input(id, &tri, |b, tri| {
                let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                b.iter(|| {
                    // Fresh depth each pass, otherwise the depth test rejects everything.
                    fb.clear(0);
                    rasterizer.fill_triangle(black_box(tri), &mut fb)
                });
            });
        }
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let rasterizer = EdgeFunctionRasterizer::default();

    // Generate a grid of small triangles
    let triangles: Vec<ScreenTriangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle((x, y), (x + 17.5, y + 25.0), (x + 35.0, y))
            })
        })
        .collect();

    group.bench_function("edge_function_400_triangles", |b| {
        let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            fb.clear(0);
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let settings = Settings::default();

    for (name, scene) in [("cube", Scene::cube()), ("terrain", Scene::terrain())] {
        let mut engine = Engine::new(BUFFER_WIDTH, BUFFER_HEIGHT, &settings, scene);
        group.bench_function(name, |b| b.iter(|| engine.render()));
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_full_frame
);
criterion_main!(benches);
