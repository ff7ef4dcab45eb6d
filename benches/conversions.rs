use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorama::color::conversion::{hsl_to_rgb, rgb_to_hsl, rgb_to_hsv};
use colorama::{Color, PaletteConfig, Rgb};

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in ["#3c7", "rgb(60, 179, 113)", "hsl(146, 50%, 47%)", "mediumseagreen"] {
        group.bench_function(input, |b| b.iter(|| Color::new(black_box(input))));
    }
    group.finish();
}

fn benchmark_conversions(c: &mut Criterion) {
    let rgb = Rgb::new(60, 179, 113);
    let hsl = rgb_to_hsl(rgb);

    c.bench_function("rgb_to_hsl", |b| b.iter(|| rgb_to_hsl(black_box(rgb))));
    c.bench_function("rgb_to_hsv", |b| b.iter(|| rgb_to_hsv(black_box(rgb))));
    c.bench_function("hsl_to_rgb", |b| b.iter(|| hsl_to_rgb(black_box(hsl))));
}

fn benchmark_palettes(c: &mut Criterion) {
    let color = Color::from(Rgb::new(60, 179, 113));
    let config = PaletteConfig::default();

    c.bench_function("analogous", |b| {
        b.iter(|| black_box(color).analogous(None, None))
    });
    c.bench_function("generate_all_schemes", |b| {
        b.iter(|| config.generate(black_box(&color)))
    });
}

criterion_group!(benches, benchmark_parsing, benchmark_conversions, benchmark_palettes);
criterion_main!(benches);
