#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{Rgba, RgbaImage};
use lumaseam::{calculate_energy, carve_once, energy_to_vertical_seam, SeamCarver};

fn sample(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([((x * 7 + y * 3) % 256) as u8, ((x * y) % 256) as u8, ((y * 11) % 256) as u8, 255])
    })
}

fn energy(c: &mut Criterion) {
    let img = sample(256, 256);
    c.bench_function("energy 256x256", move |b| b.iter(|| calculate_energy(&img)));
}

fn seam(c: &mut Criterion) {
    let emap = calculate_energy(&sample(256, 256));
    c.bench_function("seam 256x256", move |b| b.iter(|| energy_to_vertical_seam(&emap)));
}

fn carve(c: &mut Criterion) {
    let img = sample(128, 128);
    c.bench_function("carve one 128x128", move |b| b.iter(|| carve_once(&img)));
}

fn batch(c: &mut Criterion) {
    let img = sample(64, 64);
    c.bench_function("carve ten 64x64", move |b| {
        b.iter(|| SeamCarver::new(&img).carve(10))
    });
}

criterion_group!(benches, energy, seam, carve, batch);
criterion_main!(benches);
