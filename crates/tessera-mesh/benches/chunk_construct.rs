use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use tessera_config::{NoiseLayerSettings, NormalMode, ShapeSettings};
use tessera_cubesphere::{
    Basis, ChunkDescriptor, ChunkIndex, CubeFace, Resolution, SubdivisionLevel,
};
use tessera_mesh::{ChunkMeshBuilder, MeshBuffer};
use tessera_shape::{IdentityShape, ShapeGenerator};

fn descriptor(resolution: i32) -> ChunkDescriptor {
    let level = SubdivisionLevel::new(2).unwrap();
    ChunkDescriptor::decode(
        ChunkIndex::new(CubeFace::PosX, 5, level),
        level,
        Resolution::new(resolution).unwrap(),
    )
}

fn bench_construct_identity(c: &mut Criterion) {
    let basis = Basis::for_face(CubeFace::PosX).unwrap();
    let mut group = c.benchmark_group("construct_identity");
    for res in [16, 64, 256] {
        let d = descriptor(res);
        let builder = ChunkMeshBuilder::new(&d, &basis, NormalMode::Position);
        let mut buffer = MeshBuffer::new();
        group.bench_with_input(BenchmarkId::from_parameter(res), &res, |b, _| {
            b.iter(|| {
                builder.construct_into(&IdentityShape, &mut buffer);
                black_box(buffer.vertices.len())
            })
        });
    }
    group.finish();
}

fn bench_construct_noise(c: &mut Criterion) {
    let basis = Basis::for_face(CubeFace::PosX).unwrap();
    let shape = ShapeGenerator::new(&ShapeSettings {
        radius: 1.0,
        spherify: true,
        noise_layers: vec![NoiseLayerSettings {
            layer_count: 5,
            strength: 0.1,
            ..Default::default()
        }],
    });
    let d = descriptor(64);
    let builder = ChunkMeshBuilder::new(&d, &basis, NormalMode::Computed);
    let mut buffer = MeshBuffer::new();
    c.bench_function("construct_noise_64_computed_normals", |b| {
        b.iter(|| {
            builder.construct_into(&shape, &mut buffer);
            black_box(buffer.normals[0])
        })
    });
}

fn bench_sphere_projection(c: &mut Criterion) {
    let basis = Basis::for_face(CubeFace::NegY).unwrap();
    let d = descriptor(128);
    let builder = ChunkMeshBuilder::new(&d, &basis, NormalMode::Position);
    let sphere = |p: DVec3| p.normalize();
    c.bench_function("construct_sphere_128", |b| {
        b.iter(|| black_box(builder.construct(&sphere)))
    });
}

criterion_group!(
    benches,
    bench_construct_identity,
    bench_construct_noise,
    bench_sphere_projection
);
criterion_main!(benches);
