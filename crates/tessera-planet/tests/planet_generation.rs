//! End-to-end planet builds through the headless backend.

use glam::{DVec2, Vec3};
use tessera_config::{ColourSettings, NoiseLayerSettings, NormalMode, PlanetConfig, ShapeSettings};
use tessera_cubesphere::{
    BasisTable, ChunkIndex, CubeFace, GeometryError, QUADRANT_OFFSETS, Resolution,
    SubdivisionLevel,
};
use tessera_mesh::{ChunkMeshBuilder, MeshBuffer, winding_is_consistent};
use tessera_planet::{HeadlessBackend, Planet, PlanetError, RenderableId, Tessellator};
use tessera_shape::{IdentityShape, ShapeGenerator};

const SEAM_EPSILON: f32 = 1e-6;

fn config(subdivisions: i32, resolution: i32) -> PlanetConfig {
    PlanetConfig {
        subdivisions,
        resolution,
        workers: 4,
        ..Default::default()
    }
}

fn build_planet(
    subdivisions: i32,
    resolution: i32,
    shape: ShapeSettings,
) -> Planet<HeadlessBackend> {
    let mut planet = Planet::new(
        config(subdivisions, resolution),
        shape,
        ColourSettings::default(),
        HeadlessBackend::new(),
    )
    .unwrap();
    planet.generate_planet().unwrap();
    planet
}

fn noisy_shape() -> ShapeSettings {
    ShapeSettings {
        radius: 2.0,
        spherify: true,
        noise_layers: vec![
            NoiseLayerSettings {
                strength: 0.1,
                layer_count: 4,
                min_value: 0.3,
                ..Default::default()
            },
            NoiseLayerSettings {
                seed: 7,
                strength: 0.05,
                use_first_layer_as_mask: true,
                ..Default::default()
            },
        ],
    }
}

fn tessellator_meshes(level: i32, res: i32) -> Tessellator<RenderableId> {
    let mut tessellator = Tessellator::new(NormalMode::Position, 3).unwrap();
    let mut backend = HeadlessBackend::new();
    tessellator
        .build_chunk_set(
            SubdivisionLevel::new(level).unwrap(),
            Resolution::new(res).unwrap(),
            &mut backend,
        )
        .unwrap();
    tessellator
        .regenerate(&ShapeGenerator::new(&noisy_shape()), &mut backend)
        .unwrap();
    tessellator
}

fn boundary_vertices(mesh: &MeshBuffer, res: usize) -> impl Iterator<Item = Vec3> + '_ {
    (0..res * res)
        .filter(move |i| {
            let (x, y) = (i % res, i / res);
            x == 0 || y == 0 || x == res - 1 || y == res - 1
        })
        .map(|i| Vec3::from_array(mesh.vertices[i]))
}

#[test]
fn test_level_zero_resolution_two() {
    let planet = build_planet(0, 2, ShapeSettings::default());
    let backend = planet.backend();

    assert_eq!(backend.live_count(), 6, "one chunk per face");
    for (_, slot) in backend.slots() {
        assert_eq!(slot.mesh.vertex_count(), 4);
        assert_eq!(slot.mesh.triangle_count(), 2);
    }

    let stats = planet.tessellator().stats();
    assert_eq!(stats.chunks, 6);
    assert_eq!(stats.vertices, 24);
    assert_eq!(stats.triangles, 12);
}

#[test]
fn test_level_one_quadrants() {
    let planet = build_planet(1, 2, ShapeSettings::default());
    let chunks = planet.tessellator().chunk_set().unwrap();
    assert_eq!(chunks.divisions(), 4);

    for face in CubeFace::ALL {
        let descriptors = chunks.face(face);
        assert_eq!(descriptors.len(), 4);
        for (d, quadrant) in descriptors.iter().zip(QUADRANT_OFFSETS) {
            assert_eq!(d.size, 1.0);
            assert_eq!(d.offset, quadrant);
            assert_eq!(d.center(), (quadrant - DVec2::splat(0.5)) * -1.0);
        }
        let mut centres: Vec<_> = descriptors.iter().map(|d| d.center().to_array()).collect();
        centres.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            centres,
            vec![[-0.5, -0.5], [-0.5, 0.5], [0.5, -0.5], [0.5, 0.5]],
            "quadrant centres on {face}"
        );
    }
}

#[test]
fn test_identity_shape_on_pos_y() {
    let mut tessellator = Tessellator::new(NormalMode::Position, 1).unwrap();
    let mut backend = HeadlessBackend::new();
    let level = SubdivisionLevel::new(0).unwrap();
    tessellator
        .build_chunk_set(level, Resolution::new(3).unwrap(), &mut backend)
        .unwrap();
    tessellator.regenerate(&IdentityShape, &mut backend).unwrap();

    let idx = ChunkIndex::new(CubeFace::PosY, 0, level);
    let mesh = &backend.slot(*tessellator.handle(idx).unwrap()).unwrap().mesh;
    for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
        assert_eq!(v[1], 1.0, "every vertex lies on the y = 1 plane");
        assert!(v[0].abs() <= 1.0 && v[2].abs() <= 1.0);
        assert_eq!(v, n, "normals copy positions");
    }
    assert_eq!(mesh.vertices[4], [0.0, 1.0, 0.0], "centre vertex is the face centre");
}

#[test]
fn test_regeneration_is_bit_identical() {
    let mut planet = build_planet(2, 7, noisy_shape());
    let first: Vec<MeshBuffer> = planet.tessellator().buffers().to_vec();

    planet.generate_planet().unwrap();
    assert_eq!(planet.tessellator().buffers(), first.as_slice());
    for (_, slot) in planet.backend().slots() {
        assert_eq!(slot.mesh_updates, 2);
    }
}

#[test]
fn test_winding_consistent_across_planet() {
    let planet = build_planet(2, 5, ShapeSettings::default());
    let table = BasisTable::new().unwrap();
    let chunks = planet.tessellator().chunk_set().unwrap();
    for (d, mesh) in chunks.iter().zip(planet.tessellator().buffers()) {
        let up = table.get(d.face()).up.as_vec3();
        assert!(winding_is_consistent(mesh, up), "winding on {}", d.index);
    }
}

#[test]
fn test_same_face_neighbours_share_exact_edges() {
    let res = 6;
    let tessellator = tessellator_meshes(2, res);
    let chunks = tessellator.chunk_set().unwrap();
    let res = res as usize;
    let mut shared = 0;

    for face in CubeFace::ALL {
        let on_face = chunks.face(face);
        let meshes = &tessellator.buffers()[face.index() * on_face.len()..][..on_face.len()];
        for (a, mesh_a) in on_face.iter().zip(meshes) {
            for (b, mesh_b) in on_face.iter().zip(meshes) {
                let (a_min, a_max) = a.bounds();
                let (b_min, b_max) = b.bounds();
                if b_min.x != a_max.x || b_min.y != a_min.y || b_max.y != a_max.y {
                    continue;
                }
                // Right column of `a` against left column of `b`.
                for y in 0..res {
                    assert_eq!(
                        mesh_a.vertices[y * res + res - 1],
                        mesh_b.vertices[y * res],
                        "seam between {} and {}",
                        a.index,
                        b.index
                    );
                }
                shared += 1;
            }
        }
    }
    // 4x4 chunks per face have 3 vertical seams in each of 4 rows.
    assert_eq!(shared, 6 * 12);
}

#[test]
fn test_every_edge_vertex_is_shared() {
    let res = 5;
    let tessellator = tessellator_meshes(1, res);
    let buffers = tessellator.buffers();

    for (i, mesh) in buffers.iter().enumerate() {
        for v in boundary_vertices(mesh, res as usize) {
            let matched = buffers.iter().enumerate().any(|(j, other)| {
                j != i
                    && other
                        .vertices
                        .iter()
                        .any(|w| Vec3::from_array(*w).distance(v) < SEAM_EPSILON)
            });
            assert!(matched, "chunk {i} has an unshared edge vertex {v}");
        }
    }
}

#[test]
fn test_computed_normals_point_outward() {
    let mut planet = Planet::new(
        PlanetConfig {
            normal_mode: NormalMode::Computed,
            ..config(1, 6)
        },
        ShapeSettings {
            noise_layers: vec![NoiseLayerSettings {
                strength: 0.05,
                layer_count: 2,
                ..Default::default()
            }],
            ..Default::default()
        },
        ColourSettings::default(),
        HeadlessBackend::new(),
    )
    .unwrap();
    planet.generate_planet().unwrap();

    for mesh in planet.tessellator().buffers() {
        for (n, v) in mesh.normals.iter().zip(&mesh.vertices) {
            let n = Vec3::from_array(*n);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(Vec3::from_array(*v).normalize()) > 0.0);
        }
    }
}

#[test]
fn test_resolution_change_keeps_resources() {
    let mut planet = build_planet(1, 4, ShapeSettings::default());
    let before: Vec<_> = {
        let mut ids: Vec<_> = planet.backend().slots().map(|(id, _)| *id).collect();
        ids.sort();
        ids
    };

    planet.set_config(config(1, 9));
    planet.generate_planet().unwrap();

    let mut after: Vec<_> = planet.backend().slots().map(|(id, _)| *id).collect();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(planet.backend().destroyed_count(), 0);
    for (_, slot) in planet.backend().slots() {
        assert_eq!(slot.mesh.vertex_count(), 81);
    }
}

#[test]
fn test_subdivision_change_replaces_resources() {
    let mut planet = build_planet(1, 3, ShapeSettings::default());
    planet.set_config(config(2, 3));
    planet.generate_planet().unwrap();

    let backend = planet.backend();
    assert_eq!(backend.destroyed_count(), 24);
    assert_eq!(backend.live_count(), 96);
    assert_eq!(backend.created_count(), 24 + 96);
}

#[test]
fn test_shape_radius_respected_without_noise() {
    let planet = build_planet(
        1,
        5,
        ShapeSettings {
            radius: 3.0,
            ..Default::default()
        },
    );
    for mesh in planet.tessellator().buffers() {
        for v in &mesh.vertices {
            let length = Vec3::from_array(*v).length();
            assert!((length - 3.0).abs() < 1e-5, "vertex off sphere: {length}");
        }
    }
}

#[test]
fn test_invalid_parameters_surface_errors() {
    for (subdivisions, resolution, expected) in [
        (0, 1, GeometryError::InvalidResolution(1)),
        (0, 0, GeometryError::InvalidResolution(0)),
        (0, 257, GeometryError::InvalidResolution(257)),
        (-1, 8, GeometryError::InvalidSubdivisionLevel(-1)),
        (11, 8, GeometryError::InvalidSubdivisionLevel(11)),
    ] {
        let mut planet = Planet::new(
            config(subdivisions, resolution),
            ShapeSettings::default(),
            ColourSettings::default(),
            HeadlessBackend::new(),
        )
        .unwrap();
        match planet.generate_planet() {
            Err(PlanetError::Geometry(err)) => assert_eq!(err, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
        assert_eq!(planet.backend().created_count(), 0);
    }
}

#[test]
fn test_builder_matches_tessellator_output() {
    let tessellator = tessellator_meshes(1, 4);
    let table = BasisTable::new().unwrap();
    let shape = ShapeGenerator::new(&noisy_shape());
    let chunks = tessellator.chunk_set().unwrap();

    for (d, mesh) in chunks.iter().zip(tessellator.buffers()) {
        let direct =
            ChunkMeshBuilder::new(d, table.get(d.face()), NormalMode::Position).construct(&shape);
        assert_eq!(&direct, mesh, "chunk {}", d.index);
    }
}
