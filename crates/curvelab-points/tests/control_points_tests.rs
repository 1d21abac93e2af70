use curvelab_core::traits::{BoundingBox, Validate};
use curvelab_math::{dvec3, Point3};
use curvelab_points::{random_position, ControlPoints, PointId, INITIAL_POSITIONS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn grow(count: usize, seed: u64) -> (ControlPoints, Vec<PointId>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cps = ControlPoints::with_initial_points(&mut rng);
    let mut ids: Vec<_> = cps.iter().map(|(id, _)| id).collect();
    for _ in 0..count {
        let p = random_position(&mut rng);
        ids.push(cps.append_random(p, &mut rng));
    }
    (cps, ids)
}

#[test]
fn test_generated_sequence_stays_valid() {
    let (cps, ids) = grow(10, 3);
    assert_eq!(cps.len(), 12);
    cps.validate().unwrap();

    for (index, id) in ids.iter().enumerate() {
        assert_eq!(cps.index_of(*id), Some(index));
        assert!(cps.tangent(*id).is_some());
    }
}

#[test]
fn test_drag_updates_position_only() {
    let (mut cps, ids) = grow(2, 11);
    let tangents_before = cps.tangents().unwrap();

    cps.move_point(ids[3], dvec3(0.0, 0.0, 0.0)).unwrap();

    assert_eq!(cps.positions()[3], Point3::ZERO);
    assert_eq!(cps.tangents().unwrap(), tangents_before);
    cps.validate().unwrap();
}

#[test]
fn test_bounds_cover_every_point() {
    let (cps, _) = grow(6, 5);
    let bounds = cps.bounding_box().unwrap();
    for p in cps.positions() {
        assert!(bounds.contains(p));
    }
    assert!(bounds.contains(INITIAL_POSITIONS[0]));
}
