use super::*;
use curve::{Curve, CurveConfig, CurvePoint, Error, Group, GroupLaw, RandomPoints};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn toy() -> Group {
    Group::from_config(&CurveConfig::toy()).expect("toy group")
}

fn prime_group() -> Group {
    let curve = Curve::new(1009u32.into(), 1u32.into(), 14u32.into()).expect("curve");
    Group::with_sampled_generator(curve, 1013u32.into()).expect("group")
}

fn generators(group: &Group) -> (CurvePoint, CurvePoint) {
    let mut points = RandomPoints::new(group.curve().clone());
    let g = points.next_point().expect("first point");
    let h = group.nth_point(5u32);
    (g, h)
}

#[test]
fn test_open_close_verify() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    for v in 0..13u32 {
        let opening =
            Opening::open(&group, group.scalar(v), g.clone(), h.clone(), &mut rng).expect("open");
        let commitment = opening.close();
        assert!(opening.verify(&commitment));
    }
}

#[test]
fn test_known_commitment() {
    let group = toy();
    let (g, h) = generators(&group);

    // 3 * (5G) + 2G = 17G = 4G = (2, 5)
    let opening =
        Opening::with_blinding(&group, group.scalar(2u32), group.scalar(3u32), g, h).expect("open");
    assert_eq!(opening.close().xy(), Some((2u32.into(), 5u32.into())));
    assert_eq!(opening.to_string(), "2: (2, 5)");
}

#[test]
fn test_verify_rejects_corrupted_commitment() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    let opening = Opening::open(&group, group.scalar(2u32), g.clone(), h, &mut rng).expect("open");
    let corrupted = group.curve().add(&opening.close(), &g);
    assert!(!opening.verify(&corrupted));
}

#[test]
fn test_verify_rejects_other_value() {
    let group = toy();
    let (g, h) = generators(&group);

    let opening = Opening::with_blinding(
        &group,
        group.scalar(2u32),
        group.scalar(9u32),
        g.clone(),
        h.clone(),
    )
    .expect("open");
    let other = Opening::with_blinding(&group, group.scalar(3u32), group.scalar(9u32), g, h)
        .expect("open");
    assert!(!other.verify(&opening.close()));
}

#[test]
fn test_hiding() {
    let group = prime_group();
    let g = group.generator().clone();
    let h = group.nth_point(777u32);
    let mut rng = StdRng::seed_from_u64(42);

    let commitments: HashSet<CurvePoint> = (0..200)
        .map(|_| {
            Opening::open(&group, group.scalar(2u32), g.clone(), h.clone(), &mut rng)
                .expect("open")
                .close()
        })
        .collect();
    assert!(commitments.len() >= 150, "only {} distinct", commitments.len());
}

#[test]
fn test_reveal() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(1);

    let opening = Opening::open(&group, group.scalar(6u32), g, h, &mut rng).expect("open");
    let (value, blinding) = opening.reveal();
    assert_eq!(value, &group.scalar(6u32));
    assert_eq!(blinding, opening.blinding());

    let reopened = Opening::with_blinding(
        &group,
        value.clone(),
        blinding.clone(),
        opening.value_generator().clone(),
        opening.blinding_generator().clone(),
    )
    .expect("open");
    assert_eq!(reopened.close(), opening.close());
}

#[test]
fn test_batch_verify() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    let openings: Vec<Opening<'_>> = (1..=4u32)
        .map(|v| Opening::open(&group, group.scalar(v), g.clone(), h.clone(), &mut rng))
        .collect::<Result<_, _>>()
        .expect("open");
    let mut commitments: Vec<CurvePoint> = openings.iter().map(Opening::close).collect();

    assert_eq!(Opening::batch_verify(&openings, &commitments), Ok(true));
    assert_eq!(Opening::batch_verify(&[], &[]), Ok(true));

    commitments[2] = group.curve().add(&commitments[2], &g);
    assert_eq!(Opening::batch_verify(&openings, &commitments), Ok(false));
}

#[test]
fn test_batch_verify_length_mismatch() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    let opening = Opening::open(&group, group.scalar(1u32), g, h, &mut rng).expect("open");
    let commitment = opening.close();
    assert_eq!(
        Opening::batch_verify(&[opening], &[commitment.clone(), commitment]),
        Err(CommitmentError::LengthMismatch { left: 1, right: 2 })
    );
}

#[test]
fn test_dependent_generators() {
    let group = toy();
    let g = group.generator().clone();
    let mut rng = StdRng::seed_from_u64(42);

    let cases = [
        (g.clone(), g.clone()),
        (g.clone(), group.curve().negate(&g)),
        (g.clone(), CurvePoint::Infinity),
        (CurvePoint::Infinity, g.clone()),
    ];
    for (value_generator, blinding_generator) in cases {
        assert_eq!(
            Opening::open(
                &group,
                group.scalar(1u32),
                value_generator,
                blinding_generator,
                &mut rng
            ),
            Err(CommitmentError::DependentGenerators)
        );
    }
}

#[test]
fn test_invalid_inputs() {
    let group = toy();
    let (g, _) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    let off_curve = CurvePoint::Affine {
        x: group.curve().element(4u32),
        y: group.curve().element(3u32),
    };
    assert_eq!(
        Opening::open(&group, group.scalar(1u32), g.clone(), off_curve, &mut rng),
        Err(CommitmentError::Curve(Error::NotOnCurve))
    );

    let foreign = curve::Scalar::from_u64(1, &11u32.into());
    assert_eq!(
        Opening::open(&group, foreign, g, group.nth_point(2u32), &mut rng),
        Err(CommitmentError::Curve(Error::OrderMismatch(11u32.into())))
    );
}

#[test]
fn test_serialize() {
    let group = toy();
    let (g, h) = generators(&group);
    let mut rng = StdRng::seed_from_u64(42);

    let opening = Opening::open(&group, group.scalar(2u32), g, h, &mut rng).expect("open");
    let commitment = opening.close();

    let bytes = bincode::serialize(&commitment).expect("serialize commitment");
    let decoded: CurvePoint = bincode::deserialize(&bytes).expect("deserialize commitment");
    assert!(opening.verify(&decoded));

    assert!(!bincode::serialize(&opening).expect("serialize opening").is_empty());
}
