use curve::{CurveConfig, CurvePoint, Group};
use pedersen::{CommitmentError, Opening};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("read config");
            CurveConfig::from_json(&json).expect("parse config")
        }
        None => CurveConfig::toy(),
    };
    let group = Group::from_config(&config).expect("group");
    println!("order {} generator {}", group.order(), group.generator());

    if group.order().bits() <= 8 {
        let table = group.point_table().expect("point table");
        for i in 0..table.len() {
            let point = table.point(group.curve(), i).expect("table entry");
            println!("{i:>4} {point}");
        }
    }

    let g = group.generator().clone();
    let mut rng = StdRng::seed_from_u64(42);
    let opening = loop {
        let h = group.random_point(&mut rng);
        match Opening::open(&group, group.scalar(2u32), g.clone(), h, &mut rng) {
            Ok(opening) => break opening,
            Err(CommitmentError::DependentGenerators) => continue,
            Err(e) => panic!("open: {e}"),
        }
    };
    let commitment = opening.close();
    println!("commitment {opening}");

    let bytes = bincode::serialize(&commitment).expect("serialize commitment");
    let received: CurvePoint = bincode::deserialize(&bytes).expect("deserialize commitment");

    let (value, blinding) = opening.reveal();
    println!("revealed value {value} blinding {blinding}");
    assert!(opening.verify(&received));

    match group.discrete_log(&received) {
        Ok(k) => println!("commitment is {k} * G"),
        Err(e) => println!("discrete log failed: {e}"),
    }
}
