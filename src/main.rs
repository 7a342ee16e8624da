use alea::{Alea, Seed};

fn main() {
    // Same seeds, same sequence, on every run and platform
    let mut rng = Alea::new([Seed::from("my"), Seed::from(3), Seed::from("seeds")]);
    for _ in 0..3 { println!("{}", rng.next_f64()); }

    // Snapshot, wander off, come back
    let snap = rng.state();
    let a = rng.next_f64();
    rng.restore(snap).expect("restore");
    assert_eq!(a, rng.next_f64());

    // No seeds: the wall clock picks one, and args() says which
    let clocked = Alea::from_entropy();
    println!("clock seed: {}", clocked.args()[0]);
}
