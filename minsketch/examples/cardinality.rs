use minsketch::MinWise;
use xxhash_rust::xxh32::xxh32;

fn hash32(elem: &[u8]) -> u32 {
    xxh32(elem, 42)
}

fn main() {
    // 10k distinct elements against a 512-function sketch.
    let mut whole = MinWise::new(hash32, 512, 7).unwrap();
    for i in 0..10_000u32 {
        whole.push(format!("elem{i}").as_bytes());
    }
    let est = whole.cardinality();
    println!("exact=10000, estimated={est}");
    assert!((est as f64 - 10_000.).abs() / 10_000. < 0.3);

    // The same universe split into two overlapping streams; merging yields
    // the sketch of their union, so the estimate covers all 10k elements.
    let mut left = MinWise::new(hash32, 512, 7).unwrap();
    let mut right = MinWise::new(hash32, 512, 7).unwrap();
    for i in 0..6_000u32 {
        left.push(format!("elem{i}").as_bytes());
    }
    for i in 4_000..10_000u32 {
        right.push(format!("elem{i}").as_bytes());
    }
    left.merge(&right).unwrap();
    let est = left.cardinality();
    println!("exact union=10000, estimated={est}");
    assert_eq!(left.signature(), whole.signature());
}
