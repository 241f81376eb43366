use minsketch::{BottomK, MinWise};
use xxhash_rust::xxh3::Xxh3Builder;
use xxhash_rust::xxh32::xxh32;

fn hash32(elem: &[u8]) -> u32 {
    xxh32(elem, 42)
}

fn main() {
    let doc_a = "Welcome to Jimbocho, the town of books and curry!";
    let doc_b = "Welcome to Jimbocho, the city of books and curry!";
    let doc_c = "Minimum hashes summarize large sets in fixed space.";

    // Min-wise sketches over word tokens, sharing one hash primitive and seed.
    let mut minwise = vec![];
    for doc in [doc_a, doc_b, doc_c] {
        let mut m = MinWise::new(hash32, 256, 42).unwrap();
        for token in doc.split_whitespace() {
            m.push(token.as_bytes());
        }
        minwise.push(m);
    }
    let near_dup = minwise[0].similarity(&minwise[1]).unwrap();
    let unrelated = minwise[0].similarity(&minwise[2]).unwrap();
    println!("minwise: near_dup={near_dup:.3}, unrelated={unrelated:.3}");
    assert!(near_dup > unrelated);
    assert_eq!(minwise[0].similarity(&minwise[0]).unwrap(), 1.);

    // Bottom-k sketches over the same tokens, owning one hasher each.
    let mut bottomk = vec![];
    for doc in [doc_a, doc_b, doc_c] {
        let mut m = BottomK::new(Xxh3Builder::new().with_seed(42), 8).unwrap();
        for token in doc.split_whitespace() {
            m.add(token.as_bytes());
        }
        bottomk.push(m);
    }
    let near_dup = bottomk[0].similarity(&bottomk[1]).unwrap();
    let unrelated = bottomk[0].similarity(&bottomk[2]).unwrap();
    println!("bottomk: near_dup={near_dup:.3}, unrelated={unrelated:.3}");
    assert!(near_dup > unrelated);
}
