use proxysort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let indices = sort_i64(&input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(indices.len(), count);

    // limited verification to save time
    for i in 0..count - 1 {
        let a = input[indices[i]];
        let b = input[indices[i + 1]];
        assert!(a <= b, "Sort failed at index {}", i);
    }
}

#[test]
fn test_heap_sort_100k() {
    let count = 100_000;
    let mut rng = rand::rng();
    let input: Vec<f64> = (0..count).map(|_| rng.random_range(-1.0..1.0)).collect();

    let sorter = sorter_for(<[f64]>::len, TotalOrder);
    assert_eq!(sorter.algorithm_for(count), Algorithm::Heap);

    let start = Instant::now();
    let indices = sorter.sort(&input[..]);
    println!("Heap sorted 100k elements in {:?}", start.elapsed());

    assert!(proxysort::permutation::is_permutation_of(&indices, 0..count));
    assert!(indices.windows(2).all(|w| input[w[0]] <= input[w[1]]));
}

#[test]
fn test_range_1m() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..1000)).collect();

    let range = 250_000..750_000;
    let indices = sort_ord_range(&input, range.clone()).unwrap();

    assert_eq!(indices.len(), range.len());
    assert!(indices.iter().all(|i| range.contains(i)));
    assert!(indices.windows(2).all(|w| {
        input[w[0]] < input[w[1]] || (input[w[0]] == input[w[1]] && w[0] < w[1])
    }));
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: This test requires significant RAM (~2.5GB+).
    // 100M elements * 8 bytes input = 800MB
    // Output overhead: 100M * 8 bytes usize = 800MB
    // Merge scratch: up to 100M * 8 bytes = 800MB
    let count = 100_000_000;
    println!(
        "Generating {} random elements... (Expect high RAM usage)",
        count
    );

    let mut rng = rand::rng();
    let mut input = vec![0u64; count];
    println!("Filling data...");
    rng.fill(&mut input[..]);

    println!("Sorting 100M elements...");
    let start = Instant::now();
    let indices = sort_ord(&input);
    let duration = start.elapsed();
    println!("Sorted 100M elements in {:?}", duration);

    assert_eq!(indices.len(), count);

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        assert!(input[indices[i]] <= input[indices[i + 1]], "Sort failed at index {}", i);
    }
}
