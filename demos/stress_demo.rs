use recset::{mix_u64, IdSet};
use std::time::Instant;

fn main() {
    println!("🚀 RecSet Stress Demo");
    println!("=====================");

    let mut set = IdSet::new();

    // Rapid fire insert test
    println!("\n📝 Testing rapid inserts...");
    let n = 5_000_000usize;
    let keys: Vec<i64> = (1..=n as u64).map(|c| mix_u64(c) as i64).collect();

    let insert_start = Instant::now();
    for (i, &id) in keys.iter().enumerate() {
        set.put(id);
        if i % 1_000_000 == 0 && i > 0 {
            let elapsed = insert_start.elapsed();
            let rate = i as f64 / elapsed.as_secs_f64();
            println!("  {} ids inserted, rate: {:.0} inserts/sec", i, rate);
        }
    }
    let total_insert_time = insert_start.elapsed();

    println!(
        "✅ Inserted {} ids in {:.2}ms",
        keys.len(),
        total_insert_time.as_millis()
    );
    println!(
        "   Average: {:.0} ns per insert",
        total_insert_time.as_nanos() as f64 / keys.len() as f64
    );

    // Rapid fire lookup test
    println!("\n🔍 Testing rapid lookups...");
    let lookup_start = Instant::now();
    let mut hits = 0usize;
    for &id in &keys {
        if set.contains(id) {
            hits += 1;
        }
    }
    let lookup_time = lookup_start.elapsed();
    println!(
        "  {} hits / {} probes in {:.2}ms ({:.0} ns per lookup)",
        hits,
        keys.len(),
        lookup_time.as_millis(),
        lookup_time.as_nanos() as f64 / keys.len() as f64
    );

    let miss_start = Instant::now();
    let mut false_hits = 0usize;
    for c in (n as u64 + 1)..(n as u64 + 1_000_001) {
        if set.contains(mix_u64(c) as i64) {
            false_hits += 1;
        }
    }
    println!(
        "  {} false hits / 1M disjoint probes in {:.2}ms",
        false_hits,
        miss_start.elapsed().as_millis()
    );

    // Occupancy stats
    println!("\n📊 Final Statistics:");
    println!("{}", set.stats());
    let (empty, inline, spilled) = set.bucket_stats();
    println!(
        "Bucket census: {} empty, {} inline, {} spilled",
        empty, inline, spilled
    );

    // Clear / refill test
    println!("\n🧹 Testing clear + refill...");
    let clear_start = Instant::now();
    set.clear();
    println!("  Cleared in {:.2}ms", clear_start.elapsed().as_millis());

    let refill_start = Instant::now();
    for &id in &keys {
        set.put(id);
    }
    println!(
        "  Refilled {} ids in {:.2}ms (capacity retained)",
        keys.len(),
        refill_start.elapsed().as_millis()
    );
}
