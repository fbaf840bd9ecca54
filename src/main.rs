use stress_test::{stress_test_advance, stress_test_scaling, stress_test_stability};
pub mod stress_test;

fn main() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async_main());
}

async fn async_main() {
    // Run async stress tests
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            ASYNC STRESS TESTS                               ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Test 1: small scale, dense soups
    let stats = stress_test_advance(4, 100, 32, 150).await;
    stats.print();

    // Test 2: medium scale
    let stats = stress_test_advance(16, 250, 64, 300).await;
    stats.print();

    // Test 3: outcome mix for random soups through the detector
    stress_test_stability(20, 24, 80).await;

    // Test 4: sparse-advance scaling with grid size
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (sparse advance)                 ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_test_scaling(200, 50, 5).await;

    println!("\n✓ All stress tests completed successfully!");
}
