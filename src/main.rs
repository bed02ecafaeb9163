use anyhow::Result;

use pagesim::{Policy, run_comparison};

fn main() -> Result<()> {
    env_logger::init();

    // Classic demand-paging example: 13 references over 3 frames
    let reference_string = vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    let frame_count = 3;

    let batch = run_comparison(&reference_string, frame_count, &Policy::ALL)?;

    println!("Reference string: {:?}", reference_string);
    println!("Frame count: {}", frame_count);
    println!();
    for (policy, result) in batch.iter() {
        println!(
            "{:<8} {:>2} faults / {} references (rate {:.2})",
            policy.name(),
            result.total_faults,
            result.steps.len(),
            result.fault_rate
        );
    }

    Ok(())
}
