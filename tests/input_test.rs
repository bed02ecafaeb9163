use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;

use pagesim::{InputError, Policy, parse_reference_string, run_comparison, run_simulation};

#[test]
fn test_parsed_input_drives_the_engine() -> Result<()> {
    let refs = parse_reference_string("7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2")?;
    let result = run_simulation(Policy::Fifo, &refs, 3)?;
    assert_eq!(result.total_faults, 10);
    Ok(())
}

#[test]
fn test_reference_string_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "1,2,3,4,1,2,5,1,2,3,4,5")?;

    let raw = std::fs::read_to_string(file.path())?;
    let refs = parse_reference_string(&raw)?;
    assert_eq!(refs.len(), 12);

    // Belady's anomaly input: FIFO gets worse with the larger frame count.
    let three = run_simulation(Policy::Fifo, &refs, 3)?;
    let four = run_simulation(Policy::Fifo, &refs, 4)?;
    assert_eq!(three.total_faults, 9);
    assert_eq!(four.total_faults, 10);
    Ok(())
}

#[test]
fn test_malformed_token_is_rejected_with_context() {
    let err = parse_reference_string("1,2,three,4").unwrap_err();
    assert_eq!(err, InputError::InvalidToken("three".to_string()));
    assert!(err.to_string().contains("three"));
}

#[test]
fn test_batch_serializes_with_canonical_policy_names() -> Result<()> {
    let refs = parse_reference_string("1,2,1")?;
    let batch = run_comparison(&refs, 2, &Policy::ALL)?;
    let json = serde_json::to_value(&batch)?;

    let results = &json["results"];
    for name in ["FIFO", "LRU", "Optimal"] {
        assert!(results.get(name).is_some(), "missing key {}", name);
    }
    assert_eq!(results["FIFO"]["total_faults"], 2);
    assert_eq!(results["FIFO"]["steps"][0]["frames"][0], 1);
    Ok(())
}
