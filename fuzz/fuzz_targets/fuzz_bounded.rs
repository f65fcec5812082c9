#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::sequence::generate_up_to_max;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[..8]);
    let max_value = i64::from_le_bytes(bytes);

    // Should not panic, and never exceed the bound
    let seq = generate_up_to_max(max_value);
    assert!(seq.terms().iter().all(|&t| t <= max_value));
    assert_eq!(seq.is_empty(), max_value < 0);
});
