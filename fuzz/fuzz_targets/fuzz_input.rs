#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::input::{parse_max_value, parse_term_count, Choice};
use fibseq_core::sequence::generate;
use fibseq_core::MAX_TERMS;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Choice::parse(raw);

    if let Ok(request) = parse_term_count(raw) {
        assert!((1..=MAX_TERMS).contains(&request.count));
        assert_eq!(generate(request.count).len(), request.count);
    }

    if let Ok(max_value) = parse_max_value(raw) {
        assert!(max_value >= 0);
    }
});
