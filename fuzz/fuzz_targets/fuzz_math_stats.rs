#![no_main]

use libfuzzer_sys::fuzz_target;
use textstat_math::{checked_average, checked_ratio, round_f64};

const MAX_INPUT_SIZE: usize = 1024;

fn read_u32(bytes: &[u8]) -> u32 {
    let mut arr = [0u8; 4];
    let len = bytes.len().min(4);
    arr[..len].copy_from_slice(&bytes[..len]);
    u32::from_le_bytes(arr)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }

    let total = read_u32(data.get(0..4).unwrap_or(&[])) as usize;
    let count = read_u32(data.get(4..8).unwrap_or(&[])) as usize;

    match checked_average(total, count) {
        None => assert_eq!(count, 0),
        Some(avg) => {
            assert!(count > 0);
            assert!(avg >= 0.0);
            assert!(avg <= total as f64 + 0.005);
        }
    }

    let numer = total as f64;
    let denom = count as f64;
    assert_eq!(checked_ratio(numer, denom).is_none(), count == 0);

    let decimals = (data[0] % 6) as u32;
    let rounded = round_f64(numer, decimals);
    assert_eq!(rounded, numer);
});
