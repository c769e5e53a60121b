#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(args) = ratecheck::fuzzing::apply_config_from_toml(input) {
            debug_assert!(args.count.get() >= 1);
            debug_assert!(args.delay.as_millis() > 0);
        }
    }
});
