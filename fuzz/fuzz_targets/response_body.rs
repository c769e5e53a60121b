#![no_main]

use libfuzzer_sys::fuzz_target;
use ratecheck::probe::ResponseBody;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    match ratecheck::fuzzing::parse_response_body_input(&input) {
        ResponseBody::Json(value) => {
            debug_assert!(serde_json::to_string(&value).is_ok());
        }
        ResponseBody::Raw { text, parse_error } => {
            debug_assert_eq!(text, input);
            debug_assert!(!parse_error.is_empty());
        }
    }
});
