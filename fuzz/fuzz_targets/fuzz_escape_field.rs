#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the quoting invariants must hold.
        let escaped = csvout::escape_field(s, false);
        if s.contains([',', '"', '\n', '\r']) {
            assert!(escaped.starts_with('"') && escaped.ends_with('"'));
        } else {
            assert_eq!(escaped.as_ref(), s);
        }

        let forced = csvout::escape_field(s, true);
        assert!(forced.starts_with('"') && forced.ends_with('"'));
    }
});
