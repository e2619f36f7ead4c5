#![no_main]

use libfuzzer_sys::fuzz_target;
use tscat::Catalog;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_ts_str(input) else {
        return;
    };

    // Every parsed message resolves without panicking.
    for context in catalog.contexts() {
        for entry in context.messages() {
            let _ = catalog.translate(context.name(), &entry.source, entry.disambiguation());
            let _ = catalog.translate_plural(context.name(), &entry.source, None, 7);
        }
    }
    let _ = catalog.coverage_report();
    let _ = catalog.placeholder_issues();

    // Serialized output must parse back to the same messages.
    let reparsed = Catalog::from_ts_str(&catalog.to_ts_string())
        .expect("serialized catalog must parse");
    assert_eq!(reparsed.contexts().len(), catalog.contexts().len());
    for (a, b) in catalog.contexts().iter().zip(reparsed.contexts()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.messages(), b.messages(), "context {:?}", a.name());
    }
});
