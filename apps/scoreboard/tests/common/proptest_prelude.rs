// Proptest configuration shared by integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 64).
//
// Generate valid inputs by construction rather than filtering.

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}
