use backed_enum::BackedEnum;
use tracing_subscriber::EnvFilter;

/// Routes library events to the test harness output; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("backed_enum=trace"))
        .try_init();
}

/// The `{FOO: 1, BAR: 2, BAZ: 8}` enumeration most scenarios run against.
#[must_use]
pub fn flags() -> BackedEnum<i32> {
    init_tracing();
    BackedEnum::new([("FOO", 1), ("BAR", 2), ("BAZ", 8)])
}

/// Sorts a value listing so it can be compared as a multiset.
#[must_use]
pub fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values
}
