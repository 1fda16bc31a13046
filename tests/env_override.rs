// Kept in its own test binary: it mutates the process environment.

use std::path::PathBuf;

use scaffold_check::CheckerConfig;

#[test]
fn test_environment_overrides_base_path() {
    // SAFETY: the only test in this binary, so no other thread reads the environment.
    unsafe { std::env::set_var("SCAFFOLD_CHECK__BASE_PATH", "/srv/ci-checkout") };

    let result = CheckerConfig::load(None);

    unsafe { std::env::remove_var("SCAFFOLD_CHECK__BASE_PATH") };

    let config = result.unwrap();
    assert_eq!(config.base_path, PathBuf::from("/srv/ci-checkout"));
    assert!(!config.entries.is_empty());
}
