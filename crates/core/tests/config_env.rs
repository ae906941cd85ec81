//! Environment override behavior for the configuration loader.
//!
//! Kept in its own binary because the loader reads process-wide
//! `SVGMILL_` variables; other config tests must not see them.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use svgmill_core::load_config;

#[test]
fn test_env_overrides_win_over_file_values() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[batch]
max_parallel = 2

[converter]
tool_path = "/opt/pdf2svg"
"#
    )
    .unwrap();

    std::env::set_var("SVGMILL_BATCH__MAX_PARALLEL", "9");
    std::env::set_var("SVGMILL_CONVERTER__TOOL_PATH", "/env/pdf2svg");

    let config = load_config(temp_file.path()).unwrap();

    std::env::remove_var("SVGMILL_BATCH__MAX_PARALLEL");
    std::env::remove_var("SVGMILL_CONVERTER__TOOL_PATH");

    assert_eq!(config.batch.max_parallel, 9);
    assert_eq!(config.converter.tool_path, PathBuf::from("/env/pdf2svg"));
    // Fields without an override keep their file or default values.
    assert!(!config.batch.keep_sources);
}
