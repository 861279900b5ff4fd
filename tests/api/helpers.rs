//! tests/api/helpers.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn scratch_dir() -> PathBuf {
    let dir = PathBuf::from(format!("/tmp/countngrams/{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

pub fn write_corpus(files: &[(&str, &str)]) -> PathBuf {
    let dir = scratch_dir();
    for (name, contents) in files {
        fs::write(dir.join(name), contents).expect("Failed to write test document");
    }
    dir
}

/// Reads every `part-r-*` file in an output directory back into one map.
pub fn read_output(output_dir: &Path) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for entry in fs::read_dir(output_dir).expect("Failed to read output dir") {
        let path = entry.expect("Failed to read dir entry").path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("part-r-"), "Unexpected output file: {name}");
        let contents = fs::read_to_string(&path).expect("Failed to read partition file");
        for line in contents.lines() {
            let (key, count) = line.split_once('\t').expect("Malformed record line");
            let previous = counts.insert(key.to_string(), count.parse().expect("Malformed count"));
            assert!(previous.is_none(), "Key {key} appeared in two records");
        }
    }
    counts
}

pub fn expected_counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
