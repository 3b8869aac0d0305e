use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("read_dir({}): {err}", dir.display()));
    for entry in entries {
        let entry = entry.unwrap_or_else(|err| panic!("read_dir entry ({}): {err}", dir.display()));
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

fn offenders(dir: &str, is_offending: impl Fn(&Path, &str) -> bool) -> Vec<String> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    collect_rs_files(&manifest_dir.join(dir), &mut files);
    files.sort();

    files
        .into_iter()
        .filter(|file| {
            let contents = fs::read_to_string(file)
                .unwrap_or_else(|err| panic!("read_to_string({}): {err}", file.display()));
            is_offending(file, &contents)
        })
        .map(|file| {
            file.strip_prefix(&manifest_dir)
                .unwrap_or(file.as_path())
                .display()
                .to_string()
        })
        .collect()
}

#[test]
fn widgets_depend_on_core_only() {
    let found = offenders("src/widgets", |_, contents| {
        ["crate::render", "crate::runtime", "crate::platform"]
            .iter()
            .any(|layer| contents.contains(layer))
    });
    assert!(
        found.is_empty(),
        "widgets must depend on `core` only, but found other layers in:\n{}",
        found.join("\n")
    );
}

#[test]
fn only_the_output_gate_writes_to_terminals() {
    let found = offenders("src", |file, contents| {
        !file.ends_with("core/output.rs")
            && !file.ends_with("platform/process_terminal.rs")
            && (contents.contains("term.write(") || contents.contains("terminal.write("))
    });
    assert!(
        found.is_empty(),
        "terminal writes must go through `OutputGate::flush`, found in:\n{}",
        found.join("\n")
    );
}
