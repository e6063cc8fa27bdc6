// Shared build script logic for turning crate READMEs into rustdoc input.
// Pull into a build.rs with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Rewrite a crate's README.md so rustdoc can consume it, and write the
/// result to `$OUT_DIR/README_GENERATED.md` for `#![doc = include_str!]`.
///
/// Rewrites applied:
/// 1. Drop the 'src/' prefix from intra-crate links so they resolve to modules
/// 2. Drop the '.rs' extension for the same reason
/// 3. Point relative workspace-README links at the repository URL, which is
///    read from the workspace Cargo.toml so READMEs stay URL-agnostic
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        return; // No README, nothing to generate
    };

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rustdoc_content).unwrap();
}

/// Repository URL from the workspace Cargo.toml, if one is declared.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    // Line-based extraction is enough: repository = "https://..."
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository") && line.contains('=') {
            if let (Some(start), Some(end)) = (line.find('"'), line.rfind('"')) {
                if start < end {
                    return Some(line[start + 1..end].to_string());
                }
            }
        }
    }
    None
}
