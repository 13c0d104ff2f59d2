//! Integration tests for repotext


use harness::{TestRepo, export, run_repotext, tree_section};

#[test]
fn test_basic_document() {
    let repo = TestRepo::with_git();
    repo.add_file("src/main.ts", "console.log('hi');");
    repo.add_file("package.json", "{ \"name\": \"demo\" }");

    let doc = export(&repo, &[]);
    assert_eq!(
        doc,
        "File Tree:\n\
         ├─ package.json\n\
         └─ src\n   \
         └─ main.ts\n\
         \n\
         ===== BEGIN package.json =====\n\
         { \"name\": \"demo\" }\n\
         \n\
         ===== BEGIN src/main.ts =====\n\
         console.log('hi');\n\
         \n"
    );
}

#[test]
fn test_tree_rendering_connectors() {
    let repo = TestRepo::with_git();
    repo.add_file("a/b.txt", "b");
    repo.add_file("a/c.txt", "c");
    repo.add_file("d.txt", "d");

    let doc = export(&repo, &[]);
    assert_eq!(
        tree_section(&doc),
        vec!["├─ a", "│  ├─ b.txt", "│  └─ c.txt", "└─ d.txt"]
    );
}

#[test]
fn test_only_tracked_files_listed() {
    let repo = TestRepo::with_git();
    repo.add_file("tracked.ts", "tracked");
    repo.add_untracked("untracked.ts", "untracked");

    let doc = export(&repo, &[]);
    assert!(doc.contains("tracked.ts"));
    assert!(
        !doc.contains("untracked.ts"),
        "untracked files come from neither tree nor content: {}",
        doc
    );
}

#[test]
fn test_excluded_directory_absent() {
    let repo = TestRepo::with_git();
    repo.add_file("src/index.ts", "index");
    repo.add_file("dist/index.ts", "compiled");
    repo.add_file("dist/bundle.js", "bundle");

    let doc = export(&repo, &[]);
    assert!(
        !doc.contains("bundle.js"),
        "excluded, non-included path must be absent: {}",
        doc
    );
    // The extension filter is an inclusion rule and overrides the exclusion.
    assert!(doc.contains("===== BEGIN dist/index.ts =====\ncompiled\n"));
}

#[test]
fn test_inclusion_overrides_exclusion() {
    let repo = TestRepo::with_git();
    repo.add_file("dist/package.json", "{ \"private\": true }");
    repo.add_file("dist/types.ts", "export type T = 1;");
    repo.add_file("dist/bundle.js", "bundle");

    let doc = export(&repo, &[]);
    let tree = tree_section(&doc);
    assert_eq!(tree, vec!["└─ dist", "   ├─ package.json", "   └─ types.ts"]);
    assert!(doc.contains("===== BEGIN dist/package.json =====\n{ \"private\": true }\n"));
    assert!(doc.contains("===== BEGIN dist/types.ts =====\nexport type T = 1;\n"));
}

#[test]
fn test_unmatched_extension_in_tree_only() {
    let repo = TestRepo::with_git();
    repo.add_file("docs/guide.md", "# Guide");
    repo.add_file("src/app.ts", "app");

    let doc = export(&repo, &[]);
    assert!(tree_section(&doc).contains(&"│  └─ guide.md"));
    assert!(!doc.contains("===== BEGIN docs/guide.md ====="));
    assert!(!doc.contains("# Guide"));
    assert!(doc.contains("===== BEGIN src/app.ts ====="));
}

#[test]
fn test_glob_exclusion() {
    let repo = TestRepo::with_git();
    repo.add_file("logs/server.log", "log line");
    repo.add_file("e2e/home.spec.ts-snapshots/home.txt", "snapshot");
    repo.add_file("e2e/home.spec.ts", "spec");

    let doc = export(&repo, &[]);
    assert!(!doc.contains("server.log"));
    assert!(!doc.contains("home.txt"));
    assert!(doc.contains("===== BEGIN e2e/home.spec.ts ====="));
}

#[test]
fn test_include_all() {
    let repo = TestRepo::with_git();
    repo.add_file("dist/bundle.js", "bundle");
    repo.add_file("debug.log", "log");
    repo.add_file("notes.txt", "notes");

    let doc = export(&repo, &["--include-all"]);
    for path in ["dist/bundle.js", "debug.log", "notes.txt"] {
        assert!(
            doc.contains(&format!("===== BEGIN {} =====", path)),
            "{} missing with --include-all: {}",
            path,
            doc
        );
    }
    assert!(!doc.contains(".git/"));
}

#[test]
fn test_custom_extensions() {
    let repo = TestRepo::with_git();
    repo.add_file("src/lib.rs", "pub fn f() {}");
    repo.add_file("Cargo.toml", "[package]");
    repo.add_file("src/app.ts", "app");

    let doc = export(&repo, &["--extensions", "rs", "toml"]);
    assert!(doc.contains("===== BEGIN src/lib.rs =====\npub fn f() {}\n"));
    assert!(doc.contains("===== BEGIN Cargo.toml =====\n[package]\n"));
    assert!(!doc.contains("===== BEGIN src/app.ts ====="));
}

#[test]
fn test_extra_exclude_and_include() {
    let repo = TestRepo::with_git();
    repo.add_file("generated/api.js", "generated");
    repo.add_file("Makefile", "all:");
    repo.add_file("src/app.ts", "app");

    let doc = export(&repo, &["--exclude", "generated/", "--include", "Makefile"]);
    assert!(!doc.contains("generated"));
    assert!(doc.contains("===== BEGIN Makefile =====\nall:\n"));
}

#[test]
fn test_end_markers() {
    let repo = TestRepo::with_git();
    repo.add_file("a.ts", "a");

    let doc = export(&repo, &["--end-markers"]);
    assert!(doc.ends_with("===== BEGIN a.ts =====\na\n===== END a.ts =====\n\n"));
}

#[test]
fn test_idempotent_output() {
    let repo = TestRepo::with_git();
    repo.add_file("src/a.ts", "a");
    repo.add_file("src/nested/b.tsx", "b");
    repo.add_file("README.md", "readme");

    assert_eq!(export(&repo, &[]), export(&repo, &[]));
}

#[test]
fn test_positional_form() {
    let repo = TestRepo::with_git();
    repo.add_file("lib/util.py", "def f(): pass");
    repo.add_file("lib/util.ts", "export {}");

    let result = run_repotext(repo.path(), &[".", "dump.txt", ".py"]);
    assert!(result.success(), "stderr: {}", result.stderr);

    let doc = repo.read("dump.txt");
    assert!(doc.contains("===== BEGIN lib/util.py =====\ndef f(): pass\n"));
    assert!(!doc.contains("===== BEGIN lib/util.ts ====="));
}

#[test]
fn test_default_output_path() {
    let repo = TestRepo::with_git();
    repo.add_file("a.ts", "a");

    let result = run_repotext(repo.path(), &[]);
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(repo.read("output.txt").starts_with("File Tree:\n└─ a.ts\n"));
    assert!(result.stderr.contains("Processing completed!"));
}

#[test]
fn test_subdirectory_of_repository() {
    let repo = TestRepo::with_git();
    repo.add_file("packages/web/src/index.ts", "web");
    repo.add_file("packages/api/src/index.ts", "api");

    let doc = export(&repo, &["--repo-path", "packages/web"]);
    assert_eq!(tree_section(&doc), vec!["└─ src", "   └─ index.ts"]);
    assert!(doc.contains("===== BEGIN src/index.ts =====\nweb\n"));
    assert!(!doc.contains("api"));
}

#[test]
fn test_walk_fallback_without_git() {
    let repo = TestRepo::new();
    repo.add_file("b.ts", "b");
    repo.add_file("a/c.ts", "c");
    repo.add_file("node_modules/dep/index.js", "dep");

    let doc = export(&repo, &["--no-git"]);
    assert_eq!(tree_section(&doc), vec!["├─ a", "│  └─ c.ts", "└─ b.ts"]);
    assert!(doc.contains("===== BEGIN a/c.ts =====\nc\n"));
    assert!(!doc.contains("node_modules"));
}

#[test]
fn test_no_git_lists_untracked_files() {
    let repo = TestRepo::with_git();
    repo.add_file("tracked.ts", "tracked");
    repo.add_untracked("untracked.ts", "untracked");

    let doc = export(&repo, &["--no-git"]);
    assert!(doc.contains("===== BEGIN untracked.ts ====="));
    assert!(!doc.contains(".git/"));
    assert!(!doc.contains("HEAD"));
}
