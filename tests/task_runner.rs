use wasm_script::error::TaskError;
use wasm_script::runner::typescript::TypeScriptTaskRunner;
use wasm_script::runner::TaskRunner;
use wasm_script::system::mock::{MemoryStore, ScriptedExecutor};
use wasm_script::system::{CommandOutput, FileStore, ProjectContext};

const PACKAGE_JSON: &str =
    r#"{"scripts":{"build":"javy build/index.js -o build/index.wasm"}}"#;
const WASM: &str = "build/index.wasm";
const INSTALL: &str = "npm install --no-audit --no-optional --legacy-peer-deps --loglevel error";

fn runner(files: &MemoryStore, executor: &ScriptedExecutor) -> TypeScriptTaskRunner {
    TypeScriptTaskRunner::new(ProjectContext::new(
        ".",
        Box::new(executor.clone()),
        Box::new(files.clone()),
    ))
}

fn successful_build() -> ScriptedExecutor {
    ScriptedExecutor::new()
        .on("npm run build", CommandOutput::success("output"))
        .on("npm run gen-metadata", CommandOutput::success("output"))
}

#[test]
fn build_without_build_script_fails() {
    let files = MemoryStore::new();
    files.add_file("package.json", r#"{"build":"javy build/index.js"}"#);
    let executor = ScriptedExecutor::new();

    let err = runner(&files, &executor).build().unwrap_err();
    assert!(matches!(err, TaskError::BuildScriptNotFound));
    assert!(executor.calls().is_empty());
}

#[test]
fn build_with_empty_build_script_fails() {
    let files = MemoryStore::new();
    files.add_file("package.json", r#"{"scripts":{"build":""}}"#);
    let executor = ScriptedExecutor::new();

    let err = runner(&files, &executor).build().unwrap_err();
    assert!(matches!(err, TaskError::InvalidBuildScript));
    assert!(executor.calls().is_empty());
}

#[test]
fn build_with_malformed_manifest_fails_to_parse() {
    let files = MemoryStore::new();
    files.add_file("package.json", "{ not json");
    let executor = ScriptedExecutor::new();

    let err = runner(&files, &executor).build().unwrap_err();
    assert!(matches!(err, TaskError::InvalidManifest(_)));
}

#[test]
fn build_without_generated_wasm_fails() {
    let files = MemoryStore::new();
    files.add_file("package.json", PACKAGE_JSON);
    let executor = successful_build();

    let err = runner(&files, &executor).build().unwrap_err();
    assert!(matches!(err, TaskError::WebAssemblyBinaryNotFound));
    assert_eq!(
        executor.calls(),
        vec!["npm run build".to_string(), "npm run gen-metadata".to_string()]
    );
}

#[test]
fn build_returns_wasm_and_removes_it() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    files.add_file("package.json", PACKAGE_JSON);
    files.add_file(WASM, "some compiled code");
    let executor = successful_build();

    assert!(files.exists(WASM.as_ref()));
    let bytes = runner(&files, &executor).build()?;
    assert_eq!(bytes, b"some compiled code");
    assert!(!files.exists(WASM.as_ref()));
    Ok(())
}

#[test]
fn failing_build_command_carries_its_output() {
    let files = MemoryStore::new();
    files.add_file("package.json", PACKAGE_JSON);
    files.add_file(WASM, "stale");
    let executor = ScriptedExecutor::new().otherwise(CommandOutput::failure("error_output"));

    let err = runner(&files, &executor).build().unwrap_err();
    match err {
        TaskError::SystemCallFailure { ref output } => assert_eq!(output, "error_output"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "error_output");
    assert_eq!(executor.calls(), vec!["npm run build".to_string()]);
    assert!(files.exists(WASM.as_ref()));
}

#[test]
fn failing_metadata_command_with_no_output_has_empty_message() {
    let files = MemoryStore::new();
    files.add_file("package.json", PACKAGE_JSON);
    let executor = ScriptedExecutor::new()
        .on("npm run build", CommandOutput::success("output"))
        .on("npm run gen-metadata", CommandOutput::failure(""));

    let err = runner(&files, &executor).build().unwrap_err();
    assert!(matches!(err, TaskError::SystemCallFailure { .. }));
    assert_eq!(err.to_string(), "");
}

#[test]
fn dependencies_installed_tracks_node_modules() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new();
    assert!(!runner(&files, &executor).dependencies_installed());

    files.add_dir("node_modules");
    assert!(runner(&files, &executor).dependencies_installed());
    assert!(executor.calls().is_empty());
}

#[test]
fn install_runs_npm_when_node_is_recent_enough() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new()
        .on("node --version", CommandOutput::success("v14.15.0\n"))
        .on(INSTALL, CommandOutput::success(""));

    runner(&files, &executor).install_dependencies()?;
    assert_eq!(
        executor.calls(),
        vec!["node --version".to_string(), INSTALL.to_string()]
    );
    Ok(())
}

#[test]
fn install_accepts_pre_release_node() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new()
        .on("node --version", CommandOutput::success("v22.0.0-rc.1\n"))
        .on(INSTALL, CommandOutput::success(""));

    runner(&files, &executor).install_dependencies()?;
    assert!(executor.was_called(INSTALL));
    Ok(())
}

#[test]
fn install_rejects_old_node_without_installing() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new()
        .on("node --version", CommandOutput::success("v14.4.0"))
        .on(INSTALL, CommandOutput::success(""));

    let err = runner(&files, &executor).install_dependencies().unwrap_err();
    assert!(matches!(err, TaskError::DependencyInstall(ref msg) if msg.contains("14.15")));
    assert!(!executor.was_called(INSTALL));
}

#[test]
fn install_compares_major_numerically() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new()
        .on("node --version", CommandOutput::success("v9.99.0"))
        .on(INSTALL, CommandOutput::success(""));

    let err = runner(&files, &executor).install_dependencies().unwrap_err();
    assert!(matches!(err, TaskError::DependencyInstall(_)));
    assert!(!executor.was_called(INSTALL));
}

#[test]
fn install_fails_when_node_is_missing() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new().otherwise(CommandOutput::failure("error message"));

    let err = runner(&files, &executor).install_dependencies().unwrap_err();
    assert!(matches!(err, TaskError::DependencyInstall(ref msg) if msg == "error message"));
}

#[test]
fn install_fails_when_npm_install_fails() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new()
        .on("node --version", CommandOutput::success("v16.0.0"))
        .on(INSTALL, CommandOutput::failure("ERESOLVE unable to resolve"));

    let err = runner(&files, &executor).install_dependencies().unwrap_err();
    assert!(
        matches!(err, TaskError::DependencyInstall(ref msg) if msg == "ERESOLVE unable to resolve")
    );
}

#[test]
fn load_metadata_reads_schema_versions() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    files.add_file(
        "build/metadata.json",
        r#"{"schemaVersions":{"example":{"major":"1","minor":"0"}}}"#,
    );
    let executor = ScriptedExecutor::new();

    let metadata = runner(&files, &executor).load_metadata()?;
    assert_eq!(metadata.schema_versions.len(), 1);
    assert_eq!(metadata.schema_versions["example"].major, "1");
    assert_eq!(metadata.schema_versions["example"].minor, "0");
    Ok(())
}

#[test]
fn load_metadata_without_file_fails() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new();

    let err = runner(&files, &executor).load_metadata().unwrap_err();
    assert!(matches!(err, TaskError::MetadataNotFound));
}

#[test]
fn load_metadata_with_malformed_file_fails_to_parse() {
    let files = MemoryStore::new();
    files.add_file("build/metadata.json", "{\"schemaVersions\": ");
    let executor = ScriptedExecutor::new();

    let err = runner(&files, &executor).load_metadata().unwrap_err();
    assert!(matches!(err, TaskError::InvalidMetadata(_)));
}

#[test]
fn library_version_reads_npm_tree() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new().on(
        "npm -s list --json",
        CommandOutput::success(r#"{"dependencies":{"@scope/api":{"version":"1.2.3"}}}"#),
    );

    let version = runner(&files, &executor).library_version("@scope/api")?;
    assert_eq!(version, "1.2.3");
    Ok(())
}

#[test]
fn library_version_accepts_tree_from_failing_npm_list() -> anyhow::Result<()> {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new().on(
        "npm -s list --json",
        CommandOutput::failure(r#"{"dependencies":{"@scope/api":{"version":"0.9.0"}}}"#),
    );

    let version = runner(&files, &executor).library_version("@scope/api")?;
    assert_eq!(version, "0.9.0");
    Ok(())
}

#[test]
fn library_version_reports_failure_without_tree() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new().on(
        "npm -s list --json",
        CommandOutput::failure("npm ERR! missing"),
    );

    let err = runner(&files, &executor)
        .library_version("@scope/api")
        .unwrap_err();
    assert!(matches!(err, TaskError::SystemCallFailure { ref output } if output == "npm ERR! missing"));
}

#[test]
fn library_version_missing_library() {
    let files = MemoryStore::new();
    let executor = ScriptedExecutor::new().on(
        "npm -s list --json",
        CommandOutput::success(r#"{"dependencies":{}}"#),
    );

    let err = runner(&files, &executor)
        .library_version("@scope/api")
        .unwrap_err();
    assert!(matches!(err, TaskError::ApiLibraryNotFound(ref name) if name == "@scope/api"));
}
