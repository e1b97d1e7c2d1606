use hystamp_cli::CommandContext;
use hystamp_core::Resolution;
use hystamp_resolver::{MANIFEST_PATH, Manifest};
use serial_test::serial;
use std::{
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};
use tempfile::TempDir;
use zip::{ZipArchive, ZipWriter, write::SimpleFileOptions};

fn write_server_jar(project_dir: &Path, version: &str) {
    let path = project_dir.join("build/hytale/Server/HytaleServer.jar");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file(MANIFEST_PATH, SimpleFileOptions::default())
        .unwrap();
    write!(
        writer,
        "Manifest-Version: 1.0\r\nImplementation-Version: {version}\r\n\r\n"
    )
    .unwrap();
    writer.finish().unwrap();
}

fn write_resources(project_dir: &Path) {
    let resources = project_dir.join("src/main/resources");
    fs::create_dir_all(resources.join("Server/Item")).unwrap();
    fs::write(
        resources.join("manifest.json"),
        r#"{"Name": "${plugin_name}", "Version": "${plugin_version}", "ServerVersion": "${server_version}"}"#,
    )
    .unwrap();
    fs::write(resources.join("Server/Item/tower_key.json"), "{}").unwrap();
}

fn args(project_dir: &Path, rest: &[&str]) -> Vec<String> {
    let mut args = vec![
        "hystamp".to_string(),
        "--project-dir".to_string(),
        project_dir.display().to_string(),
    ];
    args.extend(rest.iter().map(|arg| arg.to_string()));
    args
}

fn read_entry(jar: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(jar).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

async fn resolved_in(project_dir: &Path) -> (String, Resolution) {
    let context = CommandContext::new(Some(project_dir), &[]).await.unwrap();
    let resolved = context.resolve_server_version();
    (resolved.version().to_string(), resolved.resolution())
}

#[tokio::test]
async fn test_cli_resolve_explicit() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();
    fs::write(project_dir.join("gradle.properties"), "server_version=1.4.2\n").unwrap();
    write_server_jar(project_dir, "2026.1.0-abc");

    let result = hystamp_cli::main(&args(project_dir, &["resolve"])).await;
    assert!(result.is_ok());
    assert!(!project_dir.join("build/hystamp").exists());

    let (version, resolution) = resolved_in(project_dir).await;
    assert_eq!(version, "1.4.2");
    assert!(matches!(resolution, Resolution::Explicit));

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_resolve_discovered_json() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();
    write_server_jar(project_dir, "2026.1.0-abc");

    let result = hystamp_cli::main(&args(project_dir, &["resolve", "--format", "json"])).await;
    assert!(result.is_ok());
    assert!(!project_dir.join("build/hystamp").exists());

    let (version, resolution) = resolved_in(project_dir).await;
    assert_eq!(version, "2026.1.0-abc");
    assert!(matches!(resolution, Resolution::Discovered));

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_default_command_smoke() {
    let temp_dir = TempDir::new().unwrap();

    let result = hystamp_cli::main(&args(temp_dir.path(), &[])).await;
    assert!(result.is_ok());
    assert!(!temp_dir.path().join("build").exists());

    let (version, resolution) = resolved_in(temp_dir.path()).await;
    assert_eq!(version, "*");
    assert!(matches!(resolution, Resolution::Wildcard));

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_manifest_uses_discovered_version() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("BattleTowers");
    write_server_jar(&project_dir, "2026.1.0-abc");

    let result = hystamp_cli::main(&args(
        &project_dir,
        &["manifest", "-P", "plugin_author=Ralkage"],
    ))
    .await;
    assert!(result.is_ok());

    let written = fs::read_to_string(project_dir.join("build/hystamp/manifest.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(manifest["Name"], "BattleTowers");
    assert_eq!(manifest["ServerVersion"], "2026.1.0-abc");
    assert_eq!(manifest["Authors"][0]["Name"], "Ralkage");

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_manifest_dry_run() {
    let temp_dir = TempDir::new().unwrap();

    let result = hystamp_cli::main(&args(temp_dir.path(), &["manifest", "--dry-run"])).await;
    assert!(result.is_ok());
    assert!(!temp_dir.path().join("build/hystamp").exists());

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_resources_expands_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("BattleTowers");
    write_resources(&project_dir);

    let result = hystamp_cli::main(&args(
        &project_dir,
        &["resources", "-P", "server_version=1.4.2"],
    ))
    .await;
    assert!(result.is_ok());

    let output = project_dir.join("build/hystamp");
    assert_eq!(
        fs::read_to_string(output.join("manifest.json")).unwrap(),
        r#"{"Name": "BattleTowers", "Version": "0.1.0", "ServerVersion": "1.4.2"}"#
    );
    assert!(output.join("Server/Item/tower_key.json").is_file());

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_jar() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("BattleTowers");
    write_server_jar(&project_dir, "2026.1.0-abc");
    write_resources(&project_dir);
    fs::write(project_dir.join("gradle.properties"), "server_version=*\n").unwrap();

    let result = hystamp_cli::main(&args(&project_dir, &["jar"])).await;
    assert!(result.is_ok());

    let jar = project_dir.join("build/libs/BattleTowers-0.1.0.jar");
    let manifest = Manifest::parse(&read_entry(&jar, MANIFEST_PATH)).unwrap();
    assert_eq!(manifest.get("Specification-Title"), Some("BattleTowers"));
    assert!(
        manifest
            .get("Implementation-Version")
            .unwrap()
            .starts_with("0.1.0")
    );
    assert_eq!(
        read_entry(&jar, "manifest.json"),
        r#"{"Name": "BattleTowers", "Version": "0.1.0", "ServerVersion": "2026.1.0-abc"}"#
    );
    assert_eq!(read_entry(&jar, "Server/Item/tower_key.json"), "{}");

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_jar_custom_output() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path();

    let result = hystamp_cli::main(&args(project_dir, &["jar", "-o", "dist/plugin.jar"])).await;
    assert!(result.is_ok());

    let descriptor: serde_json::Value =
        serde_json::from_str(&read_entry(&project_dir.join("dist/plugin.jar"), "manifest.json"))
            .unwrap();
    assert_eq!(descriptor["ServerVersion"], "*");

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_invalid_property() {
    let temp_dir = TempDir::new().unwrap();

    let result = hystamp_cli::main(&args(temp_dir.path(), &["-P", "server_version"])).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("server_version"));

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join(".hystamp")).unwrap();
    fs::write(temp_dir.path().join(".hystamp/config.json"), "{not json").unwrap();

    let result = hystamp_cli::main(&args(temp_dir.path(), &["config"])).await;
    assert!(result.is_err());

    temp_dir.close().unwrap();
}

#[tokio::test]
async fn test_cli_config() {
    let temp_dir = TempDir::new().unwrap();

    let result = hystamp_cli::main(&args(temp_dir.path(), &["config", "-P", "a=b"])).await;
    assert!(result.is_ok());

    temp_dir.close().unwrap();
}

#[tokio::test]
#[serial]
async fn test_cli_uses_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();
    fs::write(temp_path.join("gradle.properties"), "server_version=1.4.2\n").unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_path).unwrap();

    let args = vec!["hystamp".to_string(), "manifest".to_string()];
    let result = hystamp_cli::main(&args).await;

    std::env::set_current_dir(&original_dir).unwrap();

    assert!(result.is_ok());
    let written = fs::read_to_string(temp_path.join("build/hystamp/manifest.json")).unwrap();
    assert!(written.contains("\"ServerVersion\": \"1.4.2\""));

    temp_dir.close().unwrap();
}
