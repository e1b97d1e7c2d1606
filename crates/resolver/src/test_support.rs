use std::{
    fs::{self, File},
    io::Write,
    path::Path,
    time::SystemTime,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::MANIFEST_PATH;

pub fn server_manifest(version: Option<&str>) -> String {
    let mut manifest =
        String::from("Manifest-Version: 1.0\r\nMain-Class: com.hypixel.hytale.Main\r\n");
    if let Some(version) = version {
        manifest.push_str(&format!("Implementation-Version: {version}\r\n"));
    }
    manifest.push_str("\r\n");
    manifest
}

/// Writes a zip with the given entries, creating parent directories.
pub fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

/// Writes a fake server JAR whose manifest carries `version`, optionally backdating its mtime.
pub fn write_server_jar(path: &Path, version: Option<&str>, modified: Option<SystemTime>) {
    let manifest = server_manifest(version);
    write_jar(
        path,
        &[
            (MANIFEST_PATH, manifest.as_bytes()),
            ("com/hypixel/hytale/Main.class", b"\xca\xfe\xba\xbe".as_slice()),
        ],
    );
    if let Some(modified) = modified {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }
}
