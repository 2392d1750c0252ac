use super::*;

fn artifact(name: &str, bytes: &[u8]) -> ExportArtifact {
    ExportArtifact {
        file_name: name.to_string(),
        mime: "image/svg+xml",
        bytes: bytes.to_vec(),
    }
}

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hueforge-sink-{tag}-{}", std::process::id()))
}

#[test]
fn in_memory_sink_keeps_delivery_order() {
    let mut sink = InMemorySink::new();
    sink.deliver(artifact("a.svg", b"1")).unwrap();
    sink.deliver(artifact("b.svg", b"2")).unwrap();
    let names: Vec<&str> = sink.artifacts().iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.svg", "b.svg"]);
}

#[test]
fn dir_sink_creates_directory_and_overwrites() {
    let dir = scratch_dir("write").join("nested");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = DirSink::new(&dir);
    sink.deliver(artifact("gradient-1x1.svg", b"first")).unwrap();
    sink.deliver(artifact("gradient-1x1.svg", b"second")).unwrap();

    let path = dir.join("gradient-1x1.svg");
    assert_eq!(std::fs::read(&path).unwrap(), b"second");
    assert_eq!(sink.written(), &[path.clone(), path]);

    let _ = std::fs::remove_dir_all(scratch_dir("write"));
}

#[test]
fn dir_sink_rejects_path_like_names() {
    let mut sink = DirSink::new(scratch_dir("reject"));
    assert!(sink.deliver(artifact("../x.svg", b"")).is_err());
    assert!(sink.deliver(artifact("", b"")).is_err());
    assert!(sink.written().is_empty());
}
