use fileserve::http::mime::{ContentTypes, DEFAULT_CONTENT_TYPE, extension};

#[test]
fn test_known_extensions() {
    let types = ContentTypes::default();
    let cases = vec![
        ("data.json", "text/json"),
        ("index.html", "text/html"),
        ("index.htm", "text/html"),
        ("style.css", "text/css"),
        ("song.mp3", "audio/mpeg"),
        ("clip.wav", "audio/wav"),
        ("movie.mp4", "video/mp4"),
        ("icon.png", "image/png"),
        ("anim.gif", "image/gif"),
        ("photo.jpeg", "image/jpeg"),
        ("photo.jpg", "image/jpeg"),
        ("paper.pdf", "application/pdf"),
    ];

    for (path, expected) in cases {
        assert_eq!(types.resolve(path), expected, "path {}", path);
    }
}

#[test]
fn test_unknown_or_missing_extension_falls_back() {
    let types = ContentTypes::default();

    assert_eq!(types.resolve("notes.txt"), DEFAULT_CONTENT_TYPE);
    assert_eq!(types.resolve("archive.tar.gz"), DEFAULT_CONTENT_TYPE);
    assert_eq!(types.resolve("Makefile"), DEFAULT_CONTENT_TYPE);
    assert_eq!(types.resolve("/web/dir.v2/README"), DEFAULT_CONTENT_TYPE);
    assert_eq!(types.resolve(""), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_uppercase_extension_is_not_recognised() {
    let types = ContentTypes::default();
    assert_eq!(types.resolve("INDEX.HTML"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_resolve_uses_full_path() {
    let types = ContentTypes::default();
    assert_eq!(types.resolve("./web/docs/index.html"), "text/html");
}

#[test]
fn test_extension_extraction() {
    assert_eq!(extension("a/b/c.css"), Some(".css"));
    assert_eq!(extension("a/b/c.html/"), Some(".html"));
    assert_eq!(extension("a/b/c"), None);
    assert_eq!(extension("a.b/c"), None);
    assert_eq!(extension("trailing."), Some("."));
}
