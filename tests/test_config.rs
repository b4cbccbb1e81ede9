use std::path::PathBuf;

use fileserve::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.content_root, PathBuf::from("./web"));
    assert_eq!(cfg.templates_dir, PathBuf::from("./templates"));
    assert_eq!(cfg.read_timeout_secs, 60);
    assert_eq!(cfg.listen_addr(), "localhost:8000");
}

#[test]
fn test_config_env_overrides() {
    // Only this test touches these variables
    unsafe {
        std::env::remove_var("FILESERVE_CONFIG");
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "3000");
        std::env::set_var("CONTENT_ROOT", "/srv/www");
    }
    let cfg = Config::load().unwrap();
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("CONTENT_ROOT");
    }

    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    assert_eq!(cfg.content_root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml("port: 9090\ncontent_root: ./public\n").unwrap();

    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.content_root, PathBuf::from("./public"));
    // Unset fields keep their defaults
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.read_timeout_secs, 60);
}

#[test]
fn test_config_from_yaml_rejects_bad_types() {
    assert!(Config::from_yaml("port: not-a-number\n").is_err());
}

#[test]
fn test_config_read_timeout() {
    let cfg = Config::from_yaml("read_timeout_secs: 5\n").unwrap();
    assert_eq!(cfg.read_timeout().as_secs(), 5);
}
