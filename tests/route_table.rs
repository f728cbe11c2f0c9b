//! Loading route tables from disk.

use std::io::Write;

use method_router::config::{load_config, ConfigError};

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_resolve() {
    let file = write_table(
        r#"
[[routes]]
name = "root"
method = "GET"
path = "/"

[[routes]]
name = "user_post"
method = "GET"
path = "/users/:user/posts/:post"
"#,
    );

    let router = load_config(file.path()).unwrap().into_router().unwrap();
    assert_eq!(
        router.routes(),
        vec![("GET", "/"), ("GET", "/users/:user/posts/:post")]
    );

    let outcome = router.lookup("GET", "/users/ada/posts/3/");
    assert_eq!(outcome.route, "user_post");
    assert_eq!(
        serde_json::to_value(&outcome.params).unwrap(),
        serde_json::json!({ "user": "ada", "post": "3" })
    );

    let outcome = router.lookup("POST", "/");
    assert_eq!(outcome.route, "not_found");
    assert!(!outcome.matched);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_table_reports_every_problem() {
    let file = write_table(
        r#"
[[routes]]
name = "a"
method = "GET"
path = "/a/"

[[routes]]
name = "a"
method = ""
path = "/b"
"#,
    );

    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected result: {:?}", other),
    }
}
