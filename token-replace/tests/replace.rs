use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use token_replace::{Error, ReplaceOrder, SubstitutionMap, replace_in_file};

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_greeting_example() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "greeting.txt", "Hello TOKEN1, welcome to TOKEN2!");
    let args = ["TOKEN1=World", r#"TOKEN2="our site""#];
    let map = SubstitutionMap::from_args(args).unwrap();

    let stats = replace_in_file(&path, &map).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Hello World, welcome to our site!"
    );
    assert_eq!(stats.lines, 1);
    assert_eq!(stats.lines_changed, 1);
}

#[test]
fn test_multiline_file() {
    let dir = TempDir::new().unwrap();
    let content = "host = DB_HOST\nport = DB_PORT\n# untouched\nurl = DB_HOST:DB_PORT\n";
    let path = write(&dir, "app.conf", content);
    let args = ["DB_HOST=localhost", "DB_PORT=5432"];
    let map = SubstitutionMap::from_args(args).unwrap();

    let stats = replace_in_file(&path, &map).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "host = localhost\nport = 5432\n# untouched\nurl = localhost:5432\n"
    );
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.lines_changed, 3);
}

#[test]
fn test_idempotent_when_values_contain_no_tokens() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "twice.txt", "A and B\nB then A\n");
    let map = SubstitutionMap::from_args(["A=alpha", "B=beta"]).unwrap();

    replace_in_file(&path, &map).unwrap();
    let once = fs::read_to_string(&path).unwrap();
    replace_in_file(&path, &map).unwrap();
    let twice = fs::read_to_string(&path).unwrap();

    assert_eq!(once, "alpha and beta\nbeta then alpha\n");
    assert_eq!(once, twice);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let map = SubstitutionMap::from_args(["A=1"]).unwrap();

    let err = replace_in_file(&path, &map).unwrap_err();

    match err {
        Error::FileNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert!(!path.exists());
    assert!(
        dir_entries(dir.path()).is_empty(),
        "no temporary file may be left behind"
    );
}

#[test]
fn test_no_temporary_file_left_after_success() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "clean.txt", "X\n");
    let map = SubstitutionMap::from_args(["X=Y"]).unwrap();

    replace_in_file(&path, &map).unwrap();

    assert_eq!(dir_entries(dir.path()), ["clean.txt"]);
}

#[test]
fn test_invalid_utf8_leaves_original_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.dat");
    let original = vec![b'X', b'\n', 0xFF, 0xFE, b'\n'];
    fs::write(&path, &original).unwrap();
    let map = SubstitutionMap::from_args(["X=Y"]).unwrap();

    let err = replace_in_file(&path, &map).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(dir_entries(dir.path()), ["binary.dat"]);
}

#[test]
fn test_cascading_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cascade.txt", "A B\n");
    let map = SubstitutionMap::from_args(["A=B", "B=C"]).unwrap();

    replace_in_file(&path, &map).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "C C\n");
}

#[test]
fn test_longest_first_policy() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "overlap.txt", "FOO FOOBAR\n");

    let args = ["FOO=short", "FOOBAR=long"];
    let map = SubstitutionMap::from_args(args).unwrap();
    let map = map.ordered(ReplaceOrder::LongestFirst);
    replace_in_file(&path, &map).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "short long\n");

    let path = write(&dir, "overlap.txt", "FOO FOOBAR\n");
    let map = SubstitutionMap::from_args(args).unwrap();
    replace_in_file(&path, &map).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "short shortBAR\n");
}

#[test]
fn test_hyphen_prefixed_tokens() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "flags.conf", "port=--PORT--\nname=-NAME-\n");
    let args = ["--PORT--=8080", "-NAME-=web"];
    let map = SubstitutionMap::from_args(args).unwrap();

    replace_in_file(&path, &map).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "port=8080\nname=web\n");
}

#[test]
fn test_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.txt", "");
    let map = SubstitutionMap::from_args(["A=1"]).unwrap();

    let stats = replace_in_file(&path, &map).unwrap();

    assert_eq!(stats.lines, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn test_permissions_preserved() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "run.sh", "echo NAME\n");
    let permissions = fs::Permissions::from_mode(0o751);
    fs::set_permissions(&path, permissions).unwrap();
    let map = SubstitutionMap::from_args(["NAME=hi"]).unwrap();

    replace_in_file(&path, &map).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o751);
    assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\n");
}
