//! End-to-end behavior of a shell session, one input line at a time.

use fakeshell::core::parser::tokenize;
use fakeshell::models::FileSeed;
use fakeshell::{Session, ShellConfig};

fn session() -> Session {
    Session::new(ShellConfig {
        banner: None,
        ..Default::default()
    })
}

fn run(session: &mut Session, line: &str) -> Vec<String> {
    session.handle_input(line)
}

#[test]
fn test_quoted_tokens() {
    let tokens = tokenize(r#"echo "hello world" foo"#);
    assert_eq!(tokens[0], "echo");
    assert_eq!(&tokens[1..], ["hello world", "foo"]);
}

#[test]
fn test_cd_up() {
    let mut shell = session();
    run(&mut shell, "cd /usr/");
    assert_eq!(shell.working_directory(), "/usr/");
    run(&mut shell, "cd ..");
    assert_eq!(shell.working_directory(), "/");
    run(&mut shell, "cd ..");
    assert_eq!(shell.working_directory(), "/");
}

#[test]
fn test_nested_cd_up() {
    let mut shell = session();
    run(&mut shell, "mkdir /usr/lib");
    run(&mut shell, "cd /usr/lib");
    assert_eq!(shell.working_directory(), "/usr/lib/");
    run(&mut shell, "cd ../");
    assert_eq!(shell.working_directory(), "/usr/");
}

#[test]
fn test_ls_marks_directories() {
    let mut shell = session();
    run(&mut shell, "mkdir /home/docs");
    run(&mut shell, "touch /home/docs/readme");

    assert_eq!(run(&mut shell, "ls /home"), vec!["docs/"]);
    assert_eq!(run(&mut shell, "ls /home/docs"), vec!["readme"]);
}

#[test]
fn test_mkdir_twice() {
    let mut shell = session();
    assert!(run(&mut shell, "mkdir /usr/new").is_empty());
    assert_eq!(
        run(&mut shell, "mkdir /usr/new"),
        vec!["mkdir: cannot create directory '/usr/new': File exists"]
    );
}

#[test]
fn test_cat_directory() {
    let mut shell = session();
    run(&mut shell, "mkdir stuff");
    for path in ["stuff", "/stuff/", "home", "/"] {
        let output = run(&mut shell, &format!("cat {}", path));
        assert_eq!(output.len(), 1);
        assert!(output[0].ends_with("Is a directory"), "{:?}", output);
    }
}

#[test]
fn test_redirect_round_trip() {
    let mut shell = session();
    assert!(run(&mut shell, r#"echo "abc" > f.txt"#).is_empty());
    assert_eq!(run(&mut shell, "cat f.txt"), vec!["abc"]);
    assert_eq!(run(&mut shell, "ls"), vec!["home/\tusr/\tf.txt"]);
}

#[test]
fn test_redirect_relative_to_cwd() {
    let mut shell = session();
    run(&mut shell, "cd usr");
    run(&mut shell, "echo plan > notes");
    assert_eq!(run(&mut shell, "cat /usr/notes"), vec!["plan"]);
}

#[test]
fn test_pipe_into_grep() {
    let mut shell = session();
    assert_eq!(run(&mut shell, r#"echo "a" | grep a"#), vec!["a"]);
    assert!(run(&mut shell, r#"echo "a" | grep b"#).is_empty());
}

#[test]
fn test_pipe_ls_into_grep() {
    let mut shell = session();
    assert_eq!(run(&mut shell, "ls /usr | grep secret"), vec!["secretformula.txt"]);
    assert!(run(&mut shell, "ls /usr | grep plankton").is_empty());
}

#[test]
fn test_grep_file_contents() {
    let mut shell = session();
    assert_eq!(
        run(&mut shell, "grep plankton /usr/secretformula.txt"),
        vec!["It's plankton!"]
    );
    assert_eq!(run(&mut shell, "grep x"), vec!["usage: grep PATTERN [FILE]"]);
}

#[test]
fn test_pipe_then_redirect() {
    let mut shell = session();
    run(&mut shell, "echo apple | grep p > fruit");
    assert_eq!(run(&mut shell, "cat fruit"), vec!["apple"]);
}

#[test]
fn test_piped_output_is_trailing_operand() {
    let mut shell = session();
    // echo only prints its first operand, which is its own when it has one
    assert_eq!(run(&mut shell, "echo one | echo two"), vec!["two"]);
    assert_eq!(run(&mut shell, "echo one | echo"), vec!["one"]);
}

#[test]
fn test_unknown_in_pipeline() {
    let mut shell = session();
    assert_eq!(
        run(&mut shell, "nope | grep found"),
        vec!["nope: command not found"]
    );
}

#[test]
fn test_rm_missing_leaves_fs() {
    let mut shell = session();
    let before: Vec<_> = shell.filesystem().iter().cloned().collect();
    assert_eq!(
        run(&mut shell, "rm /nothing/here"),
        vec!["rm: cannot remove '/nothing/here': No such file or directory"]
    );
    let after: Vec<_> = shell.filesystem().iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_rm_directory_orphans_children() {
    let mut shell = session();
    run(&mut shell, "rm usr");
    assert_eq!(run(&mut shell, "ls"), vec!["home/"]);
    // The child record survives the removal of its parent
    assert_eq!(
        run(&mut shell, "cat /usr/secretformula.txt"),
        vec!["It's plankton!"]
    );
}

#[test]
fn test_touch_keeps_content() {
    let mut shell = session();
    run(&mut shell, "echo keep > k");
    run(&mut shell, "touch k");
    run(&mut shell, "touch /k");
    assert_eq!(run(&mut shell, "cat k"), vec!["keep"]);
}

#[test]
fn test_case_insensitive_commands() {
    let mut shell = session();
    assert_eq!(run(&mut shell, "PWD"), vec!["/"]);
    assert_eq!(run(&mut shell, "Echo hi"), vec!["hi"]);
}

#[test]
fn test_exit() {
    let mut shell = session();
    assert!(shell.is_running());
    run(&mut shell, "exit");
    assert!(!shell.is_running());
}

#[test]
fn test_custom_seed() {
    let mut shell = Session::new(ShellConfig {
        banner: Some("welcome".to_string()),
        host: "vault".to_string(),
        user: "dweller".to_string(),
        files: vec![
            FileSeed::dir("/", "etc"),
            FileSeed::file("/etc/", "passwd", "root:x:0:0"),
        ],
    });

    assert_eq!(shell.drain_output(), vec!["welcome"]);
    assert_eq!(shell.prompt(), "dweller@vault:/$  ");
    assert_eq!(run(&mut shell, "cat /etc/passwd"), vec!["root:x:0:0"]);
    assert_eq!(run(&mut shell, "ls"), vec!["etc/"]);
}
