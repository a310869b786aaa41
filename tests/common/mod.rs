use assert_cmd::Command;

pub fn quill_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quill").unwrap();
    cmd.env_remove("QUILL_ROOT");
    cmd
}
