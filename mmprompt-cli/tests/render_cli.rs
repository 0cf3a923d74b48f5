use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn mmprompt_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mmprompt"));
    cmd.env("HOME", home).env("USERPROFILE", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_with_default_template() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--audio", "3:2", "--text", "hello"])
        .assert()
        .success()
        .stdout("<__media__><__media__>hello");
}

#[test]
fn render_videos_only() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--video", "2"])
        .assert()
        .success()
        .stdout("[vid-0][vid-1]");
}

#[test]
fn inline_template_overrides_config() {
    let home = TempDir::new().expect("home");
    let dir = home.path().join(".mmprompt");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("config.yaml"), "template: \"CONFIG {{ Text }}\"\n").expect("write config");

    mmprompt_cmd(home.path())
        .args(["render", "--text", "x"])
        .assert()
        .success()
        .stdout("CONFIG x");

    mmprompt_cmd(home.path())
        .args(["render", "--text", "x", "--template", "INLINE {{ Text }}"])
        .assert()
        .success()
        .stdout("INLINE x");
}

#[test]
fn template_file_and_explicit_config() {
    let home = TempDir::new().expect("home");
    let tpl = home.path().join("prompt.tera");
    fs::write(&tpl, "{% for i in Images %}<image {{ i.ID }}>{% endfor %}{{ Text }}").expect("write tpl");
    let cfg = home.path().join("custom.yaml");
    fs::write(&cfg, "template: \"ignored\"\n").expect("write config");

    mmprompt_cmd(home.path())
        .args(["render", "--images", "5:2", "--text", "what is this?", "--config"])
        .arg(&cfg)
        .arg("--template-file")
        .arg(&tpl)
        .assert()
        .success()
        .stdout("<image 3><image 4>what is this?");
}

#[test]
fn malformed_template_fails_with_no_output() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--template", "{% for a in Audio %}<__media__>", "--audio", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("template compile error"));
}

#[test]
fn check_reports_valid_and_invalid_templates() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--check"])
        .assert()
        .success()
        .stdout(contains("template ok"));

    mmprompt_cmd(home.path())
        .args(["render", "--check", "--template", "{{ Text "])
        .assert()
        .failure()
        .stderr(contains("template is invalid"));
}

#[test]
fn invalid_window_is_rejected_by_argument_parsing() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--images", "two"])
        .assert()
        .failure()
        .stderr(contains("invalid media count"));
}

#[test]
fn window_beyond_id_range_is_rejected_by_argument_parsing() {
    let home = TempDir::new().expect("home");
    mmprompt_cmd(home.path())
        .args(["render", "--video", "18446744073709551615:2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("out of range"));
}

#[test]
fn corrupt_config_is_reported() {
    let home = TempDir::new().expect("home");
    let cfg = home.path().join("bad.yaml");
    fs::write(&cfg, "template: [unclosed").expect("write config");

    mmprompt_cmd(home.path())
        .args(["render", "--config"])
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(contains("bad.yaml"));
}

#[test]
fn convert_to_wav_format_is_a_no_op() {
    let home = TempDir::new().expect("home");
    let src = home.path().join("speech.wav");
    fs::write(&src, b"RIFF").expect("write");

    mmprompt_cmd(home.path())
        .args(["convert", "--format", "wav"])
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("speech.wav"));
}

#[test]
fn convert_with_missing_ffmpeg_fails() {
    let home = TempDir::new().expect("home");
    let src = home.path().join("speech.wav");
    fs::write(&src, b"RIFF").expect("write");
    let cfg = home.path().join("cfg.yaml");
    fs::write(&cfg, "ffmpeg_path: /nonexistent/ffmpeg\n").expect("write config");

    mmprompt_cmd(home.path())
        .args(["convert", "--format", "mp3", "--config"])
        .arg(&cfg)
        .arg(&src)
        .assert()
        .failure()
        .stderr(contains("failed to convert"));
}
