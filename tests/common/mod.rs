use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub out_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let out_dir = tmp.path().join("out");

        Self {
            _tmp: tmp,
            home,
            out_dir,
        }
    }

    /// Writes a config file under the temp dir and returns its path.
    pub fn write_config(&self, name: &str, body: &str) -> PathBuf {
        let path = self._tmp.path().join(name);
        fs::write(&path, body).expect("write config fixture");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cluesmith");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run(&self, key: &str, config: &Path, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg(key)
            .arg(config)
            .arg("--out-dir")
            .arg(&self.out_dir)
            .args(extra);
        cmd
    }

    pub fn run_json(&self, key: &str, config: &Path, extra: &[&str]) -> Value {
        let out = self
            .run(key, config, extra)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Two fully specified hints for a two-character key: a direct shift of 1
/// and a relative hint two more than the first. "AB" encrypts to "BD".
pub fn fixture_config() -> &'static str {
    r#"
templates:
  direct: "{person} weet dat teken {index} met {shift} verschuift naar {encrypted_char}."
  relative_more: "{person} weet dat teken {index} {extra_shift} meer verschuift dan dat van {reference_person}."
  relative_less: "{person} weet dat teken {index} {extra_shift} minder verschuift dan dat van {reference_person}."
hints:
  - type: direct
    character: 1
    person: ""
    shift: 1
    requirement: "r1"
  - type: relative
    character: 2
    person: "X"
    reference_hint: 1
    extra_shift: 2
    requirement: "r2"
"#
}
