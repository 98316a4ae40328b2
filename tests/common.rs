#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A per-test home directory holding config, roster, attendance and log.
pub struct TestHome {
    pub dir: PathBuf,
}

impl TestHome {
    /// Create a unique empty directory inside the system temp dir
    pub fn new(name: &str) -> Self {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("{}_rattendance", name));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create test home");
        Self { dir }
    }

    /// Binary command with RATTENDANCE_HOME pointing at this directory
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rattendance");
        cmd.env("RATTENDANCE_HOME", &self.dir);
        cmd
    }

    pub fn roster(&self) -> PathBuf {
        self.dir.join("students.csv")
    }

    pub fn attendance(&self) -> PathBuf {
        self.dir.join("attendance.csv")
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.dir.join(file)).unwrap_or_default()
    }

    /// Write a replay file of tag lines and return its path as String
    pub fn replay_file(&self, lines: &[&str]) -> String {
        let path = self.dir.join("scans.txt");
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content).expect("write replay file");
        path.to_string_lossy().to_string()
    }

    /// init in test mode, then register a couple of students
    pub fn init_with_students(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
        self.cmd()
            .args(["reg", "04A1B2C3", "Ada Lovelace", "10", "B"])
            .assert()
            .success();
        self.cmd()
            .args(["reg", "99FF00EE", "Bob", "11", "A"])
            .assert()
            .success();
    }
}
