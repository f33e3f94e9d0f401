use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A stand-in `pm2` executable backed by files in a temp directory.
///
/// `jlist` prints `jlist.json`, or fails when `jlist.fail` exists. `stop <id>`
/// appends the id to `stops.log` and fails for ids listed in `stop.fail`.
pub struct FakePm2 {
    pub root: TempDir,
}

impl FakePm2 {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().display().to_string();
        let script = format!(
            r#"#!/bin/sh
case "$1" in
  jlist)
    if [ -f '{dir}/jlist.fail' ]; then
      echo "[PM2] daemon not running" >&2
      exit 1
    fi
    cat '{dir}/jlist.json'
    ;;
  stop)
    echo "$2" >> '{dir}/stops.log'
    if grep -qx "$2" '{dir}/stop.fail' 2>/dev/null; then
      echo "[PM2][ERROR] Process $2 not found" >&2
      exit 1
    fi
    ;;
  *)
    exit 2
    ;;
esac
"#
        );

        let program = root.path().join("pm2");
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(root.path().join("jlist.json"), "[]").unwrap();

        Self { root }
    }

    pub fn program(&self) -> String {
        self.root.path().join("pm2").display().to_string()
    }

    pub fn write_jlist(&self, content: &str) {
        fs::write(self.root.path().join("jlist.json"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn fail_list(&self) {
        fs::write(self.root.path().join("jlist.fail"), "").unwrap();
    }

    #[allow(dead_code)]
    pub fn fail_stop(&self, id: &str) {
        fs::write(self.root.path().join("stop.fail"), format!("{}\n", id)).unwrap();
    }

    #[allow(dead_code)]
    pub fn stop_calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("stops.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Create a working directory and return its canonical path
    #[allow(dead_code)]
    pub fn work_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir.canonicalize().unwrap()
    }
}
