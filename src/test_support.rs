use crate::error::{LicenseError, Result};
use crate::prompt::Prompter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// An empty repository whose local config carries the given identity.
pub(crate) fn create_test_repo_with_identity(name: &str, email: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.name", name]);
    git(path, &["config", "user.email", email]);

    temp_dir
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// One scripted reply to a prompt.
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    /// Choose the item at this index of a select prompt.
    Pick(usize),
    /// Type this text into an input prompt.
    Text(String),
    /// Cancel the prompt.
    Interrupt,
}

/// A [`Prompter`] that replays canned answers and records what was asked.
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
            offered: Vec::new(),
        }
    }

    /// Prompt labels in the order they were shown.
    pub(crate) fn asked(&self) -> Vec<&str> {
        self.asked.iter().map(String::as_str).collect()
    }

    /// Item labels of each select prompt, in order.
    pub(crate) fn offered(&self) -> &[Vec<String>] {
        &self.offered
    }

    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> Answer {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for prompt '{}'", label))
    }
}

impl Prompter for ScriptedPrompter {
    fn select<T: Clone + Eq>(&mut self, label: &str, items: &[(T, String)]) -> Result<T> {
        self.offered
            .push(items.iter().map(|(_, l)| l.clone()).collect());
        match self.next(label) {
            Answer::Pick(index) => Ok(items[index].0.clone()),
            Answer::Interrupt => Err(LicenseError::Interrupted),
            Answer::Text(text) => panic!("select '{}' got text answer '{}'", label, text),
        }
    }

    fn input(&mut self, label: &str) -> Result<String> {
        match self.next(label) {
            Answer::Text(text) => Ok(text),
            Answer::Interrupt => Err(LicenseError::Interrupted),
            Answer::Pick(index) => panic!("input '{}' got pick answer {}", label, index),
        }
    }
}
