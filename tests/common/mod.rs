use std::path::PathBuf;

use gift_saver::{
    cli::{io::QueueReader, Shell, ShellContext},
    config::AppConfig,
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Isolated data directory; the folder lives as long as the harness.
pub struct TestEnv {
    home: TempDir,
    config: AppConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp dir");
        let config = AppConfig::with_data_file(home.path().join("gift_idea_saver_data.json"));
        Self { home, config }
    }

    pub fn data_file(&self) -> PathBuf {
        self.config.data_file.clone()
    }

    pub fn storage(&self) -> JsonStorage {
        JsonStorage::new(self.data_file())
    }

    #[allow(dead_code)]
    pub fn home(&self) -> &std::path::Path {
        self.home.path()
    }

    /// Runs the menus against the data file with scripted answers.
    #[allow(dead_code)]
    pub fn run_shell(&self, answers: &[&str]) -> ShellContext {
        self.drive_shell(answers).0.into_context()
    }

    /// Like [`run_shell`](Self::run_shell) but keeps the shell and a handle on
    /// the answer queue so tests can see where the run stopped.
    #[allow(dead_code)]
    pub fn drive_shell(&self, answers: &[&str]) -> (Shell, QueueReader) {
        let input = QueueReader::new(answers.iter().copied());
        let context = ShellContext::new(Box::new(self.storage()), Box::new(input.clone()));
        let mut shell = Shell::new(context);
        shell.run().expect("shell run");
        (shell, input)
    }
}
