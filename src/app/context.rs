use std::path::{Path, PathBuf};

use crate::domain::AppConfig;
use crate::ports::{CompletionClient, DocumentRenderer, Prompter};

/// Application context holding configuration and ports for a session.
pub struct AppContext<C: CompletionClient, P: Prompter, R: DocumentRenderer> {
    config: AppConfig,
    root: PathBuf,
    client: C,
    prompter: P,
    renderer: R,
}

impl<C: CompletionClient, P: Prompter, R: DocumentRenderer> AppContext<C, P, R> {
    /// Create a new application context rooted at `root`; relative output and
    /// template paths resolve against it.
    pub fn new(config: AppConfig, root: PathBuf, client: C, prompter: P, renderer: R) -> Self {
        Self { config, root, client, prompter, renderer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Resolve a user-supplied path against the session root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}
