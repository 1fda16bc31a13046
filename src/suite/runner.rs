//! Check suite runner
//!
//! Selects checks, runs them and aggregates their reports.

use log::info;
use std::sync::Arc;

use crate::config::CheckerConfig;
use crate::docs::check_documentation;
use crate::error::{ConfigError, ScaffoldError};
use crate::structure::{CheckReport, check_exists};

/// Which checks to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckSelection {
    Structure,
    Docs,
    #[default]
    All,
}

/// Reports from every check that ran
#[derive(Debug, PartialEq)]
pub struct SuiteReport {
    pub reports: Vec<CheckReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.reports.iter().all(CheckReport::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.reports.iter().map(CheckReport::failed_count).sum()
    }

    pub fn total(&self) -> usize {
        self.reports.iter().map(CheckReport::total).sum()
    }

    /// Ok when every entry passed, otherwise the failure tally
    pub fn verdict(&self) -> Result<(), ScaffoldError> {
        if self.passed() {
            Ok(())
        } else {
            Err(ScaffoldError::ChecksFailed {
                failed: self.failed_count(),
                total: self.total(),
            })
        }
    }
}

pub struct CheckSuite {
    config: Arc<CheckerConfig>,
}

impl CheckSuite {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Runs the selected checks; with `All` both run concurrently.
    pub async fn run(&self, selection: CheckSelection) -> Result<SuiteReport, ScaffoldError> {
        info!(
            "Running {:?} checks against {}",
            selection,
            self.config.base_path.display()
        );

        let reports = match selection {
            CheckSelection::Structure => vec![self.structure().await?],
            CheckSelection::Docs => vec![self.docs().await?],
            CheckSelection::All => {
                let (structure, docs) = tokio::join!(self.structure(), self.docs());
                vec![structure?, docs?]
            }
        };

        let suite = SuiteReport { reports };
        info!(
            "{} of {} required paths passed",
            suite.total() - suite.failed_count(),
            suite.total()
        );
        Ok(suite)
    }

    async fn structure(&self) -> Result<CheckReport, ConfigError> {
        check_exists("structure", &self.config.base_path, &self.config.entries).await
    }

    async fn docs(&self) -> Result<CheckReport, ConfigError> {
        check_documentation(&self.config.base_path, &self.config.docs).await
    }
}
