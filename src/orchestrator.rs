//! Check orchestrator for coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: read go.mod → fetch → rank → summarize
//! - Parallel proxy queries bounded by a semaphore
//! - `--dependency` restriction with fallback to all modules
//! - Error handling with per-module continuation

use crate::cli::CliArgs;
use crate::domain::{CheckSummary, Dependency, ModuleReport};
use crate::error::{AppError, ClassificationError};
use crate::manifest::load_dependencies;
use crate::progress::Progress;
use crate::registry::VersionSource;
use crate::update::ModuleChecker;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Default concurrency limit for proxy requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Project directory containing go.mod
    pub path: PathBuf,
    /// Restrict the check to this module
    pub dependency: Option<String>,
    /// Keep pre-release candidates
    pub include_prerelease: bool,
    /// Maximum concurrent proxy requests
    pub concurrency: usize,
    /// Show a progress bar on stderr
    pub show_progress: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            dependency: None,
            include_prerelease: false,
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }
}

impl From<&CliArgs> for OrchestratorConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            path: args.path.clone(),
            dependency: args.dependency.clone(),
            include_prerelease: args.include_prerelease,
            concurrency: args.jobs,
            show_progress: !args.quiet,
        }
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    config: OrchestratorConfig,
    source: Arc<dyn VersionSource>,
    semaphore: Arc<Semaphore>,
}

/// Result of running the orchestrator
pub struct OrchestratorResult {
    /// Reports in go.mod order
    pub summary: CheckSummary,
    /// Errors encountered during processing
    pub errors: Vec<OrchestratorError>,
}

impl OrchestratorResult {
    /// Returns true if any module failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Per-module errors that do not stop the run
#[derive(Debug)]
pub enum OrchestratorError {
    /// The version declared in go.mod is not a valid version
    InvalidVersion { module: String, message: String },
    /// Failed to fetch the version list from the proxy
    RegistryError { module: String, message: String },
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorError::InvalidVersion { module, message } => {
                write!(f, "Invalid version for {}: {}", module, message)
            }
            OrchestratorError::RegistryError { module, message } => {
                write!(f, "Failed to fetch {}: {}", module, message)
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

/// What happened to one module
enum ModuleOutcome {
    Report(ModuleReport),
    NoData(String),
    Failed(OrchestratorError),
}

impl Orchestrator {
    /// Create a new orchestrator reading versions from `source`
    pub fn new(config: OrchestratorConfig, source: Arc<dyn VersionSource>) -> Self {
        let permits = config.concurrency.max(1);
        Self {
            config,
            source,
            semaphore: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Run the check workflow
    ///
    /// Manifest failures and internal classification failures abort the run;
    /// everything else is recorded per module.
    pub async fn run(&self) -> Result<OrchestratorResult, AppError> {
        let mut progress = Progress::new(self.config.show_progress);

        progress.spinner("Reading go.mod...");
        let dependencies = load_dependencies(&self.config.path);
        progress.finish_and_clear();

        let dependencies = self.select_dependencies(dependencies?);
        let checker = ModuleChecker::new(!self.config.include_prerelease);

        progress.start(dependencies.len() as u64, "Checking modules");
        let shared = &progress;

        let futures = dependencies.iter().map(|dep| async move {
            shared.set_message(&format!("Checking {}", dep.path));
            let outcome = self.check_module(&checker, dep).await;
            shared.inc();
            outcome
        });
        let outcomes = join_all(futures).await;
        progress.finish_and_clear();

        let mut summary = CheckSummary::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome? {
                ModuleOutcome::Report(report) => summary.add_module(report),
                ModuleOutcome::NoData(path) => summary.add_no_data(path),
                ModuleOutcome::Failed(err) => {
                    debug!(error = %err, "module check failed");
                    errors.push(err);
                }
            }
        }

        debug!(
            modules = summary.total_modules(),
            outdated = summary.total_outdated(),
            no_data = summary.no_data.len(),
            errors = errors.len(),
            "check finished"
        );

        Ok(OrchestratorResult { summary, errors })
    }

    /// Drop indirect requirements and apply `--dependency`
    fn select_dependencies(&self, dependencies: Vec<Dependency>) -> Vec<Dependency> {
        let direct: Vec<Dependency> = dependencies.into_iter().filter(|d| !d.indirect).collect();

        let Some(wanted) = &self.config.dependency else {
            return direct;
        };

        if direct.iter().any(|d| &d.path == wanted) {
            direct.into_iter().filter(|d| &d.path == wanted).collect()
        } else {
            warn!(
                module = %wanted,
                "dependency is not a direct requirement, checking all modules"
            );
            direct
        }
    }

    async fn check_module(
        &self,
        checker: &ModuleChecker,
        dependency: &Dependency,
    ) -> Result<ModuleOutcome, ClassificationError> {
        let current = match checker.baseline(dependency) {
            Ok(v) => v,
            Err(e) => {
                return Ok(ModuleOutcome::Failed(OrchestratorError::InvalidVersion {
                    module: dependency.path.clone(),
                    message: e.to_string(),
                }))
            }
        };

        let raw_list = {
            let _permit = self.semaphore.acquire().await;
            self.source.fetch_version_list(&dependency.path).await
        };

        let raw_list = match raw_list {
            Ok(list) => list,
            Err(e) => {
                return Ok(ModuleOutcome::Failed(OrchestratorError::RegistryError {
                    module: dependency.path.clone(),
                    message: e.to_string(),
                }))
            }
        };

        match checker.check(dependency, current, &raw_list)? {
            Some(report) => Ok(ModuleOutcome::Report(report)),
            None => {
                debug!(module = %dependency.path, "no version data");
                Ok(ModuleOutcome::NoData(dependency.path.clone()))
            }
        }
    }
}
