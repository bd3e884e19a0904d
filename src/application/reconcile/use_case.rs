//! Reconcile Use Case
//!
//! Wires the scanner, the aggregator, the difference engine and the
//! quarantine mover into the three report operations.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::entities::{Inventory, ReferenceSet};
use crate::domain::ports::{FileSystem, InventoryScanner};
use crate::domain::services::{DifferenceEngine, QuarantineMover, ReferenceAggregator};
use crate::domain::value_objects::{NamingPolicy, PathNormalizer};
use crate::error::ReconcilerResult;
use crate::infrastructure::{file_providers, LocalFs, RunLock, WalkScanner};

use super::options::ReconcileOptions;
use super::result::{CountResponse, ReconcileResult};

/// Entry point for inventory count, reference count and reconcile
pub struct ReconciliationReport<S, FS>
where
    S: InventoryScanner,
    FS: FileSystem,
{
    scanner: S,
    aggregator: ReferenceAggregator,
    fs: FS,
    storage_root: PathBuf,
    backup_root: PathBuf,
    naming: NamingPolicy,
    lock: Option<RunLock>,
}

/// Report over the local filesystem and the JSON reference exports
pub type LocalReport = ReconciliationReport<WalkScanner, LocalFs>;

impl LocalReport {
    /// Build the report for the local filesystem and JSON exports
    /// described by `config`
    pub fn from_config(config: &Config) -> ReconcilerResult<Self> {
        let paths = config.resolve_paths()?;

        let aggregator = ReferenceAggregator::with_providers(
            PathNormalizer::new(&paths.reference_base)
                .with_alias(&paths.configured_document_root, &paths.document_root),
            file_providers(&paths.references_dir, config.references.allow_missing),
        );
        let scanner = WalkScanner::new().follow_links(config.scan.follow_links);

        Ok(Self::new(
            scanner,
            aggregator,
            LocalFs::new(),
            paths.storage_root,
            paths.backup_root,
        )
        .with_naming(config.quarantine.naming)
        .with_lock(RunLock::new(paths.lock_path).wait(config.lock.wait)))
    }
}

impl<S, FS> ReconciliationReport<S, FS>
where
    S: InventoryScanner,
    FS: FileSystem,
{
    pub fn new(
        scanner: S,
        aggregator: ReferenceAggregator,
        fs: FS,
        storage_root: impl Into<PathBuf>,
        backup_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            scanner,
            aggregator,
            fs,
            storage_root: storage_root.into(),
            backup_root: backup_root.into(),
            naming: NamingPolicy::default(),
            lock: None,
        }
    }

    /// Default naming policy for reconcile runs
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    /// Hold `lock` for the duration of every non-dry reconcile
    pub fn with_lock(mut self, lock: RunLock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    /// `{count: |Inventory|}`; runs the scanner only
    pub fn inventory_count(&self) -> ReconcilerResult<CountResponse> {
        Ok(CountResponse::new(self.scan()?.len()))
    }

    /// `{count: |ReferenceSet|}`; runs the aggregator only
    pub fn reference_count(&self) -> ReconcilerResult<CountResponse> {
        Ok(CountResponse::new(self.aggregate()?.len()))
    }

    /// `{count: |moved|}`; runs the whole pipeline with default options
    pub fn reconcile(&self) -> ReconcilerResult<CountResponse> {
        Ok(self.reconcile_with(&ReconcileOptions::default())?.response())
    }

    /// Scan, aggregate, diff and move.
    ///
    /// Scan and aggregation failures abort before anything is moved. Once
    /// moving starts, per-file failures are collected in the result.
    pub fn reconcile_with(&self, options: &ReconcileOptions) -> ReconcilerResult<ReconcileResult> {
        let started_at = Utc::now();

        let _guard = match &self.lock {
            Some(lock) if !options.dry_run => Some(lock.acquire()?),
            _ => None,
        };

        let inventory = self.scan()?;
        let references = self.aggregate()?;
        let detection = DifferenceEngine::detect(&inventory, &references);
        info!(
            inventory = inventory.len(),
            references = references.len(),
            orphans = detection.orphans.len(),
            retained = detection.retained,
            dangling = detection.dangling,
            "orphans detected"
        );

        let naming = options.naming.unwrap_or(self.naming);
        let mover = QuarantineMover::new(&self.fs, &self.storage_root, &self.backup_root)
            .with_naming(naming);
        let report = if options.dry_run {
            mover.plan(&detection.orphans)
        } else {
            mover.relocate(&detection.orphans)?
        };

        let result = ReconcileResult {
            inventory: inventory.len(),
            references: references.len(),
            orphans: detection.orphans.len(),
            moved: report.moved,
            failed: report.failed,
            overwritten: report.overwritten,
            naming,
            dry_run: options.dry_run,
            started_at,
            finished_at: Utc::now(),
        };

        let elapsed_ms = result.duration().num_milliseconds();
        if result.is_complete() {
            info!(
                moved = result.moved_count(),
                dry_run = result.dry_run,
                elapsed_ms,
                "reconcile finished"
            );
        } else {
            warn!(
                moved = result.moved_count(),
                failed = result.failed_count(),
                elapsed_ms,
                "reconcile finished with failures"
            );
        }
        Ok(result)
    }

    fn scan(&self) -> ReconcilerResult<Inventory> {
        Ok(self.scanner.scan(&self.storage_root)?)
    }

    fn aggregate(&self) -> ReconcilerResult<ReferenceSet> {
        Ok(self.aggregator.aggregate()?)
    }
}
