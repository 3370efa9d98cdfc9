//! Storage port for work records and the save paths built on it.

use async_trait::async_trait;
use tracing::info;

use crate::calculation::aggregate_month;
use crate::config::PayRules;
use crate::error::EngineResult;
use crate::models::{Job, LeaveDays, ManualWorkRecord, MonthPeriod, RecordKey, Shift, WorkRecord};

/// Storage for monthly work records, at most one per [`RecordKey`].
#[async_trait]
pub trait WorkRecordRepository: Send + Sync {
    /// Returns the record stored under `key`, if any.
    async fn find(&self, key: &RecordKey) -> EngineResult<Option<WorkRecord>>;

    /// Inserts `record`, or overwrites the record already stored under its key.
    ///
    /// An overwritten record keeps its existing ID. Returns the stored record.
    async fn upsert(&self, record: WorkRecord) -> EngineResult<WorkRecord>;

    /// Returns every stored record ordered by year, month and job.
    async fn list(&self) -> EngineResult<Vec<WorkRecord>>;

    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when no record has that ID.
    async fn delete(&self, id: &str) -> EngineResult<()>;
}

/// Aggregates a job's month from its shifts and stores the result.
///
/// Saving the same (job, year, month) again replaces the totals in place; no
/// duplicate record is created.
///
/// # Errors
///
/// Propagates aggregation and storage errors.
pub async fn save_monthly_record(
    repo: &dyn WorkRecordRepository,
    shifts: &[Shift],
    job: &Job,
    period: MonthPeriod,
    leave: LeaveDays,
    rules: &PayRules,
) -> EngineResult<WorkRecord> {
    let totals = aggregate_month(shifts, job, period, rules)?;
    let record = WorkRecord::from_totals(job.id.clone(), period, &totals, leave);
    let stored = repo.upsert(record).await?;

    info!(
        record_id = %stored.id,
        job_id = %stored.job_id,
        period = %period,
        total_pay = %stored.total_pay,
        "Saved monthly work record"
    );

    Ok(stored)
}

/// Stores a manually entered month, replacing any record under its key.
///
/// # Errors
///
/// Returns `InvalidMonth` for a month outside 1-12, or a storage error.
pub async fn save_manual_record(
    repo: &dyn WorkRecordRepository,
    manual: &ManualWorkRecord,
) -> EngineResult<WorkRecord> {
    let record = WorkRecord::from_manual(manual)?;
    let stored = repo.upsert(record).await?;

    info!(
        record_id = %stored.id,
        job_id = %stored.job_id,
        year = stored.year,
        month = stored.month,
        "Saved manual work record"
    );

    Ok(stored)
}
