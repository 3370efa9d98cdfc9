//! In-memory work record repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{RecordKey, WorkRecord};

use super::WorkRecordRepository;

/// A [`WorkRecordRepository`] backed by a map keyed by (job, year, month).
///
/// Lookup and write happen under one write guard, so concurrent saves for the
/// same key leave a single record holding the last write.
#[derive(Debug, Default)]
pub struct InMemoryWorkRecordRepository {
    records: RwLock<HashMap<RecordKey, WorkRecord>>,
    is_offline: bool,
}

impl InMemoryWorkRecordRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the repository between online and offline. Offline, every call
    /// fails with `StorageError`.
    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> EngineResult<()> {
        if self.is_offline {
            return Err(EngineError::StorageError {
                message: "work record repository offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WorkRecordRepository for InMemoryWorkRecordRepository {
    async fn find(&self, key: &RecordKey) -> EngineResult<Option<WorkRecord>> {
        self.ensure_online()?;
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn upsert(&self, mut record: WorkRecord) -> EngineResult<WorkRecord> {
        self.ensure_online()?;
        record.validate()?;

        let key = record.key();
        let mut guard = self.records.write().await;
        if let Some(existing) = guard.get(&key) {
            record.id = existing.id.clone();
        }
        guard.insert(key, record.clone());
        Ok(record)
    }

    async fn list(&self) -> EngineResult<Vec<WorkRecord>> {
        self.ensure_online()?;
        let guard = self.records.read().await;

        let mut items: Vec<WorkRecord> = guard.values().cloned().collect();
        items.sort_by(|a, b| {
            (a.year, a.month, &a.job_id).cmp(&(b.year, b.month, &b.job_id))
        });
        Ok(items)
    }

    async fn delete(&self, id: &str) -> EngineResult<()> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;

        let key = guard
            .iter()
            .find(|(_, r)| r.id == id)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;
        guard.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayRules;
    use crate::models::{Job, LeaveDays, ManualWorkRecord, MonthPeriod, Shift, ShiftType};
    use crate::store::{save_manual_record, save_monthly_record};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn job() -> Job {
        Job::new("job_001", Decimal::from(50), Decimal::from(200))
    }

    fn saturday_shift(id: &str, hours: i64) -> Shift {
        Shift::with_hours(
            id,
            "job_001",
            make_date("2026-01-17"),
            Decimal::from(hours),
            ShiftType::Morning,
        )
    }

    fn january_key() -> RecordKey {
        RecordKey {
            job_id: "job_001".to_string(),
            year: 2026,
            month: 1,
        }
    }

    #[tokio::test]
    async fn test_save_monthly_record_stores_totals() {
        let repo = InMemoryWorkRecordRepository::new();
        let period = MonthPeriod::new(2026, 1).unwrap();

        let saved = save_monthly_record(
            &repo,
            &[saturday_shift("s1", 12)],
            &job(),
            period,
            LeaveDays::default(),
            &PayRules::default(),
        )
        .await
        .unwrap();

        assert_eq!(saved.total_pay, Decimal::new(8875, 1));
        let found = repo.find(&january_key()).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_second_save_overwrites_and_keeps_id() {
        let repo = InMemoryWorkRecordRepository::new();
        let period = MonthPeriod::new(2026, 1).unwrap();
        let rules = PayRules::default();

        let first = save_monthly_record(
            &repo,
            &[saturday_shift("s1", 12)],
            &job(),
            period,
            LeaveDays::default(),
            &rules,
        )
        .await
        .unwrap();
        let second = save_monthly_record(
            &repo,
            &[saturday_shift("s1", 12), saturday_shift("s2", 7)],
            &job(),
            period,
            LeaveDays::default(),
            &rules,
        )
        .await
        .unwrap();

        assert_eq!(first.id, second.id);
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        // 887.5 + 7 × 50
        assert_eq!(all[0].total_pay, Decimal::new(12375, 1));
        assert_eq!(all[0].shifts.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_saves_leave_one_record() {
        let repo = Arc::new(InMemoryWorkRecordRepository::new());
        let period = MonthPeriod::new(2026, 1).unwrap();

        let mut handles = Vec::new();
        for hours in 1..=8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                save_monthly_record(
                    repo.as_ref(),
                    &[saturday_shift("s1", hours)],
                    &job(),
                    period,
                    LeaveDays::default(),
                    &PayRules::default(),
                )
                .await
                .unwrap()
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        assert_eq!(repo.list().await.unwrap().len(), 1);
        ids.dedup();
        assert_eq!(ids.len(), 1);
    }

    #[tokio::test]
    async fn test_manual_record_replaces_derived_record() {
        let repo = InMemoryWorkRecordRepository::new();
        let period = MonthPeriod::new(2026, 1).unwrap();
        let derived = save_monthly_record(
            &repo,
            &[saturday_shift("s1", 12)],
            &job(),
            period,
            LeaveDays::default(),
            &PayRules::default(),
        )
        .await
        .unwrap();

        let manual = ManualWorkRecord {
            job_id: "job_001".to_string(),
            month: 1,
            year: 2026,
            total_hours: Decimal::from(100),
            regular_hours: Decimal::from(100),
            overtime125_hours: Decimal::ZERO,
            overtime150_hours: Decimal::ZERO,
            regular_pay: Decimal::from(5000),
            overtime125_pay: Decimal::ZERO,
            overtime150_pay: Decimal::ZERO,
            transport_payment: Decimal::from(200),
            leave: LeaveDays::default(),
        };
        let stored = save_manual_record(&repo, &manual).await.unwrap();

        assert_eq!(stored.id, derived.id);
        assert_eq!(stored.total_pay, Decimal::from(5200));
        assert!(stored.shifts.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered() {
        let repo = InMemoryWorkRecordRepository::new();
        let rules = PayRules::default();
        for (year, month) in [(2026, 3), (2025, 11), (2026, 1)] {
            save_monthly_record(
                &repo,
                &[],
                &job(),
                MonthPeriod::new(year, month).unwrap(),
                LeaveDays::default(),
                &rules,
            )
            .await
            .unwrap();
        }
        let order: Vec<(i32, u32)> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|r| (r.year, r.month))
            .collect();
        assert_eq!(order, vec![(2025, 11), (2026, 1), (2026, 3)]);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryWorkRecordRepository::new();
        let saved = save_monthly_record(
            &repo,
            &[saturday_shift("s1", 4)],
            &job(),
            MonthPeriod::new(2026, 1).unwrap(),
            LeaveDays::default(),
            &PayRules::default(),
        )
        .await
        .unwrap();

        repo.delete(&saved.id).await.unwrap();
        assert!(repo.find(&january_key()).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&saved.id).await,
            Err(EngineError::RecordNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_upsert_rejects_invalid_month() {
        let repo = InMemoryWorkRecordRepository::new();
        let mut record = WorkRecord::from_totals(
            "job_001",
            MonthPeriod::new(2026, 1).unwrap(),
            &Default::default(),
            LeaveDays::default(),
        );
        record.month = 0;
        assert!(matches!(
            repo.upsert(record).await,
            Err(EngineError::InvalidMonth { month: 0 })
        ));
    }

    #[tokio::test]
    async fn test_offline_repository_reports_storage_error() {
        let mut repo = InMemoryWorkRecordRepository::new();
        repo.toggle_offline();
        assert!(matches!(
            repo.list().await,
            Err(EngineError::StorageError { .. })
        ));
    }
}
