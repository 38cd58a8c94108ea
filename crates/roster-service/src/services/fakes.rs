//! In-memory repository fakes for service tests
//!
//! One `FakeStore` implements every port over shared tables, mirroring the
//! relational rules the PostgreSQL layer relies on: unique email, unique
//! (member, night) pair, name `COALESCE` on conflict, cascade on night delete.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use roster_core::entities::{
    Availability, Member, MemberNightStatus, NightResponse, NightWithCounts, ScheduleNight,
};
use roster_core::traits::{
    AvailabilityRepository, MemberRepository, NightRepository, RepoResult, StoreProbe,
};
use roster_core::{AvailabilityStatus, DomainError, MemberId, NightId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Tables {
    members: Vec<Member>,
    nights: Vec<ScheduleNight>,
    availability: Vec<Availability>,
}

#[derive(Default)]
pub(crate) struct FakeStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    offline: AtomicBool,
}

impl FakeStore {
    /// Number of repository calls made so far
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail as if the database were down
    pub(crate) fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Insert a night directly, bypassing the call counter
    pub(crate) fn seed_night(&self, night: ScheduleNight) -> ScheduleNight {
        self.tables.lock().unwrap().nights.push(night.clone());
        night
    }

    pub(crate) fn availability_rows(&self) -> usize {
        self.tables.lock().unwrap().availability.len()
    }

    fn enter(&self) -> RepoResult<std::sync::MutexGuard<'_, Tables>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::StoreFailure {
                code: Some("08006".to_string()),
                message: "connection refused".to_string(),
            });
        }
        Ok(self.tables.lock().unwrap())
    }
}

fn upcoming(nights: &[ScheduleNight], from: NaiveDate, limit: i64) -> Vec<ScheduleNight> {
    let mut rows: Vec<_> = nights.iter().filter(|n| n.night_date >= from).cloned().collect();
    rows.sort_by_key(|n| (n.night_date, n.start_time));
    rows.truncate(usize::try_from(limit).unwrap_or(0));
    rows
}

/// `ORDER BY full_name ASC NULLS LAST, email ASC`
fn roster_order(a: &Member, b: &Member) -> std::cmp::Ordering {
    use std::cmp::Ordering::{Greater, Less};

    match (&a.full_name, &b.full_name) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Less,
        (None, Some(_)) => Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
    .then_with(|| a.email.cmp(&b.email))
}

#[async_trait]
impl MemberRepository for FakeStore {
    async fn upsert_by_email(&self, candidate: &Member) -> RepoResult<Member> {
        let mut tables = self.enter()?;
        if let Some(existing) = tables.members.iter_mut().find(|m| m.email == candidate.email) {
            // COALESCE(EXCLUDED.full_name, members.full_name)
            if candidate.full_name.is_some() {
                existing.full_name.clone_from(&candidate.full_name);
            }
            return Ok(existing.clone());
        }
        tables.members.push(candidate.clone());
        Ok(candidate.clone())
    }
}

#[async_trait]
impl NightRepository for FakeStore {
    async fn list_upcoming(&self, from: NaiveDate, limit: i64) -> RepoResult<Vec<ScheduleNight>> {
        let tables = self.enter()?;
        Ok(upcoming(&tables.nights, from, limit))
    }

    async fn list_with_counts(
        &self,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<NightWithCounts>> {
        let tables = self.enter()?;
        let count = |night: NightId, status: AvailabilityStatus| {
            tables
                .availability
                .iter()
                .filter(|a| a.night_id == night && a.status == status)
                .count() as i64
        };
        Ok(upcoming(&tables.nights, from, limit)
            .into_iter()
            .map(|night| NightWithCounts {
                available_count: count(night.id, AvailabilityStatus::Available),
                unavailable_count: count(night.id, AvailabilityStatus::Unavailable),
                night,
            })
            .collect())
    }

    async fn create(&self, night: &ScheduleNight) -> RepoResult<ScheduleNight> {
        let mut tables = self.enter()?;
        tables.nights.push(night.clone());
        Ok(night.clone())
    }

    async fn delete(&self, id: NightId) -> RepoResult<()> {
        let mut tables = self.enter()?;
        let before = tables.nights.len();
        tables.nights.retain(|n| n.id != id);
        if tables.nights.len() == before {
            return Err(DomainError::NightNotFound(id));
        }
        tables.availability.retain(|a| a.night_id != id);
        Ok(())
    }
}

#[async_trait]
impl AvailabilityRepository for FakeStore {
    async fn upsert_status(&self, candidate: &Availability) -> RepoResult<Availability> {
        let mut tables = self.enter()?;
        if !tables.members.iter().any(|m| m.id == candidate.member_id) {
            return Err(DomainError::MemberNotFound(candidate.member_id));
        }
        if !tables.nights.iter().any(|n| n.id == candidate.night_id) {
            return Err(DomainError::NightNotFound(candidate.night_id));
        }

        let now = Utc::now();
        if let Some(row) = tables
            .availability
            .iter_mut()
            .find(|a| a.member_id == candidate.member_id && a.night_id == candidate.night_id)
        {
            row.status = candidate.status;
            // NOW() differs per statement; never repeat a timestamp
            row.updated_at = now.max(row.updated_at + TimeDelta::microseconds(1));
            return Ok(row.clone());
        }

        let row = Availability {
            updated_at: now,
            ..candidate.clone()
        };
        tables.availability.push(row.clone());
        Ok(row)
    }

    async fn for_member(
        &self,
        member_id: MemberId,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<MemberNightStatus>> {
        let tables = self.enter()?;
        Ok(upcoming(&tables.nights, from, limit)
            .into_iter()
            .map(|night| {
                let status = tables
                    .availability
                    .iter()
                    .find(|a| a.member_id == member_id && a.night_id == night.id)
                    .map(|a| a.status)
                    .unwrap_or_default();
                MemberNightStatus { night, status }
            })
            .collect())
    }

    async fn for_night(&self, night_id: NightId) -> RepoResult<Vec<NightResponse>> {
        let tables = self.enter()?;
        let mut rows: Vec<NightResponse> = tables
            .availability
            .iter()
            .filter(|a| a.night_id == night_id)
            .filter_map(|a| {
                let member = tables.members.iter().find(|m| m.id == a.member_id)?;
                Some(NightResponse {
                    availability_id: a.id,
                    member: member.clone(),
                    status: a.status,
                    updated_at: a.updated_at,
                })
            })
            .collect();
        rows.sort_by(|a, b| roster_order(&a.member, &b.member));
        Ok(rows)
    }
}

#[async_trait]
impl StoreProbe for FakeStore {
    async fn server_time(&self) -> RepoResult<DateTime<Utc>> {
        let _tables = self.enter()?;
        Ok(Utc::now())
    }
}

/// Build a context whose every port is `store`
pub(crate) fn context(store: &Arc<FakeStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .member_repo(store.clone())
        .night_repo(store.clone())
        .availability_repo(store.clone())
        .store_probe(store.clone())
        .build()
        .unwrap()
}
