//! Mock port implementations shared by handler tests.
//!
//! Every mock records the calls it receives behind a `Mutex` so tests
//! can assert on what was persisted, and the write mocks can be told to
//! fail a single operation to exercise partial-failure paths.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::gallery::ProgressPhoto;
use crate::domain::health::{
    DailyAggregates, DailySteps, DailyTotals, HealthDaily, HeartRatePoint, NewSample,
};
use crate::domain::schedule::{
    NewSchedule, Schedule, ScheduleChanges, ScheduleFilter, STATUS_COMPLETED, STATUS_PENDING,
};
use crate::domain::user::{AuthenticatedUser, BodyMetrics, NewUser, User};
use crate::domain::workout::{Exercise, ExerciseStep, Material, Workout, WorkoutSet};
use crate::domain::DomainError;
use crate::ports::{
    DashboardReader, GalleryRepository, HealthRepository, ImageStore, Mailer, OutboundEmail,
    PasswordHasher, ScheduleRepository, TokenService, UserRepository, WorkoutRepository,
};

// ---------------------------------------------------------------------
// Users & auth
// ---------------------------------------------------------------------

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Inserts a user row directly, bypassing `create`.
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn created(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

/// A plausible user row for seeding.
pub fn user_fixture(id: i64, email: &str, password_hash: &str) -> User {
    User {
        id,
        first_name: "Test".into(),
        last_name: "User".into(),
        email: email.into(),
        password_hash: password_hash.into(),
        phone_number: None,
        gender: None,
        height: None,
        weight: None,
        age: None,
        profile_picture: None,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i64, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("Email already registered"));
        }
        let id = users.len() as i64 + 1;
        users.push(User {
            id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            phone_number: user.phone_number.clone(),
            gender: user.gender.clone(),
            height: None,
            weight: None,
            age: None,
            profile_picture: None,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn update_body_metrics(
        &self,
        id: i64,
        metrics: BodyMetrics,
    ) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("User", id))?;
        user.height = metrics.height;
        user.weight = metrics.weight;
        user.age = metrics.age;
        Ok(())
    }

    async fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && u.id != id))
    }

    async fn update_personal_data(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("User", id))?;
        user.first_name = first_name.to_string();
        user.last_name = last_name.to_string();
        user.email = email.to_string();
        user.phone_number = phone_number.map(str::to_string);
        Ok(())
    }

    async fn set_profile_picture(
        &self,
        id: i64,
        filename: &str,
    ) -> Result<Option<String>, DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("User", id))?;
        Ok(user.profile_picture.replace(filename.to_string()))
    }
}

/// Deterministic hasher: `hash(p) = "hashed:" + p`.
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Tokens are `"tok.<id>.<email>"`; validation parses them back.
pub struct MockTokenService;

#[async_trait]
impl TokenService for MockTokenService {
    fn issue(&self, user_id: i64, email: &str) -> Result<String, DomainError> {
        Ok(format!("tok.{}.{}", user_id, email))
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        let mut parts = token.splitn(3, '.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("tok"), Some(id), Some(email)) => Ok(AuthenticatedUser {
                id: id
                    .parse()
                    .map_err(|_| DomainError::unauthorized("Invalid token"))?,
                email: email.to_string(),
            }),
            _ => Err(DomainError::unauthorized("Invalid token")),
        }
    }
}

// ---------------------------------------------------------------------
// Workouts
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockWorkoutRepository {
    next_id: AtomicI64,
    pub workouts: Mutex<Vec<Workout>>,
    pub materials: Mutex<Vec<Material>>,
    pub sets: Mutex<Vec<WorkoutSet>>,
    pub exercises: Mutex<Vec<Exercise>>,
    pub steps: Mutex<Vec<ExerciseStep>>,
    fail_on: Mutex<Option<String>>,
}

impl MockWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the named insert operation fail with a database error.
    pub fn fail_on(&self, op: &str) {
        *self.fail_on.lock().unwrap() = Some(op.to_string());
    }

    fn check(&self, op: &str) -> Result<(), DomainError> {
        if self.fail_on.lock().unwrap().as_deref() == Some(op) {
            return Err(DomainError::database(format!("{} failed", op)));
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl WorkoutRepository for MockWorkoutRepository {
    async fn insert_workout(
        &self,
        name: &str,
        description: Option<&str>,
        photo: Option<&str>,
        duration: Option<&str>,
        difficulty: Option<&str>,
        muscle_groups: Option<&str>,
    ) -> Result<i64, DomainError> {
        self.check("insert_workout")?;
        let id = self.next_id();
        self.workouts.lock().unwrap().push(Workout {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            photo: photo.map(str::to_string),
            duration: duration.map(str::to_string),
            difficulty: difficulty.map(str::to_string),
            muscle_groups: muscle_groups.map(str::to_string),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn insert_material(
        &self,
        workout_id: i64,
        title: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError> {
        self.check("insert_material")?;
        let id = self.next_id();
        self.materials.lock().unwrap().push(Material {
            id,
            workout_id,
            title: title.map(str::to_string),
            image: image.map(str::to_string),
        });
        Ok(id)
    }

    async fn insert_set(&self, workout_id: i64, name: Option<&str>) -> Result<i64, DomainError> {
        self.check("insert_set")?;
        let id = self.next_id();
        self.sets.lock().unwrap().push(WorkoutSet {
            id,
            workout_id,
            name: name.map(str::to_string),
        });
        Ok(id)
    }

    async fn insert_exercise(
        &self,
        set_id: i64,
        title: Option<&str>,
        value: Option<&str>,
        image: Option<&str>,
    ) -> Result<i64, DomainError> {
        self.check("insert_exercise")?;
        let id = self.next_id();
        self.exercises.lock().unwrap().push(Exercise {
            id,
            set_id,
            title: title.map(str::to_string),
            value: value.map(str::to_string),
            image: image.map(str::to_string),
        });
        Ok(id)
    }

    async fn insert_step(
        &self,
        exercise_id: i64,
        step_number: i32,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<i64, DomainError> {
        self.check("insert_step")?;
        let id = self.next_id();
        self.steps.lock().unwrap().push(ExerciseStep {
            id,
            exercise_id,
            step_number,
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        });
        Ok(id)
    }

    async fn find_workout(&self, id: i64) -> Result<Option<Workout>, DomainError> {
        Ok(self
            .workouts
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, DomainError> {
        let mut workouts = self.workouts.lock().unwrap().clone();
        workouts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(workouts)
    }

    async fn materials_for(&self, workout_id: i64) -> Result<Vec<Material>, DomainError> {
        Ok(self
            .materials
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.workout_id == workout_id)
            .cloned()
            .collect())
    }

    async fn sets_for(&self, workout_id: i64) -> Result<Vec<WorkoutSet>, DomainError> {
        Ok(self
            .sets
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.workout_id == workout_id)
            .cloned()
            .collect())
    }

    async fn exercises_for(&self, set_id: i64) -> Result<Vec<Exercise>, DomainError> {
        Ok(self
            .exercises
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.set_id == set_id)
            .cloned()
            .collect())
    }

    async fn steps_for(&self, exercise_id: i64) -> Result<Vec<ExerciseStep>, DomainError> {
        let mut steps: Vec<ExerciseStep> = self
            .steps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.exercise_id == exercise_id)
            .cloned()
            .collect();
        steps.sort_by_key(|s| s.step_number);
        Ok(steps)
    }

    async fn find_exercise(&self, id: i64) -> Result<Option<Exercise>, DomainError> {
        Ok(self
            .exercises
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn delete_workout(&self, id: i64) -> Result<bool, DomainError> {
        let mut workouts = self.workouts.lock().unwrap();
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        let removed = workouts.len() < before;
        if removed {
            self.materials.lock().unwrap().retain(|m| m.workout_id != id);
            let set_ids: Vec<i64> = {
                let mut sets = self.sets.lock().unwrap();
                let ids = sets
                    .iter()
                    .filter(|s| s.workout_id == id)
                    .map(|s| s.id)
                    .collect();
                sets.retain(|s| s.workout_id != id);
                ids
            };
            let exercise_ids: Vec<i64> = {
                let mut exercises = self.exercises.lock().unwrap();
                let ids = exercises
                    .iter()
                    .filter(|e| set_ids.contains(&e.set_id))
                    .map(|e| e.id)
                    .collect();
                exercises.retain(|e| !set_ids.contains(&e.set_id));
                ids
            };
            self.steps
                .lock()
                .unwrap()
                .retain(|s| !exercise_ids.contains(&s.exercise_id));
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------
// Image storage
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockImageStore {
    counter: AtomicI64,
    pub saved: Mutex<Vec<String>>,
    pub removed: Mutex<Vec<String>>,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn save_data_uri(&self, data_uri: &str) -> Result<String, DomainError> {
        if !data_uri.starts_with("data:image/") {
            return Err(DomainError::validation("image", "Malformed data URI"));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let filename = format!("mock-{}.png", n);
        self.saved.lock().unwrap().push(data_uri.to_string());
        Ok(filename)
    }

    async fn remove(&self, filename: &str) -> Result<(), DomainError> {
        self.removed.lock().unwrap().push(filename.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockScheduleRepository {
    pub schedules: Mutex<Vec<Schedule>>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn create(&self, schedule: &NewSchedule) -> Result<i64, DomainError> {
        let mut schedules = self.schedules.lock().unwrap();
        let id = schedules.len() as i64 + 1;
        schedules.push(Schedule {
            id,
            user_id: schedule.user_id,
            workout_id: schedule.workout_id,
            scheduled_date: schedule.scheduled_date,
            scheduled_time: schedule.scheduled_time,
            duration: schedule.duration.clone(),
            difficulty: schedule.difficulty.clone(),
            repetitions: schedule.repetitions.clone(),
            weights: schedule.weights.clone(),
            status: STATUS_PENDING.to_string(),
            completed_at: None,
            workout_name: None,
            workout_photo: None,
            workout_description: None,
        });
        Ok(id)
    }

    async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>, DomainError> {
        let mut rows: Vec<Schedule> = self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .filter(|s| filter.user_id.is_none() || s.user_id == filter.user_id)
            .filter(|s| filter.start_date.map_or(true, |d| s.scheduled_date >= d))
            .filter(|s| filter.end_date.map_or(true, |d| s.scheduled_date <= d))
            .cloned()
            .collect();
        rows.sort_by_key(|s| (s.scheduled_date, s.scheduled_time));
        Ok(rows)
    }

    async fn for_date(
        &self,
        date: NaiveDate,
        user_id: Option<i64>,
    ) -> Result<Vec<Schedule>, DomainError> {
        let mut rows: Vec<Schedule> = self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.scheduled_date == date)
            .filter(|s| user_id.is_none() || s.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.scheduled_time);
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Schedule>, DomainError> {
        Ok(self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn update(&self, id: i64, changes: &ScheduleChanges) -> Result<bool, DomainError> {
        let mut schedules = self.schedules.lock().unwrap();
        let Some(row) = schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        if let Some(d) = changes.scheduled_date {
            row.scheduled_date = d;
        }
        if let Some(t) = changes.scheduled_time {
            row.scheduled_time = t;
        }
        if let Some(v) = &changes.duration {
            row.duration = Some(v.clone());
        }
        if let Some(v) = &changes.difficulty {
            row.difficulty = Some(v.clone());
        }
        if let Some(v) = &changes.repetitions {
            row.repetitions = Some(v.clone());
        }
        if let Some(v) = &changes.weights {
            row.weights = Some(v.clone());
        }
        if let Some(v) = &changes.status {
            row.status = v.clone();
        }
        if changes.marks_completed() {
            row.completed_at = Some(Utc::now());
        }
        Ok(true)
    }

    async fn complete(&self, id: i64) -> Result<bool, DomainError> {
        let mut schedules = self.schedules.lock().unwrap();
        let Some(row) = schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        row.status = STATUS_COMPLETED.to_string();
        row.completed_at = Some(Utc::now());
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut schedules = self.schedules.lock().unwrap();
        let before = schedules.len();
        schedules.retain(|s| s.id != id);
        Ok(schedules.len() < before)
    }
}

// ---------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockGalleryRepository {
    pub photos: Mutex<Vec<ProgressPhoto>>,
}

impl MockGalleryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryRepository for MockGalleryRepository {
    async fn list(&self, user_id: Option<i64>) -> Result<Vec<ProgressPhoto>, DomainError> {
        let mut rows: Vec<ProgressPhoto> = self
            .photos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| user_id.is_none() || p.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.taken_at, b.id).cmp(&(a.taken_at, a.id)));
        Ok(rows)
    }

    async fn insert(
        &self,
        user_id: Option<i64>,
        photo: &str,
        taken_at: NaiveDate,
    ) -> Result<i64, DomainError> {
        let mut photos = self.photos.lock().unwrap();
        let id = photos.len() as i64 + 1;
        photos.push(ProgressPhoto {
            id,
            user_id,
            photo: photo.to_string(),
            taken_at,
        });
        Ok(id)
    }

    async fn photo_name(&self, id: i64) -> Result<Option<String>, DomainError> {
        Ok(self
            .photos
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.photo.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut photos = self.photos.lock().unwrap();
        let before = photos.len();
        photos.retain(|p| p.id != id);
        Ok(photos.len() < before)
    }
}

// ---------------------------------------------------------------------
// Health & dashboard
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockHealthRepository {
    next_device_id: AtomicI64,
    pub devices: Mutex<Vec<(i64, i64, String)>>,
    pub dailies: Mutex<Vec<(i64, NaiveDate, DailyAggregates)>>,
    pub samples: Mutex<Vec<NewSample>>,
}

impl MockHealthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthRepository for MockHealthRepository {
    async fn upsert_device(
        &self,
        user_id: i64,
        device_uuid: &str,
        _source: &str,
        _platform: Option<&str>,
        _model: Option<&str>,
    ) -> Result<i64, DomainError> {
        let mut devices = self.devices.lock().unwrap();
        if let Some((id, _, _)) = devices
            .iter()
            .find(|(_, uid, uuid)| *uid == user_id && uuid == device_uuid)
        {
            return Ok(*id);
        }
        let id = self.next_device_id.fetch_add(1, Ordering::SeqCst) + 1;
        devices.push((id, user_id, device_uuid.to_string()));
        Ok(id)
    }

    async fn upsert_daily(
        &self,
        user_id: i64,
        _device_id: i64,
        _source: &str,
        date: NaiveDate,
        _timezone: Option<&str>,
        aggregates: &DailyAggregates,
    ) -> Result<(), DomainError> {
        let mut dailies = self.dailies.lock().unwrap();
        dailies.retain(|(uid, d, _)| !(*uid == user_id && *d == date));
        dailies.push((user_id, date, aggregates.clone()));
        Ok(())
    }

    async fn insert_samples(
        &self,
        _user_id: i64,
        _device_id: i64,
        _source: &str,
        samples: &[NewSample],
    ) -> Result<u64, DomainError> {
        self.samples.lock().unwrap().extend_from_slice(samples);
        Ok(samples.len() as u64)
    }

    async fn daily_for(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<HealthDaily>, DomainError> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct MockDashboardReader {
    pub totals: Mutex<DailyTotals>,
    pub series: Mutex<Vec<HeartRatePoint>>,
    pub steps: Mutex<Vec<DailySteps>>,
}

impl MockDashboardReader {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DashboardReader for MockDashboardReader {
    async fn daily_totals(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<DailyTotals, DomainError> {
        Ok(self.totals.lock().unwrap().clone())
    }

    async fn heart_rate_series(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<HeartRatePoint>, DomainError> {
        Ok(self.series.lock().unwrap().clone())
    }

    async fn weekly_steps(
        &self,
        _user_id: i64,
        _date: NaiveDate,
    ) -> Result<Vec<DailySteps>, DomainError> {
        Ok(self.steps.lock().unwrap().clone())
    }
}

// ---------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------

#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    pub fail: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                crate::domain::ErrorCode::EmailError,
                "SMTP transport failed",
            ));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Timestamp helper for fixtures.
pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}
