//! Scheduled jobs run by the Discord bot.
//!
//! Every job implements [`CronJob`] and is registered with the [`CronJobManager`] at startup.
//! The manager owns the underlying `JobScheduler` and keeps track of which jobs are currently
//! scheduled so they can be started and stopped by name from the admin API.

pub mod config;
pub mod event_reminder;

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::{
    model::bot::CronJobDto,
    server::{
        error::{cron::CronError, Error},
        scheduler::event_reminder::EventReminderJob,
        service::discord::DiscordApi,
    },
};

/// A job run on a cron schedule.
#[async_trait]
pub trait CronJob: Send + Sync {
    /// Unique name used to start and stop the job
    fn name(&self) -> &'static str;

    /// Six-field cron expression, seconds first
    fn schedule(&self) -> &'static str;

    /// Runs one tick of the job
    async fn execute(&self, ctx: &JobContext) -> Result<(), Error>;
}

/// Handles shared by every job execution
#[derive(Clone)]
pub struct JobContext {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Client for upstream requests
    pub http_client: reqwest::Client,
    /// Discord REST client carrying the bot token
    pub discord: DiscordApi,
}

/// Registers [`CronJob`]s on the scheduler and starts or stops them by name.
#[derive(Clone)]
pub struct CronJobManager {
    sched: JobScheduler,
    ctx: JobContext,
    jobs: Arc<Vec<Arc<dyn CronJob>>>,
    running: Arc<Mutex<HashMap<&'static str, Uuid>>>,
}

impl CronJobManager {
    /// Creates a new instance of [`CronJobManager`] that knows about `jobs`.
    ///
    /// No job is scheduled until [`CronJobManager::start`] or [`CronJobManager::start_job`].
    pub async fn new(ctx: JobContext, jobs: Vec<Arc<dyn CronJob>>) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            sched,
            ctx,
            jobs: Arc::new(jobs),
            running: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Creates a manager with every job the bot runs
    pub async fn with_default_jobs(ctx: JobContext) -> Result<Self, Error> {
        Self::new(ctx, vec![Arc::new(EventReminderJob)]).await
    }

    /// Schedules every known job and starts the scheduler.
    ///
    /// A job that fails to schedule is logged and skipped so the remaining jobs still run.
    pub async fn start(&self) -> Result<(), Error> {
        for job in self.jobs.iter() {
            if let Err(e) = self.start_job(job.name()).await {
                tracing::error!(job = job.name(), "Failed to schedule cron job: {}", e);
            }
        }

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules the job named `name`.
    ///
    /// Returns `false` when the job was already running.
    pub async fn start_job(&self, name: &str) -> Result<bool, Error> {
        let job = self.find(name)?;

        let mut running = self.running.lock().await;
        if running.contains_key(job.name()) {
            return Ok(false);
        }

        let ctx = self.ctx.clone();
        let task = Arc::clone(&job);
        let scheduled = Job::new_async(job.schedule(), move |_, _| {
            let ctx = ctx.clone();
            let task = Arc::clone(&task);

            Box::pin(async move {
                tracing::debug!(job = task.name(), "Running cron job");

                match task.execute(&ctx).await {
                    Ok(()) => tracing::debug!(job = task.name(), "Cron job finished"),
                    Err(e) => tracing::error!(job = task.name(), "Cron job failed: {}", e),
                }
            })
        })
        .map_err(|e| CronError::InvalidSchedule {
            name: job.name().to_string(),
            schedule: job.schedule().to_string(),
            reason: e.to_string(),
        })?;

        let job_id = self.sched.add(scheduled).await?;
        running.insert(job.name(), job_id);

        tracing::info!(job = job.name(), schedule = job.schedule(), "Started cron job");

        Ok(true)
    }

    /// Removes the job named `name` from the scheduler.
    ///
    /// Returns `false` when the job was not running.
    pub async fn stop_job(&self, name: &str) -> Result<bool, Error> {
        let job = self.find(name)?;

        let mut running = self.running.lock().await;
        let Some(job_id) = running.remove(job.name()) else {
            return Ok(false);
        };

        self.sched.remove(&job_id).await?;

        tracing::info!(job = job.name(), "Stopped cron job");

        Ok(true)
    }

    /// Unschedules every running job, used on shutdown
    pub async fn stop_all(&self) -> Result<(), Error> {
        let mut running = self.running.lock().await;

        for (name, job_id) in running.drain() {
            self.sched.remove(&job_id).await?;
            tracing::info!(job = name, "Stopped cron job");
        }

        Ok(())
    }

    /// Names of the jobs currently scheduled, sorted
    pub async fn running_jobs(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.running.lock().await.keys().copied().collect();
        names.sort_unstable();

        names
    }

    /// Every known job and whether it is scheduled
    pub async fn jobs(&self) -> Vec<CronJobDto> {
        let running = self.running.lock().await;

        self.jobs
            .iter()
            .map(|job| CronJobDto {
                name: job.name().to_string(),
                schedule: job.schedule().to_string(),
                running: running.contains_key(job.name()),
            })
            .collect()
    }

    fn find(&self, name: &str) -> Result<Arc<dyn CronJob>, CronError> {
        self.jobs
            .iter()
            .find(|job| job.name() == name)
            .cloned()
            .ok_or_else(|| CronError::UnknownJob(name.to_string()))
    }
}
