//! Autopilot control loop.
//!
//! Once per poll interval the [`Autopilot`] runs one cycle:
//!
//! 1. fetch telemetry from the boat
//! 2. ask the active [`PilotStrategy`] for a bearing
//! 3. send a course command if the bearing differs from the live heading
//!
//! A failing step ends the cycle early. The failure is logged and the next
//! cycle starts from scratch with a fresh fetch: there is no backoff, no retry
//! budget and no state carried between cycles. The loop only stops when its
//! [`CancellationToken`] is cancelled, which is checked between cycles.

mod config;

pub use config::{AutopilotConfig, DEFAULT_POLL_INTERVAL_SECS};

use std::time::Duration;

use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::boat::{BoatControl, BoatError};
use crate::pilot::{PilotError, PilotStrategy};

/// Floor for the poll interval; `tokio::time::interval` rejects zero.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Result of a successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The computed bearing equals the live heading; no command was sent.
    OnCourse { heading: i32 },
    /// A course command was sent and accepted.
    CourseChanged { from: i32, to: i32 },
}

/// Recoverable failure of a single cycle, tagged with the failing step.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Failed to fetch telemetry: {0}")]
    Telemetry(#[source] BoatError),

    #[error("Failed to compute bearing: {0}")]
    Strategy(#[source] PilotError),

    #[error("Failed to set course to {bearing}°: {source}")]
    SetCourse {
        bearing: i32,
        #[source]
        source: BoatError,
    },
}

impl CycleError {
    /// Name of the step that failed, for log fields.
    pub fn step(&self) -> &'static str {
        match self {
            CycleError::Telemetry(_) => "fetch telemetry",
            CycleError::Strategy(_) => "compute bearing",
            CycleError::SetCourse { .. } => "set course",
        }
    }
}

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotSummary {
    pub cycles: u64,
    pub course_changes: u64,
    pub failures: u64,
}

/// Periodic sense-compute-act loop for one boat and one strategy.
pub struct Autopilot<B, P> {
    boat: B,
    strategy: P,
    config: AutopilotConfig,
}

impl<B, P> Autopilot<B, P>
where
    B: BoatControl,
    P: PilotStrategy,
{
    pub fn new(boat: B, strategy: P, config: AutopilotConfig) -> Self {
        Self {
            boat,
            strategy,
            config,
        }
    }

    pub fn boat(&self) -> &B {
        &self.boat
    }

    /// Start the loop as an async task.
    pub fn start(self, shutdown: CancellationToken) -> tokio::task::JoinHandle<AutopilotSummary>
    where
        B: 'static,
        P: 'static,
    {
        tokio::spawn(async move { self.run(shutdown).await })
    }

    /// Run cycles until `shutdown` is cancelled.
    pub async fn run(&self, shutdown: CancellationToken) -> AutopilotSummary {
        let period = self.config.poll_interval.max(MIN_POLL_INTERVAL);

        tracing::info!(
            strategy = %self.strategy,
            poll_interval_ms = period.as_millis() as u64,
            "Autopilot started"
        );

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut summary = AutopilotSummary::default();

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,
                _ = interval.tick() => {}
            }

            summary.cycles += 1;

            match self.run_cycle().await {
                Ok(CycleOutcome::CourseChanged { from, to }) => {
                    summary.course_changes += 1;
                    tracing::info!(from, to, "Course changed");
                }
                Ok(CycleOutcome::OnCourse { heading }) => {
                    tracing::info!(heading, "On course, no command sent");
                }
                Err(e) => {
                    summary.failures += 1;
                    tracing::warn!(step = e.step(), error = %e, "Autopilot cycle failed");
                }
            }
        }

        tracing::info!(
            cycles = summary.cycles,
            course_changes = summary.course_changes,
            failures = summary.failures,
            "Autopilot stopped"
        );
        summary
    }

    /// Run a single fetch, compute, maybe-command cycle.
    pub async fn run_cycle(&self) -> Result<CycleOutcome, CycleError> {
        let infos = self.boat.boat_infos().await.map_err(CycleError::Telemetry)?;

        let bearing = self
            .strategy
            .bearing_for(&infos)
            .map_err(CycleError::Strategy)?;

        if bearing == infos.heading {
            return Ok(CycleOutcome::OnCourse {
                heading: infos.heading,
            });
        }

        self.boat
            .set_course(bearing)
            .await
            .map_err(|source| CycleError::SetCourse { bearing, source })?;

        Ok(CycleOutcome::CourseChanged {
            from: infos.heading,
            to: bearing,
        })
    }
}

/// Run `strategy` against `boat` until `shutdown` is cancelled.
pub async fn run_autopilot<B, P>(
    boat: B,
    strategy: P,
    config: AutopilotConfig,
    shutdown: CancellationToken,
) -> AutopilotSummary
where
    B: BoatControl,
    P: PilotStrategy,
{
    Autopilot::new(boat, strategy, config).run(shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boat::{BoatInfos, TelemetrySource};
    use crate::geo::Position;
    use crate::pilot::{DirectLine, WindVane};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted boat: pops one telemetry result per fetch and records courses.
    #[derive(Default)]
    struct MockBoat {
        telemetry: Mutex<VecDeque<Result<BoatInfos, BoatError>>>,
        fallback: BoatInfos,
        /// Number of upcoming course commands that fail.
        set_course_failures: Mutex<u32>,
        courses: Mutex<Vec<i32>>,
        fetches: Mutex<u32>,
    }

    impl MockBoat {
        fn steady(infos: BoatInfos) -> Self {
            Self {
                fallback: infos,
                ..Default::default()
            }
        }

        fn scripted(script: Vec<Result<BoatInfos, BoatError>>, fallback: BoatInfos) -> Self {
            Self {
                telemetry: Mutex::new(script.into()),
                fallback,
                ..Default::default()
            }
        }

        fn courses(&self) -> Vec<i32> {
            self.courses.lock().unwrap().clone()
        }

        fn fetches(&self) -> u32 {
            *self.fetches.lock().unwrap()
        }
    }

    impl TelemetrySource for MockBoat {
        async fn boat_infos(&self) -> Result<BoatInfos, BoatError> {
            *self.fetches.lock().unwrap() += 1;
            self.telemetry
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(self.fallback.clone()))
        }
    }

    impl BoatControl for MockBoat {
        async fn set_course(&self, bearing: i32) -> Result<(), BoatError> {
            let mut failures = self.set_course_failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(BoatError::Status { status: 500 });
            }
            self.courses.lock().unwrap().push(bearing);
            Ok(())
        }
    }

    fn infos(heading: i32, twa: i32) -> BoatInfos {
        BoatInfos {
            heading,
            twa,
            coord: vec![-41.23, 29.6],
            ..Default::default()
        }
    }

    fn fast_config() -> AutopilotConfig {
        AutopilotConfig::new().with_poll_interval(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_no_command_when_on_course() {
        // TWA already at target: bearing equals heading
        let autopilot = Autopilot::new(
            MockBoat::steady(infos(120, 45)),
            WindVane::new(45),
            fast_config(),
        );

        let outcome = autopilot.run_cycle().await.unwrap();
        assert_eq!(outcome, CycleOutcome::OnCourse { heading: 120 });
        assert!(autopilot.boat().courses().is_empty());
    }

    #[tokio::test]
    async fn test_one_command_when_off_course() {
        let autopilot = Autopilot::new(
            MockBoat::steady(infos(234, -11)),
            WindVane::new(-39),
            fast_config(),
        );

        let outcome = autopilot.run_cycle().await.unwrap();
        assert_eq!(outcome, CycleOutcome::CourseChanged { from: 234, to: 206 });
        assert_eq!(autopilot.boat().courses(), vec![206]);
    }

    #[tokio::test]
    async fn test_direct_line_sends_truncated_bearing() {
        let target = Position::new(14.5, -60.8);
        let expected = Position::new(29.6, -41.23).bearing_to(&target) as i32;

        let autopilot = Autopilot::new(
            MockBoat::steady(infos(0, 0)),
            DirectLine::new(target),
            fast_config(),
        );

        autopilot.run_cycle().await.unwrap();
        assert_eq!(autopilot.boat().courses(), vec![expected]);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_command() {
        let boat = MockBoat::scripted(
            vec![Err(BoatError::HttpError("timeout".to_string()))],
            infos(0, 0),
        );
        let autopilot = Autopilot::new(boat, WindVane::new(90), fast_config());

        let result = autopilot.run_cycle().await;
        assert!(matches!(result, Err(CycleError::Telemetry(_))));
        assert_eq!(result.unwrap_err().step(), "fetch telemetry");
        assert!(autopilot.boat().courses().is_empty());
    }

    #[tokio::test]
    async fn test_strategy_failure_skips_command() {
        let bad = BoatInfos {
            coord: vec![1.0],
            ..Default::default()
        };
        let autopilot = Autopilot::new(
            MockBoat::steady(bad),
            DirectLine::new(Position::new(0.0, 0.0)),
            fast_config(),
        );

        let result = autopilot.run_cycle().await;
        assert!(matches!(result, Err(CycleError::Strategy(_))));
        assert!(autopilot.boat().courses().is_empty());
    }

    #[tokio::test]
    async fn test_set_course_failure_is_reported() {
        let boat = MockBoat {
            fallback: infos(0, 0),
            set_course_failures: Mutex::new(1),
            ..Default::default()
        };
        let autopilot = Autopilot::new(boat, WindVane::new(90), fast_config());

        let err = autopilot.run_cycle().await.unwrap_err();
        assert!(matches!(err, CycleError::SetCourse { bearing: 90, .. }));
        assert_eq!(err.step(), "set course");
    }

    #[tokio::test]
    async fn test_loop_recovers_after_failures() {
        let boat = MockBoat::scripted(
            vec![
                Err(BoatError::HttpError("connection reset".to_string())),
                Err(BoatError::Status { status: 503 }),
            ],
            infos(0, 0),
        );
        let autopilot = Autopilot::new(boat, WindVane::new(90), fast_config());
        let shutdown = CancellationToken::new();

        let run = autopilot.run(shutdown.clone());
        let stopper = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            shutdown.cancel();
        };
        let (summary, _) = tokio::join!(run, stopper);

        assert!(summary.cycles >= 3, "only {} cycles ran", summary.cycles);
        assert_eq!(summary.failures, 2);
        assert_eq!(summary.course_changes, summary.cycles - 2);
        assert_eq!(autopilot.boat().fetches() as u64, summary.cycles);
        assert!(autopilot.boat().courses().iter().all(|&c| c == 90));
    }

    #[tokio::test]
    async fn test_loop_recovers_after_strategy_and_command_failures() {
        let target = Position::new(14.5, -60.8);
        let expected = Position::new(29.6, -41.23).bearing_to(&target) as i32;
        let bad_coord = BoatInfos {
            coord: vec![1.0],
            ..Default::default()
        };
        let boat = MockBoat {
            telemetry: Mutex::new(vec![Ok(bad_coord)].into()),
            fallback: infos(0, 0),
            set_course_failures: Mutex::new(1),
            ..Default::default()
        };
        let autopilot = Autopilot::new(boat, DirectLine::new(target), fast_config());
        let shutdown = CancellationToken::new();

        let run = autopilot.run(shutdown.clone());
        let stopper = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            shutdown.cancel();
        };
        let (summary, _) = tokio::join!(run, stopper);

        // Cycle 1 fails computing the bearing, cycle 2 fails sending it,
        // every later cycle sends the course again.
        assert!(summary.cycles >= 3, "only {} cycles ran", summary.cycles);
        assert_eq!(summary.failures, 2);
        assert_eq!(summary.course_changes, summary.cycles - 2);

        let courses = autopilot.boat().courses();
        assert_eq!(courses.len() as u64, summary.course_changes);
        assert!(courses.iter().all(|&c| c == expected));
    }

    #[tokio::test]
    async fn test_cancelled_before_start_runs_no_cycle() {
        let autopilot = Autopilot::new(
            MockBoat::steady(infos(0, 0)),
            WindVane::new(90),
            fast_config(),
        );
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let summary = autopilot.run(shutdown).await;
        assert_eq!(summary, AutopilotSummary::default());
        assert_eq!(autopilot.boat().fetches(), 0);
    }

    #[tokio::test]
    async fn test_start_stops_on_cancel() {
        let autopilot = Autopilot::new(
            MockBoat::steady(infos(45, 45)),
            WindVane::new(45),
            fast_config(),
        );
        let shutdown = CancellationToken::new();
        let handle = autopilot.start(shutdown.clone());

        tokio::time::sleep(Duration::from_millis(30)).await;
        shutdown.cancel();

        let summary = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("autopilot did not stop")
            .unwrap();
        assert!(summary.cycles >= 1);
        assert_eq!(summary.course_changes, 0);
        assert_eq!(summary.failures, 0);
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let autopilot = Autopilot::new(
            MockBoat::steady(infos(0, 0)),
            WindVane::new(0),
            AutopilotConfig::new().with_poll_interval(Duration::ZERO),
        );
        let shutdown = CancellationToken::new();

        let run = autopilot.run(shutdown.clone());
        let stopper = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            shutdown.cancel();
        };
        let (summary, _) = tokio::join!(run, stopper);
        assert!(summary.cycles >= 1);
    }
}
