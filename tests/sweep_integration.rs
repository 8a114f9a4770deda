//! End-to-end sweeps against real short-lived processes
//!
//! The solver is replaced by a scripted launcher that runs `true` for points
//! expected to finish and `sleep` for points expected to hang, so these tests
//! need a Unix userland.

#![cfg(unix)]

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tenxten_sweep::{
    ConsoleReporter, LaunchError, ParameterPoint, SolverLauncher, SweepConfig, SweepError, SweepRunner, WorkerHandle,
    WorkerLauncher,
};
use tokio::process::Command;

const TEST_TIMEOUT: Duration = Duration::from_millis(300);

/// Hangs on the listed `(row, col)` starts, exits immediately otherwise.
struct ScriptedLauncher {
    hang: HashSet<(usize, usize)>,
}

impl ScriptedLauncher {
    fn new(hang: &[(usize, usize)]) -> Self {
        Self {
            hang: hang.iter().copied().collect(),
        }
    }
}

impl WorkerLauncher for ScriptedLauncher {
    fn launch(&self, point: ParameterPoint) -> Result<WorkerHandle, LaunchError> {
        let mut cmd = if self.hang.contains(&(point.row, point.col)) {
            let mut cmd = Command::new("sleep");
            cmd.arg("30");
            cmd
        } else {
            Command::new("true")
        };
        WorkerHandle::spawn(point, &mut cmd)
    }
}

fn scripted_runner(
    sizes: std::ops::RangeInclusive<usize>,
    launcher: ScriptedLauncher,
) -> SweepRunner<ScriptedLauncher, ConsoleReporter<Vec<u8>>> {
    let config = SweepConfig::new().with_sizes(sizes).with_timeout(TEST_TIMEOUT);
    SweepRunner::new(config, launcher, ConsoleReporter::new(Vec::new()))
}

fn output(runner: SweepRunner<ScriptedLauncher, ConsoleReporter<Vec<u8>>>) -> String {
    String::from_utf8(runner.into_reporter().into_inner()).unwrap()
}

#[tokio::test]
async fn size_five_all_quick_prints_clean_summary() {
    let mut runner = scripted_runner(5..=5, ScriptedLauncher::new(&[]));
    let summary = runner.run().await.unwrap();

    assert_eq!(summary.sizes.len(), 1);
    assert_eq!(summary.sizes[0].total, 6);
    assert_eq!(summary.sizes[0].succeeded, 6);
    assert!(!summary.has_failures());

    let mut expected = String::from("size: 5\n");
    for done in 1..=6 {
        expected.push_str(&format!("\rsuccess: {}/6, failed: 0/6", done));
    }
    expected.push_str("\n----------\n");
    assert_eq!(output(runner), expected);
}

#[tokio::test]
async fn size_six_with_hung_start_lists_it_as_failed() {
    let mut runner = scripted_runner(6..=6, ScriptedLauncher::new(&[(2, 3)]));
    let summary = runner.run().await.unwrap();

    let report = &summary.sizes[0];
    assert_eq!(report.total, 6);
    assert_eq!(report.succeeded, 5);
    assert_eq!(report.failed_points, vec![ParameterPoint::new(6, 2, 3)]);

    let out = output(runner);
    assert!(out.contains("\rsuccess: 5/6, failed: 1/6\n"));
    assert!(out.ends_with("FAILED:\n2 3\n----------\n"));
}

#[tokio::test]
async fn failed_points_follow_generation_order() {
    // (3, 3) is generated last but listed first in the hang set; order must
    // still follow generation.
    let mut runner = scripted_runner(5..=5, ScriptedLauncher::new(&[(3, 3), (1, 2)]));
    let summary = runner.run().await.unwrap();

    assert_eq!(
        summary.sizes[0].failed_points,
        vec![ParameterPoint::new(5, 1, 2), ParameterPoint::new(5, 3, 3)]
    );
    insta::assert_snapshot!(output(runner).rsplit('\r').next().unwrap().trim(), @r"
    success: 4/6, failed: 2/6
    FAILED:
    1 2
    3 3
    ----------
    ");
}

#[tokio::test]
async fn sizes_run_in_order_with_separator_each() {
    let mut runner = scripted_runner(3..=5, ScriptedLauncher::new(&[]));
    let summary = runner.run().await.unwrap();

    let sizes: Vec<usize> = summary.sizes.iter().map(|s| s.size).collect();
    assert_eq!(sizes, vec![3, 4, 5]);
    assert_eq!(summary.total(), 3 + 3 + 6);

    let out = output(runner);
    assert_eq!(out.matches("----------\n").count(), 3);
    let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("size: ")).collect();
    assert_eq!(headers, vec!["size: 3", "size: 4", "size: 5"]);
}

#[tokio::test]
async fn hung_workers_are_judged_on_their_own_windows() {
    // Two hung workers awaited back to back take two full windows, not one.
    let mut runner = scripted_runner(2..=2, ScriptedLauncher::new(&[(1, 1)]));
    let started = Instant::now();
    let summary = runner.run().await.unwrap();
    assert_eq!(summary.failed(), 1);
    assert!(started.elapsed() >= TEST_TIMEOUT);

    let mut runner = scripted_runner(3..=3, ScriptedLauncher::new(&[(1, 1), (2, 2)]));
    let started = Instant::now();
    let summary = runner.run().await.unwrap();
    assert_eq!(summary.failed(), 2);
    assert!(started.elapsed() >= TEST_TIMEOUT * 2);
}

#[tokio::test]
async fn missing_solver_aborts_before_any_progress() {
    let config = SweepConfig::new()
        .with_solver("./no/such/tenxten")
        .with_sizes(5..=20)
        .with_timeout(TEST_TIMEOUT);
    let launcher = SolverLauncher::new(config.solver());
    let mut runner = SweepRunner::new(config, launcher, ConsoleReporter::new(Vec::new()));

    let err = runner.run().await.unwrap_err();
    match err {
        SweepError::Launch(LaunchError::Spawn { point, .. }) => {
            assert_eq!(point, ParameterPoint::new(5, 1, 1));
        }
        other => panic!("expected launch error, got {:?}", other),
    }

    let out = String::from_utf8(runner.into_reporter().into_inner()).unwrap();
    assert_eq!(out, "size: 5\n");
    assert!(!out.contains("success:"));
}
