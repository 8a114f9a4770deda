//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use crate::sweep::{SweepConfig, SweepError, SweepRunner, SweepSummary};

use super::{CliError, CliResult, ExitCode};

/// Run the sweep described by `config`, reporting to stdout.
///
/// Exits with `FAILURE` when any worker missed its deadline. The per-size
/// summaries have already been printed by then, so the error carries no
/// message.
pub fn run_sweep(config: SweepConfig) -> CliResult<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("error: failed to start async runtime: {}", e)))?;

    let mut runner = SweepRunner::console(config);
    let summary = runtime.block_on(runner.run()).map_err(sweep_error)?;

    exit_code_for(&summary)
}

fn exit_code_for(summary: &SweepSummary) -> CliResult<ExitCode> {
    if summary.has_failures() {
        Err(CliError::new("", ExitCode::FAILURE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn sweep_error(err: SweepError) -> CliError {
    // The status line may be mid-write; start the message on its own line.
    CliError::failure(format!("\nerror: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{LaunchError, ParameterPoint, SizeReport};

    #[test]
    fn test_clean_summary_exits_zero() {
        let summary = SweepSummary {
            sizes: vec![SizeReport {
                size: 5,
                total: 6,
                succeeded: 6,
                failed_points: vec![],
            }],
        };
        assert!(matches!(exit_code_for(&summary), Ok(ExitCode::SUCCESS)));
    }

    #[test]
    fn test_failures_exit_one_without_message() {
        let summary = SweepSummary {
            sizes: vec![SizeReport {
                size: 6,
                total: 6,
                succeeded: 5,
                failed_points: vec![ParameterPoint::new(6, 2, 3)],
            }],
        };
        match exit_code_for(&summary) {
            Err(e) => {
                assert_eq!(e.exit_code, ExitCode::FAILURE);
                assert!(e.message.is_empty());
            }
            Ok(code) => panic!("expected failure, got {:?}", code),
        }
    }

    #[test]
    fn test_launch_error_message_names_program() {
        let err = SweepError::from(LaunchError::Spawn {
            program: "./target/debug/tenxten".into(),
            point: ParameterPoint::new(5, 1, 1),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        });
        let cli_err = sweep_error(err);
        assert_eq!(cli_err.exit_code, ExitCode::FAILURE);
        assert!(cli_err.message.contains("failed to launch `./target/debug/tenxten`"));
    }
}
