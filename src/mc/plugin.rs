//! Progress reporting while a simulation runs.

use std::cell::Cell;
use std::time;

use auto_args::AutoArgs;

use crate::prettyfloat::PrettyFloat;

/// The parameters to define the report information.
#[derive(Debug, AutoArgs, Clone)]
pub struct ReportParams {
    /// Do not make reports!
    pub quiet: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        ReportParams { quiet: true }
    }
}

/// Prints occasional progress lines while the sweeps run.
///
/// Everything goes to stderr: stdout is reserved for the summary
/// statistics, which downstream scripts parse numerically.  The report
/// schedule doubles, so even very long runs print only logarithmically
/// many lines.
#[derive(Debug)]
pub struct Report {
    /// The user has requested that nothing be printed!
    pub quiet: bool,
    start: time::Instant,
    next_report: Cell<u64>,
}

impl From<ReportParams> for Report {
    fn from(params: ReportParams) -> Self {
        Report {
            quiet: params.quiet,
            start: time::Instant::now(),
            next_report: Cell::new(1),
        }
    }
}

impl Report {
    /// Called once per completed sweep; prints when the schedule says so.
    pub fn tick(&self, sweeps: u64, total_sweeps: u64) {
        if self.quiet || sweeps < self.next_report.get() {
            return;
        }
        while self.next_report.get() <= sweeps {
            self.next_report.set(self.next_report.get() * 2);
        }
        let runtime = self.start.elapsed();
        let time_per_sweep = runtime.as_secs_f64() / sweeps as f64;
        let sweeps_left = total_sweeps.saturating_sub(sweeps);
        let time_left = (time_per_sweep * sweeps_left as f64) as u64;
        eprintln!(
            "[{}] {}% complete after {} ({} left, {:.1}us per sweep)",
            PrettyFloat(sweeps as f64),
            (100. * sweeps as f64 / total_sweeps as f64) as isize,
            format_duration(runtime.as_secs()),
            format_duration(time_left),
            PrettyFloat(time_per_sweep * 1e6)
        );
    }

    /// Print the closing acceptance summary.
    pub fn finish(&self, accepted: u64, attempted: u64) {
        if self.quiet || attempted == 0 {
            return;
        }
        eprintln!(
            "        Accepted {:.2}/{:.2} = {:.0}% of the flips",
            PrettyFloat(accepted as f64),
            PrettyFloat(attempted as f64),
            100.0 * accepted as f64 / attempted as f64
        );
    }
}

fn format_duration(secs: u64) -> String {
    let mins = secs / 60;
    let hours = mins / 60;
    if hours > 1 {
        format!("{} hours, {} minutes", hours, mins % 60)
    } else if mins > 1 {
        format!("{} minutes", mins)
    } else {
        format!("{} seconds", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(45), "45 seconds");
        assert_eq!(format_duration(119), "119 seconds");
        assert_eq!(format_duration(240), "4 minutes");
        assert_eq!(format_duration(3 * 60 * 60 + 60), "3 hours, 1 minutes");
    }
}
