//! Fixed-width report rendering.

use std::fmt::Write;

use crate::schedule::DepartingTrain;

const SEPARATOR: &str = "--------------------------------------------------";

/// Renders the departure report: separator, `name\tdate\ttime` header line,
/// separator, then one line per train in the order given. Pure; the caller
/// decides where the text goes.
pub fn render_report(
    station_name: &str,
    date: &str,
    time: &str,
    trains: &[DepartingTrain],
) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "{SEPARATOR}");
    let _ = writeln!(report, "{station_name}\t{date}\t{time}");
    let _ = writeln!(report, "{SEPARATOR}");

    for train in trains {
        if train.minutes == 0 {
            let _ = writeln!(report, "Leaving {}", train.destination);
        } else {
            let _ = writeln!(report, "{} min {}", train.minutes, train.destination);
        }
    }

    report
}
