//! Departure extraction and normalization.
//!
//! Converts the feed's mixed minutes text ("Leaving" vs. a numeric string)
//! into a single comparable representation, capped and sorted. The cap is
//! applied in feed order *before* sorting, so a nearer train that arrives
//! later in the document can fall outside the kept set.

use tracing::debug;

use crate::error::Error;
use crate::output::render_report;
use crate::parser::{ScheduleDocument, StationBlock};

/// One upcoming departure: where it goes and how many minutes until it
/// leaves. `minutes == 0` means the train is at the platform now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartingTrain {
    pub destination: String,
    pub minutes: u32,
}

/// Collects at most `max_trains` departures from `station` in feed order,
/// then stable-sorts them ascending by minutes.
///
/// The destination text is kept verbatim. A minutes value of "Leaving"
/// (any letter case) normalizes to 0; anything else must parse as a base-10
/// integer or the whole run fails with [`Error::MalformedMinutes`].
pub fn departing_trains(
    station: &StationBlock,
    max_trains: usize,
) -> Result<Vec<DepartingTrain>, Error> {
    let mut trains = Vec::new();

    for etd in &station.etd {
        let destination = etd
            .destination
            .as_deref()
            .ok_or_else(|| Error::Document("an <etd> entry is missing <destination>".into()))?;
        let minutes_text = etd
            .estimate
            .first()
            .ok_or_else(|| {
                Error::Document(format!("the <etd> entry for '{destination}' has no <estimate>"))
            })?
            .minutes
            .as_deref()
            .ok_or_else(|| {
                Error::Document(format!("the estimate for '{destination}' has no <minutes>"))
            })?;

        let minutes = if minutes_text.eq_ignore_ascii_case("leaving") {
            0
        } else {
            minutes_text
                .parse::<u32>()
                .map_err(|_| Error::MalformedMinutes {
                    destination: destination.to_string(),
                    raw: minutes_text.to_string(),
                })?
        };

        trains.push(DepartingTrain {
            destination: destination.to_string(),
            minutes,
        });

        // Cap counts arrivals, not the final nearest-N.
        if trains.len() == max_trains {
            break;
        }
    }

    trains.sort_by_key(|train| train.minutes);

    debug!(kept = trains.len(), max_trains, "Departures normalized");
    Ok(trains)
}

/// Runs the whole document-to-report step: reject server-reported errors,
/// pull the header fields and first station, normalize, render.
pub fn station_report(doc: &ScheduleDocument, max_trains: usize) -> Result<String, Error> {
    if let Some((text, details)) = doc.server_error() {
        return Err(Error::ServerReported {
            text: text.to_string(),
            details: details.to_string(),
        });
    }

    let date = doc
        .date
        .as_deref()
        .ok_or_else(|| Error::Document("response has no <date>".into()))?;
    let time = doc
        .time
        .as_deref()
        .ok_or_else(|| Error::Document("response has no <time>".into()))?;
    let station = doc
        .station
        .first()
        .ok_or_else(|| Error::Document("response has no <station>".into()))?;
    let name = station
        .name
        .as_deref()
        .ok_or_else(|| Error::Document("station block has no <name>".into()))?;

    let trains = departing_trains(station, max_trains)?;
    Ok(render_report(name, date, time, &trains))
}
