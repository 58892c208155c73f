use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use ::csv::{Terminator, WriterBuilder};
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["Id", "Timestamp", "Kind", "Note"];

/// Write entries as CSV (CRLF records, standard quoting).
///
/// Rows are written in the order given; callers sort.
pub fn write_csv<W: Write>(out: W, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(HEADERS).map_err(csv_err)?;

    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.timestamp.to_rfc3339(),
            e.kind.as_str().to_string(),
            e.note_str().to_string(),
        ])
        .map_err(csv_err)?;
    }

    wtr.flush()?;
    Ok(())
}

/// CSV text of `entries`, sorted by timestamp ascending.
pub fn to_csv_string(entries: &[Entry]) -> AppResult<String> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut buf = Vec::new();
    write_csv(&mut buf, &sorted)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(e.to_string()))
}

fn csv_err(e: ::csv::Error) -> AppError {
    AppError::from(io::Error::other(format!("CSV write error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;
    use chrono::DateTime;

    fn entry(ts: &str, kind: Kind, note: Option<&str>) -> Entry {
        Entry::new(
            DateTime::parse_from_rfc3339(ts).unwrap(),
            kind,
            note.map(String::from),
        )
    }

    #[test]
    fn header_and_sorted_rows() {
        let late = entry("2024-03-01T17:00:00-03:00", Kind::Saida, None);
        let early = entry("2024-03-01T08:00:00-03:00", Kind::Entrada, Some("ok"));
        let csv = to_csv_string(&[late.clone(), early.clone()]).unwrap();

        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "Id,Timestamp,Kind,Note");
        assert_eq!(
            lines[1],
            format!("{},2024-03-01T08:00:00-03:00,entrada,ok", early.id)
        );
        assert_eq!(lines[2], format!("{},2024-03-01T17:00:00-03:00,saida,", late.id));
    }

    #[test]
    fn notes_are_quoted_when_needed() {
        let e = entry(
            "2024-03-01T08:00:00+00:00",
            Kind::Entrada,
            Some("said \"hi\", then\nleft"),
        );
        let csv = to_csv_string(&[e]).unwrap();
        assert!(csv.contains("\"said \"\"hi\"\", then\nleft\""));
    }
}
