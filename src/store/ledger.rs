use super::error::Error;
use super::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One row of the append-only calculation ledger. Columns that do not apply
/// to an operation stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub metal: Option<String>,
    pub input_g: Option<f64>,
    pub density_g_cm3: Option<f64>,
    pub purity_percent: Option<f64>,
    pub karats: Option<f64>,
    pub fine_gold_g: Option<f64>,
    pub addition_g: Option<f64>,
    pub total_g: Option<f64>,
    pub value: Option<f64>,
}

impl LedgerRecord {
    /// A record with every data column empty; callers fill in what the
    /// operation produced.
    pub fn new(operation: Operation, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            operation,
            metal: None,
            input_g: None,
            density_g_cm3: None,
            purity_percent: None,
            karats: None,
            fine_gold_g: None,
            addition_g: None,
            total_g: None,
            value: None,
        }
    }
}

/// Appends one record. `with_headers` must be true exactly when the
/// destination is empty so the header row is written once.
pub fn append_record<W: Write>(
    writer: W,
    record: &LedgerRecord,
    with_headers: bool,
) -> Result<(), Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(with_headers)
        .from_writer(writer);
    csv_writer.serialize(record)?;
    csv_writer.flush()?;
    Ok(())
}

/// Reads the whole ledger. A malformed row is an error, not a skip; the
/// ledger is small and silent data loss would be worse than a complaint.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<LedgerRecord>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: LedgerRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap()
    }

    fn assay_record() -> LedgerRecord {
        let mut record = LedgerRecord::new(Operation::Assay, sample_time());
        record.metal = Some("copper".to_string());
        record.input_g = Some(19.0);
        record.density_g_cm3 = Some(19.0);
        record.purity_percent = Some(98.543385);
        record.karats = Some(23.650413);
        record.fine_gold_g = Some(18.723243);
        record
    }

    #[test]
    fn append_then_read_round_trips() {
        let mut buffer = Vec::new();
        append_record(&mut buffer, &assay_record(), true).unwrap();

        let mut raise = LedgerRecord::new(Operation::Raise, sample_time());
        raise.input_g = Some(100.0);
        raise.addition_g = Some(66.666667);
        raise.total_g = Some(166.666667);
        raise.karats = Some(18.0);
        append_record(&mut buffer, &raise, false).unwrap();

        let records = read_records(buffer.as_slice()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], assay_record());
        assert_eq!(records[1].operation, Operation::Raise);
        assert_eq!(records[1].metal, None);
        assert_eq!(records[1].addition_g, Some(66.666667));
    }

    #[test]
    fn header_row_is_written_once() {
        let mut buffer = Vec::new();
        append_record(&mut buffer, &assay_record(), true).unwrap();
        append_record(&mut buffer, &assay_record(), false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.matches("timestamp,operation").count(), 1);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_ledger_reads_empty() {
        let records = read_records("".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_row_is_an_error() {
        let text = "timestamp,operation,metal,input_g,density_g_cm3,purity_percent,karats,fine_gold_g,addition_g,total_g,value\nnot-a-time,assay,,,,,,,,,\n";
        assert!(matches!(
            read_records(text.as_bytes()),
            Err(Error::Ledger(_))
        ));
    }
}
