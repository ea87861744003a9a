//! Load payroll streams from streams.csv

use super::{CompensationConfig, PayrollStream};
use crate::error::Result;
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

/// Default path to the stream input file
pub const DEFAULT_STREAMS_PATH: &str = "data/streams.csv";

/// Raw CSV row matching streams.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    employer_name: String,
    monthly_salary: Option<f64>,
    hourly_rate: Option<f64>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
}

impl CsvRow {
    fn into_stream(self) -> Result<PayrollStream> {
        let compensation = CompensationConfig {
            monthly_salary: self.monthly_salary,
            hourly_rate: self.hourly_rate,
        };
        compensation.validate()?;

        Ok(PayrollStream {
            id: self.id,
            employer_name: self.employer_name,
            compensation,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        })
    }
}

/// Load all streams from a CSV file
pub fn load_streams<P: AsRef<Path>>(path: P) -> Result<Vec<PayrollStream>> {
    let file = std::fs::File::open(path.as_ref())?;
    let streams = load_streams_from_reader(file)?;
    log::info!("Loaded {} streams from {}", streams.len(), path.as_ref().display());
    Ok(streams)
}

/// Load streams from any reader (e.g., string buffer)
pub fn load_streams_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PayrollStream>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut streams = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        streams.push(row.into_stream()?);
    }

    Ok(streams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compensation::CompensationMode;
    use crate::error::EngineError;

    const STREAMS: &str = "\
id,employer_name,monthly_salary,hourly_rate,start_date,end_date,is_active
s1,Acme Corp,30000000,,2024-01-01,,true
s2,Freelance Studio,,250000,2024-02-15,2024-08-15,false
";

    #[test]
    fn test_load_streams_from_reader() {
        let streams = load_streams_from_reader(STREAMS.as_bytes()).unwrap();
        assert_eq!(streams.len(), 2);

        let s1 = &streams[0];
        assert_eq!(s1.employer_name, "Acme Corp");
        assert_eq!(s1.compensation.mode(), Some(CompensationMode::Monthly));
        assert!(s1.end_date.is_none());
        assert!(s1.is_active);

        let s2 = &streams[1];
        assert_eq!(s2.compensation.hourly_rate, Some(250_000.0));
        assert_eq!(s2.end_date, NaiveDate::from_ymd_opt(2024, 8, 15));
        assert!(!s2.is_active);
    }

    #[test]
    fn test_rejects_missing_compensation() {
        let csv = "\
id,employer_name,monthly_salary,hourly_rate,start_date,end_date,is_active
s1,Nobody,,,2024-01-01,,true
";
        let result = load_streams_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(EngineError::MissingCompensation)));
    }

    #[test]
    fn test_rejects_bad_date() {
        let csv = "\
id,employer_name,monthly_salary,hourly_rate,start_date,end_date,is_active
s1,Acme,1000,,not-a-date,,true
";
        assert!(matches!(
            load_streams_from_reader(csv.as_bytes()),
            Err(EngineError::Csv(_))
        ));
    }
}
