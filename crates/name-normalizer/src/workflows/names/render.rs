use super::classifier::PersonRecord;
use super::NamesError;
use std::io::Write;

const CSV_HEADER: [&str; 4] = ["title", "first_name", "initial", "last_name"];

/// Serialization targets for a normalized name list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub fn write_json<W: Write>(
    mut writer: W,
    records: &[PersonRecord],
    pretty: bool,
) -> Result<(), NamesError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Writes a header row followed by one row per record; unset fields are empty.
pub fn write_csv<W: Write>(writer: W, records: &[PersonRecord]) -> Result<(), NamesError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_records<W: Write>(
    writer: W,
    records: &[PersonRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), NamesError> {
    match format {
        OutputFormat::Json => write_json(writer, records, pretty),
        OutputFormat::Csv => write_csv(writer, records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PersonRecord> {
        vec![
            PersonRecord {
                title: "Mr".to_string(),
                first_name: Some("John".to_string()),
                initial: None,
                last_name: Some("Smith".to_string()),
            },
            PersonRecord {
                title: "Dr".to_string(),
                first_name: None,
                initial: Some("P".to_string()),
                last_name: Some("Gunn".to_string()),
            },
        ]
    }

    #[test]
    fn compact_json_keeps_nulls() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &sample(), false).expect("json renders");
        let output = String::from_utf8(buffer).expect("utf8 output");
        assert_eq!(
            output,
            "[{\"title\":\"Mr\",\"first_name\":\"John\",\"initial\":null,\"last_name\":\"Smith\"},\
{\"title\":\"Dr\",\"first_name\":null,\"initial\":\"P\",\"last_name\":\"Gunn\"}]\n"
        );
    }

    #[test]
    fn csv_output_has_header_and_empty_unset_fields() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &sample(), OutputFormat::Csv, true).expect("csv renders");
        let output = String::from_utf8(buffer).expect("utf8 output");
        assert_eq!(
            output,
            "title,first_name,initial,last_name\nMr,John,,Smith\nDr,,P,Gunn\n"
        );
    }

    #[test]
    fn empty_csv_still_has_header() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).expect("csv renders");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8 output"),
            "title,first_name,initial,last_name\n"
        );
    }
}
