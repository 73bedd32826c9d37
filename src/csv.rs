// src/csv.rs
use std::io::Write;

use serde::{Serialize, Serializer};

use crate::config::consts::NULL_CELL;
use crate::specs::cars::Record;

/// `serialize_with` hook: absent values become the literal `NULL` cell.
pub fn null_if_none<T, S>(value: &Option<T>, ser: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(ser),
        None => ser.serialize_str(NULL_CELL),
    }
}

/// Header row plus one row per record. The header is written even when
/// there are no records.
pub fn write_records<W: Write>(w: W, records: &[Record]) -> Result<(), ::csv::Error> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(w);

    wtr.write_record(Record::FIELD_NAMES)?;
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(records: &[Record]) -> Result<String, ::csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records)?;

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(name: &str, mpg: Option<f64>, hp: Option<i64>) -> Record {
        Record {
            name: s!(name),
            mpg,
            cylinders: 8,
            horse_power: hp,
            weight: 3504,
            acceleration: 12.0,
            year: s!("1970"),
            country: s!("USA"),
            displacement: 307.0,
        }
    }

    #[test]
    fn header_only_when_empty() {
        let out = to_csv_string(&[]).unwrap();
        assert_eq!(
            out,
            "name,mpg,cylinders,horse_power,weight,acceleration,year,country,displacement\n"
        );
    }

    #[test]
    fn rows_render_numbers_naturally() {
        let out = to_csv_string(&[car("chevrolet chevelle malibu", Some(18.0), Some(130))]).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row, "chevrolet chevelle malibu,18.0,8,130,3504,12.0,1970,USA,307.0");
    }

    #[test]
    fn absent_values_become_null() {
        let out = to_csv_string(&[car("ford pinto", None, None)]).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row, "ford pinto,NULL,8,NULL,3504,12.0,1970,USA,307.0");
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let out = to_csv_string(&[car("amc hornet, sportabout", Some(18.0), Some(110))]).unwrap();
        assert!(out.contains("\"amc hornet, sportabout\",18.0"));
    }
}
