use super::model::{Dataset, Row};

/// Return `(index, row)` pairs whose year equals `year`, in dataset order.
pub fn rows_for_year(dataset: &Dataset, year: i32) -> Vec<(usize, &Row)> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.time == year)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RawRecord;

    fn dataset() -> Dataset {
        let rows = [
            ("A", "1960"),
            ("B", "1961"),
            ("C", "1960"),
            ("D", "1962"),
        ];
        Dataset::from_records(rows.iter().map(|(loc, time)| RawRecord {
            location: loc.to_string(),
            time: time.to_string(),
            fertility_rate: "2.5".into(),
            life_expectancy: "60".into(),
            pop_mlns: "1".into(),
        }))
    }

    #[test]
    fn test_rows_for_year_keeps_only_matching_rows() {
        let ds = dataset();
        let selected = rows_for_year(&ds, 1960);
        let indices: Vec<usize> = selected.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(selected.iter().all(|(_, r)| r.time == 1960));
    }

    #[test]
    fn test_rows_for_missing_year_is_empty() {
        assert!(rows_for_year(&dataset(), 2000).is_empty());
    }
}
