use crate::model::Library;
use crate::statistics::Statistics;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
pub enum ShelfMetric {
    PagesUsed,
    RoomLeft,
    BookCount,
    FillRatio,
}

impl Statistics for Library {
    type Metric = ShelfMetric;

    fn avg(&self) -> f64 {
        let ratios: Vec<f64> = self
            .shelves()
            .iter()
            .filter(|s| s.size() > 0)
            .map(|s| s.pages_used() as f64 / s.size() as f64)
            .collect();

        if ratios.is_empty() {
            0.0
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        }
    }

    fn calculate_percentile(&self, metric: ShelfMetric, percentiles: &[f64]) -> Vec<f64> {
        let mut values: Vec<f64> = self
            .shelves()
            .iter()
            .map(|s| match metric {
                ShelfMetric::PagesUsed => s.pages_used() as f64,
                ShelfMetric::RoomLeft => s.room_left() as f64,
                ShelfMetric::BookCount => s.books().len() as f64,
                ShelfMetric::FillRatio => {
                    if s.size() == 0 {
                        0.0
                    } else {
                        s.pages_used() as f64 / s.size() as f64
                    }
                }
            })
            .collect();

        if values.is_empty() {
            return vec![0.0];
        }

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less));
        percentiles
            .iter()
            .map(|&p| {
                let idx = ((p.clamp(0.0, 1.0)) * ((values.len() - 1) as f64)).round() as usize;
                values.get(idx).copied().unwrap_or(0.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, Shelf};

    fn build_library() -> Library {
        let mut library = Library::new(vec![
            Shelf::new(1000, "fantasy".to_string()),
            Shelf::new(500, "mystery".to_string()),
        ]);
        library
            .add_book(&Book::new(
                "F".to_string(),
                vec!["A".to_string()],
                "fantasy".to_string(),
                Some(400),
                false,
            ))
            .unwrap();
        library
            .add_book(&Book::new(
                "M".to_string(),
                vec!["B".to_string()],
                "mystery".to_string(),
                Some(500),
                false,
            ))
            .unwrap();
        library
    }

    #[test]
    fn test_avg_fill_ratio() {
        let library = build_library();
        assert!((library.avg() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_avg_empty_library() {
        let library = Library::new(vec![]);
        assert_eq!(library.avg(), 0.0);
    }

    #[test]
    fn test_percentiles() {
        let library = build_library();
        assert_eq!(
            library.calculate_percentile(ShelfMetric::RoomLeft, &[0.0, 1.0]),
            vec![0.0, 600.0]
        );
        assert_eq!(
            library.calculate_percentile(ShelfMetric::PagesUsed, &[0.0, 1.0]),
            vec![400.0, 500.0]
        );
        assert_eq!(
            library.calculate_percentile(ShelfMetric::BookCount, &[0.5]),
            vec![1.0]
        );
    }

    #[test]
    fn test_percentiles_empty_library() {
        let library = Library::new(vec![]);
        assert_eq!(
            library.calculate_percentile(ShelfMetric::FillRatio, &[0.5]),
            vec![0.0]
        );
    }
}
