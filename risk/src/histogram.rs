use crate::error::RiskError;

/// One fixed-width bin of a sample distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBucket {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Bins `values` into `nr_buckets` buckets of equal width spanning
/// `[min, max]`, in range order. The maximum value lands in the last bucket.
/// When all values are equal the span collapses and a single zero-width
/// bucket holds the whole batch.
pub fn buckets(values: &[f64], nr_buckets: usize) -> Result<Vec<HistogramBucket>, RiskError> {
    if values.is_empty() {
        return Err(RiskError::EmptyBatch);
    }
    if nr_buckets == 0 {
        return Err(RiskError::ZeroDivision);
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(mn, mx), &v| {
            (mn.min(v), mx.max(v))
        });
    let width = (max - min) / nr_buckets as f64;
    if width == 0.0 {
        return Ok(vec![HistogramBucket {
            range_start: min,
            range_end: max,
            count: values.len(),
        }]);
    }

    let mut counts = vec![0_usize; nr_buckets];
    for &v in values {
        let bucket_nr = (((v - min) / width) as usize).min(nr_buckets - 1);
        counts[bucket_nr] += 1;
    }

    Ok(counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBucket {
            range_start: min + i as f64 * width,
            range_end: min + (i + 1) as f64 * width,
            count,
        })
        .collect())
}
