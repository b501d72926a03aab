//! Aggregate statistics over a toilet's ratings.

/// Arithmetic mean of the given rating values.
///
/// Returns `None` for an empty input: a toilet with no ratings has no
/// average. Summation is done in `i64` and the division in `f64`, so
/// `[4, 5]` yields `4.5` rather than a truncated `4`.
#[must_use]
pub fn average_rating<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (total, count) = ratings
        .into_iter()
        .fold((0_i64, 0_u32), |(total, count), r| {
            (total.saturating_add(i64::from(r)), count.saturating_add(1))
        });
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = total as f64 / f64::from(count);
    Some(mean)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_has_no_average() {
        assert_eq!(average_rating(Vec::<i32>::new()), None);
    }

    #[test]
    fn single_rating_is_its_own_average() {
        assert_eq!(average_rating([3]), Some(3.0));
    }

    #[test]
    fn mean_is_not_truncated() {
        let Some(avg) = average_rating([4, 5]) else {
            panic!("expected average");
        };
        assert!(approx_eq(avg, 4.5));
    }

    #[test]
    fn mean_of_many() {
        let ratings = [1, 2, 3, 4, 5, 5, 5];
        let Some(avg) = average_rating(ratings) else {
            panic!("expected average");
        };
        assert!(approx_eq(avg, 25.0 / 7.0));
    }

    #[test]
    fn out_of_range_values_are_averaged_as_is() {
        let Some(avg) = average_rating([-1, 11]) else {
            panic!("expected average");
        };
        assert!(approx_eq(avg, 5.0));
    }
}
