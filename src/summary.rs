use tracing::debug;

use crate::{
    convert::{fahrenheit_to_celsius, format_date, format_temperature, Reading},
    stats::{find_max, find_min, mean},
    DayRecord, Error,
};

fn celsius(fahrenheit: impl Into<f64>) -> String {
    format_temperature(Reading(fahrenheit_to_celsius(fahrenheit.into())))
}

/// Report over the whole period: lowest and highest temperature with their
/// dates, then the average low and high. Empty input gives an empty string.
pub fn generate_overview_summary(days: &[DayRecord]) -> Result<String, Error> {
    let dates: Vec<&str> = days.iter().map(|day| day.date.as_str()).collect();
    let lows: Vec<i32> = days.iter().map(|day| day.min_temp).collect();
    let highs: Vec<i32> = days.iter().map(|day| day.max_temp).collect();

    // Both extremes are missing exactly when there are no days.
    let (Some((min_f, min_index)), Some((max_f, max_index))) = (find_min(&lows), find_max(&highs))
    else {
        return Ok(String::new());
    };
    let avg_low_f = mean(&lows)?;
    let avg_high_f = mean(&highs)?;

    let min_date = format_date(dates[min_index])?;
    let max_date = format_date(dates[max_index])?;
    debug!(days = days.len(), min_index, max_index, "overview summary");

    let mut out = String::new();
    out.push_str(&format!("{} Day Overview\n", days.len()));
    out.push_str(&format!(
        "  The lowest temperature will be {}, and will occur on {min_date}.\n",
        celsius(min_f)
    ));
    out.push_str(&format!(
        "  The highest temperature will be {}, and will occur on {max_date}.\n",
        celsius(max_f)
    ));
    out.push_str(&format!("  The average low this week is {}.\n", celsius(avg_low_f)));
    out.push_str(&format!("  The average high this week is {}.\n", celsius(avg_high_f)));

    Ok(out)
}

/// One block per day, blocks separated by a blank line.
pub fn generate_daily_summary(days: &[DayRecord]) -> Result<String, Error> {
    if days.is_empty() {
        return Ok(String::new());
    }

    let blocks = days
        .iter()
        .map(|day| -> Result<String, Error> {
            Ok(format!(
                "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n",
                format_date(&day.date)?,
                celsius(day.min_temp),
                celsius(day.max_temp),
            ))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    debug!(days = blocks.len(), "daily summary");

    let mut out = blocks.join("\n");
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_days() -> Vec<DayRecord> {
        vec![
            DayRecord::new("2021-07-02T07:00:00+00:00", 10, 20),
            DayRecord::new("2021-07-03T07:00:00+00:00", 40, 80),
        ]
    }

    #[test]
    fn empty_input_gives_empty_reports() {
        assert_eq!(generate_overview_summary(&[]).unwrap(), "");
        assert_eq!(generate_daily_summary(&[]).unwrap(), "");
    }

    #[test]
    fn overview_of_two_days() {
        let expected = "2 Day Overview
  The lowest temperature will be -12.2°C, and will occur on Friday 02 July 2021.
  The highest temperature will be 26.7°C, and will occur on Saturday 03 July 2021.
  The average low this week is -3.9°C.
  The average high this week is 10.0°C.
";
        assert_eq!(generate_overview_summary(&two_days()).unwrap(), expected);
    }

    #[test]
    fn overview_of_a_single_day() {
        let days = vec![DayRecord::new("2021-07-06 07:00:00", 32, 212)];
        let expected = "1 Day Overview
  The lowest temperature will be 0.0°C, and will occur on Tuesday 06 July 2021.
  The highest temperature will be 100.0°C, and will occur on Tuesday 06 July 2021.
  The average low this week is 0.0°C.
  The average high this week is 100.0°C.
";
        assert_eq!(generate_overview_summary(&days).unwrap(), expected);
    }

    #[test]
    fn overview_reports_last_of_tied_extremes() {
        let days = vec![
            DayRecord::new("2021-07-05", 50, 90),
            DayRecord::new("2021-07-06", 50, 90),
        ];
        let summary = generate_overview_summary(&days).unwrap();
        assert!(summary.contains("10.0°C, and will occur on Tuesday 06 July 2021."));
        assert!(summary.contains("32.2°C, and will occur on Tuesday 06 July 2021."));
        assert!(!summary.contains("Monday"));
    }

    #[test]
    fn daily_has_one_block_per_day() {
        let expected = "---- Friday 02 July 2021 ----
  Minimum Temperature: -12.2°C
  Maximum Temperature: -6.7°C

---- Saturday 03 July 2021 ----
  Minimum Temperature: 4.4°C
  Maximum Temperature: 26.7°C

";
        let summary = generate_daily_summary(&two_days()).unwrap();
        assert_eq!(summary, expected);
        assert_eq!(summary.matches("---- ").count(), 2);
    }

    #[test]
    fn bad_date_fails_the_report() {
        let days = vec![DayRecord::new("not a date", 10, 20)];
        assert!(matches!(
            generate_daily_summary(&days),
            Err(Error::Date(crate::DateError::Invalid { .. }))
        ));
        assert!(matches!(
            generate_overview_summary(&days),
            Err(Error::Date(_))
        ));
    }
}
