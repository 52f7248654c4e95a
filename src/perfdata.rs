/// The purpose of ToPerfString is only so one can define the perf data representation of a value
/// without using the ToString trait so we don't interfere with that.
pub trait ToPerfString {
    fn to_perf_string(&self) -> String;
}

impl_to_perf_string_on_to_string!(u32, i64);

impl<T> ToPerfString for Option<T>
where
    T: ToPerfString,
{
    fn to_perf_string(&self) -> String {
        match self {
            Some(ref s) => s.to_perf_string(),
            None => String::new(),
        }
    }
}

/// A single nagios performance data entry, `label=value;warn;crit;min`.
///
/// Values are whole days here, so no unit of measurement is emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfData {
    label: String,
    value: i64,
    warning: Option<u32>,
    critical: Option<u32>,
    min: Option<i64>,
}

impl PerfData {
    pub fn new(label: &str, value: i64) -> Self {
        PerfData {
            label: label.to_owned(),
            value,
            warning: None,
            critical: None,
            min: None,
        }
    }

    pub fn with_thresholds(mut self, warning: Option<u32>, critical: Option<u32>) -> Self {
        self.warning = warning;
        self.critical = critical;
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    fn quoted_label(&self) -> String {
        let label = self.label.replace('=', "_").replace('\'', "''");

        if label.contains(' ') {
            format!("'{label}'")
        } else {
            label
        }
    }
}

impl ToPerfString for PerfData {
    fn to_perf_string(&self) -> String {
        perf_string!(
            self.quoted_label(),
            self.value,
            self.warning,
            self.critical,
            self.min
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_data() {
        let perfdata = PerfData::new("password_age", 95);
        assert_eq!(&perfdata.to_perf_string(), "password_age=95");

        let perfdata = perfdata.with_thresholds(Some(90), Some(110)).with_min(0);
        assert_eq!(&perfdata.to_perf_string(), "password_age=95;90;110;0");

        let perfdata = PerfData::new("password_age", -3).with_thresholds(None, Some(110));
        assert_eq!(&perfdata.to_perf_string(), "password_age=-3;;110");
    }

    #[test]
    fn test_label_quoting() {
        let test_data = [
            ("age", "age=0"),
            ("age=a", "age_a=0"),
            ("ag'e", "ag''e=0"),
            ("password age", "'password age'=0"),
            ("root's age", "'root''s age'=0"),
        ];
        for (label, expected_string) in &test_data {
            let perfdata = PerfData::new(label, 0);

            assert_eq!(&perfdata.to_perf_string(), expected_string);
        }
    }
}
