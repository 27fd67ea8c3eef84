use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GoalingError;

/// The three weekly metrics reported per goal.
///
/// DWR and FCR are percentages where higher is better; AHT is a handle-time
/// duration in minutes where lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metric {
    Dwr,
    Fcr,
    Aht,
}

impl Metric {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Dwr => "DWR",
            Metric::Fcr => "FCR",
            Metric::Aht => "AHT",
        }
    }

    /// Whether this metric is percentage-style (DWR, FCR) as opposed to a
    /// duration (AHT).
    #[must_use]
    pub fn is_percentage(self) -> bool {
        matches!(self, Metric::Dwr | Metric::Fcr)
    }

    /// Normalize the raw metric segment of a goal id.
    ///
    /// Goal ids carry metric names in upstream-report form (`Contact AHT`,
    /// `TxFCR`); the lookup is exact, so anything unrecognized returns
    /// `None` and callers keep the raw string.
    #[must_use]
    pub fn from_goal_id_raw(raw: &str) -> Option<Metric> {
        match raw {
            "Contact AHT" => Some(Metric::Aht),
            "TxFCR" => Some(Metric::Fcr),
            "DWR" => Some(Metric::Dwr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = GoalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DWR" => Ok(Metric::Dwr),
            "FCR" => Ok(Metric::Fcr),
            "AHT" => Ok(Metric::Aht),
            other => Err(GoalingError::UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("dwr".parse::<Metric>().unwrap(), Metric::Dwr);
        assert_eq!("FCR".parse::<Metric>().unwrap(), Metric::Fcr);
        assert_eq!("Aht".parse::<Metric>().unwrap(), Metric::Aht);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "CSAT".parse::<Metric>().unwrap_err();
        assert!(matches!(err, GoalingError::UnknownMetric(m) if m == "CSAT"));
    }

    #[test]
    fn normalizes_raw_goal_id_metrics() {
        assert_eq!(Metric::from_goal_id_raw("Contact AHT"), Some(Metric::Aht));
        assert_eq!(Metric::from_goal_id_raw("TxFCR"), Some(Metric::Fcr));
        assert_eq!(Metric::from_goal_id_raw("DWR"), Some(Metric::Dwr));
        assert_eq!(Metric::from_goal_id_raw("FCR"), None);
        assert_eq!(Metric::from_goal_id_raw("AHT"), None);
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Metric::Aht).unwrap(), "\"AHT\"");
    }
}
