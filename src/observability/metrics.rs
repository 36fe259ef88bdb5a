use crate::observability::labels::Labels;
use metrics::{counter, Counter};
use strum::IntoStaticStr;

/// The first check a number failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RejectionReason {
    /// Wrong length, wrong character class or day/month out of range
    Structure,
    /// The embedded date of birth does not exist
    Date,
    /// The check digit does not match
    Checksum,
}

const REASON: &str = "reason";

pub struct ValidatorMetrics {
    pub verifications: Counter,
    pub accepted: Counter,
    rejected_structure: Counter,
    rejected_date: Counter,
    rejected_checksum: Counter,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        let rejected = |reason: RejectionReason| {
            let reason: &'static str = reason.into();
            counter!("ssn.rejected", labels.clone_with_labels(&[(REASON, reason)]))
        };

        ValidatorMetrics {
            verifications: counter!("ssn.verifications", labels.clone()),
            accepted: counter!("ssn.accepted", labels.clone()),
            rejected_structure: rejected(RejectionReason::Structure),
            rejected_date: rejected(RejectionReason::Date),
            rejected_checksum: rejected(RejectionReason::Checksum),
        }
    }

    pub fn rejected(&self, reason: RejectionReason) -> &Counter {
        match reason {
            RejectionReason::Structure => &self.rejected_structure,
            RejectionReason::Date => &self.rejected_date,
            RejectionReason::Checksum => &self.rejected_checksum,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::ValidatorConfig;
    use crate::country_validation::GermanSvnr;
    use crate::observability::metrics::RejectionReason;
    use chrono::NaiveDate;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn should_submit_verification_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        metrics::with_local_recorder(&recorder, || {
            let svnr = GermanSvnr::new(ValidatorConfig::default());
            assert!(svnr.verify_at("15 070649 C103", false, today));
            assert!(svnr.verify_at("50 150256 W493", false, today));
            // structure
            assert!(!svnr.verify_at("15 070649 0002", false, today));
            // date
            assert!(!svnr.verify_at("65310499A002", false, today));
            // checksum
            assert!(!svnr.verify_at("15 070649 C102", false, today));
            assert!(!svnr.verify_at("15 070649 C101", false, today));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let country = Label::new("country", "DE");

        let expected = vec![
            (Key::from_parts("ssn.verifications", vec![country.clone()]), 6),
            (Key::from_parts("ssn.accepted", vec![country.clone()]), 2),
            (
                Key::from_parts(
                    "ssn.rejected",
                    vec![country.clone(), Label::new("reason", "structure")],
                ),
                1,
            ),
            (
                Key::from_parts(
                    "ssn.rejected",
                    vec![country.clone(), Label::new("reason", "date")],
                ),
                1,
            ),
            (
                Key::from_parts(
                    "ssn.rejected",
                    vec![country.clone(), Label::new("reason", "checksum")],
                ),
                2,
            ),
        ];
        for (key, count) in expected {
            let metric_value = snapshot
                .get(&CompositeKey::new(Counter, key.clone()))
                .expect("metric not found");
            assert_eq!(
                metric_value,
                &(None, None, DebugValue::Counter(count)),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_reason_names() {
        let names: Vec<&'static str> = [
            RejectionReason::Structure,
            RejectionReason::Date,
            RejectionReason::Checksum,
        ]
        .into_iter()
        .map(|r| r.into())
        .collect();
        assert_eq!(names, vec!["structure", "date", "checksum"]);
    }
}
