//! Attendance per subject

use school_api::{AttendanceRecord, AttendanceStatus};
use std::collections::BTreeMap;

/// Attendance of one student in one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAttendance {
    pub subject_id: String,
    /// First name the records carried for this subject, if any
    pub subject_name: Option<String>,
    pub sessions: usize,
    pub present: usize,
    /// 0 to 100; exactly 0 when there are no sessions
    pub percentage: f64,
}

impl SubjectAttendance {
    fn new(subject_id: &str) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            subject_name: None,
            sessions: 0,
            present: 0,
            percentage: 0.0,
        }
    }
}

fn percentage(present: usize, sessions: usize) -> f64 {
    if sessions == 0 {
        0.0
    } else {
        present as f64 / sessions as f64 * 100.0
    }
}

/// Group records by subject, ordered by subject id
pub fn group_by_subject(records: &[AttendanceRecord]) -> Vec<SubjectAttendance> {
    let mut groups: BTreeMap<&str, SubjectAttendance> = BTreeMap::new();

    for record in records {
        let group = groups
            .entry(record.subject_id.as_str())
            .or_insert_with(|| SubjectAttendance::new(&record.subject_id));
        group.sessions += 1;
        if record.status == AttendanceStatus::Present {
            group.present += 1;
        }
        if group.subject_name.is_none() {
            group.subject_name = record.subject_name.clone();
        }
    }

    groups
        .into_values()
        .map(|mut group| {
            group.percentage = percentage(group.present, group.sessions);
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(subject: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            subject_id: subject.to_string(),
            subject_name: Some(format!("{} name", subject)),
            date: None,
            status,
        }
    }

    #[test]
    fn test_groups_by_subject() {
        let records = vec![
            record("math", AttendanceStatus::Present),
            record("art", AttendanceStatus::Absent),
            record("math", AttendanceStatus::Late),
            record("math", AttendanceStatus::Present),
            record("math", AttendanceStatus::Leave),
        ];

        let groups = group_by_subject(&records);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].subject_id, "art");
        assert_eq!(groups[0].sessions, 1);
        assert_eq!(groups[0].present, 0);
        assert_eq!(groups[0].percentage, 0.0);

        assert_eq!(groups[1].subject_id, "math");
        assert_eq!(groups[1].subject_name.as_deref(), Some("math name"));
        assert_eq!(groups[1].sessions, 4);
        assert_eq!(groups[1].present, 2);
        assert_eq!(groups[1].percentage, 50.0);
    }

    #[test]
    fn test_zero_sessions_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0.0);
        assert!(group_by_subject(&[]).is_empty());
    }
}
