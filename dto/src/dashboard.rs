use crate::daily_report::DailyAttendanceReport;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The landing-page summary for one gender partition.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct DashboardSummary {
    total_athletes: i64,
    active: i64,
    expiring_soon: i64,
    expiring_within_48h: i64,
    attendance: DailyAttendanceReport,
}

impl DashboardSummary {
    pub fn new(
        total_athletes: i64,
        active: i64,
        expiring_soon: i64,
        expiring_within_48h: i64,
        attendance: DailyAttendanceReport,
    ) -> Self {
        Self {
            total_athletes,
            active,
            expiring_soon,
            expiring_within_48h,
            attendance,
        }
    }
}
