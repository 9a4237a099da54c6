//! Attendance model.
//!
//! Attendance is recorded once per employee per day. On the wire the status
//! is the integer flag the data-entry client sends: `1` present, `0` absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an employee turned up on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AttendanceStatus {
    /// The employee did not work that day.
    Absent,
    /// The employee worked that day.
    Present,
}

impl TryFrom<u8> for AttendanceStatus {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(AttendanceStatus::Absent),
            1 => Ok(AttendanceStatus::Present),
            other => Err(format!("invalid attendance status {}, expected 0 or 1", other)),
        }
    }
}

impl From<AttendanceStatus> for u8 {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Absent => 0,
            AttendanceStatus::Present => 1,
        }
    }
}

/// One employee's attendance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: u64,
    /// The day the attendance was taken.
    #[serde(alias = "attendance_date")]
    pub date: NaiveDate,
    /// Present or absent.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if the employee was present.
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}
