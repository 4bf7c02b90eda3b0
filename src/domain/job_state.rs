use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a refinement job.
///
/// `Completed` and `Errored` are terminal: no further run may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    Uploaded,
    Running,
    Stopped,
    Completed,
    Errored,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Uploaded => "UPLOADED",
            JobState::Running => "RUNNING",
            JobState::Stopped => "STOPPED",
            JobState::Completed => "COMPLETED",
            JobState::Errored => "ERRORED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Errored)
    }
}

impl FromStr for JobState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPLOADED" => Ok(JobState::Uploaded),
            "RUNNING" => Ok(JobState::Running),
            "STOPPED" => Ok(JobState::Stopped),
            "COMPLETED" => Ok(JobState::Completed),
            "ERRORED" => Ok(JobState::Errored),
            _ => Err(format!("Invalid job state: {}", s)),
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
