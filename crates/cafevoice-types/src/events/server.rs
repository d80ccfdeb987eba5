mod error;

pub use error::ErrorDetails;

/// `error` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorEvent {
    event_id: String,

    /// Details about the error
    error: error::ErrorDetails,
}

impl ErrorEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn error(&self) -> error::ErrorDetails {
        self.error.clone()
    }
}

/// `job.assigned` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct JobAssignedEvent {
    event_id: String,

    /// Runtime-assigned identifier for this job
    job_id: String,

    /// Name of the room the connecting user joined
    room_name: String,
}

impl JobAssignedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }
}

/// `session.started` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionStartedEvent {
    event_id: String,
    room: String,
}

impl SessionStartedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// `user_turn.committed` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserTurnCommittedEvent {
    event_id: String,
    room: String,

    /// Transcript of the committed user turn
    transcript: String,
}

impl UserTurnCommittedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

/// `reply.started` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReplyStartedEvent {
    event_id: String,
    room: String,
}

impl ReplyStartedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// `reply.done` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReplyDoneEvent {
    event_id: String,
    room: String,
}

impl ReplyDoneEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// `session.closed` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionClosedEvent {
    event_id: String,
    room: String,

    /// Why the runtime tore the session down, when it says
    reason: Option<String>,
}

impl SessionClosedEvent {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
