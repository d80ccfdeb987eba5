use crate::session::Session;

/// `session.start` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionStartEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,

    /// Name of the room the session is bound to
    room: String,

    /// The session configuration for this room
    session: Session,
}

impl SessionStartEvent {
    pub fn new(room: &str, session: Session) -> Self {
        Self {
            event_id: None,
            room: room.to_string(),
            session,
        }
    }

    pub fn with_event_id(mut self, event_id: &str) -> Self {
        self.event_id = Some(event_id.to_string());
        self
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// `response.create` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResponseCreateEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,

    /// Name of the room whose session should generate a reply
    room: String,
}

impl ResponseCreateEvent {
    pub fn new(room: &str) -> Self {
        Self {
            event_id: None,
            room: room.to_string(),
        }
    }

    pub fn with_event_id(mut self, event_id: &str) -> Self {
        self.event_id = Some(event_id.to_string());
        self
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// `session.end` event
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionEndEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,

    /// Name of the room whose session should be torn down
    room: String,
}

impl SessionEndEvent {
    pub fn new(room: &str) -> Self {
        Self {
            event_id: None,
            room: room.to_string(),
        }
    }

    pub fn with_event_id(mut self, event_id: &str) -> Self {
        self.event_id = Some(event_id.to_string());
        self
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}
