/// Handle to the media room a job is bound to.
///
/// Media never flows through this layer; the handle is the name the runtime
/// addresses the room by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomHandle {
    name: String,
}

impl RoomHandle {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Connection context the runtime supplies once per incoming connection.
#[derive(Debug, Clone)]
pub struct JobContext {
    room: RoomHandle,
}

impl JobContext {
    pub fn new(room: RoomHandle) -> Self {
        Self { room }
    }

    pub fn room(&self) -> &RoomHandle {
        &self.room
    }
}
