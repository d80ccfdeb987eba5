pub mod client;
mod server;

use client::*;
pub use server::*;

/// Events the agent worker sends to the runtime.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "session.start")]
    SessionStart(SessionStartEvent),
    #[serde(rename = "response.create")]
    ResponseCreate(ResponseCreateEvent),
    #[serde(rename = "session.end")]
    SessionEnd(SessionEndEvent),
}

/// Events the runtime sends back to the agent worker.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "close")]
    Close { reason: Option<String> },
    #[serde(rename = "error")]
    Error(ErrorEvent),
    #[serde(rename = "job.assigned")]
    JobAssigned(JobAssignedEvent),
    #[serde(rename = "session.started")]
    SessionStarted(SessionStartedEvent),
    #[serde(rename = "user_turn.committed")]
    UserTurnCommitted(UserTurnCommittedEvent),
    #[serde(rename = "reply.started")]
    ReplyStarted(ReplyStartedEvent),
    #[serde(rename = "reply.done")]
    ReplyDone(ReplyDoneEvent),
    #[serde(rename = "session.closed")]
    SessionClosed(SessionClosedEvent),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_client_event_tags() {
        let event = ClientEvent::ResponseCreate(ResponseCreateEvent::new("lunch-hall"));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"response.create","room":"lunch-hall"}"#);
    }

    #[test]
    fn test_server_event_round_trip() {
        let json = r#"{"type":"job.assigned","event_id":"ev_1","job_id":"job_7","room_name":"lunch-hall"}"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        match event {
            ServerEvent::JobAssigned(job) => {
                assert_eq!(job.room_name(), "lunch-hall");
                assert_eq!(job.job_id(), "job_7");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
