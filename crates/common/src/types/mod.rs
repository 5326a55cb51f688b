use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
