//! Axum web server exposing the playback engine over REST and WebSocket.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use sortscope_engine::{EngineStatus, SortEngine};
use sortscope_steps::{Algorithm, AlgorithmInfo, ALGORITHMS};

/// Shared application state.
pub struct AppState {
    engine: SortEngine,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a new visualization server around an engine.
    pub fn new(engine: SortEngine) -> Self {
        Self {
            state: Arc::new(AppState { engine }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Serve the frontend page
            .route("/", get(index_handler))
            // API routes
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/status", get(status_handler))
            .route("/api/sort/start", post(start_handler))
            .route("/api/sort/stop", post(stop_handler))
            .route("/api/sort/reset", post(reset_handler))
            .route("/api/array", post(array_handler))
            .route("/api/algorithm", post(algorithm_handler))
            .route("/api/speed", post(speed_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("visualizer running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Serve the frontend index page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn algorithms_handler() -> Json<Vec<AlgorithmInfo>> {
    Json(ALGORITHMS.to_vec())
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<EngineStatus> {
    Json(state.engine.status().await)
}

async fn start_handler(State(state): State<Arc<AppState>>) -> Json<EngineStatus> {
    let _ = state.engine.start().await;
    Json(state.engine.status().await)
}

async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<EngineStatus> {
    state.engine.stop().await;
    Json(state.engine.status().await)
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<EngineStatus> {
    state.engine.reset().await;
    Json(state.engine.status().await)
}

#[derive(Deserialize)]
struct SizeRequest {
    size: usize,
}

async fn array_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SizeRequest>,
) -> Json<EngineStatus> {
    state.engine.set_array_size(req.size).await;
    Json(state.engine.status().await)
}

#[derive(Deserialize)]
struct AlgorithmRequest {
    id: Algorithm,
}

async fn algorithm_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AlgorithmRequest>,
) -> Json<EngineStatus> {
    state.engine.set_algorithm(req.id).await;
    Json(state.engine.status().await)
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: u8,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<EngineStatus> {
    state.engine.set_speed(req.speed).await;
    Json(state.engine.status().await)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut status_rx = state.engine.subscribe();

    // Current state first, then every committed change.
    let status = status_rx.borrow_and_update().clone();
    if send_status(&mut socket, &status).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = status_rx.borrow_and_update().clone();
                if send_status(&mut socket, &status).await.is_err() {
                    break;
                }
            }
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        if let Ok(cmd) = serde_json::from_str::<WsCommand>(&text) {
                            let response = handle_ws_command(&state, cmd).await;
                            if let Ok(json) = serde_json::to_string(&response) {
                                if socket.send(Message::Text(json.into())).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    }
}

async fn send_status(socket: &mut WebSocket, status: &EngineStatus) -> Result<(), axum::Error> {
    match serde_json::to_string(&WsResponse::Status(status.clone())) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(_) => Ok(()),
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum WsCommand {
    #[serde(rename = "get_status")]
    GetStatus,
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "reset")]
    Reset,
    #[serde(rename = "set_speed")]
    SetSpeed { speed: u8 },
    #[serde(rename = "set_algorithm")]
    SetAlgorithm { id: Algorithm },
    #[serde(rename = "set_size")]
    SetSize { size: usize },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum WsResponse {
    #[serde(rename = "status")]
    Status(EngineStatus),
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    match cmd {
        WsCommand::GetStatus => {}
        WsCommand::Start => {
            let _ = state.engine.start().await;
        }
        WsCommand::Stop => state.engine.stop().await,
        WsCommand::Reset => state.engine.reset().await,
        WsCommand::SetSpeed { speed } => state.engine.set_speed(speed).await,
        WsCommand::SetAlgorithm { id } => state.engine.set_algorithm(id).await,
        WsCommand::SetSize { size } => state.engine.set_array_size(size).await,
    }
    WsResponse::Status(state.engine.status().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_engine::EngineConfig;

    fn test_engine() -> SortEngine {
        SortEngine::new(EngineConfig {
            array_size: 8,
            seed: Some(1),
            ..EngineConfig::default()
        })
    }

    #[test]
    fn server_creation() {
        let _server = VisServer::new(test_engine());
    }

    #[test]
    fn router_builds() {
        let server = VisServer::new(test_engine());
        let _router = server.router();
    }

    #[test]
    fn ws_commands_decode() {
        let cmd: WsCommand = serde_json::from_str(r#"{"type":"start"}"#).unwrap();
        assert!(matches!(cmd, WsCommand::Start));

        let cmd: WsCommand =
            serde_json::from_str(r#"{"type":"set_algorithm","id":"quick"}"#).unwrap();
        assert!(matches!(
            cmd,
            WsCommand::SetAlgorithm {
                id: Algorithm::Quick
            }
        ));

        let cmd: WsCommand = serde_json::from_str(r#"{"type":"set_speed","speed":80}"#).unwrap();
        assert!(matches!(cmd, WsCommand::SetSpeed { speed: 80 }));
    }

    #[test]
    fn unknown_algorithm_id_is_rejected() {
        let parsed = serde_json::from_str::<WsCommand>(r#"{"type":"set_algorithm","id":"bogo"}"#);
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn ws_commands_drive_the_engine() {
        let server = VisServer::new(test_engine());
        let state = server.state.clone();

        let response = handle_ws_command(&state, WsCommand::SetSpeed { speed: 90 }).await;
        let WsResponse::Status(status) = response;
        assert_eq!(status.speed, 90);

        let response = handle_ws_command(
            &state,
            WsCommand::SetAlgorithm {
                id: Algorithm::Insertion,
            },
        )
        .await;
        let WsResponse::Status(status) = response;
        assert_eq!(status.algorithm, Algorithm::Insertion);
    }
}
