use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tracing::{debug, info, warn};

const GREETING: &str = "Hi Client!";

pub async fn ws_endpoint(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    info!("websocket client connected");
    if let Err(err) = socket.send(Message::Text(GREETING.to_string())).await {
        warn!("websocket greeting failed: {}", err);
        return;
    }

    while let Some(frame) = socket.recv().await {
        let message = match frame {
            Ok(message) => message,
            Err(err) => {
                debug!("websocket read ended: {}", err);
                return;
            }
        };
        let reply = match message {
            Message::Text(text) => {
                info!(message = %text, "websocket message received");
                Message::Text(text)
            }
            Message::Binary(bytes) => Message::Binary(bytes),
            Message::Close(_) => break,
            // pings are answered by axum
            Message::Ping(_) | Message::Pong(_) => continue,
        };
        if let Err(err) = socket.send(reply).await {
            debug!("websocket write ended: {}", err);
            return;
        }
    }
    info!("websocket client disconnected");
}
