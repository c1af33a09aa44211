//! Stdio MCP server: read loop, per-request tasks, single writer.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::codec::{read_message, write_message};
use super::protocol::JsonRpcResponse;
use super::router::Router;
use crate::tools::Dispatcher;
use crate::types::{AppConfig, ServerConfig};

/// MCP server wrapping the dispatcher.
#[derive(Debug)]
pub struct McpServer {
    router: Arc<Router>,
    cancel: CancellationToken,
    server_config: ServerConfig,
}

impl McpServer {
    pub fn new(dispatcher: Arc<Dispatcher>, app: &AppConfig, server_config: ServerConfig) -> Self {
        Self {
            router: Arc::new(Router::new(dispatcher, app)),
            cancel: CancellationToken::new(),
            server_config,
        }
    }

    /// Token that stops the read loop when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Request graceful shutdown.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Serve on the process's stdin/stdout.
    pub async fn serve_stdio(&self) -> std::io::Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve until EOF, cancellation, or a fatal read error.
    ///
    /// In-flight calls are drained and their responses written before this
    /// returns.
    pub async fn serve<R, W>(&self, mut reader: R, writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let capacity = self.server_config.response_channel_capacity.max(1);
        let (tx, rx) = mpsc::channel::<JsonRpcResponse>(capacity);
        let writer_task = tokio::spawn(write_responses(writer, rx));
        let mut in_flight = JoinSet::new();
        tracing::info!(
            "MCP server listening on stdio (max_message_bytes={})",
            self.server_config.max_message_bytes,
        );

        let read_result = loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::info!("MCP server shutting down");
                    break Ok(());
                }
                message = read_message(&mut reader, self.server_config.max_message_bytes) => {
                    let line = match message {
                        Ok(Some(line)) => line,
                        Ok(None) => {
                            tracing::debug!("stdin closed");
                            break Ok(());
                        }
                        Err(e) => {
                            tracing::error!("Read failed: {}", e);
                            break Err(e);
                        }
                    };
                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }

                    let router = self.router.clone();
                    let tx = tx.clone();
                    in_flight.spawn(async move {
                        if let Some(response) = router.handle_line(&line).await {
                            if tx.send(response).await.is_err() {
                                tracing::warn!("writer closed, dropping response");
                            }
                        }
                    });
                }
            }

            // Reap finished handlers so the set does not grow unbounded.
            while in_flight.try_join_next().is_some() {}
        };

        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                tracing::error!("request task failed: {}", e);
            }
        }
        drop(tx);

        let write_result = writer_task.await.map_err(std::io::Error::other)?;
        read_result.and(write_result)
    }
}

/// Single writer: serializes responses onto the output in completion order.
async fn write_responses<W>(
    mut writer: W,
    mut rx: mpsc::Receiver<JsonRpcResponse>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        write_message(&mut writer, &response).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::testing::StubClient;
    use crate::tools::{AccessMode, ToolSet};
    use crate::types::ErrorMode;
    use serde_json::{json, Value};
    use tokio::io::AsyncReadExt;

    fn server(max_message_bytes: usize) -> McpServer {
        let dispatcher = Dispatcher::new(
            ToolSet::new(AccessMode::ReadWrite),
            Arc::new(StubClient::replying(Ok(json!({})))),
            ErrorMode::Respond,
        );
        McpServer::new(
            Arc::new(dispatcher),
            &AppConfig::default(),
            ServerConfig {
                max_message_bytes,
                response_channel_capacity: 4,
            },
        )
    }

    async fn run(server: &McpServer, input: &[u8]) -> (std::io::Result<()>, Vec<Value>) {
        let (mut client, server_side) = tokio::io::duplex(64 * 1024);
        let result = server.serve(input, server_side).await;
        let mut raw = Vec::new();
        client.read_to_end(&mut raw).await.unwrap();
        let lines = raw
            .split(|b| *b == b'\n')
            .filter(|l| !l.is_empty())
            .map(|l| serde_json::from_slice(l).unwrap())
            .collect();
        (result, lines)
    }

    #[tokio::test]
    async fn test_serves_until_eof() {
        let input: &[u8] = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n\n\
            {\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n";
        let (result, lines) = run(&server(1024), input).await;
        result.unwrap();
        assert_eq!(lines, vec![json!({"jsonrpc": "2.0", "id": 1, "result": {}})]);
    }

    #[tokio::test]
    async fn test_oversized_line_ends_session() {
        let mut input = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n".to_vec();
        input.extend(std::iter::repeat(b'x').take(200));
        input.push(b'\n');
        let (result, lines) = run(&server(64), &input).await;
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidData);
        // The request read before the oversized line is still answered.
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_server_stops_reading() {
        let server = server(1024);
        server.shutdown();
        let (_client, server_side) = tokio::io::duplex(1024);
        let (_keep_open, reader) = tokio::io::duplex(1024);
        server
            .serve(BufReader::new(reader), server_side)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancel_while_read_is_pending() {
        let server = Arc::new(server(1024));
        let (_client, server_side) = tokio::io::duplex(1024);
        let (_keep_open, reader) = tokio::io::duplex(1024);
        let serving = {
            let server = server.clone();
            tokio::spawn(async move { server.serve(BufReader::new(reader), server_side).await })
        };

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(!serving.is_finished());
        server.shutdown();
        tokio::time::timeout(std::time::Duration::from_secs(2), serving)
            .await
            .expect("server did not stop after cancel")
            .unwrap()
            .unwrap();
    }
}
