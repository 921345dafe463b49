//! TCP Accept Loop
//!
//! Accepts connections forever, spawning one handler task per connection.
//! Client I/O failures end that connection only; engine state is never
//! affected by them.

use super::protocol::render_response;
use crate::engine::processor::Processor;

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Serves the line protocol on an already-bound listener.
///
/// Returns only if accepting itself fails.
pub async fn serve(listener: TcpListener, processor: Arc<Processor>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let processor = processor.clone();

        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, processor).await {
                tracing::warn!("Connection from {} failed: {}", peer, err);
            }
        });
    }
}

/// Reads one query line, processes it, writes the framed response, closes.
async fn handle_connection(stream: TcpStream, processor: Arc<Processor>) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();

    let mut line = String::new();
    BufReader::new(read_half).read_line(&mut line).await?;
    let query = line.trim_end_matches(['\r', '\n']);

    tracing::debug!("Received query '{}'", query);
    let outcome = processor.process(query).await;

    write_half
        .write_all(render_response(&outcome).as_bytes())
        .await?;
    write_half.shutdown().await?;

    Ok(())
}
