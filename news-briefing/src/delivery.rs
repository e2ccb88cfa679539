use crate::traits::Messenger;
use crate::types::Result;
use std::time::Duration;
use tracing::{info, warn};

/// Split `text` into pieces of at most `max_chunk_size` characters.
///
/// A piece ends right before the last newline inside its window, so that
/// newline becomes the first character of the next piece. Without a usable
/// newline the window is cut hard, which can break a Markdown link in two.
/// Joining the pieces gives back `text` unchanged.
pub fn split_chunks(text: &str, max_chunk_size: usize) -> Vec<&str> {
    let max_chunk_size = max_chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // Byte offset of the first character past the window
        let Some((window_end, _)) = rest.char_indices().nth(max_chunk_size) else {
            chunks.push(rest);
            break;
        };

        // A newline at 0 would give an empty piece and never advance
        let cut = match rest[..window_end].rfind('\n') {
            Some(i) if i > 0 => i,
            _ => window_end,
        };

        chunks.push(&rest[..cut]);
        rest = &rest[cut..];
    }

    chunks
}

/// Send `text` through `messenger` chunk by chunk, in order.
///
/// Every chunk is attempted even when an earlier one failed; the per-chunk
/// results come back in send order. `pause` is waited between sends, not
/// after the last one.
pub async fn deliver<M>(messenger: &M, text: &str, max_chunk_size: usize, pause: Duration) -> Vec<Result<()>>
where
    M: Messenger + ?Sized,
{
    let chunks = split_chunks(text, max_chunk_size);
    let total = chunks.len();
    let mut results = Vec::with_capacity(total);

    for (index, chunk) in chunks.into_iter().enumerate() {
        let result = messenger.send(chunk).await;
        match &result {
            Ok(()) => info!("Sent chunk {}/{} ({} chars)", index + 1, total, chunk.chars().count()),
            Err(e) => warn!("Chunk {}/{} not delivered: {}", index + 1, total, e),
        }
        results.push(result);

        if index + 1 < total && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    results
}
