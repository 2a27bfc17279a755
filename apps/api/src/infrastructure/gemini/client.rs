use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use reqwest::Client;
use std::collections::VecDeque;
use tracing::{debug, warn};

use super::sse::SseDecoder;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::domain::ports::{FragmentStream, TextGenerator};
use crate::errors::{PrompterError, PrompterResult};

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

/// Streaming Gemini client
///
/// One `streamGenerateContent` request per call, read as server-sent events.
/// A single attempt is made; there is no retry.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> PrompterResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| PrompterError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn stream_generate(&self, prompt: &str) -> PrompterResult<FragmentStream> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                PrompterError::GenerationFailed("API key is not configured".to_string())
            })?;

        debug!(model = %self.config.model, "Opening Gemini stream");

        let response = self
            .client
            .post(self.stream_url())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                PrompterError::GenerationFailed(if e.is_timeout() {
                    "Request timeout - the API took too long to respond".to_string()
                } else if e.is_connect() {
                    "Connection error - unable to reach the API".to_string()
                } else {
                    format!("Network error: {}", e)
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, "Gemini rejected the request");
            return Err(PrompterError::GenerationFailed(match status.as_u16() {
                400 => format!("Bad request: {}", error_text),
                401 | 403 => "Authentication failed - check your API key".to_string(),
                429 => "Rate limit exceeded - too many requests".to_string(),
                500..=599 => format!("Server error ({}): {}", status, error_text),
                _ => format!("HTTP error {}: {}", status, error_text),
            }));
        }

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
            .boxed();

        Ok(fragments(body))
    }
}

struct StreamState {
    body: BoxStream<'static, reqwest::Result<Vec<u8>>>,
    decoder: SseDecoder,
    pending: VecDeque<PrompterResult<String>>,
    done: bool,
}

impl StreamState {
    fn queue_payloads(&mut self, payloads: Vec<String>) {
        for payload in payloads {
            match parse_payload(&payload) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => self.pending.push_back(Ok(text)),
                Err(e) => {
                    self.pending.push_back(Err(e));
                    self.done = true;
                    return;
                }
            }
        }
    }
}

/// Turns an SSE body into a stream of text fragments
///
/// The stream ends after the first error.
fn fragments(body: BoxStream<'static, reqwest::Result<Vec<u8>>>) -> FragmentStream {
    let state = StreamState {
        body,
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.done {
                return None;
            }

            match state.body.next().await {
                Some(Ok(bytes)) => {
                    let payloads = state.decoder.push(&bytes);
                    state.queue_payloads(payloads);
                }
                Some(Err(e)) => {
                    state.done = true;
                    return Some((
                        Err(PrompterError::GenerationFailed(format!("Stream error: {}", e))),
                        state,
                    ));
                }
                None => {
                    let payloads = state.decoder.finish();
                    state.queue_payloads(payloads);
                    state.done = true;
                }
            }
        }
    })
    .boxed()
}

fn parse_payload(payload: &str) -> PrompterResult<String> {
    let chunk: GenerateContentResponse = serde_json::from_str(payload).map_err(|e| {
        PrompterError::GenerationFailed(format!("Failed to parse stream chunk: {}", e))
    })?;

    if let Some(error) = chunk.error {
        return Err(PrompterError::GenerationFailed(match error.code {
            Some(code) => format!("API error {}: {}", code, error.message),
            None => format!("API error: {}", error.message),
        }));
    }

    Ok(chunk.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn body(chunks: Vec<&'static str>) -> BoxStream<'static, reqwest::Result<Vec<u8>>> {
        stream::iter(chunks.into_iter().map(|c| Ok(c.as_bytes().to_vec()))).boxed()
    }

    fn collect(stream: FragmentStream) -> Vec<PrompterResult<String>> {
        block_on(stream.collect::<Vec<_>>())
    }

    #[test]
    fn fragments_follow_event_order() {
        let items = collect(fragments(body(vec![
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel\"}]}}]}\n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"lo\"}]}}]}\n\n",
        ])));

        let texts: Vec<String> = items.into_iter().map(|i| i.unwrap()).collect();
        assert_eq!(texts, vec!["Hel", "lo"]);
    }

    #[test]
    fn events_without_text_are_skipped() {
        let items = collect(fragments(body(vec![
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"A\"}]}}]}\n\n",
            "data: {\"usageMetadata\":{}}\n\n",
        ])));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn error_payload_ends_stream() {
        let items = collect(fragments(body(vec![
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel\"}]}}]}\n\n",
            "data: {\"error\":{\"code\":500,\"message\":\"internal\"}}\n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"never\"}]}}]}\n\n",
        ])));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "Hel");
        assert!(matches!(items[1], Err(PrompterError::GenerationFailed(_))));
    }

    #[test]
    fn malformed_payload_is_a_generation_failure() {
        let items = collect(fragments(body(vec!["data: not json\n\n"])));
        assert!(matches!(items.as_slice(), [Err(PrompterError::GenerationFailed(_))]));
    }

    #[test]
    fn trailing_event_without_blank_line_is_flushed() {
        let items = collect(fragments(body(vec![
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"end\"}]}}]}",
        ])));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), "end");
    }

    #[test]
    fn stream_url_uses_model_and_base() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: Some("k".to_string()),
            model: "gemini-2.5-flash".to_string(),
            api_base: "https://example.test/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.stream_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:streamGenerateContent?alt=sse"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        })
        .unwrap();

        let result = client.stream_generate("hello").await;
        assert!(matches!(result, Err(PrompterError::GenerationFailed(_))));
    }
}
