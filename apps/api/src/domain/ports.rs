// Outbound ports for the services the prompter talks to

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::errors::PrompterResult;

/// Lazy, finite sequence of text fragments from one generation call
pub type FragmentStream = BoxStream<'static, PrompterResult<String>>;

/// Streaming text generation
///
/// Every call opens a fresh stream; streams are not restartable. Failures
/// before the first fragment surface as `Err` from `stream_generate`,
/// failures afterwards as an `Err` item in the stream.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn stream_generate(&self, prompt: &str) -> PrompterResult<FragmentStream>;
}

/// System clipboard
pub trait Clipboard: Send + Sync {
    /// Writes `text`, failing with `ClipboardBlocked` when access is denied
    fn write_text(&self, text: &str) -> PrompterResult<()>;
}
