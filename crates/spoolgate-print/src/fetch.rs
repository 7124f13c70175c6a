// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote document download into scratch storage.
//
// Documents are streamed chunk by chunk into a uniquely named temp file,
// never buffered whole in memory. The returned handle owns the file and
// removes it on drop, so a fetched document cannot outlive its request
// even when later pipeline stages fail.

use std::path::Path;
use std::time::Duration;

use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use spoolgate_core::error::{Result, SpoolgateError};

use crate::traits::RemoteFetcher;

/// Whole-transfer budget for one download, connect included.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// A downloaded document parked in the system temp directory.
///
/// Dropping the handle deletes the file. Call [`close`](Self::close) to
/// observe the deletion result instead of discarding it.
#[derive(Debug)]
pub struct TemporaryDocument {
    path: TempPath,
}

impl TemporaryDocument {
    /// Location of the document on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the underlying file now.
    pub fn close(self) -> std::io::Result<()> {
        self.path.close()
    }
}

impl From<TempPath> for TemporaryDocument {
    fn from(path: TempPath) -> Self {
        Self { path }
    }
}

/// Fetcher backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| SpoolgateError::Fetch(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<TemporaryDocument> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| SpoolgateError::InvalidUrl(format!("{url}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SpoolgateError::InvalidUrl(format!(
                    "esquema no soportado: {other}"
                )));
            }
        }

        debug!(%parsed, "downloading remote document");
        let mut response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| SpoolgateError::Fetch(format!("error al descargar el PDF: {e}")))?;

        if !response.status().is_success() {
            return Err(SpoolgateError::Fetch(format!(
                "el servidor retornó estado no OK: {}",
                response.status()
            )));
        }

        let scratch = tempfile::Builder::new()
            .prefix("spoolgate-")
            .suffix(".pdf")
            .tempfile()?;
        let mut file = tokio::fs::File::from_std(scratch.reopen()?);

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SpoolgateError::Fetch(format!("error al leer la respuesta: {e}")))?
        {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        info!(bytes = written, path = %scratch.path().display(), "document downloaded");
        Ok(TemporaryDocument::from(scratch.into_temp_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on an ephemeral port, returning the
    /// URL to request.
    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.expect("head");
            socket.write_all(body).await.expect("body");
        });

        format!("http://{addr}/ticket.pdf")
    }

    #[tokio::test]
    async fn fetch_streams_body_into_a_pdf_temp_file() {
        let url = serve_once("200 OK", b"%PDF-1.4 ticket body").await;
        let fetcher = HttpFetcher::new().expect("client");

        let document = fetcher.fetch(&url).await.expect("fetch");
        let path = document.path().to_path_buf();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));
        let bytes = std::fs::read(&path).expect("read scratch file");
        assert_eq!(bytes, b"%PDF-1.4 ticket body");

        document.close().expect("close");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn dropping_the_document_removes_the_file() {
        let url = serve_once("200 OK", b"%PDF-1.4").await;
        let fetcher = HttpFetcher::new().expect("client");

        let document = fetcher.fetch(&url).await.expect("fetch");
        let path = document.path().to_path_buf();
        assert!(path.exists());

        drop(document);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn non_ok_status_is_a_fetch_error() {
        let url = serve_once("404 Not Found", b"missing").await;
        let fetcher = HttpFetcher::new().expect("client");

        let err = fetcher.fetch(&url).await.expect_err("must fail");
        assert!(matches!(err, SpoolgateError::Fetch(_)));
    }

    #[tokio::test]
    async fn file_scheme_is_rejected_before_any_request() {
        let fetcher = HttpFetcher::new().expect("client");
        let err = fetcher
            .fetch("file:///etc/passwd")
            .await
            .expect_err("must fail");
        assert!(matches!(err, SpoolgateError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn relative_url_is_rejected() {
        let fetcher = HttpFetcher::new().expect("client");
        let err = fetcher
            .fetch("tickets/receipt.pdf")
            .await
            .expect_err("must fail");
        assert!(matches!(err, SpoolgateError::InvalidUrl(_)));
    }
}
