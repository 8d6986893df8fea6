// SPDX-License-Identifier: MIT

//! GitHub REST client: the production [`RemoteSource`].
//!
//! Talks to the pulls and contents endpoints with the raw media type, so
//! file bodies come back verbatim instead of base64-wrapped JSON. All
//! requests carry a timeout and get one retry on transient failure; a file
//! that still cannot be fetched is the scan layer's problem to skip.

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;

use crate::scan::remote::{ChangedFile, FetchError, FileStatus, RemoteSource};

const USER_AGENT: &str = concat!("mergeguard/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(10);
const PER_PAGE: usize = 100;
/// Total attempts per request: the first try plus one retry.
const ATTEMPTS: usize = 2;

/// Characters escaped inside one path segment of a contents URL, beyond
/// the control set: everything URL-significant plus `%` itself.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct GithubClient {
    http: reqwest::blocking::Client,
    api_url: String,
    repo: String,
    token: Option<String>,
}

/// One pull request, bound to the client that fetched it.
pub struct PullRequest<'a> {
    client: &'a GithubClient,
    number: u64,
    /// Free-text body; None when the author wrote none.
    pub description: Option<String>,
    /// Head commit SHA. Content fetches pin this revision so the scan and
    /// the change list describe the same state of the branch.
    pub head_sha: String,
}

#[derive(Debug, Deserialize)]
struct PullView {
    body: Option<String>,
    head: HeadView,
}

#[derive(Debug, Deserialize)]
struct HeadView {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct FileView {
    filename: String,
    status: String,
}

impl GithubClient {
    /// Build a client for `repo` in OWNER/NAME form. `api_url` is the API
    /// root, normally `https://api.github.com`.
    pub fn new(api_url: &str, repo: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token,
        })
    }

    /// Fetch pull-request metadata: the description and head revision.
    pub fn pull_request(&self, number: u64) -> Result<PullRequest<'_>, FetchError> {
        let url = format!("{}/repos/{}/pulls/{number}", self.api_url, self.repo);
        let view: PullView = self.get(&url, &[])?.json().map_err(transport)?;
        Ok(PullRequest {
            client: self,
            number,
            description: view.body,
            head_sha: view.head.sha,
        })
    }

    /// GET with auth, media-type, and retry handling. Server errors and
    /// transport failures are retried once; client errors are not, since
    /// repeating a 404 cannot help.
    fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::blocking::Response, FetchError> {
        let mut last = FetchError::Transport("request not attempted".to_string());
        for attempt in 1..=ATTEMPTS {
            let mut request = self
                .http
                .get(url)
                .query(query)
                .header("Accept", "application/vnd.github.raw+json")
                .header("X-GitHub-Api-Version", "2022-11-28");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            match request.send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if !status.is_server_error() || attempt == ATTEMPTS {
                        return Err(FetchError::Status(status.as_u16()));
                    }
                    tracing::debug!("retrying {url} after status {status}");
                    last = FetchError::Status(status.as_u16());
                }
                Err(err) if attempt < ATTEMPTS => {
                    tracing::debug!("retrying {url} after error: {err}");
                    last = transport(err);
                }
                Err(err) => return Err(transport(err)),
            }
        }
        Err(last)
    }
}

impl RemoteSource for PullRequest<'_> {
    fn changed_files(&self) -> Result<Vec<ChangedFile>, FetchError> {
        let url = format!(
            "{}/repos/{}/pulls/{}/files",
            self.client.api_url, self.client.repo, self.number
        );
        let mut files = Vec::new();
        let mut page = 1usize;
        loop {
            let query = [("per_page", PER_PAGE.to_string()), ("page", page.to_string())];
            let batch: Vec<FileView> =
                self.client.get(&url, &query)?.json().map_err(transport)?;
            let batch_len = batch.len();
            files.extend(batch.into_iter().map(|file| ChangedFile {
                path: file.filename,
                status: file_status(&file.status),
                reference: self.head_sha.clone(),
            }));
            if batch_len < PER_PAGE {
                return Ok(files);
            }
            page += 1;
        }
    }

    fn content(&self, path: &str, reference: &str) -> Result<String, FetchError> {
        let url = format!(
            "{}/repos/{}/contents/{}",
            self.client.api_url,
            self.client.repo,
            encode_path(path)
        );
        let response = self.client.get(&url, &[("ref", reference.to_string())])?;
        let bytes = response.bytes().map_err(transport)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FetchError::NotText)
    }
}

/// Everything that is not removed still has content on the head revision;
/// renamed and copied files count as present under their new name.
fn file_status(status: &str) -> FileStatus {
    if status == "removed" { FileStatus::Removed } else { FileStatus::Present }
}

/// Percent-encode a repository path segment by segment, keeping the `/`
/// separators literal.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
