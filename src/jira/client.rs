//! Blocking Jira REST client authenticated with a personal access token.

use super::WorklogApi;
use super::payload::{NewWorklogPayload, UserPayload, WorklogPage, WorklogPayload};
use crate::errors::{AppError, AppResult};
use crate::models::{RemoteUser, RemoteWorklog, WorklogRecord};
use log::debug;
use reqwest::Url;
use reqwest::blocking::{Client, Response};

const PAGE_SIZE: usize = 100;

pub struct JiraClient {
    http: Client,
    base: Url,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: &str, token: &str) -> AppResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid Jira URL '{}': {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "'{}' cannot be used as a Jira base URL",
                base_url
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("wlsync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base,
            token: token.to_string(),
        })
    }

    /// `{base}/rest/api/2/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AppError::Config(format!("'{}' cannot be used as a Jira base URL", self.base))
            })?;
            path.pop_if_empty().extend(["rest", "api", "2"]).extend(segments);
        }
        Ok(url)
    }

    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            body,
        })
    }

    fn get(&self, url: Url) -> AppResult<Response> {
        debug!("GET {}", url);
        let resp = self.http.get(url).bearer_auth(&self.token).send()?;
        Self::check(resp)
    }
}

impl WorklogApi for JiraClient {
    fn current_user(&mut self) -> AppResult<RemoteUser> {
        let url = self.endpoint(&["myself"])?;
        let user: UserPayload = self.get(url)?.json()?;
        RemoteUser::try_from(user)
    }

    fn add_worklog(&mut self, record: &WorklogRecord) -> AppResult<()> {
        let url = self.endpoint(&["issue", &record.issue_id, "worklog"])?;
        let body = NewWorklogPayload::from(record);
        debug!("POST {} {:?}", url, body);

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn worklog_ids(&mut self, issue_id: &str) -> AppResult<Vec<String>> {
        let mut ids = Vec::new();
        loop {
            let mut url = self.endpoint(&["issue", issue_id, "worklog"])?;
            url.query_pairs_mut()
                .append_pair("startAt", &ids.len().to_string())
                .append_pair("maxResults", &PAGE_SIZE.to_string());

            let page: WorklogPage = self.get(url)?.json()?;
            debug!(
                "worklog page for {}: startAt={}, maxResults={}, total={}, got {}",
                issue_id,
                page.start_at,
                page.max_results,
                page.total,
                page.worklogs.len()
            );

            let got = page.worklogs.len();
            ids.extend(page.worklogs.into_iter().map(|w| w.id));
            if got == 0 || ids.len() >= page.total {
                break;
            }
        }
        Ok(ids)
    }

    fn worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<RemoteWorklog> {
        let url = self.endpoint(&["issue", issue_id, "worklog", worklog_id])?;
        let payload: WorklogPayload = self.get(url)?.json()?;
        payload.into_remote(issue_id)
    }

    fn delete_worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<()> {
        let url = self.endpoint(&["issue", issue_id, "worklog", worklog_id])?;
        debug!("DELETE {}", url);
        let resp = self.http.delete(url).bearer_auth(&self.token).send()?;
        Self::check(resp)?;
        Ok(())
    }
}
