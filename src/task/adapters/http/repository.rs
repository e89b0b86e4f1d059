//! REST implementation of the task repository port.
//!
//! | Operation    | Request                  |
//! |--------------|--------------------------|
//! | `list_all`   | `GET /api/tasks`         |
//! | `find_by_id` | `GET /api/tasks/{id}`    |
//! | `create`     | `POST /api/tasks`        |
//! | `update`     | `PUT /api/tasks/{id}`    |
//! | `delete`     | `DELETE /api/tasks/{id}` |

use super::HttpAdapterError;
use crate::{
    config::ClientConfig,
    task::{
        domain::{Task, TaskDraft, TaskId},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

const TASKS_PATH: [&str; 2] = ["api", "tasks"];

/// Task repository backed by the REST task API.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    http_client: Client,
    base_url: Url,
}

/// Method and URL of a request, kept for error context.
#[derive(Debug, Clone)]
struct Target {
    method: Method,
    url: Url,
}

impl HttpTaskRepository {
    /// Creates a repository for the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError::ClientBuild`] when the HTTP client cannot be
    /// constructed and [`HttpAdapterError::InvalidBaseUrl`] when the base URL
    /// cannot be extended with the API path.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpAdapterError> {
        if config.base_url().cannot_be_a_base() {
            return Err(HttpAdapterError::InvalidBaseUrl(
                config.base_url().to_string(),
            ));
        }
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(HttpAdapterError::ClientBuild)?;

        Ok(Self {
            http_client,
            base_url: config.base_url().clone(),
        })
    }

    /// Builds `{base}/api/tasks` or `{base}/api/tasks/{id}`.
    fn endpoint(&self, id: Option<&TaskId>) -> TaskRepositoryResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TaskRepositoryError::transport(HttpAdapterError::InvalidBaseUrl(
                    self.base_url.to_string(),
                ))
            })?;
            segments.pop_if_empty().extend(TASKS_PATH);
            if let Some(task_id) = id {
                segments.push(task_id.as_str());
            }
        }
        Ok(url)
    }

    fn target(&self, method: Method, id: Option<&TaskId>) -> TaskRepositoryResult<Target> {
        Ok(Target {
            method,
            url: self.endpoint(id)?,
        })
    }

    /// Sends a request and maps non-success statuses.
    ///
    /// A 404 becomes [`TaskRepositoryError::NotFound`] when the request
    /// addresses a single task.
    async fn send(
        &self,
        target: &Target,
        customize: impl FnOnce(RequestBuilder) -> RequestBuilder + Send,
        addressed: Option<&TaskId>,
    ) -> TaskRepositoryResult<Response> {
        debug!(method = %target.method, url = %target.url, "sending task request");
        let request = self
            .http_client
            .request(target.method.clone(), target.url.clone());
        let response = customize(request).send().await.map_err(|source| {
            TaskRepositoryError::transport(HttpAdapterError::Request {
                method: target.method.clone(),
                url: target.url.clone(),
                source,
            })
        })?;

        let status = response.status();
        debug!(method = %target.method, url = %target.url, %status, "received task response");
        if status.is_success() {
            return Ok(response);
        }
        match addressed {
            Some(task_id) if status == StatusCode::NOT_FOUND => {
                Err(TaskRepositoryError::NotFound(task_id.clone()))
            }
            _ => Err(TaskRepositoryError::transport(
                HttpAdapterError::UnexpectedStatus {
                    method: target.method.clone(),
                    url: target.url.clone(),
                    status,
                },
            )),
        }
    }

    /// Reads and decodes a JSON body. An empty body yields `None`.
    async fn decode<T: DeserializeOwned>(
        target: &Target,
        response: Response,
    ) -> TaskRepositoryResult<Option<T>> {
        let body = response.bytes().await.map_err(|source| {
            TaskRepositoryError::transport(HttpAdapterError::Request {
                method: target.method.clone(),
                url: target.url.clone(),
                source,
            })
        })?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&body).map(Some).map_err(|source| {
            TaskRepositoryError::transport(HttpAdapterError::Decode {
                method: target.method.clone(),
                url: target.url.clone(),
                source,
            })
        })
    }

    /// Decodes a JSON body that must be present.
    async fn decode_required<T: DeserializeOwned>(
        target: &Target,
        response: Response,
    ) -> TaskRepositoryResult<T> {
        Self::decode(target, response).await?.ok_or_else(|| {
            TaskRepositoryError::transport(HttpAdapterError::EmptyBody {
                method: target.method.clone(),
                url: target.url.clone(),
            })
        })
    }
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let target = self.target(Method::GET, None)?;
        let response = self.send(&target, |request| request, None).await?;
        Self::decode_required(&target, response).await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let target = self.target(Method::GET, Some(id))?;
        let response = self.send(&target, |request| request, Some(id)).await?;
        Self::decode_required(&target, response).await
    }

    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let target = self.target(Method::POST, None)?;
        let response = self
            .send(&target, |request| request.json(draft), None)
            .await?;
        Self::decode_required(&target, response).await
    }

    async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task> {
        let target = self.target(Method::PUT, Some(id))?;
        let response = self
            .send(&target, |request| request.json(task), Some(id))
            .await?;
        // Backends answering 204 echo nothing; the submitted record stands.
        let updated = Self::decode(&target, response).await?;
        Ok(updated.unwrap_or_else(|| task.clone().with_id(id.clone())))
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let target = self.target(Method::DELETE, Some(id))?;
        self.send(&target, |request| request, Some(id)).await?;
        Ok(())
    }
}
