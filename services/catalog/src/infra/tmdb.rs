use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::repository::MovieMetadataSource;
use crate::domain::types::{Credits, MovieDetails, Person, PopularPage};
use crate::error::TmdbError;

/// Minimal TMDB v3 client. Requests are sequential with no retry or backoff.
pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String) -> Self {
        Self {
            client,
            access_token,
            base_url,
        }
    }

    /// `GET {base_url}/{endpoint}` with bearer auth. Anything but 200 is an error.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, TmdbError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        let transport = |source| TmdbError::Transport {
            endpoint: endpoint.to_owned(),
            source,
        };

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        if status != StatusCode::OK {
            return Err(TmdbError::Status {
                endpoint: endpoint.to_owned(),
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|source| TmdbError::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let value = self.fetch(endpoint, params).await?;
        serde_json::from_value(value).map_err(|source| TmdbError::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }
}

impl MovieMetadataSource for TmdbClient {
    async fn popular(&self, page: u32) -> Result<PopularPage, TmdbError> {
        self.fetch_as("movie/popular", &[("page", page.to_string())])
            .await
    }

    async fn movie_details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError> {
        self.fetch_as(&format!("movie/{movie_id}"), &[]).await
    }

    async fn credits(&self, movie_id: i64) -> Result<Credits, TmdbError> {
        self.fetch_as(&format!("movie/{movie_id}/credits"), &[])
            .await
    }

    async fn person(&self, person_id: i64) -> Result<Person, TmdbError> {
        self.fetch_as(&format!("person/{person_id}"), &[]).await
    }
}
