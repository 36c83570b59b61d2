use std::{marker::PhantomData, sync::Arc};

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::Status;

use super::{
    backend::{self, decode, decode_count, decode_one},
    connection::normalize_root,
    docs::*,
    endpoints::Endpoint,
    options::QueryOption,
    request::{build_url, RequestMode},
    transport::Transport,
    IgdbConnection,
};

/// Client for the IGDB REST service.
///
/// Holds only read-only settings, so a single instance can be cloned and
/// shared across tasks. Each call builds its own query and sends exactly one
/// request.
#[derive(Clone, Debug)]
pub struct IgdbApi {
    connection: IgdbConnection,
}

impl IgdbApi {
    pub fn new(api_key: &str) -> IgdbApi {
        IgdbApi {
            connection: IgdbConnection::new(api_key),
        }
    }

    pub fn with_root_url(mut self, root_url: &str) -> Self {
        self.connection.root_url = normalize_root(root_url);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.connection.transport = transport;
        self
    }

    pub fn root_url(&self) -> &str {
        &self.connection.root_url
    }

    /// Returns the url for a request against `endpoint`.
    pub fn build_url(
        &self,
        endpoint: Endpoint,
        mode: RequestMode<'_>,
        opts: &[QueryOption],
    ) -> Result<String, Status> {
        build_url(&self.connection.root_url, endpoint, mode, opts)
    }

    /// Sends a GET request to `url` and decodes the response into `T`.
    #[instrument(level = "trace", skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Status> {
        backend::get(&self.connection, "raw", url, decode::<T>).await
    }

    pub fn resource<T: Resource>(&self) -> ResourceApi<'_, T> {
        ResourceApi {
            igdb: self,
            resource: PhantomData,
        }
    }

    pub fn characters(&self) -> ResourceApi<'_, IgdbCharacter> {
        self.resource()
    }

    pub fn collections(&self) -> ResourceApi<'_, IgdbCollection> {
        self.resource()
    }

    pub fn companies(&self) -> ResourceApi<'_, IgdbCompany> {
        self.resource()
    }

    pub fn franchises(&self) -> ResourceApi<'_, IgdbFranchise> {
        self.resource()
    }

    pub fn games(&self) -> ResourceApi<'_, IgdbGame> {
        self.resource()
    }

    pub fn genres(&self) -> ResourceApi<'_, IgdbGenre> {
        self.resource()
    }

    pub fn keywords(&self) -> ResourceApi<'_, IgdbKeyword> {
        self.resource()
    }

    pub fn people(&self) -> ResourceApi<'_, IgdbPerson> {
        self.resource()
    }

    pub fn platforms(&self) -> ResourceApi<'_, IgdbPlatform> {
        self.resource()
    }

    pub fn themes(&self) -> ResourceApi<'_, IgdbTheme> {
        self.resource()
    }
}

/// Accessors for a single IGDB resource, e.g. `igdb.games()`.
pub struct ResourceApi<'a, T> {
    igdb: &'a IgdbApi,
    resource: PhantomData<T>,
}

impl<'a, T: Resource> ResourceApi<'a, T> {
    /// Returns the entity with `id`.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn get(&self, id: i64, opts: &[QueryOption]) -> Result<T, Status> {
        let url = self.url(RequestMode::Single(id), opts)?;
        backend::get(self.connection(), self.label(), &url, decode_one::<T>).await
    }

    /// Returns the entities with `ids`. The list must not be empty; use
    /// `index()` to list without ids.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn list(&self, ids: &[i64], opts: &[QueryOption]) -> Result<Vec<T>, Status> {
        let url = self.url(RequestMode::Multi(ids), opts)?;
        backend::get(self.connection(), self.label(), &url, decode::<Vec<T>>).await
    }

    /// Returns entities shaped only by `opts`.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn index(&self, opts: &[QueryOption]) -> Result<Vec<T>, Status> {
        let url = self.url(RequestMode::Index, opts)?;
        backend::get(self.connection(), self.label(), &url, decode::<Vec<T>>).await
    }

    /// Returns entities matching the free text `query`.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn search(&self, query: &str, opts: &[QueryOption]) -> Result<Vec<T>, Status> {
        let url = self.url(RequestMode::Search(query), opts)?;
        backend::get(self.connection(), self.label(), &url, decode::<Vec<T>>).await
    }

    /// Returns the number of entities matching the filters in `opts`.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn count(&self, opts: &[QueryOption]) -> Result<u64, Status> {
        let url = self.url(RequestMode::Count, opts)?;
        backend::get(self.connection(), self.label(), &url, decode_count).await
    }

    /// Returns the names of the fields available on this resource.
    #[instrument(level = "trace", skip(self), fields(endpoint = %T::ENDPOINT))]
    pub async fn fields(&self) -> Result<Vec<String>, Status> {
        let url = self.url(RequestMode::Meta, &[])?;
        backend::get(self.connection(), self.label(), &url, decode::<Vec<String>>).await
    }

    fn url(&self, mode: RequestMode<'_>, opts: &[QueryOption]) -> Result<String, Status> {
        self.igdb.build_url(T::ENDPOINT, mode, opts)
    }

    fn connection(&self) -> &IgdbConnection {
        &self.igdb.connection
    }

    fn label(&self) -> &'static str {
        T::ENDPOINT.as_str()
    }
}
