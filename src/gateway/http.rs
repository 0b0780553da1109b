//! reqwest-backed gateway.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

use crate::{
    config::{Endpoints, StoreConfig},
    gateway::{
        GatewayError, StoreGateway,
        form::{add_to_cart_form, cart_form, remove_cart_line_form},
    },
    models::{CartLine, CartLineId, CartListResponse, MessageResponse, Movie, MovieListResponse},
};

/// HTTP client for the FilmStore PHP backend.
///
/// No retries and no timeouts beyond reqwest's defaults: a call either
/// resolves once or fails once.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: StoreConfig,
    http: Client,
}

impl HttpGateway {
    /// Create a gateway with a fresh connection pool.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a gateway sharing an existing client.
    #[must_use]
    pub fn with_client(config: StoreConfig, http: Client) -> Self {
        Self { config, http }
    }

    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Vec<u8>, GatewayError> {
        let url = self.config.endpoint_url(endpoint);

        let response = self.http.post(&url).form(fields).send().await?;

        success_body(response).await
    }
}

#[async_trait]
impl StoreGateway for HttpGateway {
    #[instrument(skip(self), err(Display))]
    async fn list_movies(&self) -> Result<Vec<Movie>, GatewayError> {
        let url = self.config.endpoint_url(Endpoints::ALL_MOVIES);

        let response = self.http.get(&url).send().await?;
        let body = success_body(response).await?;
        let parsed: MovieListResponse = serde_json::from_slice(&body)?;

        debug!(count = parsed.movies.len(), "catalog fetched");

        Ok(parsed.movies)
    }

    #[instrument(skip(self, movie), fields(movie = %movie.name), err(Display))]
    async fn add_to_cart(
        &self,
        movie: &Movie,
        amount: u32,
        user_name: &str,
    ) -> Result<(), GatewayError> {
        let fields = add_to_cart_form(movie, amount, user_name);
        let body = self.post_form(Endpoints::INSERT_MOVIE, &fields).await?;

        // An unreadable acknowledgement counts as a refusal, not a decode fault.
        let reply = serde_json::from_slice::<MessageResponse>(&body).unwrap_or_default();

        if reply.is_success() {
            debug!("cart line inserted");
            return Ok(());
        }

        Err(GatewayError::Server(
            reply.message.unwrap_or_else(|| "insert failed".to_string()),
        ))
    }

    #[instrument(skip(self), err(Display))]
    async fn list_cart(&self, user_name: &str) -> Result<Vec<CartLine>, GatewayError> {
        let body = self
            .post_form(Endpoints::GET_CART, &cart_form(user_name))
            .await?;
        let parsed: CartListResponse = serde_json::from_slice(&body)?;

        debug!(count = parsed.movie_cart.len(), "cart fetched");

        Ok(parsed.movie_cart)
    }

    #[instrument(skip(self), err(Display))]
    async fn remove_cart_line(
        &self,
        cart_id: CartLineId,
        user_name: &str,
    ) -> Result<bool, GatewayError> {
        let fields = remove_cart_line_form(cart_id, user_name);
        let body = self.post_form(Endpoints::DELETE_MOVIE, &fields).await?;
        let reply: MessageResponse = serde_json::from_slice(&body)?;

        match reply.success {
            Some(flag) => {
                if flag != 1 {
                    warn!(flag, message = ?reply.message, "backend declined delete");
                }

                Ok(flag == 1)
            }
            None => Err(GatewayError::Server(
                reply.message.unwrap_or_else(|| "delete failed".to_string()),
            )),
        }
    }
}

async fn success_body(response: Response) -> Result<Vec<u8>, GatewayError> {
    let status = response.status();

    if !status.is_success() {
        return Err(GatewayError::InvalidResponse { status });
    }

    Ok(response.bytes().await?.to_vec())
}
