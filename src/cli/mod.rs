use std::{io, sync::Arc};

use clap::{Parser, Subcommand};

use filmstore::{
    cart::CartSession,
    catalog::CatalogSession,
    config::{LoggingConfig, StoreConfig},
    favorites::JsonFileFavorites,
    gateway::{HttpGateway, StoreGateway},
};

use errors::CommandError;

mod cart;
mod errors;
mod favorite;
mod movies;
mod render;

#[derive(Debug, Parser)]
#[command(name = "filmstore", about = "FilmStore movie storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog, optionally filtered by name or category
    Movies(movies::MoviesArgs),

    /// Show one movie
    Show(movies::ShowArgs),

    /// Add copies of a movie to the cart
    Add(cart::AddArgs),

    /// Show the grouped cart
    Cart,

    /// Remove every copy in one cart row
    Remove(cart::RemoveArgs),

    /// Flip a movie's favorite flag
    Favorite(favorite::FavoriteArgs),
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) async fn run(self) -> Result<(), CommandError> {
        let context = Context::new(self.store);
        let mut out = io::stdout().lock();

        match self.command {
            Commands::Movies(args) => movies::list(&context, args, &mut out).await,
            Commands::Show(args) => movies::show(&context, args, &mut out).await,
            Commands::Add(args) => cart::add(&context, args, &mut out).await,
            Commands::Cart => cart::show(&context, &mut out).await,
            Commands::Remove(args) => cart::remove(&context, args, &mut out).await,
            Commands::Favorite(args) => favorite::toggle(&context, args, &mut out),
        }
    }
}

/// Everything a command needs to reach the backend and the device.
pub(crate) struct Context {
    config: StoreConfig,
    gateway: Arc<dyn StoreGateway>,
}

impl Context {
    fn new(config: StoreConfig) -> Self {
        let gateway = Arc::new(HttpGateway::new(config.clone()));

        Self::with_gateway(config, gateway)
    }

    fn with_gateway(config: StoreConfig, gateway: Arc<dyn StoreGateway>) -> Self {
        Self { config, gateway }
    }

    async fn catalog(&self) -> Result<CatalogSession, CommandError> {
        let mut session = CatalogSession::new(Arc::clone(&self.gateway));

        session.load().await;

        match session.state().error() {
            Some(error) => Err(CommandError::Catalog(error.to_string())),
            None => Ok(session),
        }
    }

    fn cart_session(&self) -> CartSession {
        CartSession::new(Arc::clone(&self.gateway), self.config.user_name.clone())
    }

    async fn cart(&self) -> Result<CartSession, CommandError> {
        let mut session = self.cart_session();

        session.load().await;

        ensure_cart_loaded(&session)?;

        Ok(session)
    }

    fn favorites(&self) -> JsonFileFavorites {
        JsonFileFavorites::new(&self.config.favorites_path)
    }
}

fn ensure_cart_loaded(session: &CartSession) -> Result<(), CommandError> {
    match session.state().error() {
        Some(error) => Err(CommandError::Cart(error.to_string())),
        None => Ok(()),
    }
}
