use std::io;

use clap::Args;

use filmstore::{favorites::FavoritesStore, models::MovieId};

use super::{Context, errors::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct MoviesArgs {
    /// Case-insensitive text matched against name and category
    #[arg(short, long, default_value = "")]
    query: String,
}

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Movie id
    id: u64,
}

pub(crate) async fn list(
    context: &Context,
    args: MoviesArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let catalog = context.catalog().await?;
    let favorites = context.favorites();

    let mut rows = Vec::new();

    for movie in catalog.filter(&args.query) {
        let favorite = favorites.is_favorite(movie.id)?;
        rows.push((movie, favorite));
    }

    render::write_movies(out, &rows)
}

pub(crate) async fn show(
    context: &Context,
    args: ShowArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let id = MovieId::new(args.id);
    let movie = context
        .catalog()
        .await?
        .find(id)
        .ok_or(CommandError::MovieNotFound(id))?;
    let favorite = context.favorites().is_favorite(id)?;

    render::write_movie(out, &context.config, &movie, favorite)
}
