use std::io;

use clap::Args;

use filmstore::{favorites::FavoritesStore, models::MovieId};

use super::{Context, errors::CommandError};

#[derive(Debug, Args)]
pub(crate) struct FavoriteArgs {
    /// Movie id
    id: u64,
}

pub(crate) fn toggle(
    context: &Context,
    args: FavoriteArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let id = MovieId::new(args.id);
    let favorite = context.favorites().toggle(id)?;

    if favorite {
        writeln!(out, "Movie {id} added to favorites.")?;
    } else {
        writeln!(out, "Movie {id} removed from favorites.")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use filmstore::gateway::MockStoreGateway;
    use testresult::TestResult;

    use crate::cli::tests::context;

    use super::*;

    #[test]
    fn toggling_twice_restores_flag() -> TestResult {
        let dir = tempfile::tempdir()?;
        let context = context(MockStoreGateway::new(), &dir.path().join("favorites.json"));
        let mut out = Vec::new();

        toggle(&context, FavoriteArgs { id: 5 }, &mut out)?;
        toggle(&context, FavoriteArgs { id: 5 }, &mut out)?;

        let rendered = String::from_utf8(out)?;

        assert_eq!(
            rendered,
            "Movie 5 added to favorites.\nMovie 5 removed from favorites.\n"
        );
        assert!(!context.favorites().is_favorite(MovieId::new(5))?);

        Ok(())
    }
}
