//! Terminal rendering

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use filmstore::{
    cart::{CartGroup, cart_total},
    config::StoreConfig,
    models::Movie,
    pricing::format_price,
};

use super::errors::CommandError;

pub(crate) fn write_movies(
    out: &mut impl io::Write,
    movies: &[(Movie, bool)],
) -> Result<(), CommandError> {
    if movies.is_empty() {
        writeln!(out, "No movies found.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Year", "Rating", "Price", "Fav"]);

    for (movie, favorite) in movies {
        builder.push_record([
            movie.id.to_string(),
            movie.name.clone(),
            movie.category.clone(),
            movie.year.to_string(),
            movie.rating.to_string(),
            format_price(movie.price),
            if *favorite { "★" } else { "" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

pub(crate) fn write_movie(
    out: &mut impl io::Write,
    config: &StoreConfig,
    movie: &Movie,
    favorite: bool,
) -> Result<(), CommandError> {
    writeln!(out, "{} ({})", movie.name, movie.year)?;
    writeln!(out, "  category:  {}", movie.category)?;
    writeln!(out, "  director:  {}", movie.director)?;
    writeln!(out, "  rating:    {}", movie.rating)?;
    writeln!(out, "  price:     {}", format_price(movie.price))?;
    writeln!(out, "  image:     {}", config.image_url(&movie.image))?;
    writeln!(out, "  favorite:  {}", if favorite { "yes" } else { "no" })?;
    writeln!(out)?;
    writeln!(out, "{}", movie.description)?;

    Ok(())
}

pub(crate) fn write_cart(
    out: &mut impl io::Write,
    groups: &[CartGroup],
) -> Result<(), CommandError> {
    if groups.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Movie", "Qty", "Unit", "Subtotal"]);

    for (idx, group) in groups.iter().enumerate() {
        builder.push_record([
            format!("{}", idx + 1),
            group.name.clone(),
            group.total_amount.to_string(),
            format_price(group.price),
            format_price(group.subtotal()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Total: {}", format_price(cart_total(groups)))?;

    Ok(())
}
