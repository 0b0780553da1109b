use std::io;

use clap::Args;

use filmstore::{
    detail::{DetailSession, MAX_AMOUNT, MIN_AMOUNT},
    models::MovieId,
    pricing::format_price,
};

use super::{Context, ensure_cart_loaded, errors::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Movie id
    id: u64,

    /// Number of copies; clamped to the allowed range
    #[arg(short, long, default_value_t = MIN_AMOUNT)]
    amount: u32,
}

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Row number as shown by `filmstore cart`
    position: usize,
}

pub(crate) async fn add(
    context: &Context,
    args: AddArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let id = MovieId::new(args.id);
    let movie = context
        .catalog()
        .await?
        .find(id)
        .ok_or(CommandError::MovieNotFound(id))?;

    let mut detail = DetailSession::new(
        context.gateway.clone(),
        context.config.user_name.clone(),
        movie,
    );
    detail.set_amount(args.amount);

    if detail.amount() != args.amount {
        writeln!(
            out,
            "Amount adjusted to {} (allowed {MIN_AMOUNT}..={MAX_AMOUNT}).",
            detail.amount()
        )?;
    }

    let mut cart = context.cart_session();

    if !detail.add_to_cart(&mut cart).await {
        let info = detail.info().unwrap_or("Error").to_string();
        return Err(CommandError::AddRejected(info));
    }

    writeln!(
        out,
        "{}: {} x {} = {}",
        detail.info().unwrap_or_default(),
        detail.amount(),
        detail.movie().name,
        format_price(detail.line_total())
    )?;

    ensure_cart_loaded(&cart)?;

    render::write_cart(out, &cart.groups())
}

pub(crate) async fn show(context: &Context, out: &mut impl io::Write) -> Result<(), CommandError> {
    let cart = context.cart().await?;

    render::write_cart(out, &cart.groups())
}

pub(crate) async fn remove(
    context: &Context,
    args: RemoveArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let mut cart = context.cart().await?;
    let groups = cart.groups();

    let group = args
        .position
        .checked_sub(1)
        .and_then(|idx| groups.get(idx))
        .ok_or(CommandError::NoSuchLine {
            position: args.position,
            count: groups.len(),
        })?;

    cart.delete(group).await;
    ensure_cart_loaded(&cart)?;

    writeln!(out, "Removed {}.", group.name)?;
    render::write_cart(out, &cart.groups())
}

#[cfg(test)]
mod tests {
    use filmstore::gateway::MockStoreGateway;
    use mockall::Sequence;
    use testresult::TestResult;

    use crate::cli::tests::{USER, cart_line, context, movie, server_error};

    use super::*;

    #[tokio::test]
    async fn add_clamps_amount_and_prints_new_total() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut gateway = MockStoreGateway::new();

        gateway
            .expect_list_movies()
            .once()
            .returning(|| Ok(vec![movie(3, "Django", "Western", 24)]));

        gateway
            .expect_add_to_cart()
            .once()
            .withf(|movie, amount, user| movie.id.get() == 3 && *amount == 20 && user == USER)
            .returning(|_, _, _| Ok(()));

        gateway
            .expect_list_cart()
            .once()
            .returning(|_| Ok(vec![cart_line(10, "Django", 24, 20)]));

        let context = context(gateway, &dir.path().join("favorites.json"));
        let mut out = Vec::new();

        add(&context, AddArgs { id: 3, amount: 50 }, &mut out).await?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Amount adjusted to 20"), "got {rendered}");
        assert!(rendered.contains("480"), "got {rendered}");

        Ok(())
    }

    #[tokio::test]
    async fn rejected_add_becomes_command_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut gateway = MockStoreGateway::new();

        gateway
            .expect_list_movies()
            .once()
            .returning(|| Ok(vec![movie(3, "Django", "Western", 24)]));

        gateway
            .expect_add_to_cart()
            .once()
            .returning(|_, _, _| Err(server_error("out of stock")));

        gateway.expect_list_cart().never();

        let context = context(gateway, &dir.path().join("favorites.json"));

        let result = add(&context, AddArgs { id: 3, amount: 1 }, &mut Vec::new()).await;

        assert!(
            matches!(&result, Err(CommandError::AddRejected(info)) if info.contains("out of stock")),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_deletes_every_line_in_the_row() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut gateway = MockStoreGateway::new();
        let mut seq = Sequence::new();

        gateway
            .expect_list_cart()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(vec![
                    cart_line(1, "Inception", 32, 1),
                    cart_line(2, "Django", 24, 1),
                    cart_line(3, "Django", 24, 2),
                ])
            });

        for cart_id in [2, 3] {
            gateway
                .expect_remove_cart_line()
                .once()
                .in_sequence(&mut seq)
                .withf(move |id, user| id.get() == cart_id && user == USER)
                .returning(|_, _| Ok(true));
        }

        gateway
            .expect_list_cart()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![cart_line(1, "Inception", 32, 1)]));

        let context = context(gateway, &dir.path().join("favorites.json"));
        let mut out = Vec::new();

        remove(&context, RemoveArgs { position: 1 }, &mut out).await?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Removed Django."), "got {rendered}");
        assert!(rendered.contains("Inception"), "got {rendered}");

        Ok(())
    }

    #[tokio::test]
    async fn remove_rejects_position_zero() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut gateway = MockStoreGateway::new();

        gateway
            .expect_list_cart()
            .once()
            .returning(|_| Ok(vec![cart_line(1, "Inception", 32, 1)]));

        gateway.expect_remove_cart_line().never();

        let context = context(gateway, &dir.path().join("favorites.json"));

        let result = remove(&context, RemoveArgs { position: 0 }, &mut Vec::new()).await;

        assert!(
            matches!(result, Err(CommandError::NoSuchLine { position: 0, count: 1 })),
            "got {result:?}"
        );

        Ok(())
    }
}
