use super::super::args::*;
use super::connection::build_client;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let client = build_client(&cli.conn)?;
    match cli.cmd {
        Command::Periodo(args) => super::periodo::run(&client, args).await,
        Command::Enlace(args) => super::enlace::run(&client, args).await,
        Command::Estado(args) => super::estado::run(&client, args).await,
    }
}
