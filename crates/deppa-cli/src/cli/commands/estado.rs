use deppa_client::DeppaClient;
use tracing::info;

use super::super::args::EstadoArgs;
use super::output::report;

pub async fn run(client: &DeppaClient, args: EstadoArgs) -> anyhow::Result<i32> {
    info!(sid = args.sid, "checking evaluation status");

    report(client.check_evaluation_status(args.sid, &args.token).await)
}
