use deppa_client::DeppaClient;
use tracing::info;

use super::super::args::PeriodoArgs;
use super::output::report;

pub async fn run(client: &DeppaClient, args: PeriodoArgs) -> anyhow::Result<i32> {
    let fecha = args
        .fecha
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    info!(%fecha, "checking active evaluation period");

    report(client.check_active_period_on(fecha).await)
}
