use deppa_client::{DeppaClient, EvaluationLinkRequest};
use tracing::info;

use super::super::args::EnlaceArgs;
use super::output::report;

pub async fn run(client: &DeppaClient, args: EnlaceArgs) -> anyhow::Result<i32> {
    let request = EvaluationLinkRequest {
        anio: args.anio,
        codigo_periodo: args.codigo_periodo,
        codigo_curso: args.codigo_curso,
        seccion: args.seccion,
        token: args.token,
        numero_boleta: args.numero_boleta,
    };
    info!(
        curso = %request.codigo_curso,
        seccion = %request.seccion,
        "requesting evaluation link"
    );

    report(client.create_evaluation_link(&request).await)
}
