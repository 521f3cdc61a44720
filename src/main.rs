use graph_cluster::bootstrap::run_cluster;
use graph_cluster::config::ClusterConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: {} [--config <file.json>] [--host <addr>] [--node <id>]... [--edge <a>-<b>]...",
            args[0]
        );
        eprintln!("Example: {} --node 8000 --edge 8001-8002", args[0]);
        eprintln!("Without --node/--edge/--config a six-node demo graph on 8030-8035 is started.");
        return Ok(());
    }

    let config = ClusterConfig::from_args(&args)?;

    tracing::info!("Host: {}", config.host);
    tracing::info!("Nodes: {:?}", config.nodes);
    for edge in &config.edges {
        tracing::info!("  edge {} <-> {}", edge.from, edge.to);
    }

    run_cluster(config, None, None).await
}
