use rngprobe_server::ServerConfig;

pub fn run(
    host: &str,
    port: u16,
    min_symbols: usize,
    config_path: Option<&str>,
    ratio_decimals: Option<u32>,
    outlier_sigma: Option<f64>,
) {
    let classifier = super::load_config(config_path, ratio_decimals, outlier_sigma)
        .unwrap_or_else(|e| super::fail(e));

    let base = format!("http://{host}:{port}");

    println!("rngprobe server v{}", rngprobe_core::VERSION);
    println!("   {base}");
    println!(
        "   ratio_decimals={} outlier_sigma={} min_symbols={min_symbols}",
        classifier.ratio_decimals, classifier.outlier_sigma
    );
    println!();
    println!("   Endpoints:");
    println!("     GET  /                 API index (try: curl {base})");
    println!("     POST /api/v1/classify  Classify a symbol sequence");
    println!("     GET  /health           Health check");
    println!();
    println!("   Example:");
    println!(
        "     curl -X POST {base}/api/v1/classify -H 'content-type: application/json' \\"
    );
    println!("          -d '{{\"symbols\": [1, 2, 4, 8, 16], \"encoding\": \"identity\"}}'");
    println!();

    let config = ServerConfig {
        host: host.to_string(),
        port,
        min_symbols,
        classifier,
    };

    let rt = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| super::fail(format!("failed to start runtime: {e}")));
    if let Err(e) = rt.block_on(rngprobe_server::run_server(config)) {
        super::fail(format!("server on {base} stopped: {e}"));
    }
}
