use rngprobe_core::{
    Classifier, DetectionResult, Symbol, SymbolEncoding, Verdict, symbols_from_json,
};

pub struct ClassifyCommandConfig<'a> {
    pub symbols: &'a [String],
    pub file: Option<&'a str>,
    pub json: Option<&'a str>,
    pub encoding: SymbolEncoding,
    pub format: &'a str,
    pub output_path: Option<&'a str>,
    pub config_path: Option<&'a str>,
    pub ratio_decimals: Option<u32>,
    pub outlier_sigma: Option<f64>,
}

pub fn run(cfg: ClassifyCommandConfig<'_>) {
    let config = super::load_config(cfg.config_path, cfg.ratio_decimals, cfg.outlier_sigma)
        .unwrap_or_else(|e| super::fail(e));
    let symbols = read_symbols(&cfg).unwrap_or_else(|e| super::fail(e));
    let verdict = Classifier::new(config)
        .classify_symbols(&symbols, cfg.encoding)
        .unwrap_or_else(|e| super::fail(e));

    let json = serde_json::to_string_pretty(&verdict).unwrap_or_else(|e| super::fail(e));
    match cfg.format {
        "json" => println!("{json}"),
        _ => print_summary(&verdict, cfg.encoding),
    }

    if let Some(path) = cfg.output_path {
        match std::fs::write(path, &json) {
            Ok(()) => eprintln!("Verdict written to {path}"),
            Err(e) => super::fail(format!("failed to write {path}: {e}")),
        }
    }
}

/// Collect symbols from `--json`, `--file` or positional arguments, in that order.
fn read_symbols(cfg: &ClassifyCommandConfig<'_>) -> Result<Vec<Symbol>, String> {
    if let Some(raw) = cfg.json {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(raw).map_err(|e| format!("--json is not a JSON array: {e}"))?;
        return symbols_from_json(&values).map_err(|e| e.to_string());
    }

    if let Some(path) = cfg.file {
        let text = if path == "-" {
            std::io::read_to_string(std::io::stdin())
                .map_err(|e| format!("failed to read stdin: {e}"))?
        } else {
            std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?
        };
        return Ok(super::tokenize(&text));
    }

    Ok(cfg
        .symbols
        .iter()
        .flat_map(|s| super::tokenize(s))
        .collect())
}

fn print_summary(v: &Verdict, encoding: SymbolEncoding) {
    println!();
    println!("  ┌─ Verdict: {} (confidence {:.2})", v.rng_type, v.confidence);
    println!(
        "  │ Symbols:  {} ({} distinct, encoding: {encoding})",
        v.sequence_length, v.distinct_symbols
    );
    println!("  │ Linear:   {}", describe(&v.evidence.linear));
    println!("  │ Spectral: {}", describe(&v.evidence.spectral));
    println!("  └─");
}

fn describe(r: &DetectionResult) -> String {
    if !r.detected {
        return "not detected".to_string();
    }
    let hint = r
        .family_hint
        .map(|h| h.to_string())
        .unwrap_or_else(|| "unspecified".to_string());
    let params: Vec<String> = r
        .parameters
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    if params.is_empty() {
        format!("{hint} ({:.2})", r.confidence)
    } else {
        format!("{hint} ({:.2}) {}", r.confidence, params.join(" "))
    }
}
