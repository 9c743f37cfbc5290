//! Probing commands: test, best, pick, use

use super::{empty_pool_hint, Cli};
use rollup_rotator::ScoredEndpoint;

pub async fn test(cli: &Cli, json: bool) -> anyhow::Result<()> {
    let urls = cli.load_pool()?.urls();
    if urls.is_empty() {
        println!("No endpoints to test");
        return Ok(());
    }

    let rotator = cli.rotator()?;
    let rows = rotator.selector().rank_all(&urls).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", format_row(row));
        }
    }
    Ok(())
}

pub async fn best(cli: &Cli) -> anyhow::Result<()> {
    let urls = cli.load_pool()?.urls();
    let rotator = cli.rotator()?;

    let best = match rotator.selector().pick_best(&urls).await {
        Ok(best) => best,
        Err(e) if e.is_empty_pool() => return Err(empty_pool_hint(cli)),
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&best)?);
    Ok(())
}

pub async fn pick(cli: &Cli) -> anyhow::Result<()> {
    let urls = cli.load_pool()?.urls();
    let rotator = cli.rotator()?;

    let selection = match rotator.pick(&urls).await {
        Ok(selection) => selection,
        Err(e) if e.is_empty_pool() => return Err(empty_pool_hint(cli)),
        Err(e) => return Err(e.into()),
    };

    println!("Picked: {} score={}", selection.url, selection.score);
    Ok(())
}

pub async fn use_endpoint(cli: &Cli) -> anyhow::Result<()> {
    // Reuse the sticky selection before touching the pool or settings
    if let Some(selection) = cli.sticky_store().load() {
        println!("{}", selection.url);
        return Ok(());
    }

    let urls = cli.load_pool()?.urls();
    let selection = match cli.rotator()?.pick(&urls).await {
        Ok(selection) => selection,
        Err(e) if e.is_empty_pool() => return Err(empty_pool_hint(cli)),
        Err(e) => return Err(e.into()),
    };

    println!("{}", selection.url);
    Ok(())
}

/// One line of `test` output
fn format_row(row: &ScoredEndpoint) -> String {
    let mut line = format!(
        "{:>5}  {:>7.1}ms  head={:<10}  url={}",
        format!("{:.3}", row.score),
        row.latency_ms,
        row.head,
        row.url
    );
    if let Some(error) = &row.error {
        line.push_str(&format!("  ERR={}", error));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_rotator::ProbeError;

    #[test]
    fn test_format_row() {
        let row = ScoredEndpoint {
            url: "https://a.example".to_string(),
            ok: true,
            latency_ms: 120.5,
            head: 1234,
            drift: Some(0),
            score: 0.94,
            error: None,
        };
        assert_eq!(
            format_row(&row),
            "0.940    120.5ms  head=1234        url=https://a.example"
        );

        let failed = ScoredEndpoint {
            ok: false,
            head: -1,
            drift: None,
            score: 0.0,
            error: Some(ProbeError::Http { status: 503 }),
            ..row
        };
        assert!(format_row(&failed).ends_with("ERR=HTTP status 503"));
    }
}
