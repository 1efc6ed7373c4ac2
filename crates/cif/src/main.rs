use std::sync::Arc;

use cif_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), cif_core::Error> {
    cif_core::logging::init("cif")?;

    let cfg = Arc::new(Config::load()?);

    cif_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| cif_core::Error::Transport(format!("telegram bot failed: {e}")))?;

    Ok(())
}
